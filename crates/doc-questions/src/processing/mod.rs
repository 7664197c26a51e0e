//! Upload batch processing: validation, conversion and extraction

mod batch;

pub use batch::{build_report, BatchProcessor};
