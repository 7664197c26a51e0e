//! Raw text extraction from .docx packages

use docx_rs::{
    DocumentChild, Docx, InsertChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use crate::error::{Error, Result};

/// Extract the raw text of a .docx document.
///
/// Every paragraph, including those inside table cells and content controls,
/// is followed by a blank line. Tabs and manual breaks inside runs are kept as
/// `'\t'` and `'\n'`. Tracked insertions count as text, tracked deletions do
/// not.
pub fn docx_to_text(filename: &str, data: &[u8]) -> Result<String> {
    let doc = docx_rs::read_docx(data).map_err(|e| Error::conversion(filename, e.to_string()))?;

    let content = document_text(&doc);
    tracing::debug!("Extracted {} chars from '{}'", content.len(), filename);
    Ok(content)
}

/// Raw text of an already parsed document
fn document_text(doc: &Docx) -> String {
    let mut content = String::new();
    for child in &doc.document.children {
        match child {
            DocumentChild::Paragraph(p) => push_paragraph(p, &mut content),
            DocumentChild::Table(table) => push_table(table, &mut content),
            DocumentChild::StructuredDataTag(tag) => push_structured_tag(tag, &mut content),
            _ => {}
        }
    }
    content
}

fn push_paragraph(paragraph: &Paragraph, out: &mut String) {
    push_paragraph_children(&paragraph.children, out);
    out.push_str("\n\n");
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Insert(insert) => {
                for insert_child in &insert.children {
                    if let InsertChild::Run(run) = insert_child {
                        push_run(run, out);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            ParagraphChild::StructuredDataTag(tag) => push_structured_tag(tag, out),
            _ => {}
        }
    }
}

fn push_run(run: &Run, out: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

/// Content controls hold runs when inline and paragraphs/tables at block level
fn push_structured_tag(tag: &StructuredDataTag, out: &mut String) {
    for child in &tag.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, out),
            StructuredDataTagChild::Paragraph(p) => push_paragraph(p, out),
            StructuredDataTagChild::Table(table) => push_table(table, out),
            _ => {}
        }
    }
}

fn push_table(table: &Table, out: &mut String) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => push_paragraph(p, out),
                    TableCellContent::Table(nested) => push_table(nested, out),
                    _ => {}
                }
            }
        }
    }
}
