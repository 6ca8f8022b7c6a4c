//! Word (.docx) serialization of a [`Document`].

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, Paragraph as DocxParagraph, Run, RunFonts,
    Table as DocxTable, TableBorders, TableCell, TableLayoutType, TableRow, WidthType,
};

use super::document_model::{Align, Block, Document, Paragraph, Table};
use super::table_layout::TABLE_WIDTH_INCHES;
use crate::errors::{Error, Result};

const FONT: &str = "Times New Roman";
/// Half-points
const FONT_SIZE: usize = 22;
const TWIPS_PER_INCH: f64 = 1440.0;

/// Packs `document` into .docx bytes.
pub fn to_docx(document: &Document) -> Result<Vec<u8>> {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(FONT).hi_ansi(FONT))
        .default_size(FONT_SIZE);

    for block in &document.blocks {
        docx = match block {
            Block::Paragraph(p) => docx.add_paragraph(paragraph(p)),
            Block::Table(t) => docx.add_table(table(t)),
            Block::Blank => docx.add_paragraph(DocxParagraph::new()),
            Block::PageBreak => docx.add_paragraph(
                DocxParagraph::new().add_run(Run::new().add_break(BreakType::Page)),
            ),
        };
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| Error::Render(format!("Failed to pack docx: {}", e)))?;
    Ok(buffer.into_inner())
}

fn twips(inches: f64) -> usize {
    (inches * TWIPS_PER_INCH).round() as usize
}

/// One run, with embedded newlines turned into line breaks.
fn text_run(text: &str, bold: bool) -> Run {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    if bold {
        run = run.bold();
    }
    run
}

fn paragraph(p: &Paragraph) -> DocxParagraph {
    let mut run = text_run(&p.text, p.bold);
    if p.underline {
        run = run.underline("single");
    }
    let align = match p.align {
        Align::Justify => AlignmentType::Both,
        Align::Left => AlignmentType::Left,
        Align::Center => AlignmentType::Center,
    };
    DocxParagraph::new().add_run(run).align(align)
}

fn looks_numeric(cell: &str) -> bool {
    !cell.is_empty()
        && cell
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
}

fn row(cells: &[String], widths: &[usize], bold: bool) -> TableRow {
    let cells = cells
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let align = if looks_numeric(text) {
                AlignmentType::Right
            } else {
                AlignmentType::Left
            };
            let cell = TableCell::new()
                .add_paragraph(DocxParagraph::new().add_run(text_run(text, bold)).align(align));
            match widths.get(i) {
                Some(width) => cell.width(*width, WidthType::Dxa),
                None => cell,
            }
        })
        .collect();
    TableRow::new(cells)
}

fn table(t: &Table) -> DocxTable {
    let widths: Vec<usize> = t.column_widths.iter().map(|w| twips(*w)).collect();

    // Only bordered tables get a bold header row; the signature block is plain.
    let mut rows = Vec::with_capacity(t.rows.len() + 1);
    rows.push(row(&t.headers, &widths, t.bordered));
    rows.extend(t.rows.iter().map(|r| row(&r.cells, &widths, r.bold)));

    let table = DocxTable::new(rows)
        .set_grid(widths)
        .layout(TableLayoutType::Fixed)
        .width(twips(TABLE_WIDTH_INCHES), WidthType::Dxa);
    if t.bordered {
        table
    } else {
        table.set_borders(TableBorders::with_empty())
    }
}

/// The main document part of a packed .docx.
#[cfg(test)]
pub(crate) fn document_xml(bytes: &[u8]) -> String {
    use std::io::Read;

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut part = archive.by_name("word/document.xml").unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}
