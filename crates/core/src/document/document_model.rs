use serde::{Deserialize, Serialize};

pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A rendered artifact ready to be downloaded or stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Justify,
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub text: String,
    pub bold: bool,
    pub underline: bool,
    pub align: Align,
}

impl Paragraph {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<String>,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Column widths in inches, one per header
    pub column_widths: Vec<f64>,
    pub bordered: bool,
}

impl Table {
    /// A bordered table laid out from its headers.
    pub fn new(headers: Vec<String>) -> Self {
        let column_widths = super::table_layout::column_widths(&headers);
        Self {
            headers,
            rows: Vec::new(),
            column_widths,
            bordered: true,
        }
    }

    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, bold: false });
    }

    pub fn push_bold(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, bold: true });
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Blank,
    PageBreak,
}

/// Layout-neutral certificate document, serialized by a renderer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.paragraph(Paragraph::text(text));
    }

    pub fn table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    pub fn blank(&mut self) {
        self.blocks.push(Block::Blank);
    }

    pub fn page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}
