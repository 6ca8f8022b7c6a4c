//! Document module - certificate layout, table widths and .docx output.

mod annexure_columns;
pub mod certificate_builder;
pub mod docx;
pub mod document_model;
pub mod formatting;
pub mod renderer;
pub mod table_layout;


pub use certificate_builder::build_certificate;
pub use document_model::{
    Align, Block, Document, Paragraph, RenderedDocument, Row, Table, DOCX_MIME_TYPE,
};
pub use formatting::{format_amount, format_amount_or_dash, format_date};
pub use renderer::{certificate_file_name, DocumentRenderer, DocxCertificateRenderer};
pub use table_layout::column_widths;
