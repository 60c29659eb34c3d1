//! PDF text extraction module

pub mod document;
pub mod extract;

// Re-export commonly used items
pub use document::{PageText, PdfDocument};
pub use extract::{
    collect_page_text, extract_text_to_file, format_page_block, ExtractOptions, ExtractionReport,
};
