//! PDF Extractor Library
//!
//! Pulls plain text out of a PDF page by page and writes it to a text file
//! beside the input. This library provides functionality to:
//! - Open a PDF and read the text of each page
//! - Build a text buffer with a `--- Page N ---` header per page that has text
//! - Write the result to `<input dir>/extracted/extracted_text.txt`
//! - Quiet the PDF parser's recoverable warnings for the length of a run
//!
//! # Example
//!
//! ```no_run
//! use pdf_extractor::pdf::{extract_text_to_file, ExtractOptions};
//!
//! let options = ExtractOptions::new("uploads/invoice.pdf");
//! let report = extract_text_to_file(&options).expect("Failed to extract text");
//!
//! assert_eq!(report.output_path, options.output_path());
//! ```

pub mod error;
pub mod logging;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
