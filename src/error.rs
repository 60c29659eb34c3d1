//! Error types for the PDF extractor library

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PDF extractor library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The document could not be opened, or a page could not be extracted
    #[error("{}", extraction_message(.path, .page, .source))]
    Extraction {
        path: PathBuf,
        /// `None` when the document itself failed to load
        page: Option<u32>,
        #[source]
        source: lopdf::Error,
    },
}

fn extraction_message(path: &Path, page: &Option<u32>, source: &lopdf::Error) -> String {
    match page {
        Some(page) => format!(
            "Failed to extract text from page {} of {}: {}",
            page,
            path.display(),
            source
        ),
        None => format!("Failed to open {}: {}", path.display(), source),
    }
}
