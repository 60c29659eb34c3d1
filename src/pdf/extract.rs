//! Page-by-page text extraction into `extracted/extracted_text.txt`

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::logging;
use super::document::{PageText, PdfDocument};

/// Directory created beside the input PDF
pub const DEFAULT_OUTPUT_DIR: &str = "extracted";

/// File written inside the output directory
pub const DEFAULT_OUTPUT_FILE: &str = "extracted_text.txt";

/// Options for extracting text from a PDF
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Input PDF file path
    pub input_path: PathBuf,
    /// Name of the directory created next to the input file
    pub output_dir_name: String,
    /// Name of the text file written inside that directory
    pub output_file_name: String,
}

impl ExtractOptions {
    /// Options with the standard `extracted/extracted_text.txt` layout
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            output_file_name: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }

    /// Output directory, always relative to the input file's own directory
    ///
    /// A bare file name has an empty parent, which resolves against the
    /// current directory just as the input path itself does.
    pub fn output_dir(&self) -> PathBuf {
        let parent = self.input_path.parent().unwrap_or_else(|| Path::new(""));
        parent.join(&self.output_dir_name)
    }

    /// Full path of the text file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(&self.output_file_name)
    }
}

/// Summary of a completed extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Where the text was written
    pub output_path: PathBuf,
    /// Pages in the document
    pub page_count: usize,
    /// Pages that produced a `--- Page N ---` block
    pub pages_with_text: usize,
}

/// Format one page block: header line, text, blank line
pub fn format_page_block(page_number: u32, text: &str) -> String {
    format!("--- Page {} ---\n{}\n\n", page_number, text)
}

/// Build the aggregate text buffer from every page of `source`
///
/// Pages without text contribute nothing, not even a header, and the header
/// number is the page's position rather than the block count. Returns the
/// buffer and the number of blocks written.
pub fn collect_page_text<S: PageText + ?Sized>(source: &S) -> Result<(String, usize)> {
    let mut all_text = String::new();
    let mut blocks = 0;

    for page_number in source.page_numbers() {
        match source.page_text(page_number)? {
            Some(text) => {
                all_text.push_str(&format_page_block(page_number, &text));
                blocks += 1;
            }
            None => debug!("Page {} has no extractable text, skipping", page_number),
        }
    }

    Ok((all_text, blocks))
}

/// Extract text from every page of the input PDF and write it to disk
///
/// The output directory is created if needed and the output file is
/// replaced, never appended to. Nothing is written unless every page was
/// read successfully.
///
/// # Example
///
/// ```no_run
/// use pdf_extractor::pdf::{extract_text_to_file, ExtractOptions};
///
/// let report = extract_text_to_file(&ExtractOptions::new("scans/invoice.pdf"))
///     .expect("Failed to extract text");
/// println!("Text saved: {}", report.output_path.display());
/// ```
pub fn extract_text_to_file(options: &ExtractOptions) -> Result<ExtractionReport> {
    if !options.input_path.exists() {
        return Err(Error::FileNotFound(options.input_path.clone()));
    }

    let output_dir = options.output_dir();
    fs::create_dir_all(&output_dir)?;

    let (all_text, page_count, pages_with_text) = {
        let _quiet = logging::quiet_pdf_library();
        let document = PdfDocument::open(&options.input_path)?;
        let (all_text, blocks) = collect_page_text(&document)?;
        (all_text, document.page_count(), blocks)
    };

    let output_path = output_dir.join(&options.output_file_name);
    fs::write(&output_path, all_text)?;

    info!(
        "Extracted text from {} of {} pages of {}",
        pages_with_text,
        page_count,
        options.input_path.display()
    );

    Ok(ExtractionReport {
        output_path,
        page_count,
        pages_with_text,
    })
}
