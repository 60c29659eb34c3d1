//! Scoped PDF document handle backed by lopdf

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use lopdf::content::Content;
use lopdf::{Document, ObjectId};

use crate::error::{Error, Result};

/// Anything that can yield text for 1-based page positions, in order
pub trait PageText {
    /// Page numbers in document order
    fn page_numbers(&self) -> Vec<u32>;

    /// Text of one page, or `None` when the page has no recoverable text
    fn page_text(&self, page_number: u32) -> Result<Option<String>>;
}

/// An open PDF document
///
/// The parsed document is owned by this handle and released when it is
/// dropped, including when extraction stops early on an error.
#[derive(Debug)]
pub struct PdfDocument {
    path: PathBuf,
    doc: Document,
    pages: BTreeMap<u32, ObjectId>,
}

impl PdfDocument {
    /// Load a PDF from disk
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let doc = Document::load(path).map_err(|source| Error::Extraction {
            path: path.to_path_buf(),
            page: None,
            source,
        })?;

        // get_pages walks nested page trees and numbers pages from 1
        let pages = doc.get_pages();
        debug!("Opened {} ({} pages)", path.display(), pages.len());

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            pages,
        })
    }

    /// Path the document was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl PageText for PdfDocument {
    fn page_numbers(&self) -> Vec<u32> {
        self.pages.keys().copied().collect()
    }

    fn page_text(&self, page_number: u32) -> Result<Option<String>> {
        let page_error = |source: lopdf::Error| Error::Extraction {
            path: self.path().to_path_buf(),
            page: Some(page_number),
            source,
        };

        // Page-level failures are fatal: the page is missing or its content
        // stream cannot be read or decoded
        let page_id = *self
            .pages
            .get(&page_number)
            .ok_or_else(|| page_error(lopdf::Error::PageNumberNotFound(page_number)))?;
        let content = self.doc.get_page_content(page_id).map_err(page_error)?;
        Content::decode(&content).map_err(page_error)?;

        // Anything else lopdf reports per chunk is a font it could not map,
        // possibly one the page never uses; keep the text it could read
        let mut raw = String::new();
        for chunk in self.doc.extract_text_chunks(&[page_number]) {
            match chunk {
                Ok(text) => raw.push_str(&text),
                Err(e) => warn!(
                    "Skipping unreadable text on page {} of {}: {}",
                    page_number,
                    self.path().display(),
                    e
                ),
            }
        }

        Ok(normalize_page_text(&raw))
    }
}

/// Trim trailing whitespace; text that is empty afterwards counts as absent
///
/// lopdf ends every text object with a line break, so blank and image-only
/// pages can come back as bare newlines.
pub fn normalize_page_text(raw: &str) -> Option<String> {
    let text = raw.trim_end();
    if text.trim_start().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
