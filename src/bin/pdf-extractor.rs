//! PDF Extractor CLI tool
//!
//! Writes the text of every page of a PDF to `extracted/extracted_text.txt`
//! next to the input file.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

use pdf_extractor::logging;
use pdf_extractor::pdf::{extract_text_to_file, ExtractOptions, ExtractionReport};

/// Missing argument or input file not found
const EXIT_USAGE: i32 = 1;
/// The PDF could not be read or the output could not be written
const EXIT_EXTRACTION_FAILED: i32 = 2;

const USAGE: &str = "Usage: pdf-extractor <pdf_file_path>";

/// PDF Extractor - Save the text of each PDF page to a sibling text file
#[derive(Parser)]
#[command(name = "pdf-extractor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "OUTPUT:
    <pdf directory>/extracted/extracted_text.txt, one \"--- Page N ---\" block
    per page that has text. The file is replaced on every run.

    Set RUST_LOG=debug to see per-page progress.")]
struct Cli {
    /// PDF file to extract text from
    pdf_file_path: Option<PathBuf>,
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    let Some(pdf_file) = cli.pdf_file_path else {
        println!("{}", USAGE);
        process::exit(EXIT_USAGE);
    };

    if !pdf_file.exists() {
        println!("PDF file not found: {}", pdf_file.display());
        process::exit(EXIT_USAGE);
    }

    match cmd_extract(&pdf_file) {
        Ok(report) => {
            println!("Text saved: {}", report.output_path.display());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(EXIT_EXTRACTION_FAILED);
        }
    }
}

/// Extract all page text from one PDF
fn cmd_extract(pdf_file: &Path) -> pdf_extractor::Result<ExtractionReport> {
    let options = ExtractOptions::new(pdf_file);
    log::debug!("Writing text to {}", options.output_path().display());

    extract_text_to_file(&options)
}
