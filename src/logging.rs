//! Process logger with scoped quieting of the PDF parser's diagnostics
//!
//! lopdf reports recoverable problems (broken font descriptors, undecodable
//! text operators, repaired xref tables) through the `log` facade. Those
//! warnings do not mean extraction failed, so the extractor lowers the
//! parser's ceiling to `Error` while it runs and restores it afterwards.

use std::sync::atomic::{AtomicUsize, Ordering};

use env_logger::{Env, Logger};
use log::{LevelFilter, Log, Metadata, Record};

/// Log target prefix used by the PDF parsing library
pub const PDF_LIBRARY_TARGET: &str = "lopdf";

/// Highest level let through for `PDF_LIBRARY_TARGET`, stored as a `LevelFilter`
static LIBRARY_CEILING: AtomicUsize = AtomicUsize::new(LevelFilter::Trace as usize);

/// Wraps the env_logger backend and applies the library ceiling first
struct FilteredLogger {
    inner: Logger,
}

impl Log for FilteredLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        library_allows(metadata) && self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if library_allows(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

fn library_allows(metadata: &Metadata) -> bool {
    if !is_library_target(metadata.target()) {
        return true;
    }
    metadata.level() as usize <= LIBRARY_CEILING.load(Ordering::Relaxed)
}

fn is_library_target(target: &str) -> bool {
    target == PDF_LIBRARY_TARGET
        || target
            .strip_prefix(PDF_LIBRARY_TARGET)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Install the process logger
///
/// Honours `RUST_LOG`, defaulting to `warn`. Calling this more than once is
/// harmless; only the first call installs a logger.
pub fn init() {
    let inner = env_logger::Builder::from_env(Env::default().default_filter_or("warn")).build();
    let max_level = inner.filter();

    if log::set_boxed_logger(Box::new(FilteredLogger { inner })).is_ok() {
        log::set_max_level(max_level);
    }
}

/// Restores the previous library ceiling when dropped
#[must_use = "the PDF library is only quieted while the guard is alive"]
#[derive(Debug)]
pub struct LibraryLogGuard {
    previous: usize,
}

impl Drop for LibraryLogGuard {
    fn drop(&mut self) {
        LIBRARY_CEILING.store(self.previous, Ordering::Relaxed);
    }
}

/// Only let error-severity records from the PDF library through until the
/// returned guard is dropped
pub fn quiet_pdf_library() -> LibraryLogGuard {
    let previous = LIBRARY_CEILING.swap(LevelFilter::Error as usize, Ordering::Relaxed);
    LibraryLogGuard { previous }
}

/// Current ceiling for the PDF library's log target
pub fn pdf_library_ceiling() -> LevelFilter {
    LevelFilter::iter()
        .nth(LIBRARY_CEILING.load(Ordering::Relaxed))
        .unwrap_or(LevelFilter::Trace)
}
