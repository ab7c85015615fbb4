#![allow(dead_code)]

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use xlsx_primer::workbook_path;

/// Install the env-filtered log subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Artifact path shorthand; panics belong in test code, not the resolver.
pub fn out(fixture: &str, name: &str) -> PathBuf {
    workbook_path(fixture, name).expect("artifact path")
}

/// Read a saved worksheet back with calamine.
pub fn read_range(path: &Path, sheet: &str) -> Range<Data> {
    let mut book: Xlsx<_> = open_workbook(path).expect("open workbook");
    book.worksheet_range(sheet).expect("worksheet range")
}
