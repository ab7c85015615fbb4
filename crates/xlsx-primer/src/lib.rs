//! Test-driven recipes for spreadsheet work in Rust.
//!
//! The interesting part of this repository lives in `tests/`: each file there
//! is a guided tour of one area (quick start, formulas, data validation,
//! conditional formatting, imports, print setup, a formula-function
//! reference). The library itself only carries the small fixtures those
//! tours share, such as the output-path resolver for generated workbooks and
//! the engine-backed formula scratchpad.
//!
//! Workbook writing is `rust_xlsxwriter`, reading is `calamine`, and formula
//! evaluation is the `formualizer` workbook engine. None of that machinery is
//! reimplemented here.

pub mod addr;
pub mod artifact;
pub mod error;
pub mod probe;
pub mod sales;
pub mod style;

pub use artifact::{ArtifactConfig, workbook_path};
pub use error::PrimerError;
pub use probe::{FormulaProbe, assert_value};
pub use sales::{Sale, SalesGenerator, sales_from_csv, write_sales};
pub use style::{header_format, write_headers};
