use thiserror::Error;

/// Crate-wide error type.
///
/// The recipes deliberately do not translate or recover from library
/// failures; everything funnels into this enum so fixture code can `?`
/// freely and surface the original error as a test failure.
#[derive(Debug, Error)]
pub enum PrimerError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xlsx write error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("workbook error: {0}")]
    Workbook(#[from] formualizer_workbook::IoError),

    #[error("engine error: {0}")]
    Engine(#[from] formualizer_common::ExcelError),

    #[error("csv import error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid cell address `{0}`")]
    Address(String),
}
