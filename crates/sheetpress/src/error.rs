//! Conversion errors

use sheetpress_core::SourceFormat;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while converting a workbook
#[derive(Debug, Error)]
pub enum Error {
    /// IO error opening or reading the input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input's extension is not a known workbook format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// No parser is registered for the detected format
    #[error("No parser registered for {0} workbooks")]
    MissingParser(SourceFormat),

    /// A parser rejected the input
    #[error("Parse error: {0}")]
    Parse(String),

    /// Document assembly or rendering failed
    #[error(transparent)]
    Layout(#[from] sheetpress_layout::LayoutError),

    /// Workbook model error
    #[error(transparent)]
    Core(#[from] sheetpress_core::Error),
}

impl Error {
    /// Create a parse error with a message
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
}
