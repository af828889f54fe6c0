//! Error types for sheetpress-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or addressing a workbook model
#[derive(Debug, Error)]
pub enum Error {
    /// A cell reference such as `B7` could not be parsed
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// A range reference such as `A1:C3` could not be parsed
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    #[error("Row {row} is beyond the last sheet row ({max})")]
    RowOutOfBounds { row: u32, max: u32 },

    #[error("Column {col} is beyond the last sheet column ({max})")]
    ColumnOutOfBounds { col: u32, max: u16 },

    /// Sheet names must be non-empty, short and free of reserved characters
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// Merged regions may not share cells
    #[error("Merged region {range} overlaps an existing merged region")]
    OverlappingMerge { range: String },
}
