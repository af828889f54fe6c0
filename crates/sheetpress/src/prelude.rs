//! Prelude module - common imports for sheetpress users
//!
//! ```rust
//! use sheetpress::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellRange,
    CellValue,
    Color,
    // Conversion
    Converter,
    // Error types
    Error,
    ExportOptions,
    ExportResult,
    Hyperlink,
    Orientation,
    PdfRenderer,
    Result,
    SourceFormat,
    // Style types
    Style,
    // Main types
    Workbook,
    WorkbookParser,
    Worksheet,
};
