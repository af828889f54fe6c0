//! # sheetpress-core
//!
//! Grid model consumed by the sheetpress layout engine.
//!
//! A workbook parser (an external collaborator) builds these types once; the
//! layout engine then only reads them:
//! - [`Workbook`] - sheets, the shared font table, document properties and the
//!   [`SourceFormat`] the workbook was decoded from
//! - [`Worksheet`] - sparse rows of [`CellData`], column/row metadata, merged
//!   regions and hyperlinks
//! - [`Style`] and [`FontStyle`] - raw, format-specific cell formatting
//!
//! ## Example
//!
//! ```rust
//! use sheetpress_core::{CellRange, CellValue, SourceFormat, Workbook};
//!
//! let mut workbook = Workbook::new(SourceFormat::Modern);
//! let index = workbook.add_worksheet("Summary").unwrap();
//! let sheet = workbook.worksheet_mut(index).unwrap();
//!
//! sheet.set_cell_value("A1", "Quarterly report").unwrap();
//! sheet.set_cell_value_at(1, 1, CellValue::Number(42.0)).unwrap();
//! sheet.merge_cells(&CellRange::parse("A1:C1").unwrap()).unwrap();
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod hyperlink;
pub mod properties;
pub mod row;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellError, CellRange, CellValue, SharedString};
pub use column::Column;
pub use error::{Error, Result};
pub use hyperlink::{Hyperlink, HyperlinkKind};
pub use properties::DocumentProperties;
pub use row::Row;
pub use workbook::{SourceFormat, Workbook, WorkbookSettings};
pub use worksheet::{Worksheet, DEFAULT_COLUMN_WIDTH, DEFAULT_ROW_HEIGHT};

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    FontVerticalAlign, HorizontalAlignment, NumberFormat, PatternType, Style, StylePool,
    Underline, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
