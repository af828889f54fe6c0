//! # sheetpress-layout
//!
//! Turns a [`Workbook`](sheetpress_core::Workbook) into paginated documents.
//!
//! The engine is a pipeline of small, pure components:
//! - [`geometry`] - active content rectangle and column/row sizes
//! - [`scale`] - one scale factor per sheet that fits it to the page width
//! - [`merge`] - merged-region lookup
//! - [`style`] - raw workbook styles to [`NormalizedStyle`]
//! - [`format`] - cell value to display text
//! - [`layout`] - [`SheetLayout`] of [`PlacedCell`]s for one sheet
//! - [`document`] - [`Document`] assembly and the [`DocumentRenderer`] seam
//!
//! Serializing a [`Document`] into bytes is the renderer's job; this crate
//! only decides what goes where.
//!
//! ## Example
//!
//! ```rust
//! use sheetpress_core::{SourceFormat, Workbook};
//! use sheetpress_layout::{build_layout, ExportOptions};
//!
//! let mut workbook = Workbook::new(SourceFormat::Modern);
//! let index = workbook.add_worksheet("Data").unwrap();
//! workbook.worksheet_mut(index).unwrap().set_cell_value("A1", "Total").unwrap();
//!
//! let sheet = workbook.worksheet(index).unwrap();
//! let layout = build_layout(&workbook, sheet, &ExportOptions::default());
//! assert_eq!(layout.cells.len(), 1);
//! assert_eq!(layout.cells[0].text, "Total");
//! ```

pub mod document;
pub mod error;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod merge;
pub mod options;
pub mod page;
pub mod scale;
pub mod style;

pub use document::{
    Assembler, Document, DocumentMetadata, DocumentRenderer, DocumentSettings, ExportResult,
    SheetPage,
};
pub use error::{LayoutError, Result};
pub use format::{
    CachedResultEvaluator, CellContext, CellFormatter, DataFormatter, FormulaEvaluator,
};
pub use geometry::{active_column_count, ColumnGeometry, RowGeometry};
pub use layout::{build_layout, PlacedCell, SheetLayout, SheetLayoutBuilder};
pub use merge::MergeIndex;
pub use options::{ContentDirection, ExportOptions, ImageQuality, Orientation};
pub use page::PageLayout;
pub use scale::{compute_scale, fit_scale, MIN_SCALE};
pub use style::{translate, NormalizedStyle, Rgb, Script, TextAlign, TextStyle};
