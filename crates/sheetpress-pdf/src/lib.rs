//! # sheetpress-pdf
//!
//! PDF output for sheetpress documents.
//!
//! [`PdfRenderer`] implements [`DocumentRenderer`](sheetpress_layout::DocumentRenderer):
//! each sheet's rows are split into page-height bands (never inside a
//! merged row span), and every page gets the sheet header, an optional
//! title and an optional `current / total` footer. Text uses the standard
//! PDF fonts with WinAnsi encoding, so no font files are needed.
//!
//! ## Example
//!
//! ```rust
//! use sheetpress_core::{SourceFormat, Workbook};
//! use sheetpress_layout::{Assembler, ExportOptions};
//! use sheetpress_pdf::PdfRenderer;
//!
//! let mut workbook = Workbook::new(SourceFormat::Modern);
//! let index = workbook.add_worksheet("Data").unwrap();
//! workbook.worksheet_mut(index).unwrap().set_cell_value("A1", 42.0).unwrap();
//!
//! let results = Assembler::new(PdfRenderer::new())
//!     .assemble(&workbook, &ExportOptions::default())
//!     .unwrap();
//! assert!(results[0].data.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod font;
pub mod paginate;
pub mod renderer;

pub use error::{PdfError, Result};
pub use font::BaseFont;
pub use renderer::PdfRenderer;
