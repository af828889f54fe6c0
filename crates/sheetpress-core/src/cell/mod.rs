//! Cell-related types
//!
//! - [`CellValue`] - the typed value stored in a cell
//! - [`CellAddress`] - a cell's location (e.g., "A1")
//! - [`CellRange`] - a rectangular block of cells, also used for merged regions
//! - [`CellData`] - value plus style reference

mod address;
mod value;

pub use address::{CellAddress, CellRange};
pub use value::{CellError, CellValue, SharedString};

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Index into the owning sheet's style pool (0 = default style)
    pub style_index: u32,
}

impl CellData {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }

    /// Whether the cell carries nothing to display.
    ///
    /// See [`CellValue::is_blank`].
    pub fn is_blank(&self) -> bool {
        self.value.is_blank()
    }
}

impl Default for CellData {
    fn default() -> Self {
        Self::new(CellValue::Empty)
    }
}
