//! Row type

use std::collections::BTreeMap;

use crate::cell::CellData;

/// A worksheet row and the cells it owns
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Row index (0-based)
    pub index: u32,
    /// Custom height in points (None = sheet default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Cells keyed by column index
    cells: BTreeMap<u16, CellData>,
}

impl Row {
    /// Create a new empty row
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Get a cell by column index
    pub fn cell(&self, col: u16) -> Option<&CellData> {
        self.cells.get(&col)
    }

    /// Get a mutable cell by column index
    pub fn cell_mut(&mut self, col: u16) -> Option<&mut CellData> {
        self.cells.get_mut(&col)
    }

    /// Insert or replace a cell
    pub fn set_cell(&mut self, col: u16, data: CellData) {
        self.cells.insert(col, data);
    }

    /// Remove a cell
    pub fn remove_cell(&mut self, col: u16) -> Option<CellData> {
        self.cells.remove(&col)
    }

    /// Iterate over cells in column order
    pub fn cells(&self) -> impl Iterator<Item = (u16, &CellData)> {
        self.cells.iter().map(|(&col, data)| (col, data))
    }

    /// Index of the last column holding a cell
    pub fn last_cell_index(&self) -> Option<u16> {
        self.cells.keys().next_back().copied()
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row holds no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
