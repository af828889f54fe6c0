//! Worksheet type

use std::collections::{BTreeMap, HashMap};

use crate::cell::{CellAddress, CellData, CellRange, CellValue};
use crate::column::Column;
use crate::error::{Error, Result};
use crate::hyperlink::Hyperlink;
use crate::row::Row;
use crate::style::{Style, StylePool};
use crate::{MAX_COLS, MAX_ROWS};

/// Default column width in characters of the default font
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;

/// Default row height in points
pub const DEFAULT_ROW_HEIGHT: f64 = 15.0;

/// A worksheet (single sheet in a workbook)
///
/// Rows are stored sparsely: a row index with no [`Row`] entry is a null
/// row, distinct from a row that exists but holds no cells.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Rows keyed by index
    rows: BTreeMap<u32, Row>,
    /// Columns with custom settings
    columns: BTreeMap<u16, Column>,
    /// Width used for columns without a custom width (characters)
    default_column_width: f64,
    /// Height used for rows without a custom height (points)
    default_row_height: f64,
    /// Deduplicated cell styles
    styles: StylePool,
    /// Merged regions in sheet order
    merged_regions: Vec<CellRange>,
    /// Hyperlinks keyed by (row, col)
    hyperlinks: HashMap<(u32, u16), Hyperlink>,
    /// Sheet is visible
    visible: bool,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            columns: BTreeMap::new(),
            default_column_width: DEFAULT_COLUMN_WIDTH,
            default_row_height: DEFAULT_ROW_HEIGHT,
            styles: StylePool::new(),
            merged_regions: Vec::new(),
            hyperlinks: HashMap::new(),
            visible: true,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the sheet is visible
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set sheet visibility
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    // === Rows ===

    /// Get a row, or `None` for a null row
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(&index)
    }

    /// Iterate over existing rows in index order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// Index of the first existing row
    pub fn first_row_index(&self) -> Option<u32> {
        self.rows.keys().next().copied()
    }

    /// Index of the last existing row
    pub fn last_row_index(&self) -> Option<u32> {
        self.rows.keys().next_back().copied()
    }

    /// Get the row at `index`, creating it if needed
    pub fn row_mut(&mut self, index: u32) -> Result<&mut Row> {
        if index >= MAX_ROWS {
            return Err(Error::RowOutOfBounds {
                row: index,
                max: MAX_ROWS - 1,
            });
        }
        Ok(self.rows.entry(index).or_insert_with(|| Row::new(index)))
    }

    /// Row height in points (custom or sheet default)
    pub fn row_height(&self, row: u32) -> f64 {
        self.rows
            .get(&row)
            .and_then(|r| r.height)
            .unwrap_or(self.default_row_height)
    }

    /// Set row height in points
    pub fn set_row_height(&mut self, row: u32, height: f64) -> Result<()> {
        self.row_mut(row)?.height = Some(height);
        Ok(())
    }

    /// Check if row is hidden
    pub fn is_row_hidden(&self, row: u32) -> bool {
        self.rows.get(&row).map(|r| r.hidden).unwrap_or(false)
    }

    /// Set row hidden state
    pub fn set_row_hidden(&mut self, row: u32, hidden: bool) -> Result<()> {
        self.row_mut(row)?.hidden = hidden;
        Ok(())
    }

    /// Default row height in points
    pub fn default_row_height(&self) -> f64 {
        self.default_row_height
    }

    /// Set the default row height in points
    pub fn set_default_row_height(&mut self, height: f64) {
        self.default_row_height = height;
    }

    // === Columns ===

    /// Get column metadata, if the column has custom settings
    pub fn column(&self, col: u16) -> Option<&Column> {
        self.columns.get(&col)
    }

    fn column_mut(&mut self, col: u16) -> Result<&mut Column> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds {
                col: col as u32,
                max: MAX_COLS - 1,
            });
        }
        Ok(self.columns.entry(col).or_insert_with(|| Column::new(col)))
    }

    /// Column width in characters (custom or sheet default)
    pub fn column_width(&self, col: u16) -> f64 {
        let default = self.default_column_width;
        self.columns.get(&col).map_or(default, |c| c.width_or(default))
    }

    /// Set column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        self.column_mut(col)?.width = Some(width);
        Ok(())
    }

    /// Check if column is hidden
    pub fn is_column_hidden(&self, col: u16) -> bool {
        self.columns.get(&col).map(|c| c.hidden).unwrap_or(false)
    }

    /// Set column hidden state
    pub fn set_column_hidden(&mut self, col: u16, hidden: bool) -> Result<()> {
        let column = self.column_mut(col)?;
        column.hidden = hidden;
        if column.is_default() {
            self.columns.remove(&col);
        }
        Ok(())
    }

    /// Default column width in characters
    pub fn default_column_width(&self) -> f64 {
        self.default_column_width
    }

    /// Set the default column width in characters
    pub fn set_default_column_width(&mut self, width: f64) {
        self.default_column_width = width;
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "A1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_at(addr.row, addr.col))
    }

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.cell(col))
    }

    /// Get cell value by indices
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Style applied to a cell (the default style for missing cells or
    /// unknown indices)
    pub fn cell_style_at(&self, row: u32, col: u16) -> &Style {
        let idx = self.cell_at(row, col).map(|c| c.style_index).unwrap_or(0);
        self.styles.get_or_default(idx)
    }

    /// Get the sheet's style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.styles
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by row and column indices, keeping its style
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        self.validate_column(col)?;
        let value = value.into();
        let row = self.row_mut(row)?;
        match row.cell_mut(col) {
            Some(cell) => cell.value = value,
            None => row.set_cell(col, CellData::new(value)),
        }
        Ok(())
    }

    /// Set a cell style by address string
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    /// Set a cell style by row and column indices.
    ///
    /// A missing cell is created blank, so styled empty cells still occupy
    /// the grid.
    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_column(col)?;
        let style_index = self.styles.get_or_insert(style.clone());
        let row = self.row_mut(row)?;
        match row.cell_mut(col) {
            Some(cell) => cell.style_index = style_index,
            None => row.set_cell(col, CellData::with_style(CellValue::Empty, style_index)),
        }
        Ok(())
    }

    /// Clear a cell by indices
    pub fn clear_cell_at(&mut self, row: u32, col: u16) {
        if let Some(r) = self.rows.get_mut(&row) {
            r.remove_cell(col);
        }
    }

    // === Merged Cells ===

    /// Get merged regions in sheet order
    pub fn merged_regions(&self) -> &[CellRange] {
        &self.merged_regions
    }

    /// Merge cells
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        if range.last_row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds {
                row: range.last_row,
                max: MAX_ROWS - 1,
            });
        }
        self.validate_column(range.last_col)?;
        if self.merged_regions.iter().any(|m| range.overlaps(m)) {
            return Err(Error::OverlappingMerge {
                range: range.to_string(),
            });
        }
        self.merged_regions.push(*range);
        Ok(())
    }

    /// Unmerge cells
    pub fn unmerge_cells(&mut self, range: &CellRange) -> bool {
        match self.merged_regions.iter().position(|m| m == range) {
            Some(i) => {
                self.merged_regions.remove(i);
                true
            }
            None => false,
        }
    }

    // === Hyperlinks ===

    /// Attach a hyperlink to a cell by address string
    pub fn set_hyperlink(&mut self, address: &str, link: Hyperlink) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_hyperlink_at(addr.row, addr.col, link)
    }

    /// Attach a hyperlink to a cell by indices
    pub fn set_hyperlink_at(&mut self, row: u32, col: u16, link: Hyperlink) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(Error::RowOutOfBounds {
                row,
                max: MAX_ROWS - 1,
            });
        }
        self.validate_column(col)?;
        self.hyperlinks.insert((row, col), link);
        Ok(())
    }

    /// Get the hyperlink attached to a cell
    pub fn hyperlink_at(&self, row: u32, col: u16) -> Option<&Hyperlink> {
        self.hyperlinks.get(&(row, col))
    }

    /// Number of hyperlinks on the sheet
    pub fn hyperlink_count(&self) -> usize {
        self.hyperlinks.len()
    }

    // === Iteration ===

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(Row::cell_count).sum()
    }

    /// Check if the worksheet holds no cells
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(Row::is_empty)
    }

    /// Iterate over all cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.rows
            .values()
            .flat_map(|row| row.cells().map(move |(col, cell)| (row.index, col, cell)))
    }

    fn validate_column(&self, col: u16) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds {
                col: col as u32,
                max: MAX_COLS - 1,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new("Test");
        assert_eq!(ws.name(), "Test");
        assert!(ws.is_visible());
        assert!(ws.is_empty());
        assert_eq!(ws.first_row_index(), None);
        assert_eq!(ws.last_row_index(), None);
    }

    #[test]
    fn test_set_cell_values() {
        let mut ws = Worksheet::new("Test");

        ws.set_cell_value("A1", "Hello").unwrap();
        ws.set_cell_value("B1", 42.0).unwrap();
        ws.set_cell_value_at(4, 2, true).unwrap();

        assert_eq!(ws.get_value_at(0, 0).as_string(), Some("Hello"));
        assert_eq!(ws.get_value_at(0, 1).as_number(), Some(42.0));
        assert_eq!(ws.get_value_at(4, 2), CellValue::Boolean(true));
        assert_eq!(ws.first_row_index(), Some(0));
        assert_eq!(ws.last_row_index(), Some(4));
        assert_eq!(ws.row(0).unwrap().last_cell_index(), Some(1));
        assert!(ws.row(2).is_none());
        assert_eq!(ws.cell_count(), 3);
    }

    #[test]
    fn test_style_survives_value_update() {
        let mut ws = Worksheet::new("Test");
        let style = Style::new().fill_color(Color::YELLOW);

        ws.set_cell_style_at(1, 1, &style).unwrap();
        assert!(ws.cell_at(1, 1).unwrap().is_blank());

        ws.set_cell_value_at(1, 1, 3.5).unwrap();
        assert_eq!(ws.cell_style_at(1, 1), &style);
        assert_eq!(ws.cell_style_at(9, 9), &Style::default());
    }

    #[test]
    fn test_row_column_dimensions() {
        let mut ws = Worksheet::new("Test");

        assert!((ws.row_height(0) - DEFAULT_ROW_HEIGHT).abs() < 0.001);
        assert!((ws.column_width(0) - DEFAULT_COLUMN_WIDTH).abs() < 0.001);

        ws.set_row_height(5, 30.0).unwrap();
        ws.set_column_width(3, 20.0).unwrap();
        ws.set_column_hidden(4, true).unwrap();
        ws.set_row_hidden(6, true).unwrap();

        assert!((ws.row_height(5) - 30.0).abs() < 0.001);
        assert!((ws.column_width(3) - 20.0).abs() < 0.001);
        assert!(ws.is_column_hidden(4));
        assert!(ws.is_row_hidden(6));
        assert!(!ws.is_row_hidden(5));
        assert!(ws.set_column_width(MAX_COLS, 1.0).is_err());
    }

    #[test]
    fn test_merge_cells() {
        let mut ws = Worksheet::new("Test");

        let range = CellRange::parse("A1:C3").unwrap();
        ws.merge_cells(&range).unwrap();
        assert_eq!(ws.merged_regions(), &[range]);

        let overlapping = CellRange::parse("B2:D4").unwrap();
        assert!(matches!(
            ws.merge_cells(&overlapping),
            Err(Error::OverlappingMerge { .. })
        ));

        assert!(ws.unmerge_cells(&range));
        assert!(!ws.unmerge_cells(&range));
        ws.merge_cells(&overlapping).unwrap();
    }

    #[test]
    fn test_hyperlinks() {
        let mut ws = Worksheet::new("Test");
        ws.set_hyperlink("B2", Hyperlink::url("https://example.com"))
            .unwrap();

        assert_eq!(
            ws.hyperlink_at(1, 1).map(|l| l.address.as_str()),
            Some("https://example.com")
        );
        assert!(ws.hyperlink_at(0, 0).is_none());
        assert_eq!(ws.hyperlink_count(), 1);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut ws = Worksheet::new("Test");
        ws.set_cell_value_at(2, 0, "c").unwrap();
        ws.set_cell_value_at(0, 1, "b").unwrap();
        ws.set_cell_value_at(0, 0, "a").unwrap();

        let order: Vec<(u32, u16)> = ws.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(0, 0), (0, 1), (2, 0)]);
    }
}
