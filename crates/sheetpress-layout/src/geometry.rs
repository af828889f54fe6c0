//! Sheet geometry: active content width, column widths and row heights

use sheetpress_core::Worksheet;

/// Maximum digit width of the default font, in pixels.
///
/// Column widths are stored in characters of this digit.
pub const MAX_DIGIT_WIDTH_PX: f64 = 7.0017;

/// Width of a visible column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    /// Sheet column index (0-based)
    pub index: u16,
    /// Width in pixels, unscaled
    pub width_px: f32,
}

/// Height of a rendered row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    /// Sheet row index (0-based)
    pub index: u32,
    /// Height in points, unscaled
    pub height_pt: f32,
}

/// Highest column index holding non-blank content in any row, or 0.
///
/// Hidden rows and columns count: hiding affects what is drawn, not how
/// wide the sheet is.
pub fn active_column_count(sheet: &Worksheet) -> u16 {
    sheet
        .rows()
        .flat_map(|row| row.cells())
        .filter(|(_, cell)| !cell.is_blank())
        .map(|(col, _)| col)
        .max()
        .unwrap_or(0)
}

/// Width of a column in pixels
pub fn column_width_px(sheet: &Worksheet, col: u16) -> f32 {
    (sheet.column_width(col) * MAX_DIGIT_WIDTH_PX) as f32
}

/// Height of a row in points
pub fn row_height_pt(sheet: &Worksheet, row: u32) -> f32 {
    sheet.row_height(row) as f32
}

/// Geometry of the non-hidden columns in `0..=last_col`
pub fn visible_columns(sheet: &Worksheet, last_col: u16) -> Vec<ColumnGeometry> {
    (0..=last_col)
        .filter(|&col| !sheet.is_column_hidden(col))
        .map(|col| ColumnGeometry {
            index: col,
            width_px: column_width_px(sheet, col),
        })
        .collect()
}

/// Total pixel width of the non-hidden columns in `0..=last_col`
pub fn sheet_pixel_width(sheet: &Worksheet, last_col: u16) -> f32 {
    visible_columns(sheet, last_col)
        .iter()
        .map(|c| c.width_px)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetpress_core::{CellError, CellValue, Style};

    #[test]
    fn test_empty_sheet_has_no_active_columns() {
        let sheet = Worksheet::new("Empty");
        assert_eq!(active_column_count(&sheet), 0);
    }

    #[test]
    fn test_blank_text_is_not_active() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_cell_value_at(0, 0, "a").unwrap();
        sheet.set_cell_value_at(0, 5, "   ").unwrap();
        sheet.set_cell_value_at(1, 7, "").unwrap();
        sheet.set_cell_style_at(2, 9, &Style::new().font(1)).unwrap();

        assert_eq!(active_column_count(&sheet), 0);
    }

    #[test]
    fn test_typed_values_are_active() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_cell_value_at(0, 1, 0.0).unwrap();
        sheet.set_cell_value_at(3, 4, false).unwrap();
        sheet
            .set_cell_value_at(5, 6, CellValue::Error(CellError::Na))
            .unwrap();
        sheet
            .set_cell_value_at(2, 3, CellValue::formula("=A1"))
            .unwrap();

        assert_eq!(active_column_count(&sheet), 6);
    }

    #[test]
    fn test_hidden_rows_and_columns_still_count() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_cell_value_at(4, 8, "far").unwrap();
        sheet.set_row_hidden(4, true).unwrap();
        sheet.set_column_hidden(8, true).unwrap();

        assert_eq!(active_column_count(&sheet), 8);
    }

    #[test]
    fn test_widths_skip_hidden_columns() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_column_width(0, 10.0).unwrap();
        sheet.set_column_hidden(1, true).unwrap();

        let columns = visible_columns(&sheet, 2);
        assert_eq!(
            columns.iter().map(|c| c.index).collect::<Vec<_>>(),
            vec![0, 2]
        );
        assert!((columns[0].width_px - 70.017).abs() < 1e-3);

        let expected = 70.017 + 8.43 * MAX_DIGIT_WIDTH_PX as f32;
        assert!((sheet_pixel_width(&sheet, 2) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_row_height_default() {
        let mut sheet = Worksheet::new("Data");
        sheet.set_row_height(2, 24.5).unwrap();
        assert_eq!(row_height_pt(&sheet, 2), 24.5);
        assert_eq!(row_height_pt(&sheet, 3), 15.0);
    }
}
