//! Placement of a sheet's cells

use sheetpress_core::{Hyperlink, Workbook, Worksheet};

use crate::format::{
    CachedResultEvaluator, CellContext, CellFormatter, DataFormatter, FormulaEvaluator,
};
use crate::geometry::{
    active_column_count, row_height_pt, visible_columns, ColumnGeometry, RowGeometry,
};
use crate::merge::MergeIndex;
use crate::options::ExportOptions;
use crate::scale::compute_scale;
use crate::style::{translate, NormalizedStyle};

/// A cell positioned in the output grid
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedCell {
    /// Sheet row index (0-based)
    pub row: u32,
    /// Sheet column index (0-based)
    pub col: u16,
    /// Number of sheet rows covered, at least 1
    pub row_span: u32,
    /// Number of sheet columns covered, at least 1
    pub col_span: u16,
    pub style: NormalizedStyle,
    pub text: String,
    pub hyperlink: Option<Hyperlink>,
}

impl PlacedCell {
    /// Last sheet row covered by this cell
    pub fn last_row(&self) -> u32 {
        self.row + self.row_span - 1
    }

    /// Last sheet column covered by this cell
    pub fn last_col(&self) -> u16 {
        self.col + self.col_span - 1
    }
}

/// Everything a renderer needs to draw one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub sheet_name: String,
    /// Factor applied to every column width, row height and font size
    pub scale: f32,
    /// Rendered columns, hidden ones excluded
    pub columns: Vec<ColumnGeometry>,
    /// Rendered rows, hidden and missing ones excluded
    pub rows: Vec<RowGeometry>,
    /// Cells in row-major order
    pub cells: Vec<PlacedCell>,
}

impl SheetLayout {
    /// Whether nothing will be drawn for this sheet
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of column widths in points, after scaling
    pub fn scaled_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width_px).sum::<f32>() * self.scale
    }

    /// Sum of row heights in points, after scaling
    pub fn scaled_height(&self) -> f32 {
        self.rows.iter().map(|r| r.height_pt).sum::<f32>() * self.scale
    }
}

/// Builds [`SheetLayout`]s for the sheets of one workbook
pub struct SheetLayoutBuilder<'a> {
    workbook: &'a Workbook,
    formatter: &'a dyn CellFormatter,
    evaluator: &'a dyn FormulaEvaluator,
}

impl<'a> SheetLayoutBuilder<'a> {
    pub fn new(
        workbook: &'a Workbook,
        formatter: &'a dyn CellFormatter,
        evaluator: &'a dyn FormulaEvaluator,
    ) -> Self {
        Self {
            workbook,
            formatter,
            evaluator,
        }
    }

    /// Lay out `sheet`, which must belong to the builder's workbook
    pub fn build(&self, sheet: &Worksheet, options: &ExportOptions) -> SheetLayout {
        let active = active_column_count(sheet);
        let scale = compute_scale(sheet, options);
        let columns = visible_columns(sheet, active);
        let merges = MergeIndex::new(sheet);
        let format = self.workbook.format();
        let settings = self.workbook.settings();

        let mut rows = Vec::new();
        let mut cells = Vec::new();

        for row in sheet.rows().filter(|r| !r.hidden) {
            rows.push(RowGeometry {
                index: row.index,
                height_pt: row_height_pt(sheet, row.index),
            });

            for column in &columns {
                let col = column.index;
                let Some(cell) = row.cell(col) else {
                    continue;
                };

                let (row_span, col_span) = if merges.is_merged(row.index, col) {
                    match merges.anchor_span(row.index, col) {
                        Some(span) => span,
                        None => continue,
                    }
                } else {
                    (1, 1)
                };

                let style = sheet.cell_style_at(row.index, col);
                let ctx = CellContext {
                    sheet,
                    row: row.index,
                    col,
                    cell,
                    style,
                    settings,
                };
                let text = self.formatter.format(&ctx, self.evaluator);

                let hyperlink = sheet.hyperlink_at(row.index, col).cloned();
                let mut normalized = translate(format, style, self.workbook.font(style.font_index));
                if hyperlink.is_some() {
                    normalized = normalized.with_hyperlink();
                }

                cells.push(PlacedCell {
                    row: row.index,
                    col,
                    row_span,
                    col_span,
                    style: normalized,
                    text,
                    hyperlink,
                });
            }
        }

        log::debug!(
            "sheet '{}': {} active columns, scale {:.3}, {} cells placed",
            sheet.name(),
            active + 1,
            scale,
            cells.len()
        );

        SheetLayout {
            sheet_name: sheet.name().to_string(),
            scale,
            columns,
            rows,
            cells,
        }
    }
}

/// Lay out `sheet` with the default formatter and cached formula results
pub fn build_layout(workbook: &Workbook, sheet: &Worksheet, options: &ExportOptions) -> SheetLayout {
    SheetLayoutBuilder::new(workbook, &DataFormatter, &CachedResultEvaluator).build(sheet, options)
}
