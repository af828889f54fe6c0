//! Vertical pagination of a sheet's rows

use std::ops::Range;

use sheetpress_layout::{ColumnGeometry, PlacedCell, RowGeometry, SheetLayout};

/// Slack for accumulated float error when filling a page
const EPSILON: f32 = 0.01;

/// Positions in `rows` of the rendered rows a cell covers
pub fn row_range(rows: &[RowGeometry], cell: &PlacedCell) -> Range<usize> {
    let start = rows.partition_point(|r| r.index < cell.row);
    let end = rows.partition_point(|r| r.index <= cell.last_row());
    start..end
}

/// Positions in `columns` of the rendered columns a cell covers
pub fn column_range(columns: &[ColumnGeometry], cell: &PlacedCell) -> Range<usize> {
    let start = columns.partition_point(|c| c.index < cell.col);
    let end = columns.partition_point(|c| c.index <= cell.last_col());
    start..end
}

/// Split `layout.rows` into bands that fit the page height.
///
/// The first band may use `first_height`, every later one `rest_height`
/// (both in points, after scaling). Rows joined by a row span always land
/// in the same band; a group taller than a page gets a band of its own and
/// overflows it. An empty layout yields a single empty band so the sheet
/// still produces a page.
pub fn paginate(layout: &SheetLayout, first_height: f32, rest_height: f32) -> Vec<Range<usize>> {
    let rows = &layout.rows;
    if rows.is_empty() {
        return vec![0..0];
    }

    // reach[i]: rows from i up to reach[i] must share a band
    let mut reach: Vec<usize> = (1..=rows.len()).collect();
    for cell in layout.cells.iter().filter(|c| c.row_span > 1) {
        let range = row_range(rows, cell);
        if range.start < rows.len() {
            reach[range.start] = reach[range.start].max(range.end);
        }
    }

    let mut bands = Vec::new();
    let mut band_start = 0;
    let mut used = 0.0f32;
    let mut capacity = first_height;

    let mut start = 0;
    while start < rows.len() {
        let mut end = reach[start];
        let mut i = start;
        while i < end {
            end = end.max(reach[i]);
            i += 1;
        }

        let height: f32 = rows[start..end]
            .iter()
            .map(|r| r.height_pt * layout.scale)
            .sum();

        if start > band_start && used + height > capacity + EPSILON {
            bands.push(band_start..start);
            band_start = start;
            used = 0.0;
            capacity = rest_height;
        }
        used += height;
        start = end;
    }
    bands.push(band_start..rows.len());

    bands
}
