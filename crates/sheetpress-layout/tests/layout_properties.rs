//! End-to-end layout behavior over small hand-built workbooks

use pretty_assertions::assert_eq;
use sheetpress_core::{CellRange, CellValue, Color, SourceFormat, Style, Workbook, Worksheet};
use sheetpress_layout::style::normalize_rotation;
use sheetpress_layout::{
    active_column_count, build_layout, translate, Assembler, Document, DocumentRenderer,
    ExportOptions, NormalizedStyle, Result, Rgb,
};

struct NullRenderer;

impl DocumentRenderer for NullRenderer {
    fn render(&self, _document: &Document) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

fn single_sheet(build: impl FnOnce(&mut Worksheet)) -> Workbook {
    let mut workbook = Workbook::new(SourceFormat::Modern);
    let index = workbook.add_worksheet("Sheet1").unwrap();
    build(workbook.worksheet_mut(index).unwrap());
    workbook
}

/// A sheet with nothing but blank cells has no active columns
#[test]
fn test_active_columns_of_blank_sheet() {
    let workbook = single_sheet(|sheet| {
        sheet.set_cell_value_at(0, 3, "  ").unwrap();
        sheet.set_cell_value_at(5, 9, CellValue::Empty).unwrap();
    });
    assert_eq!(active_column_count(workbook.worksheet(0).unwrap()), 0);

    let empty = single_sheet(|_| {});
    assert_eq!(active_column_count(empty.worksheet(0).unwrap()), 0);
}

/// A 3x2 merge yields a single anchor cell with the region's spans
#[test]
fn test_merged_region_spans() {
    let workbook = single_sheet(|sheet| {
        for row in 0..6 {
            for col in 0..4 {
                sheet.set_cell_value_at(row, col, format!("{row}:{col}")).unwrap();
            }
        }
        // rows 2-4, columns 1-2
        sheet
            .merge_cells(&CellRange::new(2, 1, 4, 2))
            .unwrap();
    });
    let sheet = workbook.worksheet(0).unwrap();
    let layout = build_layout(&workbook, sheet, &ExportOptions::default());

    let inside: Vec<_> = layout
        .cells
        .iter()
        .filter(|c| (2..=4).contains(&c.row) && (1..=2).contains(&c.col))
        .collect();
    assert_eq!(inside.len(), 1);
    assert_eq!((inside[0].row, inside[0].col), (2, 1));
    assert_eq!((inside[0].row_span, inside[0].col_span), (3, 2));
    assert_eq!(inside[0].text, "2:1");
    assert_eq!(layout.cells.len(), 6 * 4 - 5);
}

/// Rotation angles map to clockwise degrees per source format
#[test]
fn test_rotation_normalization() {
    assert_eq!(normalize_rotation(SourceFormat::Legacy, 45), 315.0);
    assert_eq!(normalize_rotation(SourceFormat::Legacy, 135), -135.0);
    assert_eq!(normalize_rotation(SourceFormat::Modern, 45), 315.0);
    assert_eq!(normalize_rotation(SourceFormat::Modern, 135), 45.0);
    assert_eq!(normalize_rotation(SourceFormat::Modern, 0), 0.0);
}

/// Styles with unresolvable colors fall back to white and black
#[test]
fn test_translate_fallbacks() {
    let style = Style::new()
        .fill_color(Color::Theme { index: 42, tint: 0 })
        .rotation(0);
    for format in [SourceFormat::Legacy, SourceFormat::Modern] {
        let normalized = translate(format, &style, None);
        assert_eq!(normalized.background, Rgb::WHITE);
        assert_eq!(normalized.text.color, Rgb::BLACK);
    }
    assert_eq!(
        translate(SourceFormat::Modern, &Style::default(), None),
        NormalizedStyle::default()
    );
}

/// A fully occupied 3x2 sheet places six unit cells in row-major order
#[test]
fn test_three_by_two_sheet() {
    let workbook = single_sheet(|sheet| {
        for row in 0..3 {
            for col in 0..2 {
                sheet.set_cell_value_at(row, col, (row * 2 + col as u32) as f64).unwrap();
            }
        }
    });
    let options = ExportOptions::default()
        .with_fit_to_page(false)
        .with_scale_factor(1.0);
    let layout = build_layout(&workbook, workbook.worksheet(0).unwrap(), &options);

    let placed: Vec<_> = layout
        .cells
        .iter()
        .map(|c| (c.row + 1, c.col + 1, c.row_span, c.col_span))
        .collect();
    assert_eq!(
        placed,
        vec![
            (1, 1, 1, 1),
            (1, 2, 1, 1),
            (2, 1, 1, 1),
            (2, 2, 1, 1),
            (3, 1, 1, 1),
            (3, 2, 1, 1),
        ]
    );
    assert_eq!(layout.scale, 1.0);
}

/// Separate output yields one named result per sheet; combined yields one unnamed
#[test]
fn test_output_partitioning() {
    let mut workbook = Workbook::new(SourceFormat::Legacy);
    for name in ["Jan", "Feb", "Mar"] {
        workbook.add_worksheet(name).unwrap();
    }
    let assembler = Assembler::new(NullRenderer);

    let separate = assembler
        .assemble(&workbook, &ExportOptions::default().with_separate_files(true))
        .unwrap();
    let names: Vec<_> = separate.iter().map(|r| r.sheet_name.as_str()).collect();
    assert_eq!(names, vec!["Jan", "Feb", "Mar"]);

    let combined = assembler
        .assemble(&workbook, &ExportOptions::default())
        .unwrap();
    assert_eq!(combined.len(), 1);
    assert_eq!(combined[0].sheet_name, "");
}

/// Hidden rows and columns are not drawn but still widen the active area
#[test]
fn test_hidden_content() {
    let workbook = single_sheet(|sheet| {
        sheet.set_cell_value_at(0, 0, "visible").unwrap();
        sheet.set_cell_value_at(0, 4, "hidden column").unwrap();
        sheet.set_cell_value_at(2, 6, "hidden row").unwrap();
        sheet.set_column_hidden(4, true).unwrap();
        sheet.set_row_hidden(2, true).unwrap();
    });
    let sheet = workbook.worksheet(0).unwrap();

    assert_eq!(active_column_count(sheet), 6);

    let layout = build_layout(&workbook, sheet, &ExportOptions::default());
    assert_eq!(layout.cells.len(), 1);
    assert_eq!(layout.cells[0].text, "visible");
    assert!(layout.columns.iter().all(|c| c.index != 4));
    assert_eq!(layout.columns.last().map(|c| c.index), Some(6));
    assert!(layout.rows.iter().all(|r| r.index != 2));
}
