//! Rendering whole workbooks to PDF bytes

use pretty_assertions::assert_eq;
use sheetpress_core::{
    CellRange, Color, DocumentProperties, Hyperlink, SourceFormat, Style, Workbook,
};
use sheetpress_layout::{
    Assembler, ContentDirection, Document, DocumentRenderer, ExportOptions, ExportResult,
};
use sheetpress_pdf::PdfRenderer;

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

fn sales_workbook() -> Workbook {
    let mut workbook = Workbook::new(SourceFormat::Modern);
    for name in ["Q1", "Q2"] {
        let index = workbook.add_worksheet(name).unwrap();
        let sheet = workbook.worksheet_mut(index).unwrap();
        sheet.set_cell_value("A1", "Region").unwrap();
        sheet.set_cell_value("B1", "Total").unwrap();
        sheet.set_cell_value("A2", "North").unwrap();
        sheet.set_cell_value("B2", 1250.0).unwrap();
    }
    workbook
}

fn render(workbook: &Workbook, options: &ExportOptions) -> Vec<ExportResult> {
    Assembler::new(PdfRenderer::new())
        .assemble(workbook, options)
        .unwrap()
}

fn plain(options: ExportOptions) -> ExportOptions {
    options.with_compression(false)
}

/// Combined output is one PDF with a page per sheet and document info
#[test]
fn test_combined_pdf() {
    let mut workbook = sales_workbook();
    workbook.set_properties(DocumentProperties::new().with_title("Sales"));
    let results = render(&workbook, &ExportOptions::default());

    assert_eq!(results.len(), 1);
    let pdf = &results[0].data;
    assert!(pdf.starts_with(b"%PDF-"));
    assert!(contains(pdf, "/Count 2"));
    assert!(contains(pdf, "/Producer (sheetpress)"));
    assert!(contains(pdf, "/Title (Sales)"));
    assert!(contains(pdf, "/FlateDecode"));
}

/// Separate output writes each sheet's header and cells, without document info
#[test]
fn test_separate_pdfs() {
    let options = plain(ExportOptions::default().with_separate_files(true));
    let results = render(&sales_workbook(), &options);

    assert_eq!(
        results.iter().map(|r| r.sheet_name.as_str()).collect::<Vec<_>>(),
        vec!["Q1", "Q2"]
    );
    for result in &results {
        let pdf = &result.data;
        assert!(contains(pdf, "/Count 1"));
        assert!(contains(pdf, &format!("({}) Tj", result.sheet_name)));
        assert!(contains(pdf, "(Region) Tj"));
        assert!(contains(pdf, "(1250) Tj"));
        assert!(contains(pdf, "(1 / 1) Tj"));
        assert!(!contains(pdf, "/Producer"));
        assert!(!contains(pdf, "/FlateDecode"));
    }
}

/// Page numbers and titles follow the export options
#[test]
fn test_decoration_options() {
    let options = plain(
        ExportOptions::default()
            .with_separate_files(true)
            .with_page_numbers(false)
            .with_sheet_name_in_header(true),
    );
    let results = render(&sales_workbook(), &options);
    let pdf = &results[0].data;

    assert!(!contains(pdf, "(1 / 1) Tj"));
    // header and title both show the sheet name
    let needle = "(Q1) Tj";
    let count = pdf
        .windows(needle.len())
        .filter(|w| *w == needle.as_bytes())
        .count();
    assert_eq!(count, 2);
}

/// Hyperlinked cells become URI link annotations
#[test]
fn test_hyperlink_annotation() {
    let mut workbook = sales_workbook();
    workbook
        .worksheet_mut(0)
        .unwrap()
        .set_hyperlink("A2", Hyperlink::url("https://example.com/north"))
        .unwrap();
    let results = render(&workbook, &plain(ExportOptions::default()));
    let pdf = &results[0].data;

    assert!(contains(pdf, "/Subtype /Link"));
    assert!(contains(pdf, "/URI (https://example.com/north)"));
}

/// Fills, borders and merged cells reach the content stream
#[test]
fn test_styled_cells() {
    let mut workbook = sales_workbook();
    let sheet = workbook.worksheet_mut(0).unwrap();
    sheet
        .set_cell_style("A1", &Style::new().fill_color(Color::rgb(255, 0, 0)))
        .unwrap();
    sheet.merge_cells(&CellRange::parse("A2:B2").unwrap()).unwrap();
    let results = render(&workbook, &plain(ExportOptions::default().with_separate_files(true)));
    let pdf = &results[0].data;

    assert!(contains(pdf, "1 0 0 rg"));
    assert!(contains(pdf, "(North) Tj"));
    // covered by the merge
    assert!(!contains(pdf, "(1250) Tj"));
}

/// Right-to-left documents still render every cell
#[test]
fn test_right_to_left() {
    let options = plain(
        ExportOptions::default()
            .with_separate_files(true)
            .with_content_direction(ContentDirection::RightToLeft),
    );
    let results = render(&sales_workbook(), &options);
    assert!(contains(&results[0].data, "(Total) Tj"));
}

/// An empty workbook has nothing to render in combined mode
#[test]
fn test_empty_workbook() {
    let workbook = Workbook::new(SourceFormat::Legacy);
    let err = Assembler::new(PdfRenderer::new())
        .assemble(&workbook, &ExportOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("no pages"));

    let separate = Assembler::new(PdfRenderer::new())
        .assemble(&workbook, &ExportOptions::default().with_separate_files(true))
        .unwrap();
    assert!(separate.is_empty());
}

/// The renderer can be used directly through the trait
#[test]
fn test_renderer_trait_object() {
    let renderer: Box<dyn DocumentRenderer> = Box::new(PdfRenderer::new());
    let document = Document {
        metadata: None,
        settings: Default::default(),
        pages: vec![],
    };
    assert!(renderer.render(&document).is_err());
}
