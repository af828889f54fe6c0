//! Document assembly
//!
//! An [`Assembler`] turns a workbook into one document (every sheet as
//! consecutive pages) or one document per sheet, then hands each to a
//! [`DocumentRenderer`] for serialization.

use chrono::{DateTime, Local};
use sheetpress_core::{Workbook, Worksheet};

use crate::error::Result;
use crate::format::{CachedResultEvaluator, CellFormatter, DataFormatter, FormulaEvaluator};
use crate::layout::{SheetLayout, SheetLayoutBuilder};
use crate::options::{ContentDirection, ExportOptions, ImageQuality};
use crate::page::PageLayout;

/// Application name written as creator and producer
pub const APPLICATION_NAME: &str = "sheetpress";

/// Header text size in points
pub const HEADER_FONT_SIZE: f32 = 12.0;
/// Sheet title size in points
pub const TITLE_FONT_SIZE: f32 = 16.0;
/// Space below the sheet title in points
pub const TITLE_PADDING: f32 = 10.0;

/// Descriptive metadata of a combined document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    pub author: String,
    pub title: String,
    pub subject: String,
    pub keywords: String,
    pub creator: String,
    pub producer: String,
    pub creation_date: DateTime<Local>,
    pub modified_date: DateTime<Local>,
}

impl DocumentMetadata {
    /// Metadata from the workbook's properties, stamped with the current time
    pub fn from_workbook(workbook: &Workbook) -> Self {
        let now = Local::now();
        let props = workbook.properties().cloned().unwrap_or_default();

        Self {
            author: props.author.unwrap_or_default(),
            title: props.title.unwrap_or_default(),
            subject: props.subject.unwrap_or_default(),
            keywords: props.keywords.unwrap_or_default(),
            creator: APPLICATION_NAME.to_string(),
            producer: APPLICATION_NAME.to_string(),
            creation_date: now,
            modified_date: now,
        }
    }
}

/// Output settings handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSettings {
    pub compress: bool,
    pub pdf_a: bool,
    pub content_direction: ContentDirection,
    pub image_quality: ImageQuality,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            compress: true,
            pdf_a: false,
            content_direction: ContentDirection::LeftToRight,
            image_quality: ImageQuality::High,
        }
    }
}

impl DocumentSettings {
    /// Settings requested by export options
    pub fn from_options(options: &ExportOptions) -> Self {
        Self {
            compress: options.compress_output,
            pdf_a: options.produce_pdf_a,
            content_direction: options.content_direction,
            image_quality: options.image_compression_quality,
        }
    }
}

/// One sheet's pages: decorations plus its laid-out content
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPage {
    pub sheet_name: String,
    pub page: PageLayout,
    /// Header text, drawn at [`HEADER_FONT_SIZE`] semi-bold
    pub header: String,
    /// Whether to draw a centered `current / total` footer
    pub include_page_numbers: bool,
    /// Title drawn above the content at [`TITLE_FONT_SIZE`] bold
    pub title: Option<String>,
    pub layout: SheetLayout,
}

/// A document ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Present for combined documents only
    pub metadata: Option<DocumentMetadata>,
    pub settings: DocumentSettings,
    pub pages: Vec<SheetPage>,
}

/// Serializes documents to bytes
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, document: &Document) -> Result<Vec<u8>>;
}

/// One produced file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    /// Name of the sheet, empty for a combined document
    pub sheet_name: String,
    pub data: Vec<u8>,
}

/// Builds documents from workbooks and renders them
pub struct Assembler {
    renderer: Box<dyn DocumentRenderer>,
    formatter: Box<dyn CellFormatter>,
    evaluator: Box<dyn FormulaEvaluator>,
}

impl Assembler {
    /// Assembler using the default formatter and cached formula results
    pub fn new<R: DocumentRenderer + 'static>(renderer: R) -> Self {
        Self {
            renderer: Box::new(renderer),
            formatter: Box::new(DataFormatter),
            evaluator: Box::new(CachedResultEvaluator),
        }
    }

    /// Replace the cell formatter
    pub fn with_formatter<F: CellFormatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replace the formula evaluator
    pub fn with_evaluator<E: FormulaEvaluator + 'static>(mut self, evaluator: E) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Build and render the documents for `workbook`.
    ///
    /// With `separate_files_per_sheet` there is one result per sheet, in
    /// workbook order; otherwise a single result with an empty sheet name.
    pub fn assemble(
        &self,
        workbook: &Workbook,
        options: &ExportOptions,
    ) -> Result<Vec<ExportResult>> {
        self.documents(workbook, options)
            .into_iter()
            .map(|(sheet_name, document)| {
                let data = self.renderer.render(&document)?;
                Ok(ExportResult { sheet_name, data })
            })
            .collect()
    }

    /// The documents [`assemble`](Self::assemble) renders, paired with their
    /// result names
    pub fn documents(
        &self,
        workbook: &Workbook,
        options: &ExportOptions,
    ) -> Vec<(String, Document)> {
        let builder = SheetLayoutBuilder::new(workbook, &*self.formatter, &*self.evaluator);

        if options.separate_files_per_sheet {
            let settings = DocumentSettings::from_options(options);
            workbook
                .worksheets()
                .map(|sheet| {
                    let document = Document {
                        metadata: None,
                        settings,
                        pages: vec![sheet_page(&builder, sheet, options)],
                    };
                    log::debug!("document for sheet '{}'", sheet.name());
                    (sheet.name().to_string(), document)
                })
                .collect()
        } else {
            let pages: Vec<SheetPage> = workbook
                .worksheets()
                .map(|sheet| sheet_page(&builder, sheet, options))
                .collect();
            log::debug!("combined document with {} sheets", pages.len());
            let document = Document {
                metadata: Some(DocumentMetadata::from_workbook(workbook)),
                settings: DocumentSettings::default(),
                pages,
            };
            vec![(String::new(), document)]
        }
    }
}

fn sheet_page(
    builder: &SheetLayoutBuilder<'_>,
    sheet: &Worksheet,
    options: &ExportOptions,
) -> SheetPage {
    SheetPage {
        sheet_name: sheet.name().to_string(),
        page: PageLayout::from_options(options),
        header: sheet.name().to_string(),
        include_page_numbers: options.include_page_numbers,
        title: options
            .include_sheet_name_in_header
            .then(|| sheet.name().to_string()),
        layout: builder.build(sheet, options),
    }
}
