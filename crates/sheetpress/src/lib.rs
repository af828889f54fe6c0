//! # sheetpress
//!
//! Convert spreadsheets into paginated PDF documents.
//!
//! A [`Converter`] reads a workbook through a registered [`WorkbookParser`]
//! (one per [`SourceFormat`]), lays every sheet out on A4 pages and renders
//! the result with a [`DocumentRenderer`], by default [`PdfRenderer`].
//!
//! ## Features
//!
//! - Fit-to-page scaling, portrait or landscape
//! - Merged cells, hidden rows and columns, hyperlinks
//! - Fills, borders, fonts, alignment and text rotation
//! - One combined document, or one document per sheet
//!
//! ## Example
//!
//! ```rust
//! use sheetpress::prelude::*;
//!
//! let mut workbook = Workbook::new(SourceFormat::Modern);
//! let index = workbook.add_worksheet("Summary").unwrap();
//! let sheet = workbook.worksheet_mut(index).unwrap();
//! sheet.set_cell_value("A1", "Revenue").unwrap();
//! sheet.set_cell_value("B1", 1250.0).unwrap();
//!
//! let results = Converter::new()
//!     .convert(&workbook, &ExportOptions::default())
//!     .unwrap();
//! assert_eq!(results.len(), 1);
//! assert!(results[0].data.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod prelude;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub use error::{Error, Result};

// Re-export core types
pub use sheetpress_core::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, CellAddress, CellData, CellError,
    CellRange, CellValue, Color, DocumentProperties, FillStyle, FontStyle, HorizontalAlignment,
    Hyperlink, HyperlinkKind, NumberFormat, SourceFormat, Style, VerticalAlignment, Workbook,
    WorkbookSettings, Worksheet,
};

// Re-export layout types
pub use sheetpress_layout::{
    Assembler, CachedResultEvaluator, CellContext, CellFormatter, ContentDirection, DataFormatter,
    Document, DocumentRenderer, ExportOptions, ExportResult, FormulaEvaluator, ImageQuality,
    Orientation,
};

// Re-export the PDF renderer
pub use sheetpress_pdf::{PdfError, PdfRenderer};

/// Reads a workbook in one source format
pub trait WorkbookParser: Send + Sync {
    fn parse(&self, reader: &mut dyn Read) -> Result<Workbook>;
}

/// Converts workbooks, or workbook files, into rendered documents
pub struct Converter {
    legacy: Option<Box<dyn WorkbookParser>>,
    modern: Option<Box<dyn WorkbookParser>>,
    assembler: Assembler,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Converter rendering PDF, with no parsers registered
    pub fn new() -> Self {
        Self::with_renderer(PdfRenderer::new())
    }

    /// Converter using a custom renderer
    pub fn with_renderer<R: DocumentRenderer + 'static>(renderer: R) -> Self {
        Self {
            legacy: None,
            modern: None,
            assembler: Assembler::new(renderer),
        }
    }

    /// Register the parser for `format`, replacing any previous one
    pub fn with_parser<P: WorkbookParser + 'static>(
        mut self,
        format: SourceFormat,
        parser: P,
    ) -> Self {
        let parser: Box<dyn WorkbookParser> = Box::new(parser);
        match format {
            SourceFormat::Legacy => self.legacy = Some(parser),
            SourceFormat::Modern => self.modern = Some(parser),
        }
        self
    }

    /// Replace the cell formatter
    pub fn with_formatter<F: CellFormatter + 'static>(mut self, formatter: F) -> Self {
        self.assembler = self.assembler.with_formatter(formatter);
        self
    }

    /// Replace the formula evaluator
    pub fn with_evaluator<E: FormulaEvaluator + 'static>(mut self, evaluator: E) -> Self {
        self.assembler = self.assembler.with_evaluator(evaluator);
        self
    }

    /// The parser registered for `format`
    pub fn parser(&self, format: SourceFormat) -> Option<&dyn WorkbookParser> {
        match format {
            SourceFormat::Legacy => self.legacy.as_deref(),
            SourceFormat::Modern => self.modern.as_deref(),
        }
    }

    /// Convert the workbook file at `path`.
    ///
    /// The format comes from the extension: `xls` is legacy, `xlsx` and
    /// `xlsm` are modern (case-insensitive). The file is closed before
    /// layout starts.
    pub fn convert_path<P: AsRef<Path>>(
        &self,
        path: P,
        options: &ExportOptions,
    ) -> Result<Vec<ExportResult>> {
        let path = path.as_ref();
        let format = SourceFormat::from_path(path)
            .ok_or_else(|| Error::UnsupportedFormat(path.display().to_string()))?;

        let workbook = {
            let mut reader = BufReader::new(File::open(path)?);
            self.read(format, &mut reader)?
        };
        log::debug!(
            "read {} workbook {} with {} sheets",
            format,
            path.display(),
            workbook.sheet_count()
        );

        self.convert(&workbook, options)
    }

    /// Convert a workbook read from `reader`
    pub fn convert_reader(
        &self,
        format: SourceFormat,
        reader: &mut dyn Read,
        options: &ExportOptions,
    ) -> Result<Vec<ExportResult>> {
        let workbook = self.read(format, reader)?;
        self.convert(&workbook, options)
    }

    /// Convert an in-memory workbook
    pub fn convert(
        &self,
        workbook: &Workbook,
        options: &ExportOptions,
    ) -> Result<Vec<ExportResult>> {
        Ok(self.assembler.assemble(workbook, options)?)
    }

    fn read(&self, format: SourceFormat, reader: &mut dyn Read) -> Result<Workbook> {
        let parser = self.parser(format).ok_or(Error::MissingParser(format))?;
        parser.parse(reader)
    }
}
