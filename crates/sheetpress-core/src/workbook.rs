//! Workbook type - the main document structure

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::properties::DocumentProperties;
use crate::style::FontStyle;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Container format a workbook was decoded from.
///
/// Several style encodings (rotation, palette colors) differ between the two,
/// so consumers branch on this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// BIFF binary workbook (`.xls`)
    Legacy,
    /// Office Open XML workbook (`.xlsx`, `.xlsm`)
    Modern,
}

impl SourceFormat {
    /// Map a file extension (without the dot, any case) to a format
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "xls" => Some(SourceFormat::Legacy),
            "xlsx" | "xlsm" => Some(SourceFormat::Modern),
            _ => None,
        }
    }

    /// Map a file path to a format by its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Legacy => write!(f, "legacy"),
            SourceFormat::Modern => write!(f, "modern"),
        }
    }
}

/// A workbook (spreadsheet document)
///
/// A workbook owns its worksheets, the font table shared by all sheet
/// styles, and optional document properties. It is built once by a parser
/// and read afterwards.
#[derive(Debug)]
pub struct Workbook {
    /// Format the workbook was decoded from
    format: SourceFormat,
    /// Worksheets in workbook order
    worksheets: Vec<Worksheet>,
    /// Font table (index 0 is the default font)
    fonts: Vec<FontStyle>,
    /// Document properties, when the source carries any
    properties: Option<DocumentProperties>,
    /// Workbook settings
    settings: WorkbookSettings,
}

impl Workbook {
    /// Create an empty workbook with no worksheets and the default font
    pub fn new(format: SourceFormat) -> Self {
        Self {
            format,
            worksheets: Vec::new(),
            fonts: vec![FontStyle::default()],
            properties: None,
            settings: WorkbookSettings::default(),
        }
    }

    /// Format the workbook was decoded from
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets in workbook order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new empty worksheet, returning its index
    pub fn add_worksheet(&mut self, name: &str) -> Result<usize> {
        self.add_existing_worksheet(Worksheet::new(name))
    }

    /// Add an existing worksheet to the workbook
    pub fn add_existing_worksheet(&mut self, worksheet: Worksheet) -> Result<usize> {
        self.validate_sheet_name(worksheet.name())?;
        let index = self.worksheets.len();
        self.worksheets.push(worksheet);
        Ok(index)
    }

    // === Fonts ===

    /// Add a font to the font table, returning its index.
    ///
    /// Identical fonts share one entry.
    pub fn add_font(&mut self, font: FontStyle) -> u16 {
        if let Some(idx) = self.fonts.iter().position(|f| *f == font) {
            return idx as u16;
        }
        self.fonts.push(font);
        (self.fonts.len() - 1) as u16
    }

    /// Get a font by index
    pub fn font(&self, index: u16) -> Option<&FontStyle> {
        self.fonts.get(index as usize)
    }

    /// Number of fonts in the table
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    // === Properties and settings ===

    /// Document properties, if the source carried any
    pub fn properties(&self) -> Option<&DocumentProperties> {
        self.properties.as_ref()
    }

    /// Set the document properties
    pub fn set_properties(&mut self, properties: DocumentProperties) {
        self.properties = Some(properties);
    }

    /// Get workbook settings
    pub fn settings(&self) -> &WorkbookSettings {
        &self.settings
    }

    /// Get mutable workbook settings
    pub fn settings_mut(&mut self) -> &mut WorkbookSettings {
        &mut self.settings
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Case-insensitive, as spreadsheet applications compare them
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

/// Workbook-level settings
#[derive(Debug, Clone, Default)]
pub struct WorkbookSettings {
    /// Date system: false = 1900 (Windows), true = 1904 (Mac)
    pub date_1904: bool,
}
