//! Export options

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Direction in which page content flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ContentDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Compression quality for embedded raster images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageQuality {
    Best,
    VeryHigh,
    #[default]
    High,
    Medium,
    Low,
    VeryLow,
}

/// Options controlling how a workbook is laid out and exported
///
/// # Example
///
/// ```rust
/// use sheetpress_layout::{ExportOptions, Orientation};
///
/// let options = ExportOptions::default()
///     .with_orientation(Orientation::Landscape)
///     .with_separate_files(true)
///     .with_margin(36.0);
/// assert!(options.fit_to_page);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExportOptions {
    /// Produce one document per sheet instead of one combined document
    pub separate_files_per_sheet: bool,
    /// Print the sheet name as a bold title above the content
    pub include_sheet_name_in_header: bool,
    /// Page orientation (A4 in both cases)
    pub orientation: Orientation,
    /// Shrink sheets to the page width
    pub fit_to_page: bool,
    /// Fixed scale when `fit_to_page` is off; upper bound when it is on
    pub scale_factor: f32,
    /// Print `current / total` page numbers in the footer
    pub include_page_numbers: bool,
    /// Margin on every side, in points
    pub margin: f32,
    /// Compress the produced document
    pub compress_output: bool,
    /// Image compression quality
    pub image_compression_quality: ImageQuality,
    /// Request archival (PDF/A) output
    pub produce_pdf_a: bool,
    /// Content direction
    pub content_direction: ContentDirection,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            separate_files_per_sheet: false,
            include_sheet_name_in_header: false,
            orientation: Orientation::Portrait,
            fit_to_page: true,
            scale_factor: 1.0,
            include_page_numbers: true,
            margin: 20.0,
            compress_output: true,
            image_compression_quality: ImageQuality::High,
            produce_pdf_a: true,
            content_direction: ContentDirection::LeftToRight,
        }
    }
}

impl ExportOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce one document per sheet
    pub fn with_separate_files(mut self, separate: bool) -> Self {
        self.separate_files_per_sheet = separate;
        self
    }

    /// Print the sheet name as a title above the content
    pub fn with_sheet_name_in_header(mut self, include: bool) -> Self {
        self.include_sheet_name_in_header = include;
        self
    }

    /// Set the page orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enable or disable fit-to-page scaling
    pub fn with_fit_to_page(mut self, fit: bool) -> Self {
        self.fit_to_page = fit;
        self
    }

    /// Set the scale factor
    pub fn with_scale_factor(mut self, scale: f32) -> Self {
        self.scale_factor = scale;
        self
    }

    /// Enable or disable page numbers
    pub fn with_page_numbers(mut self, include: bool) -> Self {
        self.include_page_numbers = include;
        self
    }

    /// Set the page margin in points
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Enable or disable output compression
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress_output = compress;
        self
    }

    /// Set the image compression quality
    pub fn with_image_quality(mut self, quality: ImageQuality) -> Self {
        self.image_compression_quality = quality;
        self
    }

    /// Request archival output
    pub fn with_pdf_a(mut self, pdf_a: bool) -> Self {
        self.produce_pdf_a = pdf_a;
        self
    }

    /// Set the content direction
    pub fn with_content_direction(mut self, direction: ContentDirection) -> Self {
        self.content_direction = direction;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert!(!options.separate_files_per_sheet);
        assert!(!options.include_sheet_name_in_header);
        assert_eq!(options.orientation, Orientation::Portrait);
        assert!(options.fit_to_page);
        assert_eq!(options.scale_factor, 1.0);
        assert!(options.include_page_numbers);
        assert_eq!(options.margin, 20.0);
        assert!(options.compress_output);
        assert_eq!(options.image_compression_quality, ImageQuality::High);
        assert!(options.produce_pdf_a);
        assert_eq!(options.content_direction, ContentDirection::LeftToRight);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ExportOptions =
            serde_json::from_str(r#"{"orientation": "landscape", "margin": 10.0}"#).unwrap();
        assert_eq!(options.orientation, Orientation::Landscape);
        assert_eq!(options.margin, 10.0);
        assert!(options.fit_to_page);
    }
}
