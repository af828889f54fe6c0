//! PDF rendering errors

use sheetpress_layout::LayoutError;
use thiserror::Error;

/// Result type alias using [`PdfError`]
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors raised while writing a PDF
#[derive(Debug, Error)]
pub enum PdfError {
    /// Margins leave no room for content
    #[error("Page of {width}x{height} pt has no room for content inside a {margin} pt margin")]
    PageTooSmall { width: f32, height: f32, margin: f32 },

    /// The document has no pages to write
    #[error("Document has no pages")]
    NoPages,
}

impl From<PdfError> for LayoutError {
    fn from(err: PdfError) -> Self {
        LayoutError::render(err.to_string())
    }
}
