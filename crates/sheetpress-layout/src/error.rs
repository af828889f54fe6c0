//! Layout error types

use thiserror::Error;

/// Result type alias using [`LayoutError`]
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while assembling documents.
///
/// Layout and style translation never fail; only the renderer seam can.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The document renderer failed to serialize a document
    #[error("Render error: {0}")]
    Render(String),
}

impl LayoutError {
    /// Create a render error with a message
    pub fn render<S: Into<String>>(msg: S) -> Self {
        LayoutError::Render(msg.into())
    }
}
