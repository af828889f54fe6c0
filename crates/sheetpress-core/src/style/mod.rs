//! Cell styling types
//!
//! Styles hold formatting exactly as the source workbook encoded it:
//! - [`Style`] - per-cell record, deduplicated in a [`StylePool`]
//! - [`FontStyle`] - font settings, shared through the workbook font table
//! - [`FillStyle`] - background fill
//! - [`BorderStyle`] - cell borders
//! - [`Alignment`] - text alignment and raw rotation
//! - [`Color`] - color representation
//!
//! Interpreting these values (e.g., legacy vs. modern rotation encodings) is
//! left to the consumer.

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod pool;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{BorderEdge, BorderLineStyle, BorderStyle};
pub use color::Color;
pub use fill::{FillStyle, PatternType};
pub use font::{FontStyle, FontVerticalAlign, Underline};
pub use number_format::NumberFormat;
pub use pool::StylePool;

/// Complete cell style
///
/// Styles are immutable once pooled; cells reference them by index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Index into the workbook font table
    pub font_index: u16,
    /// Fill/background settings
    pub fill: FillStyle,
    /// Border settings
    pub border: BorderStyle,
    /// Text alignment
    pub alignment: Alignment,
    /// Number format
    pub number_format: NumberFormat,
}

impl Style {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the font at `index` in the workbook font table
    pub fn font(mut self, index: u16) -> Self {
        self.font_index = index;
        self
    }

    /// Set fill color (solid fill)
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = FillStyle::Solid { color };
        self
    }

    /// Set the fill
    pub fn fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    /// Set the borders
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Set number format string
    pub fn number_format<S: Into<String>>(mut self, format: S) -> Self {
        self.number_format = NumberFormat::Custom(format.into());
        self
    }

    /// Set a built-in number format by ID
    pub fn builtin_format(mut self, id: u32) -> Self {
        self.number_format = NumberFormat::BuiltIn(id);
        self
    }

    /// Set horizontal alignment
    pub fn horizontal_alignment(mut self, align: HorizontalAlignment) -> Self {
        self.alignment.horizontal = align;
        self
    }

    /// Set vertical alignment
    pub fn vertical_alignment(mut self, align: VerticalAlignment) -> Self {
        self.alignment.vertical = align;
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.alignment.wrap_text = wrap;
        self
    }

    /// Set the raw rotation value, as encoded by the source format
    pub fn rotation(mut self, raw: i16) -> Self {
        self.alignment.rotation = raw;
        self
    }
}
