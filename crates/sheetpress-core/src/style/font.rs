//! Fonts referenced from the workbook font table

use std::hash::{Hash, Hasher};

use super::Color;

/// A font as recorded by the source workbook.
///
/// Fonts live once in the workbook font table and cells point at them
/// through [`Style::font_index`](super::Style::font_index). Nothing here is
/// resolved yet: `color` may still be a palette index or theme slot.
#[derive(Debug, Clone, PartialEq)]
pub struct FontStyle {
    /// Family name as written in the file, e.g. "Calibri"
    pub name: String,
    /// Size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: Underline,
    pub strikethrough: bool,
    pub color: Color,
    pub vertical_align: FontVerticalAlign,
}

impl Default for FontStyle {
    /// The font a new workbook applies to every cell
    fn default() -> Self {
        Self {
            name: String::from("Calibri"),
            size: 11.0,
            bold: false,
            italic: false,
            underline: Underline::None,
            strikethrough: false,
            color: Color::Auto,
            vertical_align: FontVerticalAlign::Baseline,
        }
    }
}

impl FontStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name<S: Into<String>>(self, name: S) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_size(self, size: f64) -> Self {
        Self { size, ..self }
    }

    pub fn with_bold(self, bold: bool) -> Self {
        Self { bold, ..self }
    }

    pub fn with_italic(self, italic: bool) -> Self {
        Self { italic, ..self }
    }

    pub fn with_underline(self, underline: Underline) -> Self {
        Self { underline, ..self }
    }

    pub fn with_strikethrough(self, strikethrough: bool) -> Self {
        Self {
            strikethrough,
            ..self
        }
    }

    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Raise or lower the glyphs (superscript/subscript)
    pub fn with_vertical_align(self, vertical_align: FontVerticalAlign) -> Self {
        Self {
            vertical_align,
            ..self
        }
    }
}

// Sizes are compared bitwise so fonts can key the style pool.
impl Hash for FontStyle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (
            &self.name,
            self.size.to_bits(),
            self.bold,
            self.italic,
            self.underline,
            self.strikethrough,
            self.color,
            self.vertical_align,
        )
            .hash(state);
    }
}

impl Eq for FontStyle {}

/// Underline kinds a workbook can record.
///
/// Accounting underlines span the cell in spreadsheet applications; every
/// kind renders as a single rule under the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    SingleAccounting,
    DoubleAccounting,
}

impl Underline {
    pub fn is_underlined(&self) -> bool {
        *self != Underline::None
    }
}

/// Baseline shift of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVerticalAlign {
    #[default]
    Baseline,
    Superscript,
    Subscript,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builder_keeps_other_fields() {
        let font = FontStyle::new().with_name("Arial").with_bold(true);
        assert_eq!(font.name, "Arial");
        assert!(font.bold);
        assert_eq!(font.size, 11.0);
        assert_eq!(font.color, Color::Auto);
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut fonts = HashSet::new();
        fonts.insert(FontStyle::new().with_size(12.0));
        fonts.insert(FontStyle::new().with_size(12.0));
        fonts.insert(FontStyle::new().with_size(12.5));
        assert_eq!(fonts.len(), 2);
    }

    #[test]
    fn test_every_underline_kind_draws() {
        assert!(!Underline::None.is_underlined());
        assert!(Underline::Double.is_underlined());
        assert!(Underline::SingleAccounting.is_underlined());
    }
}
