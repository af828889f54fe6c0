//! Cell alignment and text rotation

/// Placement of text inside its cell, as the source workbook records it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: HorizontalAlignment,
    pub vertical: VerticalAlignment,
    pub wrap_text: bool,
    /// Rotation exactly as stored; its meaning depends on the source format.
    ///
    /// Modern workbooks use 0-90 for counter-clockwise angles and 91-180 for
    /// clockwise ones (`90 - value`); legacy workbooks store a signed angle
    /// in -90..=90. 255 means stacked vertical text in both.
    pub rotation: i16,
}

impl Alignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_horizontal(self, horizontal: HorizontalAlignment) -> Self {
        Self { horizontal, ..self }
    }

    pub fn with_vertical(self, vertical: VerticalAlignment) -> Self {
        Self { vertical, ..self }
    }

    pub fn with_wrap(self, wrap_text: bool) -> Self {
        Self { wrap_text, ..self }
    }

    /// Set the raw, format-specific rotation value
    pub fn with_rotation(self, rotation: i16) -> Self {
        Self { rotation, ..self }
    }

    /// Whether the text is turned at all
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0
    }
}

/// Horizontal placement.
///
/// `General` lets the value decide; the fill, distributed and
/// center-across-selection modes have no direct page equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

/// Vertical placement; spreadsheets default to the bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}
