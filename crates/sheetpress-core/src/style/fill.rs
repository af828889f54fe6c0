//! Cell background fills

use super::Color;

/// How a cell background is painted in the source workbook.
///
/// Only the foreground color of a fill survives into the rendered output;
/// hatch patterns are approximated by that color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    #[default]
    None,
    Solid { color: Color },
    Pattern {
        pattern: PatternType,
        foreground: Color,
        background: Color,
    },
}

impl FillStyle {
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    pub fn pattern(pattern: PatternType, foreground: Color, background: Color) -> Self {
        FillStyle::Pattern {
            pattern,
            foreground,
            background,
        }
    }

    /// Color the fill paints with, or `None` when it leaves the cell blank
    pub fn foreground_color(&self) -> Option<Color> {
        match *self {
            FillStyle::Solid { color } => Some(color),
            FillStyle::Pattern {
                pattern, foreground, ..
            } if pattern != PatternType::None => Some(foreground),
            _ => None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.foreground_color().is_none()
    }
}

/// Hatch patterns shared by the legacy and modern formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PatternType {
    #[default]
    None,
    Solid,
    Gray0625,
    Gray125,
    LightGray,
    MediumGray,
    DarkGray,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
}
