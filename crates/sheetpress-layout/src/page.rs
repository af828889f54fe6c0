//! Page geometry

use crate::options::{ExportOptions, Orientation};

/// A4 width in points
pub const A4_WIDTH: f32 = 595.4;
/// A4 height in points
pub const A4_HEIGHT: f32 = 842.0;

/// Size and margins of every page of a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Page width in points
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Margin on every side, in points
    pub margin: f32,
    pub orientation: Orientation,
}

impl PageLayout {
    /// A4 page in the requested orientation (landscape swaps the axes)
    pub fn a4(orientation: Orientation, margin: f32) -> Self {
        let (width, height) = match orientation {
            Orientation::Portrait => (A4_WIDTH, A4_HEIGHT),
            Orientation::Landscape => (A4_HEIGHT, A4_WIDTH),
        };
        Self {
            width,
            height,
            margin,
            orientation,
        }
    }

    /// Page described by export options
    pub fn from_options(options: &ExportOptions) -> Self {
        Self::a4(options.orientation, options.margin)
    }

    /// Width available for content
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Height available for header, content and footer
    pub fn usable_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::from_options(&ExportOptions::default())
    }
}
