//! Translation of raw workbook styles into renderer-agnostic styles
//!
//! Legacy and modern workbooks encode rotation and palette colors
//! differently; every format-dependent rule is a `match` on
//! [`SourceFormat`]. Translation is total: unresolvable colors and missing
//! fonts fall back to white backgrounds, black text and the default font.

use std::fmt;

use sheetpress_core::{
    BorderLineStyle, Color, FontStyle, FontVerticalAlign, HorizontalAlignment, SourceFormat,
    Style,
};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Color of hyperlink text
    pub const LINK_BLUE: Rgb = Rgb::new(0x21, 0x96, 0xF3);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    fn resolve(color: &Color) -> Option<Self> {
        color.rgb_triplet().map(|(r, g, b)| Rgb::new(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Horizontal text alignment understood by renderers.
///
/// `Default` leaves the choice to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Default,
    Left,
    Center,
    Right,
    Justify,
}

/// Raised or lowered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    #[default]
    Normal,
    Superscript,
    Subscript,
}

/// Font and decoration of a cell's text
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: String,
    /// Size in points
    pub size: f32,
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub script: Script,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::from_font(&FontStyle::default(), Rgb::BLACK)
    }
}

impl TextStyle {
    fn from_font(font: &FontStyle, color: Rgb) -> Self {
        Self {
            family: font.name.clone(),
            size: font.size as f32,
            color,
            bold: font.bold,
            italic: font.italic,
            underline: font.underline.is_underlined(),
            strikethrough: font.strikethrough,
            script: match font.vertical_align {
                FontVerticalAlign::Baseline => Script::Normal,
                FontVerticalAlign::Superscript => Script::Superscript,
                FontVerticalAlign::Subscript => Script::Subscript,
            },
        }
    }
}

/// A cell's style, resolved for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStyle {
    pub background: Rgb,
    /// Border widths in points: top, right, bottom, left
    pub borders: [f32; 4],
    pub align: TextAlign,
    /// Clockwise rotation in degrees; 0 means none
    pub rotation: f32,
    pub text: TextStyle,
}

impl Default for NormalizedStyle {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            borders: [0.0; 4],
            align: TextAlign::Default,
            rotation: 0.0,
            text: TextStyle::default(),
        }
    }
}

impl NormalizedStyle {
    /// The same style drawn as a hyperlink: link blue and underlined
    pub fn with_hyperlink(mut self) -> Self {
        self.text.color = Rgb::LINK_BLUE;
        self.text.underline = true;
        self
    }

    /// Whether the cell content is rotated
    pub fn is_rotated(&self) -> bool {
        self.rotation != 0.0
    }
}

/// Resolve `style` (and its font, if the workbook has it) for rendering
pub fn translate(format: SourceFormat, style: &Style, font: Option<&FontStyle>) -> NormalizedStyle {
    let default_font = FontStyle::default();
    let font = font.unwrap_or(&default_font);

    let [top, right, bottom, left] = style.border.line_styles();

    NormalizedStyle {
        background: background_color(format, style),
        borders: [
            border_width(top),
            border_width(right),
            border_width(bottom),
            border_width(left),
        ],
        align: text_align(style.alignment.horizontal),
        rotation: normalize_rotation(format, style.alignment.rotation),
        text: TextStyle::from_font(font, font_color(format, &font.color)),
    }
}

/// Background fill, white when absent or unresolvable
pub fn background_color(format: SourceFormat, style: &Style) -> Rgb {
    let color = match style.fill.foreground_color() {
        Some(color) => color,
        None => return Rgb::WHITE,
    };

    match (format, color) {
        (SourceFormat::Legacy, Color::Indexed(Color::AUTOMATIC_INDEX)) => Rgb::WHITE,
        _ => Rgb::resolve(&color).unwrap_or(Rgb::WHITE),
    }
}

/// Font color, black when absent or unresolvable.
///
/// Modern workbooks carry explicit (or theme) colors; legacy workbooks index
/// into the palette.
pub fn font_color(format: SourceFormat, color: &Color) -> Rgb {
    let resolved = match format {
        SourceFormat::Modern => Rgb::resolve(color),
        SourceFormat::Legacy => match color {
            Color::Indexed(_) => Rgb::resolve(color),
            _ => None,
        },
    };
    resolved.unwrap_or(Rgb::BLACK)
}

/// Border width in points for a line style
pub fn border_width(style: BorderLineStyle) -> f32 {
    match style {
        BorderLineStyle::None => 0.0,
        BorderLineStyle::Thick => 1.2,
        BorderLineStyle::Medium
        | BorderLineStyle::MediumDashed
        | BorderLineStyle::MediumDashDot
        | BorderLineStyle::MediumDashDotDot => 0.7,
        _ => 0.3,
    }
}

/// Convert a raw rotation value into clockwise degrees; 0 stays 0
pub fn normalize_rotation(format: SourceFormat, raw: i16) -> f32 {
    if raw == 0 {
        return 0.0;
    }

    let angle = raw as f32;
    let in_first_quadrant = (0..=90).contains(&raw);
    match format {
        SourceFormat::Legacy if in_first_quadrant => 360.0 - angle,
        SourceFormat::Legacy => -angle,
        SourceFormat::Modern if in_first_quadrant => 360.0 - angle,
        SourceFormat::Modern => angle - 90.0,
    }
}

fn text_align(horizontal: HorizontalAlignment) -> TextAlign {
    match horizontal {
        HorizontalAlignment::Left => TextAlign::Left,
        HorizontalAlignment::Center => TextAlign::Center,
        HorizontalAlignment::Right => TextAlign::Right,
        HorizontalAlignment::Justify => TextAlign::Justify,
        _ => TextAlign::Default,
    }
}
