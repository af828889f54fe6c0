//! Standard (base-14) fonts, WinAnsi encoding and text measurement
//!
//! Nothing is embedded: every workbook font family is mapped onto one of
//! the Helvetica, Times or Courier families every PDF viewer provides.
//! Widths are approximated from the family's average glyph advance.

use std::collections::BTreeSet;

/// Line height as a multiple of the font size
pub const LINE_HEIGHT: f32 = 1.2;

/// Baseline offset below the top of a line, as a multiple of the font size
pub const ASCENT: f32 = 0.8;

/// One of the twelve text faces of the standard fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Sans,
    Serif,
    Mono,
}

impl BaseFont {
    /// Face closest to a workbook font
    pub fn select(family: &str, bold: bool, italic: bool) -> Self {
        match (family_of(family), bold, italic) {
            (Family::Sans, false, false) => BaseFont::Helvetica,
            (Family::Sans, true, false) => BaseFont::HelveticaBold,
            (Family::Sans, false, true) => BaseFont::HelveticaOblique,
            (Family::Sans, true, true) => BaseFont::HelveticaBoldOblique,
            (Family::Serif, false, false) => BaseFont::TimesRoman,
            (Family::Serif, true, false) => BaseFont::TimesBold,
            (Family::Serif, false, true) => BaseFont::TimesItalic,
            (Family::Serif, true, true) => BaseFont::TimesBoldItalic,
            (Family::Mono, false, false) => BaseFont::Courier,
            (Family::Mono, true, false) => BaseFont::CourierBold,
            (Family::Mono, false, true) => BaseFont::CourierOblique,
            (Family::Mono, true, true) => BaseFont::CourierBoldOblique,
        }
    }

    /// PostScript name written to the font dictionary
    pub fn postscript_name(self) -> &'static [u8] {
        match self {
            BaseFont::Helvetica => b"Helvetica",
            BaseFont::HelveticaBold => b"Helvetica-Bold",
            BaseFont::HelveticaOblique => b"Helvetica-Oblique",
            BaseFont::HelveticaBoldOblique => b"Helvetica-BoldOblique",
            BaseFont::TimesRoman => b"Times-Roman",
            BaseFont::TimesBold => b"Times-Bold",
            BaseFont::TimesItalic => b"Times-Italic",
            BaseFont::TimesBoldItalic => b"Times-BoldItalic",
            BaseFont::Courier => b"Courier",
            BaseFont::CourierBold => b"Courier-Bold",
            BaseFont::CourierOblique => b"Courier-Oblique",
            BaseFont::CourierBoldOblique => b"Courier-BoldOblique",
        }
    }

    /// Name under which the face appears in page resources
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            BaseFont::Helvetica => b"F1",
            BaseFont::HelveticaBold => b"F2",
            BaseFont::HelveticaOblique => b"F3",
            BaseFont::HelveticaBoldOblique => b"F4",
            BaseFont::TimesRoman => b"F5",
            BaseFont::TimesBold => b"F6",
            BaseFont::TimesItalic => b"F7",
            BaseFont::TimesBoldItalic => b"F8",
            BaseFont::Courier => b"F9",
            BaseFont::CourierBold => b"F10",
            BaseFont::CourierOblique => b"F11",
            BaseFont::CourierBoldOblique => b"F12",
        }
    }

    /// Average glyph advance as a fraction of the font size
    fn advance(self) -> f32 {
        match self {
            BaseFont::Courier
            | BaseFont::CourierBold
            | BaseFont::CourierOblique
            | BaseFont::CourierBoldOblique => 0.6,
            _ => 0.5,
        }
    }

    /// Approximate width of `text` in points
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance() * size
    }
}

fn family_of(name: &str) -> Family {
    let name = name.to_ascii_lowercase();
    let any = |needles: &[&str]| needles.iter().any(|n| name.contains(n));

    if any(&["courier", "consolas", "mono", "menlo", "lucida console"]) {
        Family::Mono
    } else if !name.contains("sans")
        && any(&["times", "cambria", "georgia", "garamond", "serif", "roman", "antiqua"])
    {
        Family::Serif
    } else {
        Family::Sans
    }
}

/// Faces used by a document, in a stable order
#[derive(Debug, Default)]
pub struct FontSet {
    used: BTreeSet<BaseFont>,
}

impl FontSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `font` as used and return its resource name
    pub fn use_font(&mut self, font: BaseFont) -> &'static [u8] {
        self.used.insert(font);
        font.resource_name()
    }

    pub fn iter(&self) -> impl Iterator<Item = BaseFont> + '_ {
        self.used.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

/// Encode `text` as WinAnsi bytes; characters outside the encoding become `?`
pub fn encode_winansi(text: &str) -> Vec<u8> {
    text.chars().map(winansi_byte).collect()
}

fn winansi_byte(c: char) -> u8 {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => code as u8,
        _ => match c {
            '\t' => b' ',
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}

/// Break `text` into lines no wider than `max_width`.
///
/// Explicit newlines always break; words wider than a line are kept whole.
pub fn wrap_lines(text: &str, font: BaseFont, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        let mut line = String::new();

        for word in paragraph.split(' ') {
            if line.is_empty() {
                line.push_str(word);
                continue;
            }
            let candidate_width = font.text_width(&line, size)
                + font.text_width(" ", size)
                + font.text_width(word, size);
            if candidate_width > max_width {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
            } else {
                line.push(' ');
                line.push_str(word);
            }
        }
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_family_mapping() {
        assert_eq!(BaseFont::select("Calibri", false, false), BaseFont::Helvetica);
        assert_eq!(BaseFont::select("Arial", true, true), BaseFont::HelveticaBoldOblique);
        assert_eq!(BaseFont::select("Times New Roman", true, false), BaseFont::TimesBold);
        assert_eq!(BaseFont::select("Cambria", false, true), BaseFont::TimesItalic);
        assert_eq!(BaseFont::select("Microsoft Sans Serif", false, false), BaseFont::Helvetica);
        assert_eq!(BaseFont::select("Consolas", false, false), BaseFont::Courier);
        assert_eq!(BaseFont::select("Courier New", true, false), BaseFont::CourierBold);
    }

    #[test]
    fn test_resource_names_are_distinct() {
        let all = [
            BaseFont::Helvetica,
            BaseFont::HelveticaBold,
            BaseFont::HelveticaOblique,
            BaseFont::HelveticaBoldOblique,
            BaseFont::TimesRoman,
            BaseFont::TimesBold,
            BaseFont::TimesItalic,
            BaseFont::TimesBoldItalic,
            BaseFont::Courier,
            BaseFont::CourierBold,
            BaseFont::CourierOblique,
            BaseFont::CourierBoldOblique,
        ];
        let names: BTreeSet<_> = all.iter().map(|f| f.resource_name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_font_set_is_ordered() {
        let mut set = FontSet::new();
        assert!(set.is_empty());
        assert_eq!(set.use_font(BaseFont::Courier), b"F9");
        set.use_font(BaseFont::Helvetica);
        set.use_font(BaseFont::Courier);

        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![BaseFont::Helvetica, BaseFont::Courier]
        );
    }

    #[test]
    fn test_winansi_encoding() {
        assert_eq!(encode_winansi("Total"), b"Total".to_vec());
        assert_eq!(encode_winansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_winansi("5 €"), vec![b'5', b' ', 0x80]);
        assert_eq!(encode_winansi("“x”"), vec![0x93, b'x', 0x94]);
        assert_eq!(encode_winansi("日本"), b"??".to_vec());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(BaseFont::Helvetica.text_width("abcd", 10.0), 20.0);
        assert_eq!(BaseFont::Courier.text_width("abcd", 10.0), 24.0);
        assert_eq!(BaseFont::Helvetica.text_width("", 10.0), 0.0);
    }

    #[test]
    fn test_wrap_lines() {
        // 5 pt per character at size 10
        let lines = wrap_lines("alpha beta gamma", BaseFont::Helvetica, 10.0, 45.0);
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);

        let lines = wrap_lines("alpha beta gamma", BaseFont::Helvetica, 10.0, 60.0);
        assert_eq!(lines, vec!["alpha beta", "gamma"]);

        let lines = wrap_lines("one\ntwo", BaseFont::Helvetica, 10.0, 500.0);
        assert_eq!(lines, vec!["one", "two"]);

        let lines = wrap_lines("extraordinarily", BaseFont::Helvetica, 10.0, 20.0);
        assert_eq!(lines, vec!["extraordinarily"]);

        assert_eq!(wrap_lines("", BaseFont::Helvetica, 10.0, 20.0), vec![""]);
    }
}
