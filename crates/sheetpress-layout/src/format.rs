//! Cell value formatting
//!
//! Formula results are obtained through a [`FormulaEvaluator`] passed to
//! every call; nothing is cached between workbooks.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sheetpress_core::{CellData, CellValue, NumberFormat, Style, WorkbookSettings, Worksheet};

/// Largest serial number that maps to a date (9999-12-31)
const MAX_DATE_SERIAL: f64 = 2_958_465.0;

/// Significant digits shown by the General format
const GENERAL_DIGITS: i32 = 11;

/// Supplies the value of formula cells
pub trait FormulaEvaluator: Send + Sync {
    /// Value of the formula at `(row, col)` on `sheet`.
    ///
    /// `cached` is the result stored by the application that saved the
    /// workbook, if any.
    fn evaluate(
        &self,
        sheet: &Worksheet,
        row: u32,
        col: u16,
        formula: &str,
        cached: Option<&CellValue>,
    ) -> CellValue;
}

/// Evaluator that trusts the cached result saved with the workbook.
///
/// A formula with no cached result shows its own text.
#[derive(Debug, Clone, Copy, Default)]
pub struct CachedResultEvaluator;

impl FormulaEvaluator for CachedResultEvaluator {
    fn evaluate(
        &self,
        _sheet: &Worksheet,
        _row: u32,
        _col: u16,
        formula: &str,
        cached: Option<&CellValue>,
    ) -> CellValue {
        match cached {
            Some(value) => value.clone(),
            None => CellValue::string(formula),
        }
    }
}

/// A cell being formatted, with everything needed to interpret it
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    pub sheet: &'a Worksheet,
    pub row: u32,
    pub col: u16,
    pub cell: &'a CellData,
    pub style: &'a Style,
    pub settings: &'a WorkbookSettings,
}

/// Produces the display text of a cell
pub trait CellFormatter: Send + Sync {
    fn format(&self, ctx: &CellContext<'_>, evaluator: &dyn FormulaEvaluator) -> String;
}

/// Default formatter.
///
/// Numbers go through the cell's number format (General, fixed decimals,
/// thousands separators, percent, scientific, text). Date-formatted numbers
/// ignore the format's layout and render as `M/D/YYYY h:mm:ss AM`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataFormatter;

impl DataFormatter {
    /// Create a formatter
    pub fn new() -> Self {
        Self
    }

    /// Format a plain (non-formula) value
    pub fn format_value(&self, value: &CellValue, format: &NumberFormat, date_1904: bool) -> String {
        match value {
            CellValue::Empty => String::new(),
            CellValue::Boolean(true) => "TRUE".to_string(),
            CellValue::Boolean(false) => "FALSE".to_string(),
            CellValue::String(s) => s.as_str().to_string(),
            CellValue::Error(e) => e.as_str().to_string(),
            CellValue::Number(n) => self.format_number(*n, format, date_1904),
            // nested formulas only arise from odd evaluators; show the text
            CellValue::Formula { text, .. } => text.clone(),
        }
    }

    /// Format a number with a number format
    pub fn format_number(&self, n: f64, format: &NumberFormat, date_1904: bool) -> String {
        if format.is_date_format() {
            // a date code has no digit placeholders to fall back on
            return match serial_to_datetime(n, date_1904) {
                Some(dt) => format_date(&dt),
                None => format_general(n),
            };
        }
        format_with_code(n, format.format_string())
    }
}

impl CellFormatter for DataFormatter {
    fn format(&self, ctx: &CellContext<'_>, evaluator: &dyn FormulaEvaluator) -> String {
        let format = &ctx.style.number_format;
        let date_1904 = ctx.settings.date_1904;
        match &ctx.cell.value {
            CellValue::Formula { text, cached_value } => {
                let result = evaluator.evaluate(
                    ctx.sheet,
                    ctx.row,
                    ctx.col,
                    text,
                    cached_value.as_deref(),
                );
                self.format_value(&result, format, date_1904)
            }
            value => self.format_value(value, format, date_1904),
        }
    }
}

/// Convert a serial day number to a date and time.
///
/// The 1900 system counts 1900-01-01 as day 1 and includes the phantom
/// 1900-02-29 (day 60); the 1904 system counts 1904-01-01 as day 0.
pub fn serial_to_datetime(serial: f64, date_1904: bool) -> Option<NaiveDateTime> {
    if !serial.is_finite() || !(0.0..=MAX_DATE_SERIAL).contains(&serial) {
        return None;
    }

    let days = serial.floor();
    let seconds = ((serial - days) * 86_400.0).round() as i64;
    let days = days as i64;

    let epoch = if date_1904 {
        NaiveDate::from_ymd_opt(1904, 1, 1)?
    } else if days < 61 {
        NaiveDate::from_ymd_opt(1899, 12, 31)?
    } else {
        NaiveDate::from_ymd_opt(1899, 12, 30)?
    };

    epoch
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::days(days))?
        .checked_add_signed(Duration::seconds(seconds))
}

fn format_date(dt: &NaiveDateTime) -> String {
    dt.format("%-m/%-d/%Y %-I:%M:%S %p").to_string()
}

/// Format `n` with an Excel-style format code
fn format_with_code(n: f64, code: &str) -> String {
    if !n.is_finite() {
        return "#NUM!".to_string();
    }

    let sections: Vec<&str> = code.split(';').collect();
    let (section, value, signed) = if n < 0.0 && sections.len() >= 2 && !sections[1].is_empty() {
        (sections[1], n.abs(), false)
    } else if n == 0.0 && sections.len() >= 3 && !sections[2].is_empty() {
        (sections[2], n, false)
    } else {
        (sections[0], n, true)
    };

    let section = strip_brackets(section);
    let trimmed = section.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("general") || trimmed == "@" {
        return format_general(value);
    }

    format_section(value, &section, signed)
}

/// Remove `[Red]`, `[$-409]` and similar bracketed modifiers
fn strip_brackets(section: &str) -> String {
    let mut out = String::with_capacity(section.len());
    let mut depth = 0;
    for c in section.chars() {
        match c {
            '[' => depth += 1,
            ']' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Literal text of a format fragment: quotes and escapes resolved, padding
/// and fill markers dropped
fn literal_text(fragment: &str) -> String {
    let mut out = String::new();
    let mut chars = fragment.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for q in chars.by_ref() {
                    if q == '"' {
                        break;
                    }
                    out.push(q);
                }
            }
            '\\' => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '_' => {
                chars.next();
                out.push(' ');
            }
            '*' => {
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

fn is_placeholder(c: char) -> bool {
    matches!(c, '0' | '#' | '?')
}

fn format_section(n: f64, section: &str, signed: bool) -> String {
    let (first, last) = match (section.find(is_placeholder), section.rfind(is_placeholder)) {
        (Some(first), Some(last)) => (first, last),
        _ => return literal_text(section),
    };

    let prefix = literal_text(&section[..first]);
    let body = &section[first..=last];
    let suffix = literal_text(&section[last + 1..]);

    let percents = section.matches('%').count() as i32;
    let value = n * 100f64.powi(percents);

    let digits = match body.find(['E', 'e']) {
        Some(pos) => format_scientific(value.abs(), &body[..pos], &body[pos + 1..]),
        None => format_fixed(value.abs(), body),
    };

    let negative = signed && value < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}{}", sign, prefix, digits, suffix)
}

fn format_fixed(abs: f64, body: &str) -> String {
    let (int_pattern, frac_pattern) = match body.find('.') {
        Some(pos) => (&body[..pos], &body[pos + 1..]),
        None => (body, ""),
    };

    let required = frac_pattern.chars().filter(|c| *c == '0').count();
    let optional = frac_pattern.chars().filter(|c| matches!(c, '#' | '?')).count();
    let rendered = format!("{:.*}", required + optional, abs);

    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (rendered, String::new()),
    };

    let mut frac = frac_part;
    while frac.len() > required && frac.ends_with('0') {
        frac.pop();
    }

    let min_int = int_pattern.chars().filter(|c| *c == '0').count();
    let mut int = if int_part == "0" && min_int == 0 {
        String::new()
    } else {
        int_part
    };
    while int.len() < min_int {
        int.insert(0, '0');
    }
    if int_pattern.contains(',') {
        int = group_thousands(&int);
    }

    if frac.is_empty() {
        int
    } else {
        format!("{}.{}", int, frac)
    }
}

fn format_scientific(abs: f64, mantissa_pattern: &str, exponent_pattern: &str) -> String {
    let decimals = mantissa_pattern
        .split_once('.')
        .map(|(_, f)| f.chars().filter(|c| is_placeholder(*c)).count())
        .unwrap_or(0);
    let exp_digits = exponent_pattern.chars().filter(|c| *c == '0').count().max(1);
    let always_sign = exponent_pattern.starts_with('+');

    let (mantissa, exponent) = split_exponent(abs, decimals);
    let exp_sign = if exponent < 0 {
        "-"
    } else if always_sign {
        "+"
    } else {
        ""
    };
    format!(
        "{:.*}E{}{:0width$}",
        decimals,
        mantissa,
        exp_sign,
        exponent.abs(),
        width = exp_digits
    )
}

/// `abs = mantissa * 10^exponent` with `1 <= mantissa < 10` after rounding
/// to `decimals`
fn split_exponent(abs: f64, decimals: usize) -> (f64, i32) {
    if abs == 0.0 {
        return (0.0, 0);
    }
    let mut exponent = abs.log10().floor() as i32;
    let mut mantissa = abs / 10f64.powi(exponent);
    let factor = 10f64.powi(decimals as i32);
    if (mantissa * factor).round() / factor >= 10.0 {
        exponent += 1;
        mantissa /= 10.0;
    }
    (mantissa, exponent)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The General format: up to 11 significant digits, scientific notation
/// for very large or very small magnitudes
fn format_general(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if !(1e-9..1e11).contains(&abs) {
        let (mantissa, exponent) = split_exponent(abs, 5);
        let mantissa = trim_decimals(format!("{:.5}", mantissa));
        let sign = if n < 0.0 { "-" } else { "" };
        let exp_sign = if exponent < 0 { "-" } else { "+" };
        return format!("{}{}E{}{:02}", sign, mantissa, exp_sign, exponent.abs());
    }

    let int_digits = abs.log10().floor() as i32 + 1;
    let decimals = (GENERAL_DIGITS - int_digits).max(0) as usize;
    let text = trim_decimals(format!("{:.*}", decimals, n));
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn trim_decimals(mut text: String) -> String {
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetpress_core::CellError;

    fn fmt(n: f64, code: &str) -> String {
        DataFormatter.format_number(n, &NumberFormat::from_string(code), false)
    }

    #[test]
    fn test_general_numbers() {
        assert_eq!(format_general(42.0), "42");
        assert_eq!(format_general(-3.5), "-3.5");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
        assert_eq!(format_general(0.00001), "0.00001");
        assert_eq!(format_general(12345678901.0), "12345678901");
        assert_eq!(format_general(123456789012.0), "1.23457E+11");
        assert_eq!(format_general(1e-10), "1E-10");
        assert_eq!(format_general(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_fixed_and_grouped() {
        assert_eq!(fmt(1234567.891, "#,##0.00"), "1,234,567.89");
        assert_eq!(fmt(1234.5, "#,##0"), "1,235");
        assert_eq!(fmt(0.5, "0"), "1");
        assert_eq!(fmt(3.14159, "0.00"), "3.14");
        assert_eq!(fmt(0.25, "#.##"), ".25");
        assert_eq!(fmt(-5.0, "$#,##0.00"), "-$5.00");
        assert_eq!(fmt(1.5, "0.0 \"kg\""), "1.5 kg");
    }

    #[test]
    fn test_percent_and_scientific() {
        assert_eq!(fmt(0.256, "0%"), "26%");
        assert_eq!(fmt(0.256, "0.00%"), "25.60%");
        assert_eq!(fmt(12345.0, "0.00E+00"), "1.23E+04");
        assert_eq!(fmt(0.00012, "0.00E+00"), "1.20E-04");
        assert_eq!(fmt(99999.0, "0.0E+00"), "1.0E+05");
    }

    #[test]
    fn test_sections() {
        assert_eq!(fmt(-1234.0, "#,##0;(#,##0)"), "(1,234)");
        assert_eq!(fmt(1234.0, "#,##0;(#,##0)"), "1,234");
        assert_eq!(fmt(0.0, "0.00;-0.00;\"zero\""), "zero");
        assert_eq!(fmt(-2.0, "[Red]0.0"), "-2.0");
    }

    #[test]
    fn test_builtin_and_text_formats() {
        let f = DataFormatter;
        assert_eq!(f.format_number(0.5, &NumberFormat::from_id(10), false), "50.00%");
        assert_eq!(f.format_number(7.25, &NumberFormat::from_id(49), false), "7.25");
        assert_eq!(f.format_number(7.25, &NumberFormat::General, false), "7.25");
    }

    #[test]
    fn test_dates() {
        let date = NumberFormat::from_id(NumberFormat::ID_DATE_SHORT);
        let f = DataFormatter;

        assert_eq!(f.format_number(45000.5, &date, false), "3/15/2023 12:00:00 PM");
        assert_eq!(f.format_number(1.0, &date, false), "1/1/1900 12:00:00 AM");
        assert_eq!(f.format_number(61.0, &date, false), "3/1/1900 12:00:00 AM");
        assert_eq!(f.format_number(0.0, &date, true), "1/1/1904 12:00:00 AM");
        assert_eq!(
            f.format_number(45000.0 + 13.0 / 24.0 + 5.0 / 1440.0 + 9.0 / 86400.0, &date, false),
            "3/15/2023 1:05:09 PM"
        );
        // out of range serials fall back to the number layout
        assert_eq!(f.format_number(-1.0, &date, false), "-1");
    }

    #[test]
    fn test_invalid_date_serials_show_the_number() {
        let f = DataFormatter;
        let custom = NumberFormat::from_string("yyyy-mm-dd");
        assert!(custom.is_date_format());

        assert_eq!(f.format_number(-1.0, &NumberFormat::from_id(14), false), "-1");
        assert_eq!(f.format_number(-2.5, &custom, false), "-2.5");
        assert_eq!(f.format_number(-0.25, &custom, true), "-0.25");
        assert_eq!(f.format_number(3.0e6, &custom, false), "3000000");
    }

    #[test]
    fn test_value_kinds() {
        let f = DataFormatter;
        let general = NumberFormat::General;
        assert_eq!(f.format_value(&CellValue::Empty, &general, false), "");
        assert_eq!(f.format_value(&CellValue::Boolean(true), &general, false), "TRUE");
        assert_eq!(f.format_value(&CellValue::string("  hi "), &general, false), "  hi ");
        assert_eq!(
            f.format_value(&CellValue::Error(CellError::Div0), &general, false),
            "#DIV/0!"
        );
    }

    #[test]
    fn test_formula_uses_evaluator() {
        let mut sheet = Worksheet::new("Data");
        sheet
            .set_cell_value_at(0, 0, CellValue::formula_with_result("=1/4", CellValue::Number(0.25)))
            .unwrap();
        sheet
            .set_cell_value_at(0, 1, CellValue::formula("=NOW()"))
            .unwrap();
        let style = Style::new().builtin_format(NumberFormat::ID_PERCENT_INT);
        let settings = WorkbookSettings::default();

        let text = |col: u16| {
            let ctx = CellContext {
                sheet: &sheet,
                row: 0,
                col,
                cell: sheet.cell_at(0, col).unwrap(),
                style: &style,
                settings: &settings,
            };
            DataFormatter.format(&ctx, &CachedResultEvaluator)
        };

        assert_eq!(text(0), "25%");
        assert_eq!(text(1), "=NOW()");
    }
}
