//! Fit-to-page scale computation

use sheetpress_core::Worksheet;

use crate::geometry::{active_column_count, sheet_pixel_width};
use crate::options::ExportOptions;
use crate::page::PageLayout;

/// Smallest scale fit-to-page will shrink a sheet to
pub const MIN_SCALE: f32 = 0.3;

/// Scale at which `sheet` is drawn.
///
/// Without fit-to-page this is `options.scale_factor` as given. Otherwise
/// the sheet is shrunk (never enlarged) to the usable page width, see
/// [`fit_scale`].
pub fn compute_scale(sheet: &Worksheet, options: &ExportOptions) -> f32 {
    if !options.fit_to_page {
        return options.scale_factor;
    }

    let usable = PageLayout::from_options(options).usable_width();
    let width = sheet_pixel_width(sheet, active_column_count(sheet));
    fit_scale(usable, width, options.scale_factor)
}

/// Scale that fits `sheet_width` into `usable_width`.
///
/// The result is at most 1.0 and at least [`MIN_SCALE`]; a `user_scale`
/// other than 1.0 caps it further. A sheet with no width is drawn at 1.0.
pub fn fit_scale(usable_width: f32, sheet_width: f32, user_scale: f32) -> f32 {
    if sheet_width <= 0.0 {
        return 1.0;
    }

    let mut scale = (usable_width / sheet_width).min(1.0).max(MIN_SCALE);
    if user_scale != 1.0 {
        scale = scale.min(user_scale);
    }
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fit_returns_user_scale() {
        let sheet = Worksheet::new("Data");
        let options = ExportOptions::default()
            .with_fit_to_page(false)
            .with_scale_factor(1.7);
        assert_eq!(compute_scale(&sheet, &options), 1.7);
    }

    #[test]
    fn test_narrow_sheet_is_not_enlarged() {
        assert_eq!(fit_scale(555.4, 100.0, 1.0), 1.0);
    }

    #[test]
    fn test_wide_sheet_shrinks() {
        let scale = fit_scale(555.4, 1110.8, 1.0);
        assert!((scale - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_floor_and_user_cap() {
        assert_eq!(fit_scale(100.0, 10_000.0, 1.0), MIN_SCALE);
        assert_eq!(fit_scale(555.4, 100.0, 0.8), 0.8);
        assert_eq!(fit_scale(555.4, 100.0, 1.5), 1.0);
    }

    #[test]
    fn test_zero_width_sheet() {
        assert_eq!(fit_scale(555.4, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_landscape_uses_long_edge() {
        let mut sheet = Worksheet::new("Wide");
        for col in 0..20u16 {
            sheet.set_cell_value_at(0, col, "x").unwrap();
        }
        let width = sheet_pixel_width(&sheet, 19);

        let portrait = compute_scale(&sheet, &ExportOptions::default());
        let landscape = compute_scale(
            &sheet,
            &ExportOptions::default().with_orientation(crate::Orientation::Landscape),
        );

        assert!((portrait - 555.4 / width).abs() < 1e-4);
        assert!((landscape - 802.0 / width).abs() < 1e-4);
    }
}
