// Property-based tests for fit-to-page scaling.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use proptest::prelude::*;
use sheetpress_core::{SourceFormat, Workbook};
use sheetpress_layout::{compute_scale, fit_scale, ExportOptions, Orientation, MIN_SCALE};

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

fn arb_orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Portrait), Just(Orientation::Landscape)]
}

/// Column widths in characters
fn arb_widths() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.5..60.0f64, 1..40)
}

fn scale_for(widths: &[f64], orientation: Orientation, margin: f32) -> f32 {
    let mut workbook = Workbook::new(SourceFormat::Modern);
    let index = workbook.add_worksheet("Data").unwrap();
    let sheet = workbook.worksheet_mut(index).unwrap();
    for (col, width) in widths.iter().enumerate() {
        sheet.set_column_width(col as u16, *width).unwrap();
        sheet.set_cell_value_at(0, col as u16, "x").unwrap();
    }
    let options = ExportOptions::default()
        .with_orientation(orientation)
        .with_margin(margin);
    compute_scale(workbook.worksheet(index).unwrap(), &options)
}

proptest! {
    #![proptest_config(config_256())]

    #[test]
    fn scale_stays_in_bounds(
        widths in arb_widths(),
        orientation in arb_orientation(),
        margin in 0.0..100.0f32,
    ) {
        let scale = scale_for(&widths, orientation, margin);
        prop_assert!((MIN_SCALE..=1.0).contains(&scale), "scale {} out of bounds", scale);
    }

    #[test]
    fn wider_sheets_never_scale_up(
        widths in arb_widths(),
        extra in 0.5..60.0f64,
        orientation in arb_orientation(),
        margin in 0.0..100.0f32,
    ) {
        let narrow = scale_for(&widths, orientation, margin);
        let mut wider = widths.clone();
        wider.push(extra);
        let wide = scale_for(&wider, orientation, margin);
        prop_assert!(wide <= narrow, "{} > {}", wide, narrow);
    }

    #[test]
    fn fit_scale_is_monotonic(
        usable in 100.0..900.0f32,
        a in 1.0..10_000.0f32,
        b in 1.0..10_000.0f32,
    ) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(fit_scale(usable, large, 1.0) <= fit_scale(usable, small, 1.0));
    }

    #[test]
    fn user_scale_caps_fit(
        usable in 100.0..900.0f32,
        width in 1.0..10_000.0f32,
        user in 0.1..0.99f32,
    ) {
        prop_assert!(fit_scale(usable, width, user) <= user);
    }
}
