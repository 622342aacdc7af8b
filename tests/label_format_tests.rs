use trading_charts::api::{
    GLYPH_ADVANCE_RATIO, estimate_text_width_px, format_fixed2, format_hover_time, format_price,
    ohlc_badge_segments,
};
use trading_charts::core::Bar;

#[test]
fn price_labels_switch_precision_below_one() {
    assert_eq!(format_price(186.05), "$186.05");
    assert_eq!(format_price(0.56789), "$0.5679");
    assert_eq!(format_price(0.0), "$0.0000");
}

#[test]
fn fixed_labels_use_two_decimals() {
    assert_eq!(format_fixed2(9.0), "9.00");
    assert_eq!(format_fixed2(1234.567), "1234.57");
}

#[test]
fn ohlc_prefix_lists_fields_before_close() {
    let bar = Bar::new(0, 10.0, 12.5, 9.25, 11.0);
    let text: String = ohlc_badge_segments(bar, "09:30")
        .into_iter()
        .map(|segment| segment.text)
        .collect();
    assert_eq!(text, "09:30  O 10.00  H 12.50  L 9.25  C ");
}

#[test]
fn hover_time_applies_negative_offset() {
    // 1970-01-01T00:01:00Z shifted five hours west.
    assert_eq!(format_hover_time(60, -300), "19:01");
}

#[test]
fn text_width_estimate_scales_with_font_and_length() {
    let width = estimate_text_width_px("$9.00", 12.0);
    assert!((width - 5.0 * 12.0 * GLYPH_ADVANCE_RATIO).abs() <= 1e-12);
    assert_eq!(estimate_text_width_px("", 12.0), 0.0);
}
