use approx::assert_relative_eq;
use trading_charts::api::{CandleChart, CandleChartConfig, ChartTheme};
use trading_charts::core::Bar;
use trading_charts::interaction::PointerEvent;
use trading_charts::render::{CanvasLayerKind, NullRenderer};

fn chart_with_two_bars() -> CandleChart<NullRenderer> {
    let config = CandleChartConfig::default().with_padding(10.0);
    let mut chart = CandleChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_width(100.0);
    chart.set_data(vec![
        Bar::new(0, 10.0, 12.0, 9.0, 11.0).with_volume(100.0),
        Bar::new(60, 11.0, 11.0, 8.0, 9.0).with_volume(50.0),
    ]);
    chart
}

#[test]
fn crosshair_is_absent_until_pointer_is_down() {
    let chart = chart_with_two_bars();
    assert!(chart.crosshair().is_none());
    assert!(!chart.build_frame().has_overlay());
}

#[test]
fn crosshair_lines_cross_at_hovered_close() {
    let mut chart = chart_with_two_bars();
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 50.0 });

    let crosshair = chart.crosshair().expect("crosshair while panning");
    assert_eq!(crosshair.index, 1);
    assert_relative_eq!(crosshair.center_x, 70.0);
    assert_relative_eq!(crosshair.close_y, 163.0);

    let theme = ChartTheme::dark();
    let vertical = crosshair.lines[0];
    assert_relative_eq!(vertical.x1, 70.0);
    assert_relative_eq!(vertical.y1, 10.0);
    assert_relative_eq!(vertical.y2, 214.0);
    assert_eq!(vertical.color, theme.primary);

    let horizontal = crosshair.lines[1];
    assert_relative_eq!(horizontal.x1, 10.0);
    assert_relative_eq!(horizontal.x2, 90.0);
    assert_relative_eq!(horizontal.y1, 163.0);
    assert_eq!(horizontal.color, theme.border);
}

#[test]
fn ohlc_badge_colors_close_against_previous_close() {
    let mut chart = chart_with_two_bars();
    let theme = ChartTheme::dark();

    chart.handle_pointer_event(PointerEvent::PanBegin { x: 80.0 });
    let frame = chart.build_frame();
    let badge = &frame.layer(CanvasLayerKind::Tooltip).texts[0];
    assert_eq!(badge.plain_text(), "00:01  O 11.00  H 11.00  L 8.00  C 9.00");
    let close = badge.spans.last().expect("close span");
    assert_eq!(close.color, theme.down);

    chart.handle_pointer_event(PointerEvent::PanChange { x: 12.0 });
    let frame = chart.build_frame();
    let badge = &frame.layer(CanvasLayerKind::Tooltip).texts[0];
    let close = badge.spans.last().expect("close span");
    assert_eq!(close.text, "11.00");
    assert_eq!(close.color, theme.up);
}

#[test]
fn ohlc_badge_dims_field_letters() {
    let mut chart = chart_with_two_bars();
    let theme = ChartTheme::dark();
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 80.0 });

    let frame = chart.build_frame();
    let badge = &frame.layer(CanvasLayerKind::Tooltip).texts[0];
    let dimmed: Vec<&str> = badge
        .spans
        .iter()
        .filter(|span| span.color == theme.text_secondary)
        .map(|span| span.text.as_str())
        .collect();
    assert_eq!(dimmed, ["O", "H", "L", "C"]);
    assert_eq!(badge.spans[0].text, "00:01  ");
    assert_eq!(badge.spans[0].color, theme.text);
}

#[test]
fn price_badge_tracks_close_and_stays_inside_chart() {
    let mut chart = chart_with_two_bars();
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 50.0 });
    let frame = chart.build_frame();
    let tooltip = frame.layer(CanvasLayerKind::Tooltip);

    let price_text = &tooltip.texts[1];
    assert_eq!(price_text.plain_text(), "$9.00");
    let price_rect = tooltip.rects[1];
    assert_relative_eq!(price_rect.y, 153.0);
    assert_relative_eq!(price_rect.x + price_rect.width, 92.0);

    // Highest close pushes the badge against the top clamp.
    chart.set_data(vec![Bar::new(0, 1.0, 5.0, 1.0, 5.0)]);
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 50.0 });
    let frame = chart.build_frame();
    assert_relative_eq!(frame.layer(CanvasLayerKind::Tooltip).rects[1].y, 8.0);
}

#[test]
fn badge_time_honours_utc_offset() {
    let config = CandleChartConfig::default().with_utc_offset_minutes(-90);
    let mut chart = CandleChart::new(NullRenderer::default(), config).expect("chart init");
    chart.set_width(300.0);
    chart.set_data(vec![Bar::new(1_700_000_000_000, 1.0, 2.0, 0.5, 1.5)]);
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 150.0 });

    let frame = chart.build_frame();
    let badge = &frame.layer(CanvasLayerKind::Tooltip).texts[0];
    assert!(badge.plain_text().starts_with("20:43  O 1.00"));
}

#[test]
fn finalize_removes_overlay() {
    let mut chart = chart_with_two_bars();
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 50.0 });
    assert!(chart.build_frame().has_overlay());

    chart.handle_pointer_event(PointerEvent::PanFinalize);
    assert!(chart.crosshair().is_none());
    assert!(!chart.build_frame().has_overlay());
}

#[test]
fn replacing_data_clears_hover() {
    let mut chart = chart_with_two_bars();
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 50.0 });
    chart.set_data(vec![Bar::new(0, 1.0, 2.0, 0.5, 1.5)]);
    assert_eq!(chart.hovered_bar(), None);
}
