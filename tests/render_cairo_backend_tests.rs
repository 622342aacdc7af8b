#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use trading_charts::ChartError;
use trading_charts::api::{CandleChart, CandleChartConfig, LineChart, LineChartConfig};
use trading_charts::core::{Bar, Point};
use trading_charts::interaction::PointerEvent;
use trading_charts::render::{CairoContextRenderer, CairoRenderer, Color};

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 280).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn cairo_renderer_draws_candles_and_crosshair_badges() {
    let renderer = CairoRenderer::new(320, 280).expect("renderer");
    let mut chart = CandleChart::new(renderer, CandleChartConfig::default()).expect("chart init");
    chart.set_width(320.0);
    chart.set_data(vec![
        Bar::new(0, 10.0, 12.0, 9.0, 11.0).with_volume(100.0),
        Bar::new(60, 11.0, 11.0, 8.0, 9.0).with_volume(50.0),
    ]);
    chart.handle_pointer_event(PointerEvent::PanBegin { x: 200.0 });

    assert!(chart.render().expect("render"));
    let stats = chart.into_renderer().last_stats();
    // Grid, wicks and crosshair.
    assert_eq!(stats.lines_drawn, 5 + 2 + 2);
    assert_eq!(stats.texts_drawn, 2);
}

#[test]
fn cairo_renderer_draws_line_paths_and_encodes_png() {
    let renderer = CairoRenderer::new(300, 220).expect("renderer");
    let mut chart = LineChart::new(renderer, LineChartConfig::default()).expect("chart init");
    chart.set_width(300.0);
    chart.set_data(vec![
        Point::new(0, 1.0),
        Point::new(60, 3.0),
        Point::new(120, 2.0),
    ]);
    chart.handle_pointer_event(PointerEvent::TouchStart { x: 150.0 });

    assert!(chart.render().expect("render"));
    let renderer = chart.into_renderer();
    let stats = renderer.last_stats();
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.circles_drawn, 1);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(320, 280).expect("renderer");
    let mut chart = CandleChart::new(
        trading_charts::render::NullRenderer::default(),
        CandleChartConfig::default(),
    )
    .expect("chart init");
    chart.set_width(320.0);
    chart.set_data(vec![Bar::new(0, 1.0, 2.0, 0.5, 1.5)]);

    let surface = ImageSurface::create(Format::ARgb32, 320, 280).expect("surface");
    let context = Context::new(&surface).expect("context");
    renderer
        .render_on_cairo_context(&context, &chart.build_frame())
        .expect("render on context");
    assert_eq!(renderer.last_stats().rects_drawn, 3);
}

fn rendered_line_chart_png(touch_then_release: bool) -> Vec<u8> {
    let renderer = CairoRenderer::new(300, 220).expect("renderer");
    let mut chart = LineChart::new(renderer, LineChartConfig::default()).expect("chart init");
    chart.set_width(300.0);
    chart.set_data(vec![
        Point::new(0, 1.0),
        Point::new(60, 3.0),
        Point::new(120, 2.0),
    ]);
    if touch_then_release {
        chart.handle_pointer_event(PointerEvent::TouchStart { x: 50.0 });
        assert!(chart.render().expect("render with cursor"));
        assert_eq!(chart.renderer().last_stats().circles_drawn, 1);
        chart.handle_pointer_event(PointerEvent::TouchEnd);
    }
    assert!(chart.render().expect("render"));

    let mut png = Vec::new();
    chart.renderer().write_png(&mut png).expect("png");
    png
}

#[test]
fn released_cursor_leaves_no_pixels_behind() {
    assert_eq!(rendered_line_chart_png(true), rendered_line_chart_png(false));
}

#[test]
fn owned_surface_is_reset_to_clear_color() {
    let mut renderer = CairoRenderer::new(320, 280).expect("renderer");
    assert_eq!(renderer.clear_color().alpha, 0.0);
    renderer
        .set_clear_color(Color::rgb(1.0, 1.0, 1.0))
        .expect("valid clear color");
    assert!(renderer.set_clear_color(Color::rgba(1.0, 0.0, 0.0, 2.0)).is_err());

    let mut chart = LineChart::new(renderer, LineChartConfig::default()).expect("chart init");
    chart.set_width(320.0);
    chart.set_data(vec![Point::new(0, 1.0), Point::new(60, 2.0)]);
    assert!(chart.render().expect("render"));

    let mut surface = chart.into_renderer().into_surface();
    let stride = usize::try_from(surface.stride()).expect("stride");
    let data = surface.data().expect("exclusive surface data");
    // Top-left corner sits in the padding, outside every series path.
    assert_eq!(&data[..4], &[0xff, 0xff, 0xff, 0xff]);
    assert_eq!(&data[stride..stride + 4], &[0xff, 0xff, 0xff, 0xff]);
}
