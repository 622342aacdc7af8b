use approx::assert_relative_eq;
use trading_charts::core::{Bar, CandleLayout, Domain, LineLayout, Point, Viewport};

fn sample_bars() -> Vec<Bar> {
    vec![
        Bar::new(0, 10.0, 12.0, 9.0, 11.0),
        Bar::new(60, 11.0, 11.0, 8.0, 9.0),
    ]
}

#[test]
fn candle_price_mapping_is_inverted() {
    let layout = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &sample_bars());

    assert_relative_eq!(layout.price_to_y(12.0), 10.0);
    assert_relative_eq!(layout.price_to_y(8.0), layout.plot_bottom());
    assert_relative_eq!(layout.price_to_y(10.0), 112.0);
    assert!(layout.price_to_y(11.0) < layout.price_to_y(10.0));
}

#[test]
fn plot_height_excludes_volume_band_and_padding() {
    let layout = CandleLayout::new(Viewport::new(320.0, 280.0), 14.0, 56.0, &sample_bars());

    assert_relative_eq!(layout.plot_height, 196.0);
    assert_relative_eq!(layout.plot_width, 292.0);
    assert_relative_eq!(layout.volume_top, 14.0 + 196.0 + 6.0);
    assert_relative_eq!(layout.volume_band_height, 44.0);
}

#[test]
fn degenerate_viewport_keeps_finite_geometry() {
    for viewport in [
        Viewport::new(0.0, 0.0),
        Viewport::new(-50.0, 10.0),
        Viewport::new(f64::NAN, f64::INFINITY),
    ] {
        let layout = CandleLayout::new(viewport, 14.0, 56.0, &sample_bars());
        assert_eq!(layout.plot_width, 1.0);
        assert_eq!(layout.plot_height, 1.0);
        assert!(layout.price_to_y(10.0).is_finite());
        assert!(layout.slot_center_x(1).is_finite());
    }
}

#[test]
fn grid_lines_split_plot_into_fifths() {
    let layout = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &sample_bars());
    let ys = layout.grid_line_ys();

    assert_relative_eq!(ys[0], 10.0 + 204.0 / 5.0);
    assert_relative_eq!(ys[4], layout.plot_bottom());
    assert!(ys.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn slot_index_clamps_to_series_bounds() {
    let layout = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &sample_bars());

    assert_eq!(layout.slot_index_at(-100.0), Some(0));
    assert_eq!(layout.slot_index_at(5.0), Some(0));
    assert_eq!(layout.slot_index_at(29.0), Some(0));
    assert_eq!(layout.slot_index_at(50.0), Some(1));
    assert_eq!(layout.slot_index_at(95.0), Some(1));
    assert_eq!(layout.slot_index_at(10_000.0), Some(1));

    let empty = CandleLayout::new(Viewport::new(100.0, 280.0), 10.0, 56.0, &[]);
    assert_eq!(empty.slot_index_at(50.0), None);
}

#[test]
fn line_domain_adds_five_percent_headroom() {
    let points = [Point::new(0, 100.0), Point::new(60, 200.0)];
    let domain = Domain::from_points(&points);

    assert_relative_eq!(domain.min, 95.0);
    assert_relative_eq!(domain.max, 205.0);
}

#[test]
fn line_layout_maps_time_extent_across_plot() {
    let points = [
        Point::new(1_000, 1.0),
        Point::new(1_500, 2.0),
        Point::new(2_000, 3.0),
    ];
    let layout = LineLayout::new(Viewport::new(232.0, 220.0), 16.0, &points);

    assert_relative_eq!(layout.time_to_x(1_000), 16.0);
    assert_relative_eq!(layout.time_to_x(1_500), 116.0);
    assert_relative_eq!(layout.time_to_x(2_000), 216.0);
    assert!(layout.value_to_y(3.0) < layout.value_to_y(1.0));
    assert!(layout.value_to_y(3.0) > layout.plot_top());
    assert!(layout.value_to_y(1.0) < layout.plot_bottom());
}

#[test]
fn constant_timestamps_collapse_to_left_padding() {
    let points = [Point::new(42, 1.0), Point::new(42, 2.0)];
    let layout = LineLayout::new(Viewport::new(200.0, 220.0), 16.0, &points);

    assert_eq!(layout.time_to_x(42), 16.0);
    let projected = layout.project_all(&points);
    assert!(projected.iter().all(|point| point.x == 16.0 && point.y.is_finite()));
}

#[test]
fn empty_line_layout_uses_unit_domain() {
    let layout = LineLayout::new(Viewport::new(200.0, 220.0), 16.0, &[]);
    assert_eq!(layout.value_domain, Domain::default());
    assert_eq!(layout.min_time, layout.max_time);
}
