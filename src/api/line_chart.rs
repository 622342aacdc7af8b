use tracing::{debug, warn};

use crate::core::{LineLayout, LineSeriesPaths, PixelPoint, Point, Viewport, build_line_series_paths};
use crate::error::ChartResult;
use crate::interaction::{NearestPointResolver, PointerEvent, PointerState, PointerTracker};
use crate::render::{RenderFrame, Renderer};

use super::LineChartConfig;

/// Host callback fired when the hovered point changes; `None` means cleared.
pub type PointChangeCallback = Box<dyn FnMut(Option<&Point>)>;

/// Smoothed line chart with gradient fill and touch-driven crosshair.
///
/// Projection and paths are cached and rebuilt only when data, width or
/// configuration change; a rebuild drops the active hover. Pointer events
/// only touch the tracker.
pub struct LineChart<R: Renderer> {
    renderer: R,
    config: LineChartConfig,
    width: f64,
    points: Vec<Point>,
    layout: LineLayout,
    projected: Vec<PixelPoint>,
    paths: LineSeriesPaths,
    tracker: PointerTracker,
    on_point_change: Option<PointChangeCallback>,
    last_emitted: Option<usize>,
}

impl<R: Renderer> LineChart<R> {
    pub fn new(renderer: R, config: LineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let mut chart = Self {
            renderer,
            config,
            width: 0.0,
            points: Vec::new(),
            layout: LineLayout::new(Viewport::new(0.0, config.height), config.padding, &[]),
            projected: Vec::new(),
            paths: LineSeriesPaths::default(),
            tracker: PointerTracker::new(),
            on_point_change: None,
            last_emitted: None,
        };
        chart.refresh_geometry();
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> LineChartConfig {
        self.config
    }

    pub fn set_config(&mut self, config: LineChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        self.refresh_geometry();
        Ok(())
    }

    /// Registers the hover callback, replacing any previous one.
    pub fn set_on_point_change(&mut self, callback: impl FnMut(Option<&Point>) + 'static) {
        self.on_point_change = Some(Box::new(callback));
    }

    /// Replaces the series. Points are expected in ascending time order;
    /// samples with a non-finite value are dropped.
    pub fn set_data(&mut self, points: Vec<Point>) {
        let received = points.len();
        let points: Vec<Point> = points
            .into_iter()
            .filter(|point| point.value.is_finite())
            .collect();
        if points.len() != received {
            warn!(
                dropped = received - points.len(),
                "dropped line points with non-finite values"
            );
        }
        debug!(count = points.len(), "set line data");
        self.points = points;
        self.refresh_geometry();
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn set_width(&mut self, width: f64) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if width != self.width {
            debug!(width, "line chart resized");
            self.width = width;
            self.refresh_geometry();
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.config.height)
    }

    #[must_use]
    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    /// Pixel position of every sample; empty until the host reports a width.
    #[must_use]
    pub fn projected_points(&self) -> &[PixelPoint] {
        &self.projected
    }

    #[must_use]
    pub fn paths(&self) -> &LineSeriesPaths {
        &self.paths
    }

    /// `true` when no line can be drawn (fewer than two points or no width);
    /// hosts show their empty state instead of the chart.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.line.is_empty()
    }

    /// Feeds one touch event. Ignored while the crosshair is disabled.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> PointerState {
        if !self.config.show_crosshair {
            return self.tracker.state();
        }
        let state = self
            .tracker
            .handle_event(event, &NearestPointResolver::new(&self.projected));
        self.emit_point_change(state.hovered_index());
        state
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerState {
        self.tracker.state()
    }

    /// Hovered sample with its projected position.
    #[must_use]
    pub fn hovered_point(&self) -> Option<(usize, Point, PixelPoint)> {
        let index = self.tracker.state().hovered_index()?;
        let point = self.points.get(index)?;
        let pixel = self.projected.get(index)?;
        Some((index, *point, *pixel))
    }

    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = self.build_static_frame();
        self.append_cursor_overlay(&mut frame);
        frame
    }

    /// Renders the current frame; `Ok(false)` when there is no line to draw.
    pub fn render(&mut self) -> ChartResult<bool> {
        if !self.viewport().is_valid() || self.is_empty() {
            return Ok(false);
        }
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        Ok(true)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn clear_pointer(&mut self) {
        self.tracker.reset();
        self.emit_point_change(None);
    }

    fn emit_point_change(&mut self, hovered: Option<usize>) {
        if hovered == self.last_emitted {
            return;
        }
        self.last_emitted = hovered;
        if let Some(callback) = self.on_point_change.as_mut() {
            callback(hovered.and_then(|index| self.points.get(index)));
        }
    }

    /// Rebuilds projection and paths. Any hover is cleared, since its index
    /// and pixel position refer to the previous projection.
    fn refresh_geometry(&mut self) {
        self.clear_pointer();
        let viewport = self.viewport();
        self.layout = LineLayout::new(viewport, self.config.padding, &self.points);
        if viewport.is_valid() {
            self.projected = self.layout.project_all(&self.points);
            self.paths = build_line_series_paths(
                &self.projected,
                self.config.smoothing,
                self.layout.plot_bottom(),
            );
        } else {
            self.projected.clear();
            self.paths = LineSeriesPaths::default();
        }
    }
}
