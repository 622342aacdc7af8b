use crate::render::{
    CanvasLayerKind, CirclePrimitive, LinePrimitive, PathPaint, PathPrimitive, RectPrimitive,
    RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::LineChart;
use super::label_format::format_price;

const CURSOR_LINE_WIDTH_PX: f64 = 1.0;
const CURSOR_LINE_OPACITY: f64 = 0.35;
const CURSOR_DASH: [f64; 2] = [3.0, 4.0];
const MARKER_RADIUS_PX: f64 = 4.0;
const PILL_WIDTH: f64 = 96.0;
const PILL_HEIGHT: f64 = 28.0;
const PILL_MIN_LEFT: f64 = 4.0;
const PILL_TOP_OFFSET: f64 = 6.0;
const PILL_FONT_SIZE_PX: f64 = 12.0;

impl<R: Renderer> LineChart<R> {
    /// Gradient area under the line, then the line itself. The chart
    /// background stays transparent.
    #[must_use]
    pub fn build_static_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport());
        let paths = self.paths();
        if paths.line.is_empty() {
            return frame;
        }

        let config = self.config();
        let area_top = self
            .projected_points()
            .iter()
            .map(|point| point.y)
            .fold(f64::INFINITY, f64::min);
        frame.push_path(
            CanvasLayerKind::Series,
            PathPrimitive::new(
                paths.area.clone(),
                PathPaint::VerticalGradient {
                    from: config.gradient_from,
                    to: config.gradient_to,
                    top_y: area_top,
                    bottom_y: self.layout().plot_bottom(),
                },
            ),
        );
        frame.push_path(
            CanvasLayerKind::Series,
            PathPrimitive::new(
                paths.line.clone(),
                PathPaint::Stroke {
                    color: config.line_color,
                    width: config.line_width,
                },
            ),
        );
        frame
    }

    pub(super) fn append_cursor_overlay(&self, frame: &mut RenderFrame) {
        let config = self.config();
        if !config.show_crosshair {
            return;
        }
        let Some((_, point, pixel)) = self.hovered_point() else {
            return;
        };
        let layout = self.layout();
        let viewport = self.viewport();

        let cursor_color = config
            .line_color
            .with_alpha(config.line_color.alpha * CURSOR_LINE_OPACITY);
        frame.push_line(
            CanvasLayerKind::Crosshair,
            LinePrimitive::new(
                pixel.x,
                layout.plot_top(),
                pixel.x,
                layout.plot_bottom(),
                CURSOR_LINE_WIDTH_PX,
                cursor_color,
            )
            .with_dash(CURSOR_DASH[0], CURSOR_DASH[1]),
        );
        frame.push_circle(
            CanvasLayerKind::Crosshair,
            CirclePrimitive::new(pixel.x, pixel.y, MARKER_RADIUS_PX, config.line_color),
        );

        let pill_left = (pixel.x - PILL_WIDTH / 2.0)
            .max(PILL_MIN_LEFT)
            .min(viewport.width - PILL_WIDTH);
        let pill_top = layout.plot_top() + PILL_TOP_OFFSET;
        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(
                pill_left,
                pill_top,
                PILL_WIDTH,
                PILL_HEIGHT,
                config.tooltip_background,
            )
            .with_corner_radius(PILL_HEIGHT / 2.0),
        );
        frame.push_text(
            CanvasLayerKind::Tooltip,
            TextPrimitive::new(
                format_price(point.value),
                pill_left + PILL_WIDTH / 2.0,
                pill_top + (PILL_HEIGHT - PILL_FONT_SIZE_PX) / 2.0,
                PILL_FONT_SIZE_PX,
                config.tooltip_text,
                TextHAlign::Center,
            )
            .bold(),
        );
    }
}
