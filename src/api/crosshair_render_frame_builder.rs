use smallvec::{SmallVec, smallvec};

use crate::render::{
    CanvasLayerKind, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextSpan,
};

use super::CandleChart;
use super::label_format::{
    estimate_text_width_px, format_fixed2, format_hover_time, ohlc_badge_segments,
};

const CROSSHAIR_WIDTH_PX: f64 = 1.0;
const BADGE_TOP_PX: f64 = 8.0;
const BADGE_PADDING_X: f64 = 8.0;
const BADGE_PADDING_Y: f64 = 4.0;
const BADGE_RADIUS: f64 = 8.0;
const PRICE_BADGE_RIGHT_PX: f64 = 8.0;
const PRICE_BADGE_PADDING_X: f64 = 6.0;
const PRICE_BADGE_PADDING_Y: f64 = 3.0;
const PRICE_BADGE_RADIUS: f64 = 6.0;
/// Offset between the close price line and the price badge top.
const PRICE_BADGE_LIFT_PX: f64 = 10.0;
/// Lowest allowed price badge top, measured from the chart bottom.
const PRICE_BADGE_BOTTOM_CLEARANCE_PX: f64 = 24.0;
const HAIRLINE_PX: f64 = 0.5;

/// Crosshair geometry for the hovered bar.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleCrosshair {
    pub index: usize,
    pub center_x: f64,
    pub close_y: f64,
    pub lines: SmallVec<[LinePrimitive; 2]>,
}

impl<R: Renderer> CandleChart<R> {
    /// Vertical line at the hovered slot and horizontal line through its close.
    ///
    /// `None` while the pointer is inactive or the hovered close is not finite.
    #[must_use]
    pub fn crosshair(&self) -> Option<CandleCrosshair> {
        let (index, bar) = self.hovered_bar()?;
        let layout = self.layout();
        let theme = self.config().theme;
        let center_x = layout.slot_center_x(index);
        let close_y = layout.price_to_y(bar.close);
        if !close_y.is_finite() {
            return None;
        }

        let lines = smallvec![
            LinePrimitive::new(
                center_x,
                layout.padding,
                center_x,
                layout.plot_bottom(),
                CROSSHAIR_WIDTH_PX,
                theme.primary,
            ),
            LinePrimitive::new(
                layout.padding,
                close_y,
                layout.plot_right(),
                close_y,
                CROSSHAIR_WIDTH_PX,
                theme.border,
            ),
        ];
        Some(CandleCrosshair {
            index,
            center_x,
            close_y,
            lines,
        })
    }

    /// Close is colored against the previous close, or the bar's own open for
    /// the first bar.
    fn hovered_close_color(&self, index: usize) -> Color {
        let theme = self.config().theme;
        let bars = self.bars();
        let bar = bars[index];
        let reference = index
            .checked_sub(1)
            .and_then(|prev| bars.get(prev))
            .map_or(bar.open, |prev| prev.close);
        if bar.close >= reference {
            theme.up
        } else {
            theme.down
        }
    }

    pub(super) fn append_crosshair_overlay(&self, frame: &mut RenderFrame) {
        let Some(crosshair) = self.crosshair() else {
            return;
        };
        for line in &crosshair.lines {
            frame.push_line(CanvasLayerKind::Crosshair, *line);
        }

        let config = self.config();
        let theme = config.theme;
        let viewport = self.viewport();
        let font_size = config.badge_font_size_px;
        let bar = self.bars()[crosshair.index];

        let time_label = format_hover_time(bar.time, config.utc_offset_minutes);
        let mut spans: Vec<TextSpan> = ohlc_badge_segments(bar, &time_label)
            .into_iter()
            .map(|segment| TextSpan {
                color: if segment.dimmed {
                    theme.text_secondary
                } else {
                    theme.text
                },
                text: segment.text,
            })
            .collect();
        spans.push(TextSpan {
            text: format_fixed2(bar.close),
            color: self.hovered_close_color(crosshair.index),
        });
        let badge = TextPrimitive::from_spans(
            spans,
            viewport.width / 2.0,
            BADGE_TOP_PX + BADGE_PADDING_Y,
            font_size,
            TextHAlign::Center,
        )
        .bold();
        let badge_width =
            estimate_text_width_px(&badge.plain_text(), font_size) + BADGE_PADDING_X * 2.0;
        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(
                (viewport.width - badge_width) / 2.0,
                BADGE_TOP_PX,
                badge_width,
                font_size + BADGE_PADDING_Y * 2.0,
                theme.surface,
            )
            .with_border(HAIRLINE_PX, theme.border)
            .with_corner_radius(BADGE_RADIUS),
        );
        frame.push_text(CanvasLayerKind::Tooltip, badge);

        let price_text = format!("${}", format_fixed2(bar.close));
        let price_top = (crosshair.close_y - PRICE_BADGE_LIFT_PX)
            .min(viewport.height - PRICE_BADGE_BOTTOM_CLEARANCE_PX)
            .max(BADGE_TOP_PX);
        let price_width =
            estimate_text_width_px(&price_text, font_size) + PRICE_BADGE_PADDING_X * 2.0;
        let price_right = viewport.width - PRICE_BADGE_RIGHT_PX;
        frame.push_rect(
            CanvasLayerKind::Tooltip,
            RectPrimitive::new(
                price_right - price_width,
                price_top,
                price_width,
                font_size + PRICE_BADGE_PADDING_Y * 2.0,
                theme.card,
            )
            .with_border(HAIRLINE_PX, theme.border)
            .with_corner_radius(PRICE_BADGE_RADIUS),
        );
        frame.push_text(
            CanvasLayerKind::Tooltip,
            TextPrimitive::new(
                price_text,
                price_right - PRICE_BADGE_PADDING_X,
                price_top + PRICE_BADGE_PADDING_Y,
                font_size,
                theme.text,
                TextHAlign::Right,
            )
            .bold(),
        );
    }
}
