mod candle_chart;
mod candlestick_render_frame_builder;
mod chart_config;
mod crosshair_render_frame_builder;
mod json_contract;
mod label_format;
mod line_chart;
mod line_chart_render_frame_builder;
mod theme;
mod validation;

pub use candle_chart::CandleChart;
pub use chart_config::{CandleChartConfig, LineChartConfig};
pub use crosshair_render_frame_builder::CandleCrosshair;
pub use json_contract::{
    CANDLE_CHART_SNAPSHOT_JSON_SCHEMA_V1, CandleChartSnapshot, CandleChartSnapshotJsonContractV1,
};
pub use label_format::{
    BadgeSegment, GLYPH_ADVANCE_RATIO, estimate_text_width_px, format_fixed2, format_hover_time,
    format_price, ohlc_badge_segments,
};
pub use line_chart::{LineChart, PointChangeCallback};
pub use theme::{ChartTheme, ThemeMode};
