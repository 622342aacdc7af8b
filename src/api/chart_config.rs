use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_SMOOTHING;
use crate::error::ChartResult;
use crate::render::Color;

use super::ChartTheme;
use super::validation::{validate_candle_chart_config, validate_line_chart_config};

/// Presentation parameters of the candlestick + volume chart.
///
/// Serializable so hosts can persist chart setup; every field falls back to
/// its documented default when missing from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleChartConfig {
    /// Overall chart height, price plot and volume band included.
    #[serde(default = "default_candle_height")]
    pub height: f64,
    #[serde(default = "default_volume_height")]
    pub volume_height: f64,
    #[serde(default = "default_candle_padding")]
    pub padding: f64,
    #[serde(default)]
    pub theme: ChartTheme,
    /// Offset applied to badge timestamps, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
    #[serde(default = "default_badge_font_size_px")]
    pub badge_font_size_px: f64,
}

impl Default for CandleChartConfig {
    fn default() -> Self {
        Self {
            height: default_candle_height(),
            volume_height: default_volume_height(),
            padding: default_candle_padding(),
            theme: ChartTheme::default(),
            utc_offset_minutes: 0,
            badge_font_size_px: default_badge_font_size_px(),
        }
    }
}

impl CandleChartConfig {
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_volume_height(mut self, volume_height: f64) -> Self {
        self.volume_height = volume_height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ChartTheme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_candle_chart_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Presentation parameters of the smoothed line chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_line_height")]
    pub height: f64,
    #[serde(default = "default_line_padding")]
    pub padding: f64,
    #[serde(default = "default_line_color")]
    pub line_color: Color,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default = "default_gradient_from")]
    pub gradient_from: Color,
    #[serde(default = "default_gradient_to")]
    pub gradient_to: Color,
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,
    #[serde(default = "default_show_crosshair")]
    pub show_crosshair: bool,
    #[serde(default = "default_tooltip_background")]
    pub tooltip_background: Color,
    #[serde(default = "default_tooltip_text")]
    pub tooltip_text: Color,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            height: default_line_height(),
            padding: default_line_padding(),
            line_color: default_line_color(),
            line_width: default_line_width(),
            gradient_from: default_gradient_from(),
            gradient_to: default_gradient_to(),
            smoothing: default_smoothing(),
            show_crosshair: default_show_crosshair(),
            tooltip_background: default_tooltip_background(),
            tooltip_text: default_tooltip_text(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, from: Color, to: Color) -> Self {
        self.gradient_from = from;
        self.gradient_to = to;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub fn with_crosshair(mut self, show: bool) -> Self {
        self.show_crosshair = show;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_line_chart_config(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_candle_height() -> f64 {
    280.0
}

fn default_volume_height() -> f64 {
    56.0
}

fn default_candle_padding() -> f64 {
    14.0
}

fn default_badge_font_size_px() -> f64 {
    12.0
}

fn default_line_height() -> f64 {
    220.0
}

fn default_line_padding() -> f64 {
    16.0
}

fn default_line_color() -> Color {
    Color::rgba8(0x4f, 0x46, 0xe5, 1.0)
}

fn default_line_width() -> f64 {
    2.2
}

fn default_gradient_from() -> Color {
    Color::rgba8(79, 70, 229, 0.25)
}

fn default_gradient_to() -> Color {
    Color::rgba8(79, 70, 229, 0.02)
}

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}

fn default_show_crosshair() -> bool {
    true
}

fn default_tooltip_background() -> Color {
    Color::rgba8(0x1f, 0x29, 0x37, 0.95)
}

fn default_tooltip_text() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}
