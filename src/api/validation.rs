use crate::error::{ChartError, ChartResult};

use super::{CandleChartConfig, LineChartConfig};

fn ensure_positive(value: f64, field: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_non_negative(value: f64, field: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_candle_chart_config(config: &CandleChartConfig) -> ChartResult<()> {
    ensure_positive(config.height, "height")?;
    ensure_non_negative(config.volume_height, "volume_height")?;
    ensure_non_negative(config.padding, "padding")?;
    ensure_positive(config.badge_font_size_px, "badge_font_size_px")?;
    if config.volume_height >= config.height {
        return Err(ChartError::InvalidConfig(
            "volume_height must be smaller than height".to_owned(),
        ));
    }
    if config.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
        return Err(ChartError::InvalidConfig(
            "utc_offset_minutes must be within one day".to_owned(),
        ));
    }
    config.theme.validate()
}

pub(super) fn validate_line_chart_config(config: &LineChartConfig) -> ChartResult<()> {
    ensure_positive(config.height, "height")?;
    ensure_non_negative(config.padding, "padding")?;
    ensure_positive(config.line_width, "line_width")?;
    if !config.smoothing.is_finite() || !(0.0..=1.0).contains(&config.smoothing) {
        return Err(ChartError::InvalidConfig(
            "smoothing must be finite and in [0, 1]".to_owned(),
        ));
    }
    for color in [
        config.line_color,
        config.gradient_from,
        config.gradient_to,
        config.tooltip_background,
        config.tooltip_text,
    ] {
        color.validate()?;
    }
    Ok(())
}
