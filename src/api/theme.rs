use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Palette read by the chart renderers.
///
/// Passed explicitly through the chart configuration; the charts never read
/// ambient theme state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    pub mode: ThemeMode,
    /// Chart card background.
    pub card: Color,
    /// Floating badge background.
    pub surface: Color,
    /// Vertical crosshair line.
    pub primary: Color,
    pub text: Color,
    pub text_secondary: Color,
    /// Grid lines, horizontal crosshair line and badge borders.
    pub border: Color,
    pub up: Color,
    pub down: Color,
}

const UP_GREEN: Color = Color::rgba8(0x2e, 0xcc, 0x71, 1.0);
const DOWN_RED: Color = Color::rgba8(0xff, 0x6b, 0x6b, 1.0);

impl ChartTheme {
    #[must_use]
    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            card: Color::rgba8(0xff, 0xff, 0xff, 1.0),
            surface: Color::rgba8(0xff, 0xff, 0xff, 1.0),
            primary: Color::rgba8(0x3b, 0x82, 0xf6, 1.0),
            text: Color::rgba8(0x11, 0x18, 0x27, 1.0),
            text_secondary: Color::rgba8(0x6b, 0x72, 0x80, 1.0),
            border: Color::rgba8(0xe5, 0xe7, 0xeb, 1.0),
            up: UP_GREEN,
            down: DOWN_RED,
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            card: Color::rgba8(0x1f, 0x29, 0x37, 1.0),
            surface: Color::rgba8(0x1f, 0x29, 0x37, 1.0),
            primary: Color::rgba8(0x3b, 0x82, 0xf6, 1.0),
            text: Color::rgba8(0xf9, 0xfa, 0xfb, 1.0),
            text_secondary: Color::rgba8(0x9c, 0xa3, 0xaf, 1.0),
            border: Color::rgba8(0x37, 0x41, 0x51, 1.0),
            up: UP_GREEN,
            down: DOWN_RED,
        }
    }

    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// The other preset, keeping custom up/down colors.
    #[must_use]
    pub fn toggled(self) -> Self {
        let mode = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        Self {
            up: self.up,
            down: self.down,
            ..Self::for_mode(mode)
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.card,
            self.surface,
            self.primary,
            self.text,
            self.text_secondary,
            self.border,
            self.up,
            self.down,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::dark()
    }
}
