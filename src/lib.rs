//! trading-charts: candlestick and smoothed line chart core for trading apps.
//!
//! Layout, series geometry and pointer tracking are pure and host-agnostic;
//! drawing goes through the [`render::Renderer`] capability so the same core
//! feeds a Cairo surface, a test recorder or a mobile canvas bridge.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{CandleChart, CandleChartConfig, ChartTheme, LineChart, LineChartConfig};
pub use error::{ChartError, ChartResult};
