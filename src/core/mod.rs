pub mod candlestick;
pub mod domain;
pub mod layout;
pub mod line_series;
pub mod primitives;
pub mod types;

pub use candlestick::{
    CandleDirection, CandleGeometry, MIN_BODY_HEIGHT_PX, VolumeBarGeometry, project_candles,
    project_volume_bars,
};
pub use domain::{Domain, LINE_DOMAIN_HEADROOM};
pub use layout::{CandleLayout, GRID_LINE_COUNT, LineLayout};
pub use line_series::{
    DEFAULT_SMOOTHING, LineSeriesPaths, PathCommand, SmoothPath, build_line_series_paths,
    build_smooth_line_path,
};
pub use primitives::{
    MILLIS_THRESHOLD, TimestampUnit, timestamp_to_datetime, timestamp_to_unix_millis,
};
pub use types::{Bar, PixelPoint, Point, Viewport};
