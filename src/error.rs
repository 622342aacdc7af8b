use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The market-data provider answered with a throttle or error envelope.
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
