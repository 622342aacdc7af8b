use serde::{Deserialize, Serialize};

use crate::core::{CandleGeometry, CandleLayout, VolumeBarGeometry};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerState;
use crate::render::Renderer;

use super::CandleChart;

pub const CANDLE_CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic geometry snapshot used by regression tests and
/// host-side debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleChartSnapshot {
    pub layout: CandleLayout,
    pub candles: Vec<CandleGeometry>,
    pub volume_bars: Vec<VolumeBarGeometry>,
    pub pointer: PointerState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CandleChartSnapshot,
}

impl<R: Renderer> CandleChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> CandleChartSnapshot {
        CandleChartSnapshot {
            layout: *self.layout(),
            candles: self.candle_geometry(),
            volume_bars: self.volume_geometry(),
            pointer: self.pointer_state(),
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}

impl CandleChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CandleChartSnapshotJsonContractV1 {
            schema_version: CANDLE_CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CandleChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CandleChartSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != CANDLE_CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
