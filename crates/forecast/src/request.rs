//! Forecast request types.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockcast_core::ConsumableId;

use crate::error::ForecastError;

/// Forecast model selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Ordinary-least-squares trend line over index positions.
    #[serde(rename = "trend")]
    Trend,

    /// Order-1 differencing plus fixed-schedule AR/MA recursion.
    #[serde(rename = "differenced-autoregressive")]
    DifferencedAutoregressive,

    /// Exponential smoothing plus a recency-weighted sliding window.
    #[serde(rename = "smoothed-window")]
    SmoothedWindow,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Trend => "trend",
            ModelKind::DifferencedAutoregressive => "differenced-autoregressive",
            ModelKind::SmoothedWindow => "smoothed-window",
        }
    }
}

impl core::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trend" => Ok(ModelKind::Trend),
            "differenced-autoregressive" => Ok(ModelKind::DifferencedAutoregressive),
            "smoothed-window" => Ok(ModelKind::SmoothedWindow),
            other => Err(ForecastError::unsupported_model(other)),
        }
    }
}

/// One forecast request.
///
/// `model_kind` stays a raw string at this level: an unknown kind must
/// surface as [`ForecastError::UnsupportedModel`] from the dispatcher, not as
/// a deserialization failure in the transport layer.
///
/// `history` is the chronological usage/stock series for one consumable;
/// values are non-negative by caller contract. `horizon` is the number of
/// future periods to forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub model_kind: String,
    pub consumable_id: ConsumableId,
    pub history: Vec<f64>,
    pub horizon: u32,
}

impl ForecastRequest {
    pub fn new(
        model_kind: impl Into<String>,
        consumable_id: ConsumableId,
        history: Vec<f64>,
        horizon: u32,
    ) -> Self {
        Self {
            model_kind: model_kind.into(),
            consumable_id,
            history,
            horizon,
        }
    }
}
