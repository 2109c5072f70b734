//! Forecast error taxonomy.

use thiserror::Error;

/// Errors produced while fitting models or dispatching a forecast.
///
/// `InsufficientData` and `DegenerateInput` are recoverable: the dispatcher
/// converts them into a degraded fallback forecast and they never reach the
/// external caller. `UnsupportedModel` is a caller contract violation and is
/// the one error surfaced directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// History shorter than the model's minimum requirement.
    #[error("insufficient history: model requires at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A fit step produced a mathematically singular result.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// The caller requested a model kind this dispatcher does not know.
    #[error(
        "unsupported model kind {0:?} (expected \"trend\", \"differenced-autoregressive\" or \"smoothed-window\")"
    )]
    UnsupportedModel(String),
}

impl ForecastError {
    /// Stable machine-readable code, used as the wire-level `error` field.
    pub fn code(&self) -> &'static str {
        match self {
            ForecastError::InsufficientData { .. } => "InsufficientData",
            ForecastError::DegenerateInput(_) => "DegenerateInput",
            ForecastError::UnsupportedModel(_) => "UnsupportedModel",
        }
    }

    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }

    pub fn unsupported_model(kind: impl Into<String>) -> Self {
        Self::UnsupportedModel(kind.into())
    }
}
