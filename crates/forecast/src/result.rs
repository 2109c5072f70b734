//! Forecast outcomes and diagnostic records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::ConsumableId;

use crate::error::ForecastError;

/// Outcome of a dispatched forecast.
///
/// Callers always receive exactly `horizon` non-negative values; degraded
/// quality is signalled through the variant, never through an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    /// The requested model trained and forecast normally.
    Computed(Vec<u64>),

    /// The requested model failed; the values come from the decay-based
    /// fallback and `cause` records why the model was abandoned.
    Degraded {
        values: Vec<u64>,
        cause: ForecastError,
    },
}

impl ForecastOutcome {
    pub fn values(&self) -> &[u64] {
        match self {
            ForecastOutcome::Computed(values) => values,
            ForecastOutcome::Degraded { values, .. } => values,
        }
    }

    pub fn into_values(self) -> Vec<u64> {
        match self {
            ForecastOutcome::Computed(values) => values,
            ForecastOutcome::Degraded { values, .. } => values,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ForecastOutcome::Degraded { .. })
    }

    /// The model error that triggered the fallback, if any.
    pub fn cause(&self) -> Option<&ForecastError> {
        match self {
            ForecastOutcome::Computed(_) => None,
            ForecastOutcome::Degraded { cause, .. } => Some(cause),
        }
    }
}

/// Diagnostic record emitted once per dispatcher call (computed or degraded).
///
/// This is an insight for audit/monitoring sinks, not a domain event; nothing
/// in this core reads it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub model_kind: String,
    pub consumable_id: ConsumableId,
    pub horizon: u32,
    pub values: Vec<u64>,
    pub degraded: bool,
    pub occurred_at: DateTime<Utc>,
}
