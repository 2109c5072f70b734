//! Model selection, training, and the never-fail dispatch boundary.

use core::str::FromStr;

use chrono::Utc;

use crate::error::ForecastError;
use crate::models::{
    round_non_negative, DifferencedArParams, SmoothedWindowParams, TrendParams,
};
use crate::request::{ForecastRequest, ModelKind};
use crate::result::{ForecastOutcome, ForecastRecord};
use crate::sink::ForecastSink;

/// Per-step decay rate of the fallback projection.
const FALLBACK_DECAY: f64 = 0.01;

/// Entry point of the forecasting subsystem.
///
/// `predict` fails only for an unknown model kind. Any model error
/// (`InsufficientData`, `DegenerateInput`) is swallowed here and replaced by
/// the decay-based fallback, returned as [`ForecastOutcome::Degraded`] with
/// the original error attached.
///
/// Every call fits a fresh, immutable set of model params, so one dispatcher
/// can serve concurrent requests without shared mutable state.
#[derive(Debug, Clone)]
pub struct ForecastDispatcher<S> {
    sink: S,
}

impl<S: ForecastSink> ForecastDispatcher<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn predict(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastOutcome, ForecastError> {
        // An unknown kind is the caller's contract violation, surfaced as-is.
        let kind = ModelKind::from_str(&request.model_kind)?;

        let outcome = match fit_and_forecast(kind, &request.history, request.horizon) {
            Ok(values) => ForecastOutcome::Computed(values),
            Err(cause) => {
                tracing::debug!(
                    model_kind = %kind,
                    consumable_id = %request.consumable_id,
                    %cause,
                    "model failed, substituting decay fallback"
                );
                ForecastOutcome::Degraded {
                    values: fallback_projection(&request.history, request.horizon),
                    cause,
                }
            }
        };

        self.emit(kind, request, &outcome);
        Ok(outcome)
    }

    /// Fire-and-forget diagnostics; a failing sink never affects the outcome.
    fn emit(&self, kind: ModelKind, request: &ForecastRequest, outcome: &ForecastOutcome) {
        let record = ForecastRecord {
            model_kind: kind.as_str().to_string(),
            consumable_id: request.consumable_id.clone(),
            horizon: request.horizon,
            values: outcome.values().to_vec(),
            degraded: outcome.is_degraded(),
            occurred_at: Utc::now(),
        };
        if let Err(err) = self.sink.record(&record) {
            tracing::warn!(%err, "forecast diagnostic sink failed");
        }
    }
}

fn fit_and_forecast(
    kind: ModelKind,
    history: &[f64],
    horizon: u32,
) -> Result<Vec<u64>, ForecastError> {
    match kind {
        ModelKind::Trend => Ok(TrendParams::fit(history)?.forecast(horizon)),
        ModelKind::DifferencedAutoregressive => {
            Ok(DifferencedArParams::fit(history)?.forecast(horizon))
        }
        ModelKind::SmoothedWindow => Ok(SmoothedWindowParams::fit(history)?.forecast(horizon)),
    }
}

/// 1%-per-step linear decay of the last observed value (0 for empty history).
fn fallback_projection(history: &[f64], horizon: u32) -> Vec<u64> {
    let last = history.last().copied().unwrap_or(0.0);
    (1..=horizon)
        .map(|step| round_non_negative(last - last * FALLBACK_DECAY * f64::from(step)))
        .collect()
}
