//! Diagnostic sink seam.
//!
//! Forecast records are *insights* handed to audit/monitoring collaborators;
//! they are not domain events and nothing in this core reads them back.

use std::sync::{Arc, Mutex};

use crate::result::ForecastRecord;

/// Sink for per-forecast diagnostic records.
///
/// Emission is fire-and-forget: the dispatcher logs and drops any sink error,
/// so implementations can fail without affecting the returned forecast. They
/// still must not block the forecast path.
pub trait ForecastSink: Send + Sync + 'static {
    fn record(&self, record: &ForecastRecord) -> anyhow::Result<()>;
}

impl<S: ForecastSink> ForecastSink for Arc<S> {
    fn record(&self, record: &ForecastRecord) -> anyhow::Result<()> {
        (**self).record(record)
    }
}

/// Default sink: one structured log line per forecast.
#[derive(Debug, Default, Copy, Clone)]
pub struct TracingForecastSink;

impl ForecastSink for TracingForecastSink {
    fn record(&self, record: &ForecastRecord) -> anyhow::Result<()> {
        tracing::info!(
            model_kind = %record.model_kind,
            consumable_id = %record.consumable_id,
            horizon = record.horizon,
            degraded = record.degraded,
            values = ?record.values,
            "forecast produced"
        );
        Ok(())
    }
}

/// In-memory sink for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryForecastSink {
    inner: Mutex<Vec<ForecastRecord>>,
}

impl InMemoryForecastSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<ForecastRecord> {
        self.inner.lock().unwrap().clone()
    }
}

impl ForecastSink for InMemoryForecastSink {
    fn record(&self, record: &ForecastRecord) -> anyhow::Result<()> {
        self.inner.lock().unwrap().push(record.clone());
        Ok(())
    }
}
