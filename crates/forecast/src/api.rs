//! Wire DTOs exchanged with the external transport collaborator.
//!
//! The transport layer (IPC/HTTP) serializes these with camelCase keys; this
//! core neither opens sockets nor persists anything, it only defines the
//! shapes and the mapping onto [`ForecastDispatcher`].

use serde::{Deserialize, Serialize};

use stockcast_core::{ConsumableId, DomainError};

use crate::dispatcher::ForecastDispatcher;
use crate::error::ForecastError;
use crate::request::ForecastRequest;
use crate::result::ForecastOutcome;
use crate::sink::ForecastSink;

/// Serialized forecast request as received from the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictStockRequest {
    pub model_kind: String,
    pub consumable_id: String,
    pub history_data: Vec<f64>,
    pub horizon_days: u32,
}

impl PredictStockRequest {
    /// Convert into a typed request; fails only on an invalid consumable id.
    pub fn into_request(self) -> Result<ForecastRequest, DomainError> {
        Ok(ForecastRequest {
            model_kind: self.model_kind,
            consumable_id: ConsumableId::new(self.consumable_id)?,
            history: self.history_data,
            horizon: self.horizon_days,
        })
    }
}

/// Serialized forecast response handed back to the transport layer.
///
/// Exactly one of `data`/`error` is present: `data` of length `horizonDays`
/// for every forecast (degraded or not), `error` only for caller contract
/// violations such as an unknown model kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictStockResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<u64>>,
    #[serde(default)]
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

impl PredictStockResponse {
    pub fn from_outcome(outcome: &ForecastOutcome) -> Self {
        match outcome {
            ForecastOutcome::Computed(values) => Self {
                success: true,
                data: Some(values.clone()),
                degraded: false,
                error: None,
                message: "forecast computed".to_string(),
            },
            ForecastOutcome::Degraded { values, cause } => Self {
                success: true,
                data: Some(values.clone()),
                degraded: true,
                error: None,
                message: format!("fallback forecast substituted: {cause}"),
            },
        }
    }

    pub fn from_error(error: &ForecastError) -> Self {
        Self {
            success: false,
            data: None,
            degraded: false,
            error: Some(error.code().to_string()),
            message: error.to_string(),
        }
    }
}

/// Full request/response cycle for one serialized forecast request.
pub fn predict_stock<S: ForecastSink>(
    dispatcher: &ForecastDispatcher<S>,
    request: PredictStockRequest,
) -> PredictStockResponse {
    let request = match request.into_request() {
        Ok(request) => request,
        Err(err) => {
            return PredictStockResponse {
                success: false,
                data: None,
                degraded: false,
                error: Some("InvalidId".to_string()),
                message: err.to_string(),
            };
        }
    };

    match dispatcher.predict(&request) {
        Ok(outcome) => PredictStockResponse::from_outcome(&outcome),
        Err(err) => PredictStockResponse::from_error(&err),
    }
}
