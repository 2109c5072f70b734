//! `stockcast-forecast`
//!
//! **Responsibility:** consumable-stock forecasting subsystem boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on inventory aggregates or mutate domain state.
//! - It consumes caller-provided history snapshots and emits forecasts plus
//!   diagnostic records, nothing else.
//! - All computation is synchronous, CPU-bound, and deterministic.

pub mod api;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod request;
pub mod result;
pub mod sink;

pub use api::{predict_stock, PredictStockRequest, PredictStockResponse};
pub use dispatcher::ForecastDispatcher;
pub use error::ForecastError;
pub use models::{
    difference, inverse_difference, DifferencedArParams, SmoothedWindowParams, TrendParams,
};
pub use request::{ForecastRequest, ModelKind};
pub use result::{ForecastOutcome, ForecastRecord};
pub use sink::{ForecastSink, InMemoryForecastSink, TracingForecastSink};
