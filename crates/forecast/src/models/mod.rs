//! Forecast models.
//!
//! Each model is a pure `fit -> params -> forecast` pipeline: `fit` validates
//! the history and returns an immutable params value, `forecast` reads it
//! without mutation. A params value cannot exist before a successful fit, so
//! predict-before-train is unrepresentable and concurrent requests are safe
//! as long as each fits its own params (they are cheap to build).

pub mod differenced;
pub mod smoothed;
pub mod trend;

pub use differenced::{difference, inverse_difference, DifferencedArParams};
pub use smoothed::SmoothedWindowParams;
pub use trend::TrendParams;

/// Shared output policy: round to nearest integer, floor at zero.
///
/// Applied identically by every model and by the dispatcher fallback.
pub(crate) fn round_non_negative(value: f64) -> u64 {
    value.round().max(0.0) as u64
}
