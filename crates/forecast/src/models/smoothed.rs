//! Exponential smoothing plus a recency-weighted sliding window.
//!
//! Smoothing extracts the level, a recency-weighted window average plus a
//! damped trend correction extrapolates it, and each prediction is fed back
//! into the window so multi-step forecasts build on prior predictions. There
//! is no learned state anywhere in this model.

use std::collections::VecDeque;

use crate::error::ForecastError;
use crate::models::round_non_negative;
use crate::models::trend::ols_line;

const WINDOW: usize = 7;
const ALPHA: f64 = 0.3;
const RAW_WEIGHT: f64 = 0.7;
const SMOOTHED_WEIGHT: f64 = 0.3;
const TREND_DAMPING: f64 = 0.5;

/// Trained smoothed-window parameters: the seeded window and the damped
/// per-step trend correction.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedWindowParams {
    window: VecDeque<f64>,
    trend: f64,
}

impl SmoothedWindowParams {
    /// The window must be saturated, so one extra point is required.
    pub const MIN_HISTORY: usize = WINDOW + 1;

    pub fn fit(history: &[f64]) -> Result<Self, ForecastError> {
        if history.len() < Self::MIN_HISTORY {
            return Err(ForecastError::insufficient_data(
                Self::MIN_HISTORY,
                history.len(),
            ));
        }

        let smoothed = exponential_smoothing(history);
        // Blend raw and smoothed series before windowing; raw data dominates.
        let combined: Vec<f64> = history
            .iter()
            .zip(&smoothed)
            .map(|(&raw, &smooth)| RAW_WEIGHT * raw + SMOOTHED_WEIGHT * smooth)
            .collect();

        // Damped overall trend; a zero-variance fit contributes no correction.
        let trend = ols_line(&combined)
            .map(|(slope, _)| slope)
            .unwrap_or(0.0)
            * TREND_DAMPING;

        let window = combined[combined.len() - WINDOW..].iter().copied().collect();
        Ok(Self { window, trend })
    }

    /// The trend correction added to every predicted step.
    pub fn trend(&self) -> f64 {
        self.trend
    }

    pub fn forecast(&self, horizon: u32) -> Vec<u64> {
        let mut window = self.window.clone();
        let mut predictions = Vec::with_capacity(horizon as usize);

        for _ in 0..horizon {
            let mut weighted_sum = 0.0;
            let mut weight_sum = 0.0;
            for (idx, &value) in window.iter().enumerate() {
                // Most recent element carries the largest weight.
                let weight = (idx + 1) as f64;
                weighted_sum += value * weight;
                weight_sum += weight;
            }

            let next = round_non_negative(weighted_sum / weight_sum + self.trend);
            predictions.push(next);

            // Slide: the rounded prediction feeds the next step's window.
            window.pop_front();
            window.push_back(next as f64);
        }

        predictions
    }
}

/// `smoothed[0] = y[0]`, `smoothed[i] = alpha*y[i] + (1 - alpha)*smoothed[i-1]`.
fn exponential_smoothing(series: &[f64]) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(series.len());
    for &value in series {
        let next = match smoothed.last() {
            Some(&prev) => ALPHA * value + (1.0 - ALPHA) * prev,
            None => value,
        };
        smoothed.push(next);
    }
    smoothed
}
