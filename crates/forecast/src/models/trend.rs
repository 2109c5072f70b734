//! Ordinary-least-squares trend line over index positions.

use crate::error::ForecastError;
use crate::models::round_non_negative;

/// Closed-form OLS line fit of `y` against `x = 1..=n`.
///
/// Returns `(slope, intercept)`. Fails `DegenerateInput` when the regressor
/// has zero variance; that cannot happen for two or more distinct consecutive
/// indices, but the denominator is checked rather than assumed.
pub(crate) fn ols_line(y: &[f64]) -> Result<(f64, f64), ForecastError> {
    let n = y.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (i, &value) in y.iter().enumerate() {
        let x = (i + 1) as f64;
        sum_x += x;
        sum_y += value;
        sum_xy += x * value;
        sum_xx += x * x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(ForecastError::degenerate(
            "zero-variance regressor in trend fit",
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok((slope, intercept))
}

/// Trained linear-trend parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendParams {
    slope: f64,
    intercept: f64,
    history_len: usize,
}

impl TrendParams {
    pub const MIN_HISTORY: usize = 2;

    /// Fit a trend line to `history`, indexed as `x = 1..=n`.
    pub fn fit(history: &[f64]) -> Result<Self, ForecastError> {
        if history.len() < Self::MIN_HISTORY {
            return Err(ForecastError::insufficient_data(
                Self::MIN_HISTORY,
                history.len(),
            ));
        }

        let (slope, intercept) = ols_line(history)?;
        Ok(Self {
            slope,
            intercept,
            history_len: history.len(),
        })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Extrapolate the fitted line `horizon` periods past the history.
    pub fn forecast(&self, horizon: u32) -> Vec<u64> {
        (1..=horizon as usize)
            .map(|i| {
                let x = (self.history_len + i) as f64;
                round_non_negative(self.slope * x + self.intercept)
            })
            .collect()
    }
}
