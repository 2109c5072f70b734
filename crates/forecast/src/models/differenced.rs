//! Order-1 differencing plus fixed-schedule AR/MA recursion.
//!
//! This is a deliberate heuristic approximation of an ARIMA(1,1,1) process,
//! not a maximum-likelihood fit: the AR and MA coefficients are fixed
//! constants by contract. Estimating them would change forecast outputs.

use crate::error::ForecastError;
use crate::models::round_non_negative;

const AR_ORDER: usize = 1;
const MA_ORDER: usize = 1;
const AR_BASE: f64 = 0.7;
const MA_BASE: f64 = 0.3;
const ERROR_DECAY: f64 = 0.9;

/// One pass of successive subtraction: `diff[i] = series[i + 1] - series[i]`.
pub fn difference(series: &[f64]) -> Vec<f64> {
    series.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Rebuild an absolute-level series from differences by cumulative summation.
///
/// The result starts at `anchor` and has `diffs.len() + 1` elements. Feeding
/// the differences of a series together with its first element reproduces
/// that series; anchoring at the last observed value maps a differenced
/// forecast back to absolute levels.
pub fn inverse_difference(diffs: &[f64], anchor: f64) -> Vec<f64> {
    let mut levels = Vec::with_capacity(diffs.len() + 1);
    let mut level = anchor;
    levels.push(level);
    for &diff in diffs {
        level += diff;
        levels.push(level);
    }
    levels
}

/// Trained differenced-autoregressive parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferencedArParams {
    differenced: Vec<f64>,
    ar: Vec<f64>,
    ma: Vec<f64>,
    anchor: f64,
}

impl DifferencedArParams {
    pub const MIN_HISTORY: usize = 10;

    /// Difference the history once and attach the fixed coefficient schedule.
    pub fn fit(history: &[f64]) -> Result<Self, ForecastError> {
        if history.len() < Self::MIN_HISTORY {
            return Err(ForecastError::insufficient_data(
                Self::MIN_HISTORY,
                history.len(),
            ));
        }

        // Fixed schedule, not least-squares estimates.
        let ar = (0..AR_ORDER).map(|k| AR_BASE / (k as f64 + 1.0)).collect();
        let ma = (0..MA_ORDER).map(|k| MA_BASE / (k as f64 + 1.0)).collect();

        Ok(Self {
            differenced: difference(history),
            ar,
            ma,
            anchor: history[history.len() - 1],
        })
    }

    /// Iterate the AR/MA recursion in differenced space, then map back to
    /// absolute levels anchored at the last observed value.
    pub fn forecast(&self, horizon: u32) -> Vec<u64> {
        let mut diffs = self.differenced.clone();
        // Historical error terms: first differences of the differenced series.
        let mut errors = difference(&self.differenced);
        let mut projected = Vec::with_capacity(horizon as usize);

        for _ in 0..horizon {
            let ar_term: f64 = self
                .ar
                .iter()
                .enumerate()
                .filter_map(|(j, &coeff)| {
                    diffs.len().checked_sub(1 + j).map(|idx| coeff * diffs[idx])
                })
                .sum();
            let ma_term: f64 = self
                .ma
                .iter()
                .enumerate()
                .filter_map(|(j, &coeff)| {
                    errors
                        .len()
                        .checked_sub(1 + j)
                        .map(|idx| coeff * errors[idx])
                })
                .sum();

            let step = ar_term + ma_term;
            diffs.push(step);
            projected.push(step);

            // Future error terms decay deterministically from the last one.
            let next_error = errors.last().copied().unwrap_or(0.0) * ERROR_DECAY;
            errors.push(next_error);
        }

        inverse_difference(&projected, self.anchor)
            .into_iter()
            .skip(1) // drop the anchor, it is the last observed value
            .map(round_non_negative)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn difference_then_inverse_reproduces_series() {
        let series = [3.0, 7.0, 2.0, 9.0, 9.0, 4.0];
        let diffs = difference(&series);
        assert_eq!(diffs, vec![4.0, -5.0, 7.0, 0.0, -5.0]);

        let rebuilt = inverse_difference(&diffs, series[0]);
        assert_eq!(rebuilt, series.to_vec());
    }

    #[test]
    fn requires_at_least_ten_points() {
        let history = [5.0; 9];
        let err = DifferencedArParams::fit(&history).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 10,
                actual: 9
            }
        );
    }

    #[test]
    fn constant_history_forecasts_the_constant() {
        // All differences are zero, so the recursion stays at zero and every
        // level equals the anchor.
        let history = [100.0; 12];
        let params = DifferencedArParams::fit(&history).unwrap();
        assert_eq!(params.forecast(5), vec![100; 5]);
    }

    #[test]
    fn steady_increase_damps_toward_the_trend() {
        // Differences are all 1, error terms all 0: each step is 0.7 times
        // the previous differenced value.
        let history: Vec<f64> = (1..=12).map(f64::from).collect();
        let params = DifferencedArParams::fit(&history).unwrap();
        // Levels: 12.7, 13.19, 13.533 -> rounded.
        assert_eq!(params.forecast(3), vec![13, 13, 14]);
    }

    #[test]
    fn fresh_fits_are_deterministic() {
        let history: Vec<f64> = (0..20).map(|i| f64::from(i % 7) * 3.0 + 10.0).collect();
        let a = DifferencedArParams::fit(&history).unwrap().forecast(14);
        let b = DifferencedArParams::fit(&history).unwrap().forecast(14);
        assert_eq!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any sufficiently long history and any horizon produce
        /// exactly `horizon` values (non-negativity is carried by the type).
        #[test]
        fn forecast_length_matches_horizon(
            history in prop::collection::vec(0.0f64..1000.0, 10..60),
            horizon in 1u32..40
        ) {
            let params = DifferencedArParams::fit(&history).unwrap();
            prop_assert_eq!(params.forecast(horizon).len(), horizon as usize);
        }

        /// Property: order-1 differencing round-trips through inverse
        /// differencing anchored at the first value.
        #[test]
        fn differencing_round_trip(
            series in prop::collection::vec(-1000.0f64..1000.0, 2..50)
        ) {
            let rebuilt = inverse_difference(&difference(&series), series[0]);
            prop_assert_eq!(rebuilt.len(), series.len());
            for (original, rebuilt) in series.iter().zip(&rebuilt) {
                prop_assert!((original - rebuilt).abs() < 1e-6);
            }
        }
    }
}
