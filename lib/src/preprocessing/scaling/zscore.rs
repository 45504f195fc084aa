//! Z-score Scaler (standardization).
//!
//! Transforms a column by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the fitted column and `s` is its population
//! standard deviation (divisor `N`, not `N - 1`).
//!
//! A constant column has `s == 0` and every output is 0.0.
//!
//! # Example
//! ```
//! use colscale::preprocessing::{FittedTransformer, Transformer, ZScoreScaler};
//!
//! let fitted = ZScoreScaler::new().fit(&[1.0, 3.0]).unwrap();
//! assert_eq!(fitted.mean(), 2.0);
//! assert_eq!(fitted.std(), 1.0);
//! assert_eq!(fitted.transform(&[1.0, 3.0]).unwrap(), vec![-1.0, 1.0]);
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{
    ensure_finite_output, validate_column, FittedTransformer, Transformer,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for ZScoreScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZScoreScalerConfig {
    /// If true, center the data before scaling.
    pub with_mean: bool,
    /// If true, scale the data to unit variance.
    pub with_std: bool,
}

impl Default for ZScoreScalerConfig {
    fn default() -> Self {
        Self {
            with_mean: true,
            with_std: true,
        }
    }
}

/// Serializable parameters for a fitted ZScoreScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZScoreScalerParams {
    /// Configuration options.
    pub config: ZScoreScalerConfig,
    /// Value subtracted before scaling (0.0 if with_mean=false).
    pub mean: f64,
    /// Divisor applied after centering (1.0 if with_std=false).
    pub std: f64,
}

/// ZScoreScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct ZScoreScaler {
    config: ZScoreScalerConfig,
}

impl ZScoreScaler {
    /// Create a new ZScoreScaler with default configuration.
    pub fn new() -> Self {
        Self {
            config: ZScoreScalerConfig::default(),
        }
    }

    /// Set whether to center data by mean.
    pub fn with_mean(mut self, with_mean: bool) -> Self {
        self.config.with_mean = with_mean;
        self
    }

    /// Set whether to scale data to unit variance.
    pub fn with_std(mut self, with_std: bool) -> Self {
        self.config.with_std = with_std;
        self
    }

    pub fn config(&self) -> &ZScoreScalerConfig {
        &self.config
    }
}

/// Arithmetic mean and population standard deviation of a validated column.
///
/// A column whose values are all identical gets a standard deviation of exactly
/// zero, even when the computed mean carries rounding error. Sums that overflow
/// near `f64::MAX`, or squared deviations that underflow to zero near
/// `f64::MIN_POSITIVE`, are recomputed on the column divided by its largest
/// absolute value.
fn mean_and_population_std(column: &[f64]) -> (f64, f64) {
    let first = column[0];
    if column.iter().all(|&v| v == first) {
        return (first, 0.0);
    }

    let (mean, std) = moments(column, 1.0);
    if mean.is_finite() && std.is_finite() && std > 0.0 {
        return (mean, std);
    }

    let scale = column.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let (mean, std) = moments(column, scale);
    (mean * scale, std * scale)
}

fn moments(column: &[f64], scale: f64) -> (f64, f64) {
    let n = column.len() as f64;
    let mean = column.iter().map(|&v| v / scale).sum::<f64>() / n;
    let variance = column
        .iter()
        .map(|&v| (v / scale - mean).powi(2))
        .sum::<f64>()
        / n;
    (mean, variance.sqrt())
}

impl Transformer for ZScoreScaler {
    type Params = ZScoreScalerParams;
    type Fitted = FittedZScoreScaler;

    fn fit(&self, column: &[f64]) -> Result<Self::Fitted, PreprocessingError> {
        validate_column(column, "fit ZScoreScaler on")?;

        let (data_mean, data_std) = mean_and_population_std(column);
        if !data_mean.is_finite() || !data_std.is_finite() {
            return Err(PreprocessingError::NumericalError(format!(
                "column moments overflow: mean={} std={}",
                data_mean, data_std
            )));
        }
        let mean = if self.config.with_mean { data_mean } else { 0.0 };
        let std = if self.config.with_std { data_std } else { 1.0 };

        debug!(n_samples = column.len(), mean, std, "fitted ZScoreScaler");

        Ok(FittedZScoreScaler {
            config: self.config.clone(),
            mean,
            std,
        })
    }
}

/// Fitted ZScoreScaler ready for inference.
///
/// Invariant: `mean` finite, `std` finite and `>= 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedZScoreScaler {
    config: ZScoreScalerConfig,
    mean: f64,
    std: f64,
}

impl FittedZScoreScaler {
    /// The value subtracted before scaling.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// The population standard deviation used as divisor.
    pub fn std(&self) -> f64 {
        self.std
    }

    pub fn variance(&self) -> f64 {
        self.std * self.std
    }

    pub fn config(&self) -> &ZScoreScalerConfig {
        &self.config
    }

    /// True when the fitted column was constant.
    pub fn is_degenerate(&self) -> bool {
        self.std == 0.0
    }

    fn standardize(&self, v: f64) -> f64 {
        let centered = v - self.mean;
        if centered.is_finite() {
            centered / self.std
        } else {
            (v * 0.5 - self.mean * 0.5) / (self.std * 0.5)
        }
    }

    fn destandardize(&self, z: f64) -> f64 {
        let offset = z * self.std;
        if offset.is_finite() {
            offset + self.mean
        } else {
            (z * (self.std * 0.5) + self.mean * 0.5) * 2.0
        }
    }
}

impl FittedTransformer for FittedZScoreScaler {
    type Params = ZScoreScalerParams;

    fn transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        validate_column(column, "transform")?;

        if self.is_degenerate() {
            return Ok(vec![0.0; column.len()]);
        }

        ensure_finite_output(column.iter().map(|&v| self.standardize(v)).collect())
    }

    fn inverse_transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        validate_column(column, "inverse transform")?;

        ensure_finite_output(column.iter().map(|&z| self.destandardize(z)).collect())
    }

    fn extract_params(&self) -> Self::Params {
        ZScoreScalerParams {
            config: self.config.clone(),
            mean: self.mean,
            std: self.std,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if !params.mean.is_finite() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "mean must be finite, got {}",
                params.mean
            )));
        }
        if !params.std.is_finite() || params.std < 0.0 {
            return Err(PreprocessingError::InvalidParameter(format!(
                "std must be finite and non-negative, got {}",
                params.std
            )));
        }

        Ok(Self {
            config: params.config,
            mean: params.mean,
            std: params.std,
        })
    }
}
