//! Min-Max Scaler.
//!
//! Transforms a column by scaling it to a given range (default [0, 1]).
//!
//! The transformation is given by:
//! ```text
//! X_scaled = (X - X_min) / (X_max - X_min) * (max - min) + min
//! ```
//!
//! A constant column (`X_max == X_min`) maps every value to `min` (0.0 for the
//! default range) rather than dividing by zero. Columns whose span exceeds
//! `f64::MAX` are scaled with halved operands so the endpoints still map exactly.
//!
//! # Example
//! ```
//! use colscale::preprocessing::{FittedTransformer, MinMaxScaler, Transformer};
//!
//! let fitted = MinMaxScaler::new().fit(&[2.0, 4.0, 6.0]).unwrap();
//! assert_eq!(fitted.transform(&[2.0, 4.0, 6.0]).unwrap(), vec![0.0, 0.5, 1.0]);
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{
    ensure_finite_output, validate_column, FittedTransformer, Transformer,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerConfig {
    /// Minimum value of the target range.
    pub min: f64,
    /// Maximum value of the target range.
    pub max: f64,
}

impl Default for MinMaxScalerConfig {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl MinMaxScalerConfig {
    fn validate(&self) -> Result<(), PreprocessingError> {
        if !(self.max - self.min).is_finite() || self.max <= self.min {
            return Err(PreprocessingError::InvalidParameter(format!(
                "feature range must be finite with min < max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Serializable parameters for a fitted MinMaxScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScalerParams {
    /// Configuration options.
    pub config: MinMaxScalerConfig,
    /// Minimum of the column seen during fit.
    pub data_min: f64,
    /// Maximum of the column seen during fit.
    pub data_max: f64,
}

/// MinMaxScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct MinMaxScaler {
    config: MinMaxScalerConfig,
}

impl MinMaxScaler {
    /// Create a new MinMaxScaler with default range [0, 1].
    pub fn new() -> Self {
        Self {
            config: MinMaxScalerConfig::default(),
        }
    }

    /// Set the target range for scaling.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidParameter`] unless `min < max` and `max - min` is finite.
    pub fn with_range(mut self, min: f64, max: f64) -> Result<Self, PreprocessingError> {
        let config = MinMaxScalerConfig { min, max };
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// The configured target range.
    pub fn config(&self) -> &MinMaxScalerConfig {
        &self.config
    }
}

impl Transformer for MinMaxScaler {
    type Params = MinMaxScalerParams;
    type Fitted = FittedMinMaxScaler;

    fn fit(&self, column: &[f64]) -> Result<Self::Fitted, PreprocessingError> {
        validate_column(column, "fit MinMaxScaler on")?;

        let (data_min, data_max) = column
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        debug!(
            n_samples = column.len(),
            data_min, data_max, "fitted MinMaxScaler"
        );

        Ok(FittedMinMaxScaler {
            config: self.config.clone(),
            data_min,
            data_max,
        })
    }
}

/// Fitted MinMaxScaler ready for inference.
///
/// Invariant: `data_min <= data_max`, both finite. `data_range()` may still
/// overflow to infinity.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedMinMaxScaler {
    config: MinMaxScalerConfig,
    data_min: f64,
    data_max: f64,
}

impl FittedMinMaxScaler {
    /// Minimum of the column seen during fit.
    pub fn data_min(&self) -> f64 {
        self.data_min
    }

    /// Maximum of the column seen during fit.
    pub fn data_max(&self) -> f64 {
        self.data_max
    }

    /// `data_max - data_min`; zero for a constant column, infinite when the
    /// span overflows `f64`.
    pub fn data_range(&self) -> f64 {
        self.data_max - self.data_min
    }

    /// Target range the scaler maps into.
    pub fn config(&self) -> &MinMaxScalerConfig {
        &self.config
    }

    /// True when the fitted column was constant.
    pub fn is_degenerate(&self) -> bool {
        self.data_min == self.data_max
    }

    /// Position of `v` relative to the fitted range: 0.0 at `data_min`, 1.0 at `data_max`.
    fn unit_position(&self, v: f64) -> f64 {
        let range = self.data_range();
        if range.is_finite() {
            (v - self.data_min) / range
        } else {
            (v * 0.5 - self.data_min * 0.5) / (self.data_max * 0.5 - self.data_min * 0.5)
        }
    }

    /// Inverse of [`Self::unit_position`].
    fn from_unit_position(&self, t: f64) -> f64 {
        let range = self.data_range();
        if range.is_finite() {
            t * range + self.data_min
        } else {
            t * self.data_max + (1.0 - t) * self.data_min
        }
    }
}

impl FittedTransformer for FittedMinMaxScaler {
    type Params = MinMaxScalerParams;

    fn transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        validate_column(column, "transform")?;

        let lo = self.config.min;
        if self.is_degenerate() {
            return Ok(vec![lo; column.len()]);
        }

        let target = self.config.max - lo;
        ensure_finite_output(
            column
                .iter()
                .map(|&v| self.unit_position(v) * target + lo)
                .collect(),
        )
    }

    fn inverse_transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        validate_column(column, "inverse transform")?;

        if self.is_degenerate() {
            return Ok(vec![self.data_min; column.len()]);
        }

        // X = (X_scaled - target_min) / (target_max - target_min) * (X_max - X_min) + X_min
        let lo = self.config.min;
        let target = self.config.max - lo;
        ensure_finite_output(
            column
                .iter()
                .map(|&s| self.from_unit_position((s - lo) / target))
                .collect(),
        )
    }

    fn extract_params(&self) -> Self::Params {
        MinMaxScalerParams {
            config: self.config.clone(),
            data_min: self.data_min,
            data_max: self.data_max,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        params.config.validate()?;
        if !params.data_min.is_finite()
            || !params.data_max.is_finite()
            || params.data_min > params.data_max
        {
            return Err(PreprocessingError::InvalidParameter(format!(
                "data_min must not exceed data_max, got min={} max={}",
                params.data_min, params.data_max
            )));
        }

        Ok(Self {
            config: params.config,
            data_min: params.data_min,
            data_max: params.data_max,
        })
    }
}
