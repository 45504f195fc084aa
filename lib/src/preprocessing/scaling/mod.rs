//! Scaling transformers for feature normalization.
//!
//! | Transformer | Description | Fitted parameters |
//! |-------------|-------------|-------------------|
//! | [`MinMaxScaler`] | Scale to [0, 1] or a custom range | column min and max |
//! | [`ZScoreScaler`] | Z-score standardization (mean=0, std=1) | column mean and population std |
//!
//! Both scalers map a constant column to all zeros.

pub mod minmax;
pub mod zscore;

pub use minmax::{FittedMinMaxScaler, MinMaxScaler, MinMaxScalerConfig, MinMaxScalerParams};
pub use zscore::{FittedZScoreScaler, ZScoreScaler, ZScoreScalerConfig, ZScoreScalerParams};
