//! Column preprocessing transformers.
//!
//! Transformers are split into an unfitted value holding configuration
//! ([`Transformer`]) and an immutable fitted value holding the learned
//! parameters ([`FittedTransformer`]). Fitting never mutates the scaler it is
//! called on, so one configured scaler can be fitted on many columns.
//!
//! # Example
//!
//! ```
//! use colscale::preprocessing::{FittedTransformer, MinMaxScaler, Transformer};
//!
//! let train = [10.0, 20.0, 30.0];
//! let fitted = MinMaxScaler::new().fit(&train).unwrap();
//!
//! // Apply train-time parameters to new data.
//! let scaled = fitted.transform(&[15.0, 40.0]).unwrap();
//! assert_eq!(scaled, vec![0.25, 1.5]);
//! ```

pub mod error;
pub mod scaling;
pub mod traits;

pub use error::PreprocessingError;
pub use scaling::{
    FittedMinMaxScaler, FittedZScoreScaler, MinMaxScaler, MinMaxScalerConfig, MinMaxScalerParams,
    ZScoreScaler, ZScoreScalerConfig, ZScoreScalerParams,
};
pub use traits::{FittedTransformer, Transformer};
