//! # colscale
//!
//! Feature scaling for a single numeric column with a strict separation between
//! fitting (learning parameters from reference data) and transforming (applying
//! those parameters to the same or different data).
//!
//! ## Core Design Principles
//!
//! - **Explicit fitted state**: `fit` returns an immutable fitted scaler that owns the
//!   learned parameters. The unfitted scaler only carries configuration, so there is no
//!   hidden mutable state between the two steps.
//! - **No silent NaN**: empty or non-finite input is rejected with a
//!   [`PreprocessingError`] instead of producing sentinel values.
//! - **Documented degenerate policy**: a constant column scales to all zeros.
//!
//! ## Quick Start
//!
//! ```rust
//! use colscale::preprocessing::{FittedTransformer, MinMaxScaler, Transformer, ZScoreScaler};
//!
//! let salary = [35000.0, 48000.0, 56000.0, 60000.0, 72000.0];
//!
//! let minmax = MinMaxScaler::new().fit(&salary).unwrap();
//! let scaled = minmax.transform(&salary).unwrap();
//! assert_eq!(scaled[0], 0.0);
//! assert_eq!(scaled[4], 1.0);
//!
//! let zscore = ZScoreScaler::new().fit(&salary).unwrap();
//! assert!((zscore.mean() - 54200.0).abs() < 1e-9);
//! ```
//!
//! ## Module Structure
//!
//! - `preprocessing` — scalers, the fit/transform traits and the error type
//! - `dataset` — a small named-column table used as data source and for display
//! - `serialization` — byte encoding of fitted parameters

/// Named numeric columns: CSV loading, the built-in sample and console rendering.
pub mod dataset;

/// Feature scaling transformers.
pub mod preprocessing;

/// Persistence of fitted scaler parameters.
pub mod serialization;

pub use dataset::{DatasetError, Table};
pub use preprocessing::{
    FittedMinMaxScaler, FittedTransformer, FittedZScoreScaler, MinMaxScaler, PreprocessingError,
    Transformer, ZScoreScaler,
};
