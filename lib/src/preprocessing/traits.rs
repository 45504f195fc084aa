//! Core traits for scaling transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; holds configuration and learns from a column.
//! - [`FittedTransformer`]: After fitting; immutable, ready for inference and serialization.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// # Example
/// ```
/// use colscale::preprocessing::{FittedTransformer, Transformer, ZScoreScaler};
///
/// let fitted = ZScoreScaler::new().fit(&[1.0, 2.0, 3.0]).unwrap();
/// let scaled = fitted.transform(&[2.0]).unwrap();
/// assert_eq!(scaled, vec![0.0]);
/// ```
pub trait Transformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Params = Self::Params>;

    /// Fit the transformer to a reference column.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if:
    /// - The column is empty
    /// - The column contains NaN or infinite values
    fn fit(&self, column: &[f64]) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the same column in one step.
    fn fit_transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError> {
        let fitted = self.fit(column)?;
        fitted.transform(column)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// # Guarantees
/// - `transform` output has the same length as its input.
/// - `extract_params()` + `from_params()` is a round-trip.
pub trait FittedTransformer: Clone {
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform a column using learned parameters.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the column is empty or contains
    /// non-finite values.
    fn transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError>;

    /// Map transformed values back to the original scale.
    fn inverse_transform(&self, column: &[f64]) -> Result<Vec<f64>, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    ///
    /// Parameters are validated, so a corrupted file cannot produce a fitted
    /// transformer that violates its invariants.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let params = self.extract_params();
        let bytes = params.to_bytes().map_err(std::io::Error::other)?;
        std::fs::write(path, bytes)
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::SerializationError(e.to_string()))?;
        Self::from_params(params)
    }
}

/// Reject empty columns and columns containing NaN or infinity.
///
/// `what` names the operation for the error message.
pub(crate) fn validate_column(column: &[f64], what: &str) -> Result<(), PreprocessingError> {
    if column.is_empty() {
        return Err(PreprocessingError::EmptyData(format!(
            "Cannot {} an empty column",
            what
        )));
    }
    match column.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PreprocessingError::InvalidValue {
            index,
            value: column[index],
        }),
        None => Ok(()),
    }
}

/// Reject an output column holding NaN or infinity.
///
/// Finite input can still overflow when transformed values fall far outside
/// the fitted range.
pub(crate) fn ensure_finite_output(output: Vec<f64>) -> Result<Vec<f64>, PreprocessingError> {
    match output.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PreprocessingError::NumericalError(format!(
            "transformed value at index {} is {}",
            index, output[index]
        ))),
        None => Ok(output),
    }
}
