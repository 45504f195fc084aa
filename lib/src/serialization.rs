//! Serialization of fitted scaler parameters.
//!
//! Fitted scalers expose their learned state as plain parameter structs
//! (`MinMaxScalerParams`, `ZScoreScalerParams`). This module turns those
//! structs into bytes and back without tying the scalers to a file format.
//!
//! The serde blanket impl is always compiled: every params struct derives
//! `Serialize`/`Deserialize`, and `FittedTransformer::save_to_file` relies on it.

use std::error::Error;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain numerical data and configuration.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
