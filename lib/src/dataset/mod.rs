//! Tabular data source and console rendering for the scalers.
//!
//! The scalers only ever see a `&[f64]` column. This module supplies those
//! columns from a named-column [`Table`], either read from a CSV file or built
//! in memory, and renders the table the way a dataframe prints.
//!
//! # Example
//!
//! ```
//! use colscale::dataset::Table;
//!
//! let table = Table::sample();
//! assert_eq!(table.column_names(), vec!["Age", "Salary"]);
//! assert_eq!(table.column("Salary").unwrap()[0], 35000.0);
//! ```

use thiserror::Error;

pub mod table;
pub use self::table::{ColumnData, Table, TableDisplay};

/// Errors raised while building or querying a [`Table`].
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Column is not numeric: {0}")]
    NotNumeric(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Length mismatch for column {column}: expected {expected} rows, got {got}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}
