use crate::dataset::DatasetError;
use csv::{ReaderBuilder, Trim};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Default number of decimals printed for non-integral numeric columns.
const DEFAULT_PRECISION: usize = 6;

/// Values of one table column.
///
/// CSV columns whose non-empty cells all parse as numbers are stored as
/// [`ColumnData::Numeric`] (empty cells become NaN); anything else is kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn from_cells(cells: Vec<String>) -> Self {
        let numeric = cells.iter().any(|c| !c.is_empty())
            && cells
                .iter()
                .all(|c| c.is_empty() || c.parse::<f64>().is_ok());
        if !numeric {
            return ColumnData::Text(cells);
        }
        ColumnData::Numeric(
            cells
                .iter()
                .map(|c| c.parse::<f64>().unwrap_or(f64::NAN))
                .collect(),
        )
    }

    /// Render every cell with a shared number format.
    fn render(&self, precision: usize) -> Vec<String> {
        match self {
            ColumnData::Text(values) => values.clone(),
            ColumnData::Numeric(values) => {
                let integral = values
                    .iter()
                    .all(|v| !v.is_finite() || (v.fract() == 0.0 && v.abs() < 1e15));
                values
                    .iter()
                    .map(|v| {
                        if v.is_nan() {
                            "NaN".to_string()
                        } else if integral && v.is_finite() {
                            format!("{}", *v as i64)
                        } else {
                            format!("{:.*}", precision, v)
                        }
                    })
                    .collect()
            }
        }
    }
}

/// An ordered set of equally long, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<ColumnData>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from numeric columns.
    ///
    /// # Errors
    /// [`DatasetError::DuplicateColumn`] or [`DatasetError::LengthMismatch`].
    pub fn from_columns<S: Into<String>>(
        columns: Vec<(S, Vec<f64>)>,
    ) -> Result<Self, DatasetError> {
        let mut table = Self::new();
        for (name, values) in columns {
            table.push_column(name, values)?;
        }
        Ok(table)
    }

    /// The built-in five-row dataset with `Age` and `Salary` columns.
    pub fn sample() -> Self {
        Self {
            names: vec!["Age".to_string(), "Salary".to_string()],
            columns: vec![
                ColumnData::Numeric(vec![25.0, 32.0, 47.0, 51.0, 62.0]),
                ColumnData::Numeric(vec![35000.0, 48000.0, 56000.0, 60000.0, 72000.0]),
            ],
        }
    }

    /// Load a comma-separated file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::from_csv_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            rows = table.n_rows(),
            columns = table.n_columns(),
            "loaded CSV table"
        );
        Ok(table)
    }

    /// Read comma-separated data with a header row from any reader.
    ///
    /// Cells are trimmed. Rows with a different number of fields than the header
    /// are rejected by the CSV reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

        for result in rdr.records() {
            let record = result?;
            for (i, value) in record.iter().enumerate() {
                cells[i].push(value.to_string());
            }
        }

        let mut table = Self::new();
        for (name, column) in headers.into_iter().zip(cells) {
            table.push(name, ColumnData::from_cells(column))?;
        }
        Ok(table)
    }

    /// Numeric values of the named column.
    ///
    /// # Errors
    /// [`DatasetError::ColumnNotFound`] if no such column exists,
    /// [`DatasetError::NotNumeric`] if it holds text.
    pub fn column(&self, name: &str) -> Result<&[f64], DatasetError> {
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DatasetError::ColumnNotFound(name.to_string()))?;
        match &self.columns[index] {
            ColumnData::Numeric(values) => Ok(values.as_slice()),
            ColumnData::Text(_) => Err(DatasetError::NotNumeric(name.to_string())),
        }
    }

    /// Append a numeric column.
    pub fn push_column<S: Into<String>>(
        &mut self,
        name: S,
        values: Vec<f64>,
    ) -> Result<(), DatasetError> {
        self.push(name.into(), ColumnData::Numeric(values))
    }

    fn push(&mut self, name: String, data: ColumnData) -> Result<(), DatasetError> {
        if self.names.contains(&name) {
            return Err(DatasetError::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != data.len() {
                return Err(DatasetError::LengthMismatch {
                    column: name,
                    expected: first.len(),
                    got: data.len(),
                });
            }
        }
        self.names.push(name);
        self.columns.push(data);
        Ok(())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.names.iter().map(|n| n.as_str()).collect()
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(|c| c.len()).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Render with `precision` decimals for non-integral numeric columns.
    pub fn display_with_precision(&self, precision: usize) -> TableDisplay<'_> {
        TableDisplay {
            table: self,
            precision,
        }
    }
}

/// Dataframe-style rendering of a [`Table`]: a row index column followed by
/// right-aligned values, separated by two spaces.
pub struct TableDisplay<'a> {
    table: &'a Table,
    precision: usize,
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.table;
        if table.n_columns() == 0 {
            return write!(f, "Empty table");
        }

        let n_rows = table.n_rows();
        let index_width = n_rows.saturating_sub(1).to_string().len();
        let rendered: Vec<Vec<String>> = table
            .columns
            .iter()
            .map(|c| c.render(self.precision))
            .collect();
        let widths: Vec<usize> = table
            .names
            .iter()
            .zip(&rendered)
            .map(|(name, cells)| {
                cells
                    .iter()
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:width$}", "", width = index_width)?;
        for (name, width) in table.names.iter().zip(&widths) {
            write!(f, "  {:>width$}", name, width = *width)?;
        }
        for row in 0..n_rows {
            writeln!(f)?;
            write!(f, "{:>width$}", row, width = index_width)?;
            for (cells, width) in rendered.iter().zip(&widths) {
                write!(f, "  {:>width$}", cells[row], width = *width)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with_precision(DEFAULT_PRECISION).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Name,Age,Salary\nAlice,25,35000\nBob,32,48000\nCarol,47,56000\n";

    #[test]
    fn test_sample_table() {
        let table = Table::sample();
        assert_eq!(table.n_rows(), 5);
        assert_eq!(table.n_columns(), 2);
        assert_eq!(
            table.column("Salary").unwrap(),
            &[35000.0, 48000.0, 56000.0, 60000.0, 72000.0]
        );
    }

    #[test]
    fn test_from_csv_reader_infers_column_types() {
        let table = Table::from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(table.column_names(), vec!["Name", "Age", "Salary"]);
        assert_eq!(table.column("Age").unwrap(), &[25.0, 32.0, 47.0]);
        assert!(matches!(
            table.column("Name"),
            Err(DatasetError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_from_csv_reader_trims_and_reads_empty_as_nan() {
        let table = Table::from_csv_reader(" a , b \n1, 2\n,3.5\n".as_bytes()).unwrap();
        let a = table.column("a").unwrap();
        assert_eq!(a[0], 1.0);
        assert!(a[1].is_nan());
        assert_eq!(table.column("b").unwrap(), &[2.0, 3.5]);
    }

    #[test]
    fn test_from_csv_reader_ragged_row() {
        let result = Table::from_csv_reader("a,b\n1,2\n3\n".as_bytes());
        assert!(matches!(result, Err(DatasetError::Csv(_))));
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let path = std::env::temp_dir().join("colscale_missing_table.csv");
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            Table::from_csv_path(&path),
            Err(DatasetError::Io(_))
        ));
    }

    #[test]
    fn test_from_csv_path() {
        let path = std::env::temp_dir().join("colscale_test_table.csv");
        std::fs::write(&path, CSV).unwrap();
        let table = Table::from_csv_path(&path).unwrap();
        assert_eq!(table.n_rows(), 3);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_column_not_found() {
        assert!(matches!(
            Table::sample().column("Height"),
            Err(DatasetError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_push_column_checks_length_and_name() {
        let mut table = Table::sample();
        assert!(matches!(
            table.push_column("Bonus", vec![1.0, 2.0]),
            Err(DatasetError::LengthMismatch {
                expected: 5,
                got: 2,
                ..
            })
        ));
        assert!(matches!(
            table.push_column("Age", vec![0.0; 5]),
            Err(DatasetError::DuplicateColumn(_))
        ));
        table.push_column("Bonus", vec![0.0; 5]).unwrap();
        assert_eq!(table.n_columns(), 3);
    }

    #[test]
    fn test_from_columns() {
        let table =
            Table::from_columns(vec![("x", vec![1.0, 2.0]), ("y", vec![3.0, 4.0])]).unwrap();
        assert_eq!(table.column("y").unwrap(), &[3.0, 4.0]);
        assert!(Table::from_columns(vec![("x", vec![1.0]), ("y", vec![])]).is_err());
    }

    #[test]
    fn test_display_integral_columns() {
        let table = Table::from_columns(vec![
            ("Age", vec![25.0, 32.0]),
            ("Salary", vec![35000.0, 48000.0]),
        ])
        .unwrap();
        let expected = "   Age  Salary\n0   25   35000\n1   32   48000";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_display_with_precision() {
        let table = Table::from_columns(vec![("v", vec![0.0, 0.351351, 1.0])]).unwrap();
        let expected = "      v\n0  0.00\n1  0.35\n2  1.00";
        assert_eq!(table.display_with_precision(2).to_string(), expected);
    }

    #[test]
    fn test_display_empty_table() {
        assert_eq!(Table::new().to_string(), "Empty table");
    }
}
