//! Scale one numeric column of a table with min-max and z-score normalization.
//!
//! Without `--input` the built-in Age/Salary sample is used. Both scaled
//! columns are appended to the table as `<column>_MinMax` and `<column>_Zscore`.
//!
//! Run with: cargo run --bin colscale -- --input lib/data/sample_dataset.csv

use clap::Parser;
use colscale::dataset::Table;
use colscale::preprocessing::{FittedTransformer, MinMaxScaler, Transformer, ZScoreScaler};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "colscale", version, about = "Min-max and z-score scaling of a table column")]
struct Args {
    /// CSV file with a header row; the built-in sample is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Name of the numeric column to scale
    #[arg(short, long, default_value = "Salary")]
    column: String,

    /// Decimals printed for non-integral values
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Directory to write the fitted parameters to (minmax.bin, zscore.bin)
    #[arg(long)]
    save_params: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut table = match &args.input {
        Some(path) => Table::from_csv_path(path)?,
        None => Table::sample(),
    };
    info!(rows = table.n_rows(), column = %args.column, "scaling column");

    println!("Original Data:\n{}", table.display_with_precision(args.precision));

    let values = table.column(&args.column)?.to_vec();

    let minmax = MinMaxScaler::new().fit(&values)?;
    let zscore = ZScoreScaler::new().fit(&values)?;

    table.push_column(format!("{}_MinMax", args.column), minmax.transform(&values)?)?;
    table.push_column(format!("{}_Zscore", args.column), zscore.transform(&values)?)?;

    if let Some(dir) = &args.save_params {
        std::fs::create_dir_all(dir)?;
        minmax.save_to_file(dir.join("minmax.bin"))?;
        zscore.save_to_file(dir.join("zscore.bin"))?;
        info!(dir = %dir.display(), "saved fitted parameters");
    }

    println!(
        "\nAfter Normalization:\n{}",
        table.display_with_precision(args.precision)
    );
    Ok(())
}
