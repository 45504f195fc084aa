//! End-to-end scenarios over the Age/Salary dataset.

use colscale::dataset::Table;
use colscale::preprocessing::{
    FittedMinMaxScaler, FittedTransformer, FittedZScoreScaler, MinMaxScaler, PreprocessingError,
    Transformer, ZScoreScaler,
};

const SALARY: [f64; 5] = [35000.0, 48000.0, 56000.0, 60000.0, 72000.0];

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}

#[test]
fn minmax_salary_scenario() {
    let fitted = MinMaxScaler::new().fit(&SALARY).unwrap();
    assert_eq!(fitted.data_min(), 35000.0);
    assert_eq!(fitted.data_max(), 72000.0);

    let scaled = fitted.transform(&SALARY).unwrap();
    assert_eq!(scaled[0], 0.0);
    assert_close(scaled[1], 0.3514, 1e-4);
    assert_close(scaled[2], 0.5676, 1e-4);
    assert_close(scaled[3], 0.6757, 1e-4);
    assert_eq!(scaled[4], 1.0);
}

#[test]
fn zscore_salary_scenario() {
    let fitted = ZScoreScaler::new().fit(&SALARY).unwrap();
    assert_close(fitted.mean(), 54200.0, 1e-9);
    assert_close(fitted.std(), 12335.315, 1e-3);

    let scaled = fitted.transform(&SALARY).unwrap();
    assert_close(scaled[0], -1.5565, 1e-3);
    assert_close(scaled[4], 1.4430, 1e-3);

    let n = scaled.len() as f64;
    let mean = scaled.iter().sum::<f64>() / n;
    let std = (scaled.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();
    assert_close(mean, 0.0, 1e-9);
    assert_close(std, 1.0, 1e-9);
}

#[test]
fn constant_column_scales_to_zero() {
    let column = [5.0, 5.0, 5.0];
    assert_eq!(
        MinMaxScaler::new().fit_transform(&column).unwrap(),
        vec![0.0; 3]
    );
    assert_eq!(
        ZScoreScaler::new().fit_transform(&column).unwrap(),
        vec![0.0; 3]
    );
}

#[test]
fn empty_and_non_finite_columns_are_rejected() {
    assert!(matches!(
        MinMaxScaler::new().fit(&[]),
        Err(PreprocessingError::EmptyData(_))
    ));
    assert!(matches!(
        ZScoreScaler::new().fit(&[]),
        Err(PreprocessingError::EmptyData(_))
    ));
    assert!(matches!(
        MinMaxScaler::new().fit(&[1.0, f64::NAN]),
        Err(PreprocessingError::InvalidValue { .. })
    ));
    assert!(matches!(
        ZScoreScaler::new().fit(&[f64::INFINITY]),
        Err(PreprocessingError::InvalidValue { .. })
    ));
}

#[test]
fn train_parameters_apply_to_new_data() {
    let minmax = MinMaxScaler::new().fit(&SALARY).unwrap();
    let zscore = ZScoreScaler::new().fit(&SALARY).unwrap();

    let unseen = [30000.0, 90000.0];
    let scaled = minmax.transform(&unseen).unwrap();
    assert!(scaled[0] < 0.0);
    assert!(scaled[1] > 1.0);

    let z = zscore.transform(&[54200.0]).unwrap();
    assert_eq!(z, vec![0.0]);
}

#[test]
fn fitted_scalers_survive_a_file_round_trip() {
    let dir = std::env::temp_dir().join("colscale_scenarios");
    std::fs::create_dir_all(&dir).unwrap();

    let minmax = MinMaxScaler::new().fit(&SALARY).unwrap();
    let zscore = ZScoreScaler::new().fit(&SALARY).unwrap();
    minmax.save_to_file(dir.join("minmax.bin")).unwrap();
    zscore.save_to_file(dir.join("zscore.bin")).unwrap();

    let minmax_loaded = FittedMinMaxScaler::load_from_file(dir.join("minmax.bin")).unwrap();
    let zscore_loaded = FittedZScoreScaler::load_from_file(dir.join("zscore.bin")).unwrap();

    assert_eq!(
        minmax_loaded.transform(&SALARY).unwrap(),
        minmax.transform(&SALARY).unwrap()
    );
    assert_eq!(
        zscore_loaded.transform(&SALARY).unwrap(),
        zscore.transform(&SALARY).unwrap()
    );

    std::fs::remove_dir_all(dir).ok();
}

#[test]
fn csv_table_gets_scaled_columns_appended() {
    let csv = "Name,Age,Salary\nAsha,25,35000\nBen,32,48000\nChen,47,56000\nDana,51,60000\nEli,62,72000\n";
    let mut table = Table::from_csv_reader(csv.as_bytes()).unwrap();

    let salary = table.column("Salary").unwrap().to_vec();
    assert_eq!(salary, SALARY.to_vec());

    let minmax = MinMaxScaler::new().fit_transform(&salary).unwrap();
    let zscore = ZScoreScaler::new().fit_transform(&salary).unwrap();
    table.push_column("Salary_MinMax", minmax).unwrap();
    table.push_column("Salary_Zscore", zscore).unwrap();

    let rendered = table.display_with_precision(4).to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("Salary_MinMax"));
    assert!(lines[0].contains("Salary_Zscore"));
    assert!(lines[1].starts_with("0  Asha"));
    assert!(lines[1].contains("0.0000"));
    assert!(lines[1].contains("-1.5565"));
    assert!(lines[5].contains("1.0000"));
}

#[test]
fn sample_table_renders_like_a_dataframe() {
    let expected = "\
   Age  Salary
0   25   35000
1   32   48000
2   47   56000
3   51   60000
4   62   72000";
    assert_eq!(Table::sample().to_string(), expected);
}

#[test]
fn missing_csv_cell_surfaces_as_invalid_value() {
    let csv = "Age,Salary\n25,35000\n32,\n47,56000\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();

    let salary = table.column("Salary").unwrap();
    assert!(salary[1].is_nan());
    assert!(matches!(
        MinMaxScaler::new().fit(salary),
        Err(PreprocessingError::InvalidValue { index: 1, .. })
    ));
}
