//! End-to-end pipeline tests over a realistic monthly production CSV.

use approx::assert_relative_eq;
use chrono::{TimeZone, Utc};
use milkcast::pipeline::{Pipeline, PipelineConfig};
use milkcast::MilkcastError;

/// First three years of the classic monthly milk production dataset.
const MILK_CSV: &str = "\
Date,Monthly milk production (pounds per cow)
1962-01-01,589
1962-02-01,561
1962-03-01,640
1962-04-01,656
1962-05-01,727
1962-06-01,697
1962-07-01,640
1962-08-01,599
1962-09-01,568
1962-10-01,577
1962-11-01,553
1962-12-01,582
1963-01-01,600
1963-02-01,566
1963-03-01,653
1963-04-01,673
1963-05-01,742
1963-06-01,716
1963-07-01,660
1963-08-01,617
1963-09-01,583
1963-10-01,587
1963-11-01,565
1963-12-01,598
1964-01-01,628
1964-02-01,618
1964-03-01,688
1964-04-01,705
1964-05-01,770
1964-06-01,736
1964-07-01,678
1964-08-01,639
1964-09-01,604
1964-10-01,611
1964-11-01,594
1964-12-01,634
";

#[test]
fn full_run_produces_aligned_report() {
    let report = Pipeline::default().run(MILK_CSV.as_bytes()).unwrap();

    assert_eq!(report.series.len(), 36);
    assert_eq!(report.series.name(), "Production");
    assert_eq!(
        report.series.timestamps()[0],
        Utc.with_ymd_and_hms(1962, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        report.series.timestamps()[35],
        Utc.with_ymd_and_hms(1964, 12, 1, 0, 0, 0).unwrap()
    );

    // All derived series align by position with the observations.
    assert_eq!(report.derived.len(), 3);
    for derived in &report.derived {
        assert_eq!(derived.values.len(), 36);
    }
}

#[test]
fn sma_warms_up_over_eleven_months() {
    let report = Pipeline::default().run(MILK_CSV.as_bytes()).unwrap();
    let sma = &report.derived("SMA_12").unwrap().values;

    for value in &sma[..11] {
        assert!(value.is_nan());
    }

    // First defined value is the mean of the first twelve months.
    let first_year: f64 = report.series.values()[..12].iter().sum::<f64>() / 12.0;
    assert_relative_eq!(sma[11], first_year, epsilon = 1e-10);
    assert!(sma[11..].iter().all(|v| v.is_finite()));
}

#[test]
fn ema_series_follow_the_non_adjusted_recurrence() {
    let report = Pipeline::default().run(MILK_CSV.as_bytes()).unwrap();
    let values = report.series.values();

    let ema = &report.derived("EMA_12").unwrap().values;
    assert_relative_eq!(ema[0], values[0], epsilon = 1e-10);
    let alpha = 2.0 / 13.0;
    for i in 1..values.len() {
        let expected = alpha * values[i] + (1.0 - alpha) * ema[i - 1];
        assert_relative_eq!(ema[i], expected, epsilon = 1e-10);
    }

    let custom = &report.derived("Custom_EMA_0.6").unwrap().values;
    assert_relative_eq!(custom[0], values[0], epsilon = 1e-10);
    for i in 1..values.len() {
        let expected = 0.6 * values[i] + 0.4 * custom[i - 1];
        assert_relative_eq!(custom[i], expected, epsilon = 1e-10);
    }
}

#[test]
fn forecast_is_flat_at_the_final_training_level() {
    let report = Pipeline::default().run(MILK_CSV.as_bytes()).unwrap();

    // floor(0.8 * 36) = 28 train points, 8 test points.
    assert_eq!(report.forecast.horizon(), 8);
    assert_eq!(
        report.forecast.timestamps.as_slice(),
        &report.series.timestamps()[28..]
    );
    assert_eq!(
        report.forecast.actual.as_slice(),
        &report.series.values()[28..]
    );

    // Replay the level recurrence over the training prefix.
    let train = &report.series.values()[..28];
    let mut level = train[0];
    for &y in &train[1..] {
        level = 0.1 * y + 0.9 * level;
    }
    for &pred in &report.forecast.predicted {
        assert_relative_eq!(pred, level, epsilon = 1e-10);
    }

    // Interval bounds bracket the point forecast.
    let lower = report.forecast.lower.as_ref().unwrap();
    let upper = report.forecast.upper.as_ref().unwrap();
    for i in 0..report.forecast.horizon() {
        assert!(lower[i] < report.forecast.predicted[i]);
        assert!(upper[i] > report.forecast.predicted[i]);
    }

    // Metrics are computed against the held-out actuals.
    assert!(report.forecast.metrics.mae > 0.0);
    assert!(report.forecast.metrics.rmse >= report.forecast.metrics.mae);
}

#[test]
fn missing_column_surfaces_before_any_computation() {
    let csv = "Date,Yield\n1962-01-01,589\n";
    let result = Pipeline::default().run(csv.as_bytes());
    assert_eq!(
        result.unwrap_err(),
        MilkcastError::MissingColumn {
            label: "Monthly milk production (pounds per cow)".to_string(),
        }
    );
}

#[test]
fn non_numeric_cell_is_a_typed_failure() {
    let csv = "\
Date,Monthly milk production (pounds per cow)
1962-01-01,589
1962-02-01,missing
";
    let result = Pipeline::default().run(csv.as_bytes());
    assert_eq!(
        result.unwrap_err(),
        MilkcastError::NonNumericValue {
            line: 3,
            value: "missing".to_string(),
        }
    );
}

#[test]
fn unparseable_date_index_is_a_typed_failure() {
    let csv = "\
Month,Monthly milk production (pounds per cow)
January,589
February,561
";
    let result = Pipeline::default().run(csv.as_bytes());
    assert!(matches!(
        result,
        Err(MilkcastError::MalformedTimestamp(_))
    ));
}

#[test]
fn index_free_csv_uses_the_epoch_origin() {
    let mut csv = String::from("Monthly milk production (pounds per cow)\n");
    for i in 0..10 {
        csv.push_str(&format!("{}\n", 589 + i));
    }

    let report = Pipeline::default().run(csv.as_bytes()).unwrap();
    assert_eq!(
        report.series.timestamps()[0],
        Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        report.series.timestamps()[9],
        Utc.with_ymd_and_hms(1970, 10, 1, 0, 0, 0).unwrap()
    );
}

#[test]
fn short_series_has_undefined_sma_but_defined_ema() {
    let mut csv = String::from("Date,Monthly milk production (pounds per cow)\n");
    for i in 0..10 {
        csv.push_str(&format!("1962-{:02}-01,{}\n", i + 1, 589 + i));
    }

    let report = Pipeline::default().run(csv.as_bytes()).unwrap();

    let sma = &report.derived("SMA_12").unwrap().values;
    assert!(sma.iter().all(|v| v.is_nan()));

    let ema = &report.derived("EMA_12").unwrap().values;
    assert!(ema.iter().all(|v| v.is_finite()));
    let custom = &report.derived("Custom_EMA_0.6").unwrap().values;
    assert!(custom.iter().all(|v| v.is_finite()));
}

#[test]
fn custom_parameters_flow_through_series_names() {
    let config = PipelineConfig::default()
        .with_sma_window(6)
        .with_ema_span(6)
        .with_ema_alpha(0.3);
    let report = Pipeline::new(config).run(MILK_CSV.as_bytes()).unwrap();

    assert!(report.derived("SMA_6").is_some());
    assert!(report.derived("EMA_6").is_some());
    assert!(report.derived("Custom_EMA_0.3").is_some());
}
