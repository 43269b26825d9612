use approx::assert_abs_diff_eq;
use ml_deconstructed::catalog::{ExampleData, Residuals};
use ml_deconstructed::metric::*;
use ndarray::prelude::*;

#[test]
fn test_confusion_matrix_scenario() {
    let m = classification_metrics(&[[50.0, 10.0], [5.0, 35.0]]);
    assert_abs_diff_eq!(m.accuracy, 0.85, epsilon = 1e-12);
    assert_abs_diff_eq!(m.precision, 0.7777777777777778, epsilon = 1e-12);
    assert_abs_diff_eq!(m.recall, 0.875, epsilon = 1e-12);
    assert_abs_diff_eq!(m.f1, 0.8235294117647058, epsilon = 1e-12);
}

#[test]
fn test_regression_scenario() {
    let m = regression_metrics(&array![1.0, 2.0, 3.0], &array![1.0, 2.0, 4.0]);
    assert_abs_diff_eq!(m.mae, 0.3333333333333333, epsilon = 1e-12);
    assert_abs_diff_eq!(m.mse, 0.3333333333333333, epsilon = 1e-12);
    assert_abs_diff_eq!(m.rmse, 0.5773502691896257, epsilon = 1e-12);
    assert_abs_diff_eq!(m.r2, 0.5, epsilon = 1e-12);
}

#[test]
fn test_zero_denominators_resolve_to_zero() {
    for grid in [
        [[7.0, 0.0], [3.0, 0.0]],
        [[7.0, 3.0], [0.0, 0.0]],
        [[0.0, 0.0], [0.0, 0.0]],
    ] {
        let m = classification_metrics(&grid);
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.recall, 0.0);
        assert_eq!(m.f1, 0.0);
    }
}

#[test]
fn test_regression_invariants() {
    let y_true = Array1::linspace(-5.0, 5.0, 21);
    let y_pred = y_true.mapv(|v: f64| v * 0.9 + 0.3);
    let m = regression_metrics(&y_true, &y_pred);
    assert_eq!(m.rmse, m.mse.sqrt());
    assert!(m.mae >= 0.0);
    assert!(m.mae <= m.rmse);
    assert!(m.r2 < 1.0);
}

#[test]
fn test_metric_cards_from_catalog_examples() {
    let examples: ExampleData = serde_json::from_str(
        r#"{"residuals": {"y_true": [3.0, -0.5, 2.0, 7.0], "y_pred": [2.5, 0.0, 2.0, 8.0]}}"#,
    )
    .unwrap();
    let cards = metric_cards(Some(&examples));
    let shown: Vec<(&str, String)> = cards.iter().map(|c| (c.label, c.formatted())).collect();
    assert_eq!(
        shown,
        vec![
            ("MAE", "0.500".to_string()),
            ("MSE", "0.375".to_string()),
            ("RMSE", "0.612".to_string()),
            ("R²", "0.949".to_string()),
        ]
    );

    let empty = ExampleData {
        residuals: Some(Residuals::default()),
        ..ExampleData::default()
    };
    // Empty residuals are not guarded: the cards show NaN
    let cards = metric_cards(Some(&empty));
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(|c| c.formatted() == "NaN"));
}
