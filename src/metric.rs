use crate::catalog::ExampleData;
use ndarray::Data;
use ndarray::prelude::*;

/// 2×2 confusion matrix grid laid out as `[[TN, FP], [FN, TP]]`
pub type ConfusionGrid = [[f64; 2]; 2];

/// Confusion Matrix for binary classification evaluation.
///
/// Stores counts of true positives, false positives, true negatives, and false negatives.
/// Counts are kept as `f64` because the catalog stores them as plain JSON numbers.
///
/// # Fields
///
/// - `tp` - True positive count
/// - `fp` - False positive count
/// - `tn` - True negative count
/// - `fn_` - False negative count
///
/// # Examples
/// ```rust
/// use ml_deconstructed::metric::ConfusionMatrix;
///
/// let cm = ConfusionMatrix::from_grid(&[[50.0, 10.0], [5.0, 35.0]]);
///
/// println!("Accuracy: {:.2}", cm.accuracy());
/// println!("Precision: {:.2}", cm.precision());
/// println!("Recall: {:.2}", cm.recall());
/// println!("F1 Score: {:.2}", cm.f1_score());
///
/// let (tp, fp, tn, fn_) = cm.get_counts();
/// assert_eq!((tp, fp, tn, fn_), (35.0, 10.0, 50.0, 5.0));
/// println!("{}", cm.summary());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionMatrix {
    tp: f64,
    fp: f64,
    tn: f64,
    fn_: f64,
}

impl ConfusionMatrix {
    /// Create a confusion matrix from a `[[TN, FP], [FN, TP]]` grid.
    ///
    /// # Parameters
    ///
    /// - `grid` - Row = actual class, column = predicted class
    ///
    /// # Returns
    ///
    /// - `Self` - Confusion matrix with the grid's counts
    pub fn from_grid(grid: &ConfusionGrid) -> Self {
        let [[tn, fp], [fn_, tp]] = *grid;
        Self { tp, fp, tn, fn_ }
    }

    /// Get the components of the confusion matrix.
    ///
    /// # Returns
    ///
    /// - `(f64, f64, f64, f64)` - Tuple of (tp, fp, tn, fn) counts
    pub fn get_counts(&self) -> (f64, f64, f64, f64) {
        (self.tp, self.fp, self.tn, self.fn_)
    }

    /// Calculate accuracy: (TP + TN) / (TP + TN + FP + FN).
    ///
    /// # Returns
    ///
    /// - `f64` - Accuracy in the range \[0.0, 1.0\]; NaN for an all-zero matrix
    pub fn accuracy(&self) -> f64 {
        (self.tp + self.tn) / (self.tp + self.tn + self.fp + self.fn_)
    }

    /// Calculate error rate: 1 - accuracy.
    pub fn error_rate(&self) -> f64 {
        1.0 - self.accuracy()
    }

    /// Calculate precision: TP / (TP + FP).
    ///
    /// # Returns
    ///
    /// - `f64` - Precision in the range \[0.0, 1.0\] (returns 0.0 when there are no positive predictions)
    pub fn precision(&self) -> f64 {
        if self.tp + self.fp == 0.0 {
            return 0.0;
        }
        self.tp / (self.tp + self.fp)
    }

    /// Calculate recall (sensitivity): TP / (TP + FN).
    ///
    /// # Returns
    ///
    /// - `f64` - Recall in the range \[0.0, 1.0\] (returns 0.0 when there are no actual positives)
    pub fn recall(&self) -> f64 {
        if self.tp + self.fn_ == 0.0 {
            return 0.0;
        }
        self.tp / (self.tp + self.fn_)
    }

    /// Calculate specificity: TN / (TN + FP).
    ///
    /// # Returns
    ///
    /// - `f64` - Specificity in the range \[0.0, 1.0\] (returns 1.0 when there are no actual negatives)
    pub fn specificity(&self) -> f64 {
        if self.tn + self.fp == 0.0 {
            return 1.0;
        }
        self.tn / (self.tn + self.fp)
    }

    /// Calculate F1 score: 2 * (Precision * Recall) / (Precision + Recall).
    ///
    /// # Returns
    ///
    /// - `f64` - F1 score in the range \[0.0, 1.0\] (returns 0.0 when both precision and recall are 0.0)
    pub fn f1_score(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();

        if precision + recall == 0.0 {
            return 0.0;
        }

        2.0 * (precision * recall) / (precision + recall)
    }

    /// The four metrics shown in the Metrics panel
    pub fn metrics(&self) -> ClassificationMetrics {
        ClassificationMetrics {
            accuracy: self.accuracy(),
            precision: self.precision(),
            recall: self.recall(),
            f1: self.f1_score(),
        }
    }

    /// Generate a formatted summary of the confusion matrix and derived metrics.
    ///
    /// # Returns
    ///
    /// - `String` - Text summary containing matrix counts and metrics with four decimal places
    pub fn summary(&self) -> String {
        format!(
            "Confusion Matrix:\n\
        |                 | Predicted Positive | Predicted Negative |\n\
        |-----------------|--------------------|--------------------|\n\
        | Actual Positive | TP: {}             | FN: {}             |\n\
        | Actual Negative | FP: {}             | TN: {}             |\n\
        \n\
        Performance Metrics:\n\
        - Accuracy: {:.4}\n\
        - Error Rate: {:.4}\n\
        - Precision: {:.4}\n\
        - Recall: {:.4}\n\
        - Specificity: {:.4}\n\
        - F1 Score: {:.4}",
            self.tp,
            self.fn_,
            self.fp,
            self.tn,
            self.accuracy(),
            self.error_rate(),
            self.precision(),
            self.recall(),
            self.specificity(),
            self.f1_score()
        )
    }
}

/// Binary classification metrics derived from a confusion matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Calculates accuracy, precision, recall and F1 from a `[[TN, FP], [FN, TP]]` grid.
///
/// Zero denominators in precision, recall and F1 resolve to 0.0 instead of NaN.
///
/// # Parameters
///
/// - `grid` - Confusion matrix grid
///
/// # Examples
/// ```rust
/// use ml_deconstructed::metric::classification_metrics;
///
/// let m = classification_metrics(&[[50.0, 10.0], [5.0, 35.0]]);
/// assert!((m.accuracy - 0.85).abs() < 1e-12);
/// assert!((m.precision - 35.0 / 45.0).abs() < 1e-12);
/// assert!((m.recall - 0.875).abs() < 1e-12);
/// assert!((m.f1 - 0.8235294117647058).abs() < 1e-12);
/// ```
///
/// # Returns
///
/// - `ClassificationMetrics` - The four metrics
pub fn classification_metrics(grid: &ConfusionGrid) -> ClassificationMetrics {
    ConfusionMatrix::from_grid(grid).metrics()
}

/// Regression error metrics over paired values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub mae: f64,
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
}

/// Calculates MAE, MSE, RMSE and R² between ground-truth and predicted values.
///
/// - MAE = mean(|y_true - y_pred|)
/// - MSE = mean((y_true - y_pred)^2)
/// - RMSE = sqrt(MSE)
/// - R² = 1 - SS_res / SS_tot, with SS_tot taken around the mean of `y_true`
///
/// Empty input and constant `y_true` are not special-cased: the results are NaN or
/// ±infinity as the arithmetic dictates. Arrays of different lengths are compared over
/// their paired prefix.
///
/// # Parameters
///
/// - `y_true` - Ground-truth values for each sample
/// - `y_pred` - Predicted values for each sample
///
/// # Examples
/// ```rust
/// use ndarray::array;
/// use ml_deconstructed::metric::regression_metrics;
///
/// let m = regression_metrics(&array![1.0, 2.0, 3.0], &array![1.0, 2.0, 4.0]);
/// assert!((m.mae - 1.0 / 3.0).abs() < 1e-12);
/// assert!((m.mse - 1.0 / 3.0).abs() < 1e-12);
/// assert_eq!(m.rmse, m.mse.sqrt());
/// assert!((m.r2 - 0.5).abs() < 1e-12);
/// ```
///
/// # Returns
///
/// - `RegressionMetrics` - The four metrics
pub fn regression_metrics<S1, S2>(
    y_true: &ArrayBase<S1, Ix1>,
    y_pred: &ArrayBase<S2, Ix1>,
) -> RegressionMetrics
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let paired = y_true.len().min(y_pred.len());
    if y_true.len() != y_pred.len() {
        log::debug!(
            "Comparing the first {} of {} actual and {} predicted values",
            paired,
            y_true.len(),
            y_pred.len()
        );
    }
    let y_true = y_true.slice(s![..paired]);
    let y_pred = y_pred.slice(s![..paired]);

    let n = paired as f64;

    // Sum of absolute and squared errors in one pass
    let (sum_abs, sum_sq) = y_true
        .iter()
        .zip(y_pred.iter())
        .fold((0.0, 0.0), |(abs_acc, sq_acc), (&actual, &pred)| {
            let error = actual - pred;
            (abs_acc + error.abs(), sq_acc + error * error)
        });

    let mae = sum_abs / n;
    let mse = sum_sq / n;

    let mean = y_true.sum() / n;
    let ss_tot = y_true.fold(0.0, |acc, &actual| {
        let deviation = actual - mean;
        acc + deviation * deviation
    });

    RegressionMetrics {
        mae,
        mse,
        rmse: mse.sqrt(),
        r2: 1.0 - sum_sq / ss_tot,
    }
}

/// A labelled value displayed in the Metrics panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: f64,
}

impl MetricCard {
    /// The value with three decimals, e.g. `0.850`
    pub fn formatted(&self) -> String {
        format_metric(self.value)
    }
}

/// Formats a metric with three decimals.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`; negative zero prints as `0.000`.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::metric::format_metric;
///
/// assert_eq!(format_metric(0.85), "0.850");
/// assert_eq!(format_metric(f64::NAN), "NaN");
/// assert_eq!(format_metric(f64::NEG_INFINITY), "-Infinity");
/// ```
pub fn format_metric(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0.000".to_string()
    } else {
        format!("{:.3}", value)
    }
}

/// Builds the Metrics panel cards from a technique's example data.
///
/// A confusion matrix yields Accuracy, Precision, Recall and F1; residuals yield MAE, MSE,
/// RMSE and R². Residuals whose two sequences differ in length are skipped.
///
/// # Parameters
///
/// - `examples` - Example data of the technique, if any
///
/// # Returns
///
/// - `Vec<MetricCard>` - Cards in display order; empty when there is nothing to show
pub fn metric_cards(examples: Option<&ExampleData>) -> Vec<MetricCard> {
    let mut cards = Vec::new();
    let Some(examples) = examples else {
        return cards;
    };

    if let Some(grid) = &examples.confusion_matrix {
        let m = classification_metrics(grid);
        cards.extend([
            MetricCard {
                label: "Accuracy",
                value: m.accuracy,
            },
            MetricCard {
                label: "Precision",
                value: m.precision,
            },
            MetricCard {
                label: "Recall",
                value: m.recall,
            },
            MetricCard {
                label: "F1",
                value: m.f1,
            },
        ]);
    }

    if let Some(residuals) = &examples.residuals {
        if residuals.y_true.len() != residuals.y_pred.len() {
            log::warn!(
                "Skipping regression metrics: y_true has {} values, y_pred has {}",
                residuals.y_true.len(),
                residuals.y_pred.len()
            );
        } else {
            let m = regression_metrics(
                &ArrayView1::from(residuals.y_true.as_slice()),
                &ArrayView1::from(residuals.y_pred.as_slice()),
            );
            cards.extend([
                MetricCard {
                    label: "MAE",
                    value: m.mae,
                },
                MetricCard {
                    label: "MSE",
                    value: m.mse,
                },
                MetricCard {
                    label: "RMSE",
                    value: m.rmse,
                },
                MetricCard {
                    label: "R²",
                    value: m.r2,
                },
            ]);
        }
    }

    cards
}
