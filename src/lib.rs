/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value of the specified field.
/// The generated method includes appropriate documentation describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_state)
/// - `$field_name` - The name of the field to access (e.g., state)
/// - `$return_type` - The return type of the getter method
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to a field.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (typically a reference type like `&str`)
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name.as_ref()
        }
    };
}

/// Error types returned when the catalog or the configuration cannot be loaded.
///
/// Only the loading layer ever returns errors. Lookups, rendering and plotting degrade
/// silently: a missing record renders nothing, a missing collaborator skips its step.
pub mod error;

/// Runtime configuration of the hub.
///
/// `HubConfig::default()` reproduces the reference page: catalog at `data/algorithms.json`,
/// dark plot theme, the four math delimiter pairs and the repository attribution link.
pub mod config;

/// The algorithm catalog and the content store that fetches it.
///
/// # Data Model
/// - **AlgorithmCatalog**: `supervised` and `unsupervised` partitions, each mapping technique identifiers to records
/// - **TechniqueRecord**: name plus optional types, hyperparameters, pros/cons, uses, kernels, math and examples
/// - **ExampleData**: confusion matrix, residual pairs and chart data used for the metric panel and plots
///
/// # Loading
/// - `ContentStore::load` fetches once through a `CatalogSource` and swallows failures
/// - `FileSource` reads from disk, `StaticSource` serves in-memory documents
///
/// # Examples
/// ```rust
/// use ml_deconstructed::catalog::{ContentStore, StaticSource};
///
/// let source = StaticSource::new().with_document(
///     "data/algorithms.json",
///     r#"{"supervised": {"techniques": {"knn": {"name": "K-Nearest Neighbors"}}},
///        "unsupervised": {"techniques": {}}}"#,
/// );
/// let store = ContentStore::new(source, "data/algorithms.json");
/// assert!(store.load());
/// assert!(store.catalog().is_some());
/// ```
pub mod catalog;

/// Technique lookup across the two catalog partitions (supervised first).
///
/// # Examples
/// ```rust
/// use ml_deconstructed::catalog::{ContentStore, StaticSource};
/// use ml_deconstructed::lookup::resolve;
///
/// let store = ContentStore::new(StaticSource::new(), "data/algorithms.json");
/// store.load();
/// // The document was never served, so every lookup misses
/// assert!(resolve(&store, "knn").is_none());
/// ```
pub mod lookup;

/// Evaluation metrics shown in the details panel.
///
/// # Classification Metrics
/// - **ConfusionMatrix**: built from a `[[TN, FP], [FN, TP]]` grid; accuracy, precision, recall, F1, specificity
/// - **classification_metrics**: the four panel metrics in one value
///
/// # Regression Metrics
/// - **regression_metrics**: MAE, MSE, RMSE and R² over paired true/predicted values
///
/// # Metric Cards
/// - **metric_cards**: labelled values for the Metrics panel, formatted with three decimals
///
/// # Examples
/// ```rust
/// use ml_deconstructed::metric::*;
/// use ndarray::array;
///
/// let cm = classification_metrics(&[[50.0, 10.0], [5.0, 35.0]]);
/// assert!((cm.accuracy - 0.85).abs() < 1e-12);
///
/// let rm = regression_metrics(&array![1.0, 2.0, 3.0], &array![1.0, 2.0, 4.0]);
/// assert!((rm.r2 - 0.5).abs() < 1e-12);
/// ```
pub mod metric;

/// Math expression handling: delimiter configuration, the `MathRenderer` collaborator
/// interface and a delimiter splitter usable by concrete renderers.
pub mod math;

/// Plotly-shaped figure specifications and the plot adapters that draw them.
///
/// # Adapters
/// - **confusion_matrix**: heatmap with fixed Pred/True labels
/// - **fit_curve**: sample scatter plus the demonstration curve `tanh(x)·3 + 0.2x`
/// - **residuals**: (predicted, true − predicted) scatter
/// - **elbow**: inertia against k
/// - **clusters_2d**: scatter colored by label
/// - **explained_variance**: one bar per principal component
/// - **sigmoid_curve**: the static logistic-function chart
///
/// # Examples
/// ```rust
/// use ml_deconstructed::plot::*;
///
/// let figure = confusion_matrix_figure(&[[50.0, 10.0], [5.0, 35.0]], &PlotTheme::default());
/// let json = serde_json::to_value(&figure).unwrap();
/// assert_eq!(json["data"][0]["type"], "heatmap");
/// assert_eq!(json["config"]["displayModeBar"], false);
/// ```
pub mod plot;

/// Assembly of the details view for one technique.
pub mod render;

/// Two-state modal dialog that displays a rendered view.
pub mod modal;

/// Fixed table of navigation anchors routed to technique identifiers.
pub mod navigation;

/// Deferred task queue used to run plot rendering on the next scheduling turn.
pub mod scheduler;

/// The page-level orchestrator: loads the catalog, binds anchors, opens details and
/// defers plot drawing.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::config::HubConfig;
/// use ml_deconstructed::catalog::StaticSource;
/// use ml_deconstructed::hub::LearningHub;
///
/// let mut hub = LearningHub::new(HubConfig::default(), StaticSource::bundled());
/// hub.start(["#knn", "#home"]);
/// assert!(hub.click_anchor("#knn"));
/// assert!(hub.modal().is_shown());
/// assert!(!hub.click_anchor("#home"));
/// ```
pub mod hub;

/// A convenience module that re-exports the most commonly used types and functions from this crate.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::prelude::*;
///
/// let metrics = classification_metrics(&[[1.0, 0.0], [0.0, 1.0]]);
/// assert_eq!(metrics.f1, 1.0);
/// ```
pub mod prelude;

#[cfg(test)]
mod test;
