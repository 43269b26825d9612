use crate::catalog::*;
use crate::plot::*;
use approx::assert_abs_diff_eq;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps every figure it is asked to draw.
#[derive(Default)]
struct RecordingBackend {
    drawn: RefCell<Vec<(String, Figure)>>,
}

impl ChartingBackend for RecordingBackend {
    fn new_plot(&self, target: &str, figure: &Figure) {
        self.drawn
            .borrow_mut()
            .push((target.to_string(), figure.clone()));
    }
}

fn to_json(figure: &Figure) -> Value {
    serde_json::to_value(figure).unwrap()
}

fn theme() -> PlotTheme {
    PlotTheme::default()
}

#[test]
fn test_dark_layout_and_config() {
    let json = to_json(&elbow_figure(
        &ElbowCurve {
            k: vec![1.0, 2.0],
            inertia: vec![10.0, 5.0],
        },
        &theme(),
    ));
    assert_eq!(json["layout"]["plot_bgcolor"], "#1F2937");
    assert_eq!(json["layout"]["paper_bgcolor"], "#1F2937");
    assert_eq!(json["layout"]["font"]["color"], "#F3F4F6");
    assert_eq!(json["layout"]["margin"], json!({"t": 20, "r": 10, "b": 40, "l": 40}));
    assert_eq!(json["config"], json!({"displayModeBar": false, "responsive": true}));
}

#[test]
fn test_confusion_matrix_figure() {
    let json = to_json(&confusion_matrix_figure(&[[50.0, 10.0], [5.0, 35.0]], &theme()));
    let trace = &json["data"][0];
    assert_eq!(trace["type"], "heatmap");
    assert_eq!(trace["z"], json!([[50.0, 10.0], [5.0, 35.0]]));
    assert_eq!(trace["x"], json!(["Pred 0", "Pred 1"]));
    assert_eq!(trace["y"], json!(["True 0", "True 1"]));
    assert_eq!(trace["colorscale"], "Blues");
    assert_eq!(json["layout"]["xaxis"]["side"], "top");
    assert_eq!(json["layout"]["yaxis"]["automargin"], true);
    assert_eq!(json["layout"]["margin"], json!({"t": 30, "r": 10, "b": 30, "l": 60}));
}

#[test]
fn test_fit_curve_figure() {
    let sample = SamplePoints {
        x: vec![-1.0, 0.0, 1.0],
        y: vec![-2.0, 0.0, 2.0],
    };
    let figure = fit_curve_figure(&sample, &theme());
    assert_eq!(figure.data.len(), 2);

    let json = to_json(&figure);
    assert_eq!(json["data"][0]["mode"], "markers");
    assert_eq!(json["data"][0]["name"], "Data");
    assert_eq!(json["data"][0]["marker"]["color"], "#60A5FA");
    assert_eq!(json["data"][1]["mode"], "lines");
    assert_eq!(json["data"][1]["name"], "SVR (demo)");
    assert_eq!(json["data"][1]["line"], json!({"color": "#10B981", "width": 3.0}));
}

#[test]
fn test_demo_fit_curve() {
    let (xs, ys) = demo_fit_curve();
    assert_eq!(xs.len(), FIT_CURVE_POINTS);
    assert_abs_diff_eq!(xs[0], -3.0);
    assert_abs_diff_eq!(xs[FIT_CURVE_POINTS - 1], 3.0);
    assert_abs_diff_eq!(ys[0], (-3.0f64).tanh() * 3.0 - 0.6, epsilon = 1e-12);
    // The curve is odd
    for i in 0..FIT_CURVE_POINTS {
        assert_abs_diff_eq!(ys[i], -ys[FIT_CURVE_POINTS - 1 - i], epsilon = 1e-9);
    }
}

#[test]
fn test_residuals_figure() {
    let figure = residuals_figure(&[3.0, -0.5, 2.0], &[2.5, 0.0, 2.0], &theme());
    let json = to_json(&figure);
    let trace = &json["data"][0];
    assert_eq!(trace["x"], json!([2.5, 0.0, 2.0]));
    assert_eq!(trace["y"], json!([0.5, -0.5, 0.0]));
    assert_eq!(trace["name"], "Residuals");
    assert_eq!(trace["marker"]["color"], "#F59E0B");
    assert_eq!(json["layout"]["xaxis"]["title"], "Predicted");
    assert_eq!(json["layout"]["yaxis"]["title"], "Residual");
}

#[test]
fn test_residuals_figure_uses_paired_prefix() {
    let figure = residuals_figure(&[1.0, 2.0, 3.0], &[1.0], &theme());
    let json = to_json(&figure);
    assert_eq!(json["data"][0]["x"], json!([1.0]));
    assert_eq!(json["data"][0]["y"], json!([0.0]));
}

#[test]
fn test_clusters_and_variance_figures() {
    let clusters = Clusters2D {
        x: vec![0.0, 1.0],
        y: vec![0.5, 1.5],
        labels: vec![0.0, 1.0],
    };
    let json = to_json(&clusters_2d_figure(&clusters, &theme()));
    let trace = &json["data"][0];
    assert_eq!(trace["marker"], json!({"color": [0.0, 1.0], "colorscale": "Viridis", "size": 10.0}));
    assert_eq!(trace["text"], json!([0.0, 1.0]));
    assert_eq!(json["layout"]["xaxis"]["title"], "x1");
    assert_eq!(json["layout"]["yaxis"]["title"], "x2");

    let variance = ExplainedVariance {
        components: vec![1.0, 2.0, 3.0],
        variance: vec![0.7, 0.2, 0.1],
    };
    let json = to_json(&explained_variance_figure(&variance, &theme()));
    let trace = &json["data"][0];
    assert_eq!(trace["type"], "bar");
    assert_eq!(trace["x"], json!(["PC1", "PC2", "PC3"]));
    assert_eq!(trace["marker"]["color"], "#10B981");
    assert_eq!(json["layout"]["yaxis"]["title"], "Explained Variance Ratio");
}

#[test]
fn test_sigmoid_figure() {
    let figure = sigmoid_figure(&theme());
    let json = to_json(&figure);
    let x = json["data"][0]["x"].as_array().unwrap();
    let y = json["data"][0]["y"].as_array().unwrap();
    assert_eq!(x.len(), SIGMOID_POINTS);
    assert_abs_diff_eq!(x[0].as_f64().unwrap(), -10.0);
    assert_abs_diff_eq!(y[100].as_f64().unwrap(), 0.5);
    assert_eq!(json["layout"]["title"], "Logistic Regression: Sigmoid Function");
    assert_eq!(json["layout"]["yaxis"]["range"], json!([0.0, 1.0]));
    assert_eq!(json["layout"]["xaxis"]["gridcolor"], "#374151");
    assert!(json["config"].get("displayModeBar").is_none());
}

#[test]
fn test_adapters_without_backend() {
    let adapters = PlotAdapters::detached(theme());
    assert!(!adapters.is_available());
    // Nothing to observe beyond the absence of a panic
    adapters.confusion_matrix(&[[1.0, 0.0], [0.0, 1.0]], PLOT_A_TARGET);
    adapters.sigmoid_curve("logistic-viz");
}

#[test]
fn test_adapters_forward_to_backend() {
    let backend = Rc::new(RecordingBackend::default());
    let adapters = PlotAdapters::new(Some(backend.clone()), theme());
    adapters.elbow(
        &ElbowCurve {
            k: vec![1.0, 2.0, 3.0],
            inertia: vec![9.0, 4.0, 3.0],
        },
        PLOT_A_TARGET,
    );
    adapters.residuals(&[1.0], &[0.5], PLOT_B_TARGET);

    let drawn = backend.drawn.borrow();
    assert_eq!(drawn.len(), 2);
    assert_eq!(drawn[0].0, PLOT_A_TARGET);
    assert_eq!(drawn[0].1.data[0].mode.as_deref(), Some("lines+markers"));
    assert_eq!(drawn[1].0, PLOT_B_TARGET);
}

#[test]
fn test_plotly_script_backend() {
    let backend = PlotlyScriptBackend::new();
    assert!(backend.is_empty());
    backend.new_plot("plot-a", &confusion_matrix_figure(&[[1.0, 2.0], [3.0, 4.0]], &theme()));
    backend.new_plot("plot-b", &sigmoid_figure(&theme()));

    let calls = backend.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with("Plotly.newPlot(\"plot-a\", [{\"type\":\"heatmap\""));
    assert!(calls[0].ends_with(", {\"displayModeBar\":false,\"responsive\":true});"));
    assert!(backend.script().contains("\nPlotly.newPlot(\"plot-b\""));

    backend.clear();
    assert_eq!(backend.len(), 0);
}

#[test]
fn test_plan_plots_selection() {
    assert!(plan_plots(None).is_empty());
    assert!(plan_plots(Some(&ExampleData::default())).is_empty());

    let elbow = ElbowCurve {
        k: vec![1.0],
        inertia: vec![1.0],
    };
    let clusters = Clusters2D::default();
    let variance = ExplainedVariance::default();

    // Confusion matrix outranks the elbow curve in Plot A
    let examples = ExampleData {
        confusion_matrix: Some([[1.0, 0.0], [0.0, 1.0]]),
        elbow: Some(elbow.clone()),
        ..ExampleData::default()
    };
    let jobs = plan_plots(Some(&examples));
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].target, PLOT_A_TARGET);
    assert_eq!(jobs[0].request.kind(), "confusion-matrix");

    // Elbow in Plot A, clusters outrank explained variance in Plot B
    let examples = ExampleData {
        elbow: Some(elbow),
        clusters: Some(clusters),
        explained_variance: Some(variance.clone()),
        ..ExampleData::default()
    };
    let kinds: Vec<(&str, &str)> = plan_plots(Some(&examples))
        .iter()
        .map(|job| {
            let slot = if job.target == PLOT_A_TARGET { "a" } else { "b" };
            (slot, job.request.kind())
        })
        .collect();
    assert_eq!(kinds, vec![("a", "elbow"), ("b", "clusters-2d")]);

    // Explained variance alone goes to Plot B
    let examples = ExampleData {
        explained_variance: Some(variance),
        ..ExampleData::default()
    };
    let jobs = plan_plots(Some(&examples));
    assert_eq!(
        jobs,
        vec![PlotJob::new(
            PLOT_B_TARGET,
            PlotRequest::ExplainedVariance(ExplainedVariance::default())
        )]
    );

    // Residuals outrank the fit-curve sample
    let examples = ExampleData {
        residuals: Some(Residuals::default()),
        sample: Some(SamplePoints::default()),
        ..ExampleData::default()
    };
    let jobs = plan_plots(Some(&examples));
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].request.kind(), "residuals");
}

#[test]
fn test_plot_job_draws_into_target() {
    let backend = Rc::new(RecordingBackend::default());
    let adapters = PlotAdapters::new(Some(backend.clone()), theme());
    let job = PlotJob::new(
        PLOT_B_TARGET,
        PlotRequest::FitCurve(SamplePoints {
            x: vec![0.0],
            y: vec![0.0],
        }),
    );
    job.draw(&adapters);

    let drawn = backend.drawn.borrow();
    assert_eq!(drawn.len(), 1);
    assert_eq!(drawn[0].0, PLOT_B_TARGET);
    assert_eq!(drawn[0].1.data.len(), 2);
}
