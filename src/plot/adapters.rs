use super::*;

/// Number of points sampled along the demonstration fit curve
pub const FIT_CURVE_POINTS: usize = 200;

/// Number of points sampled along the static sigmoid chart
pub const SIGMOID_POINTS: usize = 200;

/// Heatmap of a `[[TN, FP], [FN, TP]]` grid with fixed axis labels.
///
/// # Parameters
///
/// - `grid` - Confusion matrix grid
/// - `theme` - Layout colors
///
/// # Returns
///
/// - `Figure` - Heatmap with x = `Pred 0`, `Pred 1` (axis on top) and y = `True 0`, `True 1`
pub fn confusion_matrix_figure(grid: &ConfusionGrid, theme: &PlotTheme) -> Figure {
    let trace = Trace {
        kind: Some(TraceKind::Heatmap),
        z: Some(grid.iter().map(|row| row.to_vec()).collect()),
        x: Some(Values::Labels(vec!["Pred 0".into(), "Pred 1".into()])),
        y: Some(Values::Labels(vec!["True 0".into(), "True 1".into()])),
        colorscale: Some("Blues".to_string()),
        ..Trace::default()
    };

    let layout = Layout {
        xaxis: Some(Axis {
            side: Some("top".to_string()),
            ..Axis::default()
        }),
        yaxis: Some(Axis {
            automargin: Some(true),
            ..Axis::default()
        }),
        ..Layout::themed(
            theme,
            Margin {
                t: 30,
                r: 10,
                b: 30,
                l: 60,
            },
        )
    };

    Figure {
        data: vec![trace],
        layout,
        config: PlotConfig::default(),
    }
}

/// The demonstration curve y = tanh(x)·3 + 0.2x sampled at 200 points over \[-3, 3\]
pub fn demo_fit_curve() -> (Array1<f64>, Array1<f64>) {
    let xs = Array1::linspace(-3.0, 3.0, FIT_CURVE_POINTS);
    let ys = xs.mapv(|v: f64| v.tanh() * 3.0 + 0.2 * v);
    (xs, ys)
}

/// Scatter of the sample points under the demonstration fit curve.
///
/// The curve is fixed and does not depend on the sample.
pub fn fit_curve_figure(sample: &SamplePoints, theme: &PlotTheme) -> Figure {
    let scatter = Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(Values::Numbers(sample.x.clone())),
        y: Some(Values::Numbers(sample.y.clone())),
        mode: Some("markers".to_string()),
        name: Some("Data".to_string()),
        marker: Some(Marker::colored("#60A5FA")),
        ..Trace::default()
    };

    let (xs, ys) = demo_fit_curve();
    let curve = Trace {
        x: Some(Values::Numbers(xs.to_vec())),
        y: Some(Values::Numbers(ys.to_vec())),
        mode: Some("lines".to_string()),
        name: Some("SVR (demo)".to_string()),
        line: Some(Line {
            color: "#10B981".to_string(),
            width: Some(3.0),
        }),
        ..Trace::default()
    };

    Figure {
        data: vec![scatter, curve],
        layout: Layout::themed(theme, Margin::COMPACT),
        config: PlotConfig::default(),
    }
}

/// Residuals (true − predicted) against the predicted values.
///
/// Only the paired prefix is plotted when the two sequences differ in length.
pub fn residuals_figure(y_true: &[f64], y_pred: &[f64], theme: &PlotTheme) -> Figure {
    let n = y_true.len().min(y_pred.len());
    let actual = ArrayView1::from(&y_true[..n]);
    let predicted = ArrayView1::from(&y_pred[..n]);
    let residuals = &actual - &predicted;

    let scatter = Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(Values::Numbers(predicted.to_vec())),
        y: Some(Values::Numbers(residuals.to_vec())),
        mode: Some("markers".to_string()),
        name: Some("Residuals".to_string()),
        marker: Some(Marker::colored("#F59E0B")),
        ..Trace::default()
    };

    Figure {
        data: vec![scatter],
        layout: Layout::with_axis_titles(theme, "Predicted", "Residual"),
        config: PlotConfig::default(),
    }
}

/// Inertia against the candidate cluster count, drawn as lines with markers
pub fn elbow_figure(elbow: &ElbowCurve, theme: &PlotTheme) -> Figure {
    let line = Trace {
        x: Some(Values::Numbers(elbow.k.clone())),
        y: Some(Values::Numbers(elbow.inertia.clone())),
        mode: Some("lines+markers".to_string()),
        line: Some(Line {
            color: "#3B82F6".to_string(),
            width: None,
        }),
        marker: Some(Marker::colored("#3B82F6")),
        ..Trace::default()
    };

    Figure {
        data: vec![line],
        layout: Layout::with_axis_titles(theme, "k", "Inertia"),
        config: PlotConfig::default(),
    }
}

/// 2D points colored by cluster label through the Viridis colorscale
pub fn clusters_2d_figure(clusters: &Clusters2D, theme: &PlotTheme) -> Figure {
    let trace = Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(Values::Numbers(clusters.x.clone())),
        y: Some(Values::Numbers(clusters.y.clone())),
        mode: Some("markers".to_string()),
        marker: Some(Marker {
            color: Some(MarkerColor::PerPoint(clusters.labels.clone())),
            colorscale: Some("Viridis".to_string()),
            size: Some(10.0),
        }),
        text: Some(Values::Numbers(clusters.labels.clone())),
        name: Some("Clusters".to_string()),
        ..Trace::default()
    };

    Figure {
        data: vec![trace],
        layout: Layout::with_axis_titles(theme, "x1", "x2"),
        config: PlotConfig::default(),
    }
}

/// One bar per principal component, labelled `PC1`, `PC2`, …
pub fn explained_variance_figure(variance: &ExplainedVariance, theme: &PlotTheme) -> Figure {
    let bar = Trace {
        kind: Some(TraceKind::Bar),
        x: Some(Values::Labels(
            variance
                .components
                .iter()
                .map(|n| format!("PC{}", n))
                .collect(),
        )),
        y: Some(Values::Numbers(variance.variance.clone())),
        marker: Some(Marker::colored("#10B981")),
        ..Trace::default()
    };

    Figure {
        data: vec![bar],
        layout: Layout::with_axis_titles(theme, "Components", "Explained Variance Ratio"),
        config: PlotConfig::default(),
    }
}

/// The static logistic-function chart: σ(z) for z = (i − 100) / 10, i in 0..200
pub fn sigmoid_figure(theme: &PlotTheme) -> Figure {
    let z = Array1::from_iter((0..SIGMOID_POINTS).map(|i| (i as f64 - 100.0) / 10.0));
    let sigma = z.mapv(|v: f64| 1.0 / (1.0 + (-v).exp()));

    let trace = Trace {
        kind: Some(TraceKind::Scatter),
        x: Some(Values::Numbers(z.to_vec())),
        y: Some(Values::Numbers(sigma.to_vec())),
        mode: Some("lines".to_string()),
        name: Some("Sigmoid Function".to_string()),
        line: Some(Line {
            color: "#3B82F6".to_string(),
            width: Some(3.0),
        }),
        ..Trace::default()
    };

    let layout = Layout {
        title: Some("Logistic Regression: Sigmoid Function".to_string()),
        xaxis: Some(Axis {
            title: Some("Input (z)".to_string()),
            gridcolor: Some(theme.grid_color.clone()),
            ..Axis::default()
        }),
        yaxis: Some(Axis {
            title: Some("Probability σ(z)".to_string()),
            gridcolor: Some(theme.grid_color.clone()),
            range: Some([0.0, 1.0]),
            ..Axis::default()
        }),
        ..Layout::themed(
            theme,
            Margin {
                t: 50,
                r: 30,
                b: 50,
                l: 60,
            },
        )
    };

    Figure {
        data: vec![trace],
        layout,
        config: PlotConfig {
            display_mode_bar: None,
            responsive: true,
        },
    }
}

/// Draws figures through an optional charting backend.
///
/// Without a backend every draw call returns immediately; this is a configuration state,
/// not an error.
///
/// # Fields
///
/// - `backend` - Charting collaborator, if one is available
/// - `theme` - Colors applied to every layout
///
/// # Examples
/// ```rust
/// use ml_deconstructed::plot::{PlotAdapters, PlotTheme, PlotlyScriptBackend};
/// use std::rc::Rc;
///
/// let backend = Rc::new(PlotlyScriptBackend::new());
/// let adapters = PlotAdapters::new(Some(backend.clone()), PlotTheme::default());
/// adapters.confusion_matrix(&[[50.0, 10.0], [5.0, 35.0]], "plot-a");
/// assert_eq!(backend.len(), 1);
///
/// // Without a backend nothing is drawn
/// PlotAdapters::detached(PlotTheme::default()).confusion_matrix(&[[1.0, 0.0], [0.0, 1.0]], "plot-a");
/// ```
#[derive(Clone)]
pub struct PlotAdapters {
    backend: Option<Rc<dyn ChartingBackend>>,
    theme: PlotTheme,
}

impl PlotAdapters {
    /// Creates adapters drawing through `backend`.
    pub fn new(backend: Option<Rc<dyn ChartingBackend>>, theme: PlotTheme) -> Self {
        Self { backend, theme }
    }

    /// Creates adapters with no backend
    pub fn detached(theme: PlotTheme) -> Self {
        Self::new(None, theme)
    }

    /// Whether a charting backend is configured
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn theme(&self) -> &PlotTheme {
        &self.theme
    }

    fn draw(&self, target: &str, build: impl FnOnce(&PlotTheme) -> Figure) {
        let Some(backend) = &self.backend else {
            return;
        };
        let figure = build(&self.theme);
        backend.new_plot(target, &figure);
    }

    pub fn confusion_matrix(&self, grid: &ConfusionGrid, target: &str) {
        self.draw(target, |theme| confusion_matrix_figure(grid, theme));
    }

    pub fn fit_curve(&self, sample: &SamplePoints, target: &str) {
        self.draw(target, |theme| fit_curve_figure(sample, theme));
    }

    pub fn residuals(&self, y_true: &[f64], y_pred: &[f64], target: &str) {
        self.draw(target, |theme| residuals_figure(y_true, y_pred, theme));
    }

    pub fn elbow(&self, elbow: &ElbowCurve, target: &str) {
        self.draw(target, |theme| elbow_figure(elbow, theme));
    }

    pub fn clusters_2d(&self, clusters: &Clusters2D, target: &str) {
        self.draw(target, |theme| clusters_2d_figure(clusters, theme));
    }

    pub fn explained_variance(&self, variance: &ExplainedVariance, target: &str) {
        self.draw(target, |theme| explained_variance_figure(variance, theme));
    }

    pub fn sigmoid_curve(&self, target: &str) {
        self.draw(target, sigmoid_figure);
    }
}

impl std::fmt::Debug for PlotAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlotAdapters")
            .field("available", &self.is_available())
            .field("theme", &self.theme)
            .finish()
    }
}
