use super::*;
use crate::catalog::Residuals;

/// Element id of the first plot placeholder in the details view
pub const PLOT_A_TARGET: &str = "plot-a";
/// Element id of the second plot placeholder in the details view
pub const PLOT_B_TARGET: &str = "plot-b";

/// Data for one chart, tagged with the adapter that draws it
#[derive(Debug, Clone, PartialEq)]
pub enum PlotRequest {
    ConfusionMatrix(ConfusionGrid),
    FitCurve(SamplePoints),
    Residuals(Residuals),
    Elbow(ElbowCurve),
    Clusters2D(Clusters2D),
    ExplainedVariance(ExplainedVariance),
}

impl PlotRequest {
    /// Short name of the chart kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            PlotRequest::ConfusionMatrix(_) => "confusion-matrix",
            PlotRequest::FitCurve(_) => "fit-curve",
            PlotRequest::Residuals(_) => "residuals",
            PlotRequest::Elbow(_) => "elbow",
            PlotRequest::Clusters2D(_) => "clusters-2d",
            PlotRequest::ExplainedVariance(_) => "explained-variance",
        }
    }
}

/// A chart to draw into a placeholder once the view is displayed
#[derive(Debug, Clone, PartialEq)]
pub struct PlotJob {
    pub target: String,
    pub request: PlotRequest,
}

impl PlotJob {
    pub fn new(target: &str, request: PlotRequest) -> Self {
        Self {
            target: target.to_string(),
            request,
        }
    }

    /// Draws the chart through `adapters`
    pub fn draw(&self, adapters: &PlotAdapters) {
        log::debug!("Drawing {} chart into `{}`", self.request.kind(), self.target);
        let target = self.target.as_str();
        match &self.request {
            PlotRequest::ConfusionMatrix(grid) => adapters.confusion_matrix(grid, target),
            PlotRequest::FitCurve(sample) => adapters.fit_curve(sample, target),
            PlotRequest::Residuals(r) => adapters.residuals(&r.y_true, &r.y_pred, target),
            PlotRequest::Elbow(elbow) => adapters.elbow(elbow, target),
            PlotRequest::Clusters2D(clusters) => adapters.clusters_2d(clusters, target),
            PlotRequest::ExplainedVariance(variance) => {
                adapters.explained_variance(variance, target)
            }
        }
    }
}

/// Chooses the charts for the two placeholders of a details view.
///
/// Plot A shows the confusion matrix, or else the elbow curve. Plot B shows the residuals,
/// or else the fit curve over the sample, or else the 2D clusters, or else the explained
/// variance. A placeholder with no matching data stays empty.
///
/// # Parameters
///
/// - `examples` - Example data of the technique, if any
///
/// # Returns
///
/// - `Vec<PlotJob>` - Zero, one or two jobs, Plot A first
pub fn plan_plots(examples: Option<&ExampleData>) -> Vec<PlotJob> {
    let Some(examples) = examples else {
        return Vec::new();
    };

    let plot_a = examples
        .confusion_matrix
        .map(PlotRequest::ConfusionMatrix)
        .or_else(|| examples.elbow.clone().map(PlotRequest::Elbow));

    let plot_b = examples
        .residuals
        .clone()
        .map(PlotRequest::Residuals)
        .or_else(|| examples.sample.clone().map(PlotRequest::FitCurve))
        .or_else(|| examples.clusters.clone().map(PlotRequest::Clusters2D))
        .or_else(|| {
            examples
                .explained_variance
                .clone()
                .map(PlotRequest::ExplainedVariance)
        });

    plot_a
        .map(|request| PlotJob::new(PLOT_A_TARGET, request))
        .into_iter()
        .chain(plot_b.map(|request| PlotJob::new(PLOT_B_TARGET, request)))
        .collect()
}
