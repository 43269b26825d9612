pub use crate::catalog::{
    AlgorithmCatalog, CatalogSource, ContentStore, ExampleData, FileSource, StaticSource,
    TechniqueRecord,
};
pub use crate::config::{Attribution, HubConfig};
pub use crate::error::LoadError;
pub use crate::hub::LearningHub;
pub use crate::lookup::{Category, resolve, resolve_with_category};
pub use crate::math::{MarkupMathRenderer, MathOptions, MathRenderer};
pub use crate::metric::{
    ClassificationMetrics, ConfusionMatrix, MetricCard, RegressionMetrics, classification_metrics,
    format_metric, metric_cards, regression_metrics,
};
pub use crate::modal::{AlgorithmModal, ModalState};
pub use crate::navigation::{ALGORITHM_ANCHORS, AnchorBindings};
pub use crate::plot::{ChartingBackend, Figure, PlotAdapters, PlotTheme, PlotlyScriptBackend};
pub use crate::render::{DetailRenderer, RenderedView, SectionKind};
pub use crate::scheduler::TaskQueue;
