use crate::catalog::ContentStore;
use crate::config::{Attribution, HubConfig};
use crate::lookup::resolve;
use crate::math::{MathOptions, MathRenderer};
use crate::metric::{MetricCard, metric_cards};
use crate::plot::{PlotJob, plan_plots};
use std::rc::Rc;

/// HTML building blocks of the details view
pub mod html;

pub use html::escape_html;

/// The sections a details view can contain, in assembly order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Metrics,
    Types,
    Kernels,
    Hyperparameters,
    Advantages,
    Disadvantages,
    Uses,
    Mathematics,
    Plots,
    Attribution,
}

/// The assembled details view of one technique.
///
/// An empty view (unknown technique or no catalog) has no title, no content and no sections;
/// displaying it is a no-op.
///
/// # Fields
///
/// - `title` - Technique name
/// - `content` - HTML content of the view
/// - `sections` - Sections present in `content`, in order
/// - `plots` - Charts to draw into the placeholders once the view is displayed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedView {
    pub title: String,
    pub content: String,
    pub sections: Vec<SectionKind>,
    pub plots: Vec<PlotJob>,
}

impl RenderedView {
    /// The view produced for a technique that cannot be resolved
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty() && self.sections.is_empty()
    }

    /// Whether the view contains `section`
    pub fn has_section(&self, section: SectionKind) -> bool {
        self.sections.contains(&section)
    }
}

/// Collects section markup and remembers which sections were emitted.
#[derive(Default)]
struct Assembly {
    content: String,
    sections: Vec<SectionKind>,
}

impl Assembly {
    fn push(&mut self, section: SectionKind, markup: String) {
        self.content.push_str(&markup);
        self.sections.push(section);
    }

    /// Pushes a row of optional cards, recording only the sections that produced markup.
    fn push_row(&mut self, class: &str, cards: Vec<(SectionKind, Option<String>)>) {
        self.sections
            .extend(cards.iter().filter(|(_, c)| c.is_some()).map(|(s, _)| *s));
        if let Some(markup) = html::row(class, cards.into_iter().map(|(_, c)| c).collect()) {
            self.content.push_str(&markup);
        }
    }
}

/// Builds the details view of a technique.
///
/// The pipeline runs in a fixed order: Metrics panel, Types, Kernel Functions and Key
/// Hyperparameters, Advantages / Disadvantages / Typical Uses, Mathematics, the two plot
/// placeholders and the attribution note. A section whose data is absent or empty is left
/// out entirely. When a math renderer is configured it runs over the finished content.
///
/// # Fields
///
/// - `math` - Math rendering collaborator, if available
/// - `math_options` - Delimiters and error policy handed to the math renderer
/// - `attribution` - Reference link appended to every view
///
/// # Examples
/// ```rust
/// use ml_deconstructed::catalog::{AlgorithmCatalog, ContentStore, TechniqueRecord};
/// use ml_deconstructed::config::HubConfig;
/// use ml_deconstructed::render::{DetailRenderer, SectionKind};
///
/// let mut catalog = AlgorithmCatalog::default();
/// catalog
///     .unsupervised
///     .techniques
///     .insert("pca".to_string(), TechniqueRecord::named("Principal Component Analysis"));
/// let store = ContentStore::with_catalog(catalog);
///
/// let renderer = DetailRenderer::new(&HubConfig::default());
/// let view = renderer.render_details(&store, "pca");
/// assert_eq!(view.title, "Principal Component Analysis");
/// assert_eq!(view.sections, vec![SectionKind::Plots, SectionKind::Attribution]);
///
/// assert!(renderer.render_details(&store, "nonexistent").is_empty());
/// ```
#[derive(Clone)]
pub struct DetailRenderer {
    math: Option<Rc<dyn MathRenderer>>,
    math_options: MathOptions,
    attribution: Attribution,
}

impl DetailRenderer {
    /// Creates a renderer without a math collaborator.
    pub fn new(config: &HubConfig) -> Self {
        Self {
            math: None,
            math_options: config.math.clone(),
            attribution: config.attribution.clone(),
        }
    }

    /// Sets the math rendering collaborator
    pub fn with_math_renderer(mut self, math: Rc<dyn MathRenderer>) -> Self {
        self.math = Some(math);
        self
    }

    /// Whether a math renderer is configured
    pub fn has_math_renderer(&self) -> bool {
        self.math.is_some()
    }

    /// Renders the details of `technique_id`.
    ///
    /// # Parameters
    ///
    /// - `store` - Content store holding the catalog
    /// - `technique_id` - Technique identifier, e.g. `kmeans`
    ///
    /// # Returns
    ///
    /// - `RenderedView` - The assembled view, or an empty view when the technique is unknown
    pub fn render_details(&self, store: &ContentStore, technique_id: &str) -> RenderedView {
        let Some(record) = resolve(store, technique_id) else {
            return RenderedView::empty();
        };

        let mut assembly = Assembly::default();

        // The panel and the note sit outside the spaced body wrapper
        let cards: Vec<MetricCard> = metric_cards(record.examples.as_ref());
        let panel = if cards.is_empty() {
            String::new()
        } else {
            assembly.sections.push(SectionKind::Metrics);
            html::metrics_panel(&cards)
        };

        if let Some(types) = record.types.as_deref().filter(|t| !t.is_empty()) {
            assembly.push(SectionKind::Types, html::types_grid(types));
        }

        assembly.push_row(
            "grid grid-cols-1 lg:grid-cols-2 gap-6",
            vec![
                (
                    SectionKind::Kernels,
                    html::list_card(
                        "Kernel Functions",
                        "text-blue-400",
                        &html::kernel_items(record.kernels.as_deref().unwrap_or_default()),
                    ),
                ),
                (
                    SectionKind::Hyperparameters,
                    html::list_card(
                        "Key Hyperparameters",
                        "text-blue-400",
                        &html::hyperparameter_items(
                            record.hyperparameters.as_deref().unwrap_or_default(),
                        ),
                    ),
                ),
            ],
        );

        assembly.push_row(
            "grid grid-cols-1 lg:grid-cols-3 gap-6",
            vec![
                (
                    SectionKind::Advantages,
                    html::list_card(
                        "Advantages",
                        "text-green-400",
                        &html::text_items(record.advantages.as_deref().unwrap_or_default()),
                    ),
                ),
                (
                    SectionKind::Disadvantages,
                    html::list_card(
                        "Disadvantages",
                        "text-red-400",
                        &html::text_items(record.disadvantages.as_deref().unwrap_or_default()),
                    ),
                ),
                (
                    SectionKind::Uses,
                    html::list_card(
                        "Typical Uses",
                        "text-purple-400",
                        &html::text_items(record.uses.as_deref().unwrap_or_default()),
                    ),
                ),
            ],
        );

        if let Some(math) = record.math.as_ref().filter(|m| !m.is_empty()) {
            assembly.push(SectionKind::Mathematics, html::math_block(math));
        }

        assembly.push(SectionKind::Plots, html::plot_placeholders());
        assembly.sections.push(SectionKind::Attribution);

        let mut content = format!(
            r#"{}<div class="space-y-6">{}</div>{}"#,
            panel,
            assembly.content,
            html::attribution_note(&self.attribution)
        );

        if let Some(math) = &self.math {
            math.render_in_element(&mut content, &self.math_options);
        }

        let plots = plan_plots(record.examples.as_ref());
        log::debug!(
            "Rendered `{}` with {} sections and {} plots",
            technique_id,
            assembly.sections.len(),
            plots.len()
        );

        RenderedView {
            title: record.name.clone(),
            content,
            sections: assembly.sections,
            plots,
        }
    }
}

impl std::fmt::Debug for DetailRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailRenderer")
            .field("math", &self.has_math_renderer())
            .field("math_options", &self.math_options)
            .field("attribution", &self.attribution)
            .finish()
    }
}
