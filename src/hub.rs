use crate::catalog::{CatalogSource, ContentStore};
use crate::config::HubConfig;
use crate::math::MathRenderer;
use crate::modal::AlgorithmModal;
use crate::navigation::AnchorBindings;
use crate::plot::{ChartingBackend, PlotAdapters};
use crate::render::{DetailRenderer, RenderedView};
use crate::scheduler::TaskQueue;
use std::rc::Rc;

/// Element id of the static logistic-regression chart on the landing section
pub const LOGISTIC_VIZ_TARGET: &str = "logistic-viz";

/// The interactive learning hub: catalog, renderer, modal and deferred plot drawing.
///
/// # Lifecycle
///
/// 1. `start` loads the catalog, then binds the page's navigation anchors and draws the
///    static sigmoid chart
/// 2. `click_anchor` / `open_details` render a technique into the modal and show it
/// 3. `run_pending` runs the next scheduling turn, drawing the charts of the opened view
///
/// # Fields
///
/// - `store` - Content store holding the catalog
/// - `renderer` - Detail renderer
/// - `plots` - Plot adapters shared with deferred tasks
/// - `modal` - Details dialog
/// - `anchors` - Navigation anchors bound to techniques
/// - `tasks` - Deferred task queue
#[derive(Debug)]
pub struct LearningHub {
    store: ContentStore,
    renderer: DetailRenderer,
    plots: Rc<PlotAdapters>,
    modal: AlgorithmModal,
    anchors: AnchorBindings,
    tasks: TaskQueue,
}

impl LearningHub {
    /// Creates a hub with no math renderer and no charting backend.
    ///
    /// # Parameters
    ///
    /// - `config` - Hub configuration
    /// - `source` - Transport used to fetch the catalog
    pub fn new(config: HubConfig, source: impl CatalogSource + 'static) -> Self {
        Self {
            store: ContentStore::from_config(source, &config),
            renderer: DetailRenderer::new(&config),
            plots: Rc::new(PlotAdapters::detached(config.theme)),
            modal: AlgorithmModal::new(),
            anchors: AnchorBindings::default(),
            tasks: TaskQueue::new(),
        }
    }

    /// Sets the math rendering collaborator
    pub fn with_math_renderer(mut self, math: Rc<dyn MathRenderer>) -> Self {
        self.renderer = self.renderer.with_math_renderer(math);
        self
    }

    /// Sets the charting collaborator
    pub fn with_charting_backend(mut self, backend: Rc<dyn ChartingBackend>) -> Self {
        self.plots = Rc::new(PlotAdapters::new(
            Some(backend),
            self.plots.theme().clone(),
        ));
        self
    }

    /// Loads the catalog, then binds the navigation anchors present on the page.
    ///
    /// Anchors are bound whether or not the load succeeded; with no catalog every click on them
    /// is a no-op.
    ///
    /// # Parameters
    ///
    /// - `page_hrefs` - `href` values of the links on the page
    ///
    /// # Returns
    ///
    /// - `bool` - Whether the catalog is loaded
    pub fn start<I, S>(&mut self, page_hrefs: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let loaded = self.store.load();
        self.anchors = AnchorBindings::bind(page_hrefs);
        self.plots.sigmoid_curve(LOGISTIC_VIZ_TARGET);
        loaded
    }

    /// Handles a click on a link.
    ///
    /// # Returns
    ///
    /// - `bool` - `true` when the link is bound and the details were opened
    pub fn click_anchor(&mut self, href: &str) -> bool {
        match self.anchors.technique_for(href) {
            Some(technique_id) => self.open_details(technique_id),
            None => false,
        }
    }

    /// Renders `technique_id` into the modal, shows it and defers chart drawing to the next turn.
    ///
    /// # Returns
    ///
    /// - `bool` - `false` when the technique cannot be resolved; the modal is left untouched
    pub fn open_details(&mut self, technique_id: &str) -> bool {
        let view: RenderedView = self.renderer.render_details(&self.store, technique_id);
        if !self.modal.set_view(&view) {
            return false;
        }
        self.modal.show();

        if !view.plots.is_empty() {
            let plots = Rc::clone(&self.plots);
            let jobs = view.plots;
            self.tasks.defer(move || {
                for job in &jobs {
                    job.draw(&plots);
                }
            });
        }
        true
    }

    /// Handles a click on the modal close button
    pub fn close_modal(&mut self) {
        self.modal.on_close_click();
    }

    /// Handles a click on the modal overlay
    pub fn backdrop_click(&mut self, on_backdrop: bool) {
        self.modal.on_backdrop_click(on_backdrop);
    }

    /// Runs the next scheduling turn.
    ///
    /// # Returns
    ///
    /// - `usize` - Number of deferred tasks that ran
    pub fn run_pending(&mut self) -> usize {
        let ran = self.tasks.run_pending();
        if ran > 0 {
            log::debug!("Ran {} deferred tasks", ran);
        }
        ran
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn modal(&self) -> &AlgorithmModal {
        &self.modal
    }

    pub fn anchors(&self) -> &AnchorBindings {
        &self.anchors
    }

    /// Number of tasks waiting for the next turn
    pub fn pending_tasks(&self) -> usize {
        self.tasks.len()
    }
}
