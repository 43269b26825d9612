use super::init_logger;
use crate::catalog::*;
use crate::config::HubConfig;
use crate::math::{MarkupMathRenderer, MathOptions, MathRenderer};
use crate::render::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Records what the renderer was asked to typeset without changing it.
#[derive(Default)]
struct SpyMathRenderer {
    calls: Cell<usize>,
    last_options: RefCell<Option<MathOptions>>,
}

impl MathRenderer for SpyMathRenderer {
    fn render_in_element(&self, _content: &mut String, options: &MathOptions) {
        self.calls.set(self.calls.get() + 1);
        *self.last_options.borrow_mut() = Some(options.clone());
    }
}

fn store_with(id: &str, record: TechniqueRecord) -> ContentStore {
    let mut catalog = AlgorithmCatalog::default();
    catalog.supervised.techniques.insert(id.to_string(), record);
    ContentStore::with_catalog(catalog)
}

fn bundled_store() -> ContentStore {
    let store = ContentStore::new(StaticSource::bundled(), "data/algorithms.json");
    assert!(store.load());
    store
}

fn renderer() -> DetailRenderer {
    DetailRenderer::new(&HubConfig::default())
}

#[test]
fn test_name_only_record_renders_attribution_only() {
    let store = store_with("knn", TechniqueRecord::named("K-Nearest Neighbors"));
    let view = renderer().render_details(&store, "knn");

    assert_eq!(view.title, "K-Nearest Neighbors");
    assert_eq!(
        view.sections,
        vec![SectionKind::Plots, SectionKind::Attribution]
    );
    for missing in [
        SectionKind::Metrics,
        SectionKind::Types,
        SectionKind::Kernels,
        SectionKind::Hyperparameters,
        SectionKind::Advantages,
        SectionKind::Disadvantages,
        SectionKind::Uses,
        SectionKind::Mathematics,
    ] {
        assert!(!view.has_section(missing), "unexpected {:?}", missing);
    }
    assert!(view.content.contains("Machine-Learning-Toolkit"));
    assert!(view.content.starts_with(r#"<div class="space-y-6">"#));
    assert!(view.content.ends_with("Machine-Learning-Toolkit</a>.</div>"));
    assert!(!view.content.contains("Metrics"));
    assert!(!view.content.contains("Types"));
    assert!(view.plots.is_empty());
}

#[test]
fn test_unknown_technique_renders_empty_view() {
    init_logger();
    let view = renderer().render_details(&bundled_store(), "nonexistent");
    assert!(view.is_empty());
    assert_eq!(view, RenderedView::empty());
}

#[test]
fn test_no_catalog_renders_empty_view() {
    let store = ContentStore::new(StaticSource::new(), "data/algorithms.json");
    store.load();
    assert!(renderer().render_details(&store, "knn").is_empty());
}

#[test]
fn test_full_record_section_order() {
    init_logger();
    let view = renderer().render_details(&bundled_store(), "logistic");
    assert_eq!(view.title, "Logistic Regression");
    assert_eq!(
        view.sections,
        vec![
            SectionKind::Metrics,
            SectionKind::Types,
            SectionKind::Hyperparameters,
            SectionKind::Advantages,
            SectionKind::Disadvantages,
            SectionKind::Uses,
            SectionKind::Mathematics,
            SectionKind::Plots,
            SectionKind::Attribution,
        ]
    );

    let content = &view.content;
    let position = |needle: &str| content.find(needle).unwrap();
    assert!(position(">Metrics<") < position(">Types<"));
    assert!(position(">Types<") < position(">Key Hyperparameters<"));
    assert!(position(">Key Hyperparameters<") < position(">Advantages<"));
    assert!(position(">Advantages<") < position(">Disadvantages<"));
    assert!(position(">Disadvantages<") < position(">Typical Uses<"));
    assert!(position(">Typical Uses<") < position(">Mathematics<"));
    assert!(position(">Mathematics<") < position(r#"id="plot-a""#));
    assert!(position(r#"id="plot-b""#) < position("noopener"));
    // Metrics panel before the body wrapper, attribution note after it
    assert!(content.starts_with(r#"<div class="bg-gray-900 border"#));
    assert!(position(">Metrics<") < position(r#"<div class="space-y-6">"#));
    let note = html::attribution_note(&HubConfig::default().attribution);
    assert!(content.ends_with(&format!("</div></div></div></div>{}", note)));
}

#[test]
fn test_metrics_panel_values() {
    let view = renderer().render_details(&bundled_store(), "logistic");
    for value in [">0.850<", ">0.778<", ">0.875<", ">0.824<"] {
        assert!(view.content.contains(value), "missing {}", value);
    }

    let view = renderer().render_details(&bundled_store(), "linear_regression");
    assert!(view.has_section(SectionKind::Metrics));
    for label in [">MAE<", ">MSE<", ">RMSE<", ">R²<"] {
        assert!(view.content.contains(label), "missing {}", label);
    }
}

#[test]
fn test_kernels_row() {
    let view = renderer().render_details(&bundled_store(), "svm");
    assert!(view.has_section(SectionKind::Kernels));
    assert!(view.has_section(SectionKind::Hyperparameters));
    assert!(view.content.contains(">Kernel Functions<"));
    // Only Plot B has data for this technique
    assert_eq!(view.plots.len(), 1);
    assert_eq!(view.plots[0].request.kind(), "fit-curve");
}

#[test]
fn test_empty_lists_are_omitted() {
    let mut record = TechniqueRecord::named("Sparse");
    record.advantages = Some(Vec::new());
    record.kernels = Some(Vec::new());
    record.types = Some(Vec::new());
    record.math = Some(MathExpressions::default());
    record.uses = Some(vec!["Teaching".to_string()]);

    let view = renderer().render_details(&store_with("sparse", record), "sparse");
    assert_eq!(
        view.sections,
        vec![SectionKind::Uses, SectionKind::Plots, SectionKind::Attribution]
    );
    assert!(!view.content.contains("Kernel Functions"));
    assert!(!view.content.contains(">Advantages<"));
    assert!(view.content.contains("<li>Teaching</li>"));
}

#[test]
fn test_catalog_text_is_escaped() {
    let mut record = TechniqueRecord::named("Tree");
    record.advantages = Some(vec!["<script>alert(1)</script>".to_string()]);
    record.hyperparameters = Some(vec![Hyperparameter {
        key: "max_depth".to_string(),
        desc: "a < b & c".to_string(),
    }]);
    record.math = Some(MathExpressions::from_pairs([("gini", "$G = 1 - \\sum_k p_k^2$")]));

    let view = renderer().render_details(&store_with("tree", record), "tree");
    assert!(!view.content.contains("<script>"));
    assert!(view.content.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(view.content.contains("<code>max_depth</code> - a &lt; b &amp; c"));
    assert!(view.content.contains("$G = 1 - \\sum_k p_k^2$"));
}

#[test]
fn test_mathematics_in_document_order() {
    let view = renderer().render_details(&bundled_store(), "logistic");
    let sigmoid = view.content.find("\\sigma(z) =").unwrap();
    let hypothesis = view.content.find("h_\\theta(x) =").unwrap();
    let loss = view.content.find("J(\\theta) =").unwrap();
    assert!(sigmoid < hypothesis && hypothesis < loss);
}

#[test]
fn test_math_renderer_runs_once_with_options() {
    let spy = Rc::new(SpyMathRenderer::default());
    let renderer = renderer().with_math_renderer(spy.clone());
    assert!(renderer.has_math_renderer());

    renderer.render_details(&bundled_store(), "kmeans");
    assert_eq!(spy.calls.get(), 1);
    assert_eq!(*spy.last_options.borrow(), Some(MathOptions::default()));

    // Unknown identifiers never reach the math renderer
    renderer.render_details(&bundled_store(), "nonexistent");
    assert_eq!(spy.calls.get(), 1);
}

#[test]
fn test_markup_math_renderer_marks_formulas() {
    let renderer = renderer().with_math_renderer(Rc::new(MarkupMathRenderer));
    let view = renderer.render_details(&bundled_store(), "pca");
    assert!(view.content.contains(r#"<span class="math math-inline">\(\Sigma = "#));
    assert!(!view.content.contains("$\\Sigma"));
}

#[test]
fn test_custom_attribution() {
    let mut config = HubConfig::default();
    config.attribution.label = "Course <notes>".to_string();
    config.attribution.url = "https://example.org/?a=1&b=2".to_string();

    let store = store_with("knn", TechniqueRecord::named("KNN"));
    let view = DetailRenderer::new(&config).render_details(&store, "knn");
    assert!(view.content.contains(r#"href="https://example.org/?a=1&amp;b=2""#));
    assert!(view.content.contains(">Course &lt;notes&gt;</a>"));
}

#[test]
fn test_escape_html() {
    assert_eq!(escape_html("plain"), "plain");
    assert_eq!(escape_html("it's"), "it&#39;s");
    assert_eq!(escape_html(r"\(x\) \[y\] $$z$$"), r"\(x\) \[y\] $$z$$");
}

#[test]
fn test_html_pieces_keep_item_order() {
    let types = vec![
        TechniqueType {
            name: "Binary".to_string(),
            description: Some("Two classes".to_string()),
        },
        TechniqueType {
            name: "Multinomial".to_string(),
            description: None,
        },
    ];
    let grid = html::types_grid(&types);
    assert_eq!(grid.matches(r#"<div class="font-medium">"#).count(), 2);
    assert!(grid.find(">Binary<").unwrap() < grid.find(">Multinomial<").unwrap());
    assert!(grid.contains(r#"<div class="text-gray-300 text-sm mt-1"></div>"#));

    let cards = crate::metric::metric_cards(Some(&ExampleData {
        confusion_matrix: Some([[50.0, 10.0], [5.0, 35.0]]),
        ..ExampleData::default()
    }));
    let panel = html::metrics_panel(&cards);
    assert_eq!(panel.matches("text-2xl font-semibold").count(), cards.len());

    let math = MathExpressions::from_pairs([("b", "$b$"), ("a", "$a$")]);
    let block = html::math_block(&math);
    assert_eq!(block.matches(r#"<span class="katex">"#).count(), 2);
    assert!(block.find("$b$").unwrap() < block.find("$a$").unwrap());
}
