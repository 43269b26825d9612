use super::*;
use std::cell::RefCell;

/// Records every draw call as a `Plotly.newPlot(...)` statement.
///
/// The collected script can be embedded in a page that loads Plotly, which then draws the
/// charts into the named elements.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::plot::{ChartingBackend, PlotlyScriptBackend, PlotTheme, sigmoid_figure};
///
/// let backend = PlotlyScriptBackend::new();
/// backend.new_plot("logistic-viz", &sigmoid_figure(&PlotTheme::default()));
/// assert!(backend.script().starts_with("Plotly.newPlot(\"logistic-viz\", "));
/// ```
#[derive(Debug, Default)]
pub struct PlotlyScriptBackend {
    calls: RefCell<Vec<String>>,
}

impl PlotlyScriptBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded draw calls
    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Recorded statements in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Recorded statements joined with newlines
    pub fn script(&self) -> String {
        self.calls.borrow().join("\n")
    }

    /// Drops every recorded statement
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    fn statement(target: &str, figure: &Figure) -> Result<String, serde_json::Error> {
        Ok(format!(
            "Plotly.newPlot({}, {}, {}, {});",
            serde_json::to_string(target)?,
            serde_json::to_string(&figure.data)?,
            serde_json::to_string(&figure.layout)?,
            serde_json::to_string(&figure.config)?,
        ))
    }
}

impl ChartingBackend for PlotlyScriptBackend {
    fn new_plot(&self, target: &str, figure: &Figure) {
        match Self::statement(target, figure) {
            Ok(statement) => self.calls.borrow_mut().push(statement),
            Err(e) => log::warn!("Could not serialize figure for `{}`: {}", target, e),
        }
    }
}
