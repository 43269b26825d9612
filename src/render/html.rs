use crate::catalog::{Hyperparameter, KernelFunction, MathExpressions, TechniqueType};
use crate::config::Attribution;
use crate::metric::MetricCard;
use crate::plot::{PLOT_A_TARGET, PLOT_B_TARGET};

/// Escapes text for use in HTML content and attribute values.
///
/// Math delimiters (`$`, `\(`, `\[`) pass through unchanged.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::render::escape_html;
///
/// assert_eq!(escape_html("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_html("$x_i$"), "$x_i$");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A titled card holding a bullet list, or nothing when there are no items.
pub(crate) fn list_card(title: &str, accent: &str, items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!(
        r#"<div class="bg-gray-800 rounded p-4"><h5 class="font-semibold mb-2 {}">{}</h5><ul class="list-disc list-inside space-y-1 text-gray-200">{}</ul></div>"#,
        accent,
        title,
        items.concat()
    ))
}

/// A grid row wrapping the given cards, or nothing when every card is absent.
pub(crate) fn row(class: &str, cards: Vec<Option<String>>) -> Option<String> {
    let cards: Vec<String> = cards.into_iter().flatten().collect();
    if cards.is_empty() {
        return None;
    }
    Some(format!(r#"<div class="{}">{}</div>"#, class, cards.concat()))
}

pub(crate) fn metrics_panel(cards: &[MetricCard]) -> String {
    let tiles: String = cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class="bg-gray-800 rounded p-4 text-center"><div class="text-sm text-gray-400">{}</div><div class="text-2xl font-semibold">{}</div></div>"#,
                card.label,
                card.formatted()
            )
        })
        .collect();
    format!(
        r#"<div class="bg-gray-900 border border-gray-800 rounded p-4"><h5 class="font-semibold mb-3 text-blue-400">Metrics</h5><div class="grid grid-cols-2 md:grid-cols-4 gap-4">{}</div></div>"#,
        tiles
    )
}

pub(crate) fn types_grid(types: &[TechniqueType]) -> String {
    let cards: String = types
        .iter()
        .map(|t| {
            format!(
                r#"<div class="bg-gray-800 rounded p-4"><div class="font-medium">{}</div><div class="text-gray-300 text-sm mt-1">{}</div></div>"#,
                escape_html(&t.name),
                escape_html(t.description.as_deref().unwrap_or(""))
            )
        })
        .collect();
    format!(
        r#"<div><h4 class="text-lg font-semibold text-yellow-400 mb-2">Types</h4><div class="grid grid-cols-1 md:grid-cols-2 gap-4">{}</div></div>"#,
        cards
    )
}

pub(crate) fn kernel_items(kernels: &[KernelFunction]) -> Vec<String> {
    kernels
        .iter()
        .map(|k| {
            format!(
                r#"<li><span class="font-medium text-blue-300">{}</span>: <span class="katex">{}</span></li>"#,
                escape_html(&k.name),
                escape_html(&k.formula)
            )
        })
        .collect()
}

pub(crate) fn hyperparameter_items(hyperparameters: &[Hyperparameter]) -> Vec<String> {
    hyperparameters
        .iter()
        .map(|h| {
            format!(
                "<li><code>{}</code> - {}</li>",
                escape_html(&h.key),
                escape_html(&h.desc)
            )
        })
        .collect()
}

pub(crate) fn text_items(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", escape_html(item)))
        .collect()
}

pub(crate) fn math_block(math: &MathExpressions) -> String {
    let lines: String = math
        .formulas()
        .map(|formula| {
            format!(
                r#"<div class="text-gray-200 mb-1"><span class="katex">{}</span></div>"#,
                escape_html(formula)
            )
        })
        .collect();
    format!(
        r#"<div class="bg-gray-800 rounded p-4"><h5 class="font-semibold mb-2 text-yellow-400">Mathematics</h5>{}</div>"#,
        lines
    )
}

pub(crate) fn plot_placeholders() -> String {
    let placeholder = |title: &str, id: &str| {
        format!(
            r#"<div class="bg-gray-800 rounded p-4"><h5 class="font-semibold mb-2 text-blue-400">{}</h5><div id="{}" class="h-64"></div></div>"#,
            title, id
        )
    };
    format!(
        r#"<div class="grid grid-cols-1 lg:grid-cols-2 gap-6">{}{}</div>"#,
        placeholder("Plot A", PLOT_A_TARGET),
        placeholder("Plot B", PLOT_B_TARGET)
    )
}

pub(crate) fn attribution_note(attribution: &Attribution) -> String {
    format!(
        r#"<div class="bg-gray-800 rounded p-3 text-sm text-gray-300">For full notebooks and implementations, see <a href="{}" target="_blank" rel="noopener" class="text-blue-400 hover:text-blue-300 underline">{}</a>.</div>"#,
        escape_html(&attribution.url),
        escape_html(&attribution.label)
    )
}
