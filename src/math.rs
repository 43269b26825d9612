use serde::{Deserialize, Serialize};

/// A pair of strings delimiting a math expression.
///
/// # Fields
///
/// - `left` - Opening delimiter
/// - `right` - Closing delimiter
/// - `display` - `true` for display (block) math, `false` for inline math
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiter {
    pub left: String,
    pub right: String,
    pub display: bool,
}

impl Delimiter {
    pub fn new(left: &str, right: &str, display: bool) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            display,
        }
    }
}

/// Options handed to the math renderer.
///
/// The default recognizes `$$…$$` and `\[…\]` as display math and `$…$` and `\(…\)` as inline
/// math, and asks the renderer not to raise on malformed expressions. Order matters: `$$` is
/// listed before `$` so a display opener is never read as two inline ones.
///
/// # Fields
///
/// - `delimiters` - Recognized delimiter pairs, in priority order
/// - `throw_on_error` - Whether a malformed expression should abort rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathOptions {
    pub delimiters: Vec<Delimiter>,
    pub throw_on_error: bool,
}

impl Default for MathOptions {
    fn default() -> Self {
        Self {
            delimiters: vec![
                Delimiter::new("$$", "$$", true),
                Delimiter::new("$", "$", false),
                Delimiter::new("\\(", "\\)", false),
                Delimiter::new("\\[", "\\]", true),
            ],
            throw_on_error: false,
        }
    }
}

/// Collaborator that typesets math expressions inside rendered content.
///
/// Implementations receive the content of the details view and rewrite it in place.
pub trait MathRenderer {
    /// Renders every delimited expression found in `content`.
    ///
    /// # Parameters
    ///
    /// - `content` - HTML content of the target element
    /// - `options` - Delimiters and error policy
    fn render_in_element(&self, content: &mut String, options: &MathOptions);
}

/// A piece of text produced by `split_at_delimiters`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathSegment<'a> {
    /// Plain text outside any delimiter
    Text(&'a str),
    /// A delimited expression
    ///
    /// - `tex` - The expression without its delimiters
    /// - `raw` - The expression including its delimiters
    /// - `display` - Whether the delimiter pair denotes display math
    Math {
        tex: &'a str,
        raw: &'a str,
        display: bool,
    },
}

/// Finds the closing delimiter, skipping escaped characters and anything nested in braces.
fn find_end_of_math(text: &str, right: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let right = right.as_bytes();
    let mut index = start;
    let mut brace_level: i32 = 0;

    while index < bytes.len() {
        if brace_level <= 0 && bytes[index..].starts_with(right) {
            return Some(index);
        }
        match bytes[index] {
            b'\\' => index += 1,
            b'{' => brace_level += 1,
            b'}' => brace_level -= 1,
            _ => {}
        }
        index += 1;
    }

    None
}

/// Returns the position and delimiter of the earliest opening delimiter at or after `from`.
///
/// At a given position, delimiters listed earlier take priority.
fn find_opening<'d>(
    text: &str,
    from: usize,
    delimiters: &'d [Delimiter],
) -> Option<(usize, &'d Delimiter)> {
    let bytes = text.as_bytes();
    (from..bytes.len()).find_map(|index| {
        delimiters
            .iter()
            .filter(|d| !d.left.is_empty())
            .find(|d| bytes[index..].starts_with(d.left.as_bytes()))
            .map(|d| (index, d))
    })
}

/// Splits text into plain and math segments.
///
/// An opening delimiter without a matching closing one leaves the rest of the text plain.
///
/// # Parameters
///
/// - `text` - Text to split
/// - `delimiters` - Delimiter pairs, in priority order
///
/// # Examples
/// ```rust
/// use ml_deconstructed::math::{split_at_delimiters, MathOptions, MathSegment};
///
/// let options = MathOptions::default();
/// let segments = split_at_delimiters("Loss $L(w)$ and $$\\sum_i x_i$$", &options.delimiters);
/// assert_eq!(segments[0], MathSegment::Text("Loss "));
/// assert_eq!(
///     segments[1],
///     MathSegment::Math { tex: "L(w)", raw: "$L(w)$", display: false }
/// );
/// assert!(matches!(segments[3], MathSegment::Math { display: true, .. }));
/// ```
///
/// # Returns
///
/// - `Vec<MathSegment>` - Segments in text order; empty segments are omitted
pub fn split_at_delimiters<'a>(text: &'a str, delimiters: &[Delimiter]) -> Vec<MathSegment<'a>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some((open, delimiter)) = find_opening(text, cursor, delimiters) {
        let body_start = open + delimiter.left.len();
        let Some(close) = find_end_of_math(text, &delimiter.right, body_start) else {
            break;
        };

        if open > cursor {
            segments.push(MathSegment::Text(&text[cursor..open]));
        }
        let end = close + delimiter.right.len();
        segments.push(MathSegment::Math {
            tex: &text[body_start..close],
            raw: &text[open..end],
            display: delimiter.display,
        });
        cursor = end;
    }

    if cursor < text.len() {
        segments.push(MathSegment::Text(&text[cursor..]));
    }

    segments
}

/// Tags whose text content is never scanned for math
const IGNORED_TAGS: [&str; 7] = [
    "script", "noscript", "style", "textarea", "pre", "code", "option",
];

/// Marks math expressions in HTML so a client-side typesetter can pick them up.
///
/// Only text between tags is scanned, and text inside `code`, `pre`, `script` and similar
/// elements is left alone. Inline expressions become
/// `<span class="math math-inline">\(…\)</span>`, display expressions
/// `<span class="math math-display">\[…\]</span>`.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::math::{MarkupMathRenderer, MathOptions, MathRenderer};
///
/// let mut html = String::from("<div>$x^2$</div><code>$HOME</code>");
/// MarkupMathRenderer.render_in_element(&mut html, &MathOptions::default());
/// assert_eq!(
///     html,
///     r#"<div><span class="math math-inline">\(x^2\)</span></div><code>$HOME</code>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupMathRenderer;

impl MarkupMathRenderer {
    fn mark_text(out: &mut String, text: &str, options: &MathOptions) {
        for segment in split_at_delimiters(text, &options.delimiters) {
            match segment {
                MathSegment::Text(t) => out.push_str(t),
                MathSegment::Math { tex, display, .. } => {
                    if display {
                        out.push_str(r#"<span class="math math-display">\["#);
                        out.push_str(tex);
                        out.push_str(r"\]</span>");
                    } else {
                        out.push_str(r#"<span class="math math-inline">\("#);
                        out.push_str(tex);
                        out.push_str(r"\)</span>");
                    }
                }
            }
        }
    }
}

/// Reads the lowercase tag name of a tag body (`div class="x"` → `div`, `/code` → `code`).
fn tag_name(tag: &str) -> (bool, String) {
    let trimmed = tag.trim_start_matches('<').trim_end_matches('>');
    let closing = trimmed.starts_with('/');
    let name = trimmed
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    (closing, name)
}

impl MathRenderer for MarkupMathRenderer {
    fn render_in_element(&self, content: &mut String, options: &MathOptions) {
        let mut out = String::with_capacity(content.len());
        let mut rest = content.as_str();
        let mut ignored_depth = 0usize;

        while !rest.is_empty() {
            match rest.find('<') {
                Some(0) => {
                    let tag_end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
                    let tag = &rest[..tag_end];
                    let (closing, name) = tag_name(tag);
                    if IGNORED_TAGS.contains(&name.as_str()) {
                        if closing {
                            ignored_depth = ignored_depth.saturating_sub(1);
                        } else if !tag.ends_with("/>") {
                            ignored_depth += 1;
                        }
                    }
                    out.push_str(tag);
                    rest = &rest[tag_end..];
                }
                next => {
                    let text_end = next.unwrap_or(rest.len());
                    let text = &rest[..text_end];
                    if ignored_depth > 0 {
                        out.push_str(text);
                    } else {
                        Self::mark_text(&mut out, text, options);
                    }
                    rest = &rest[text_end..];
                }
            }
        }

        *content = out;
    }
}
