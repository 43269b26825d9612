use ahash::AHashMap;

/// Navigation anchors that open a technique's details, as `(fragment, technique identifier)`
pub const ALGORITHM_ANCHORS: [(&str, &str); 7] = [
    ("#logistic-regression", "logistic"),
    ("#knn", "knn"),
    ("#decision-trees", "decision_tree"),
    ("#svm", "svm"),
    ("#linear-regression", "linear_regression"),
    ("#kmeans", "kmeans"),
    ("#pca", "pca"),
];

/// Technique identifier linked from a navigation fragment.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::navigation::technique_for_anchor;
///
/// assert_eq!(technique_for_anchor("#decision-trees"), Some("decision_tree"));
/// assert_eq!(technique_for_anchor("#home"), None);
/// ```
pub fn technique_for_anchor(fragment: &str) -> Option<&'static str> {
    ALGORITHM_ANCHORS
        .iter()
        .find(|(anchor, _)| *anchor == fragment)
        .map(|(_, technique)| *technique)
}

/// Anchors of a page that have been bound to techniques.
///
/// Binding marks a link as an algorithm link; a click on a bound link opens the details of its
/// technique instead of scrolling to the fragment.
#[derive(Debug, Clone, Default)]
pub struct AnchorBindings {
    bound: AHashMap<String, &'static str>,
}

impl AnchorBindings {
    /// Binds every page anchor listed in the navigation table.
    ///
    /// # Parameters
    ///
    /// - `hrefs` - `href` values of the links present on the page
    ///
    /// # Returns
    ///
    /// - `Self` - Bindings for the anchors found in the table; other links are ignored
    pub fn bind<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bound: AHashMap<String, &'static str> = hrefs
            .into_iter()
            .filter_map(|href| {
                let href = href.as_ref();
                technique_for_anchor(href).map(|technique| (href.to_string(), technique))
            })
            .collect();
        log::debug!("Bound {} algorithm anchors", bound.len());
        Self { bound }
    }

    /// Technique opened by a click on `href`, if that link is bound
    pub fn technique_for(&self, href: &str) -> Option<&'static str> {
        self.bound.get(href).copied()
    }

    pub fn len(&self) -> usize {
        self.bound.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}
