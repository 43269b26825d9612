use super::*;
use crate::metric::ConfusionGrid;
use serde::Serializer;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use std::fmt;

/// Descriptive record of one technique.
///
/// Only `name` is required. Every other field is optional and each renders as its own
/// section of the details view when present and non-empty.
///
/// # Fields
///
/// - `name` - Display name, used as the details title
/// - `types` - Variants of the technique (e.g. "Multinomial" for logistic regression)
/// - `hyperparameters` - Key hyperparameters with a short description each
/// - `advantages` - Strengths of the technique
/// - `disadvantages` - Weaknesses of the technique
/// - `uses` - Typical applications
/// - `kernels` - Kernel functions with their formulas (kernel methods only)
/// - `math` - Labelled formulas, kept in document order
/// - `examples` - Example data backing the metric panel and the plots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<TechniqueType>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub hyperparameters: Option<Vec<Hyperparameter>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub advantages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub disadvantages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub uses: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub kernels: Option<Vec<KernelFunction>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub math: Option<MathExpressions>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub examples: Option<ExampleData>,
}

impl TechniqueRecord {
    /// Creates a record carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: None,
            hyperparameters: None,
            advantages: None,
            disadvantages: None,
            uses: None,
            kernels: None,
            math: None,
            examples: None,
        }
    }
}

/// A variant of a technique
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A hyperparameter and what it controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameter {
    pub key: String,
    #[serde(default)]
    pub desc: String,
}

/// A kernel function and its formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KernelFunction {
    pub name: String,
    #[serde(default)]
    pub formula: String,
}

/// Labelled formulas in the order they appear in the catalog document.
///
/// Non-string values are kept in their JSON text form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MathExpressions(Vec<(String, String)>);

impl MathExpressions {
    /// Builds the mapping from `(label, formula)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Iterates over `(label, formula)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over the formulas in document order
    pub fn formulas(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MathExpressions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, formula) in &self.0 {
            map.serialize_entry(label, formula)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MathExpressions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = MathExpressions;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of labels to formulas")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) =
                    access.next_entry::<String, serde_json::Value>()?
                {
                    let formula = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    entries.push((label, formula));
                }
                Ok(MathExpressions(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

/// Example data attached to a technique.
///
/// `confusion_matrix` and `residuals` feed the Metrics panel; every field may also feed
/// one of the two plot placeholders.
///
/// # Fields
///
/// - `confusion_matrix` - 2×2 grid laid out as `[[TN, FP], [FN, TP]]`
/// - `residuals` - Paired true and predicted values of a regression
/// - `sample` - Sample points for the fit-curve chart
/// - `elbow` - Inertia per candidate cluster count
/// - `clusters` - 2D points with their cluster labels
/// - `explained_variance` - Variance ratio per principal component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleData {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub confusion_matrix: Option<ConfusionGrid>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub residuals: Option<Residuals>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub sample: Option<SamplePoints>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub elbow: Option<ElbowCurve>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Clusters2D>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub explained_variance: Option<ExplainedVariance>,
}

/// Paired ground-truth and predicted values of a regression
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Residuals {
    pub y_true: Vec<f64>,
    pub y_pred: Vec<f64>,
}

/// Sample points drawn under the demonstration fit curve
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePoints {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Within-cluster sum of squares for each candidate cluster count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElbowCurve {
    pub k: Vec<f64>,
    pub inertia: Vec<f64>,
}

/// 2D points and the cluster each belongs to.
///
/// Labels are plain numbers, so `0.0` and `0` name the same cluster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clusters2D {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub labels: Vec<f64>,
}

/// Explained variance ratio per principal component (components are 1-based, `1.0` reads as `PC1`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplainedVariance {
    pub components: Vec<f64>,
    pub variance: Vec<f64>,
}
