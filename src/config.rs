use crate::error::LoadError;
use crate::math::MathOptions;
use crate::plot::PlotTheme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relative path of the catalog resource on the reference page
pub const DEFAULT_CATALOG_PATH: &str = "data/algorithms.json";

/// External reference appended to every details view.
///
/// # Fields
///
/// - `label` - Link text
/// - `url` - Link target, opened in a new tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attribution {
    pub label: String,
    pub url: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Self {
            label: "Machine-Learning-Toolkit".to_string(),
            url: "https://github.com/Aditya7615/Machine-Learning-Toolkit".to_string(),
        }
    }
}

/// Configuration of the learning hub.
///
/// Every field has a default, so a configuration file only needs to name what it overrides.
///
/// # Fields
///
/// - `catalog_path` - Path of the catalog resource, relative to the catalog source root
/// - `attribution` - Reference link appended after the details content
/// - `theme` - Colors applied to every figure layout
/// - `math` - Delimiters and error policy handed to the math renderer
///
/// # Examples
/// ```rust
/// use ml_deconstructed::config::HubConfig;
///
/// let config: HubConfig = serde_json::from_str(r#"{"catalog_path": "catalog.json"}"#).unwrap();
/// assert_eq!(config.catalog_path, "catalog.json");
/// assert_eq!(config.theme.background, "#1F2937");
/// assert_eq!(config.math.delimiters.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub catalog_path: String,
    pub attribution: Attribution,
    pub theme: PlotTheme,
    pub math: MathOptions,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            attribution: Attribution::default(),
            theme: PlotTheme::default(),
            math: MathOptions::default(),
        }
    }
}

impl HubConfig {
    /// Reads a configuration from a JSON file.
    ///
    /// # Parameters
    ///
    /// - `path` - Path of the JSON configuration file
    ///
    /// # Returns
    ///
    /// - `Result<Self, LoadError>` - The configuration, or `LoadError::Io` / `LoadError::Json` on failure
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let reader = LoadError::open_buffered(path)?;
        let config: Self = serde_json::from_reader(reader)?;
        log::debug!("Loaded hub configuration from {}", path.display());
        Ok(config)
    }
}
