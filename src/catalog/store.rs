use super::*;
use crate::config::HubConfig;
use std::sync::OnceLock;

/// Holds the algorithm catalog for the lifetime of the page session.
///
/// The catalog is written at most once. Before a successful load, and forever after a failed
/// one, `catalog()` returns `None` and every lookup misses.
///
/// # Fields
///
/// - `source` - Transport used by `load`; `None` for a store built around a ready catalog
/// - `path` - Resource path handed to the source
/// - `catalog` - The loaded catalog, set at most once
pub struct ContentStore {
    source: Option<Box<dyn CatalogSource>>,
    path: String,
    catalog: OnceLock<AlgorithmCatalog>,
}

impl ContentStore {
    /// Creates an empty store that will fetch `path` from `source`.
    pub fn new(source: impl CatalogSource + 'static, path: impl Into<String>) -> Self {
        Self {
            source: Some(Box::new(source)),
            path: path.into(),
            catalog: OnceLock::new(),
        }
    }

    /// Creates an empty store fetching the catalog path named by `config`.
    pub fn from_config(source: impl CatalogSource + 'static, config: &HubConfig) -> Self {
        Self::new(source, config.catalog_path.clone())
    }

    /// Creates a store that already holds `catalog`.
    pub fn with_catalog(catalog: AlgorithmCatalog) -> Self {
        Self {
            source: None,
            path: String::new(),
            catalog: OnceLock::from(catalog),
        }
    }

    /// Fetches and parses the catalog, reporting failures.
    ///
    /// Issues at most one successful fetch: once the catalog is set, later calls return it
    /// without touching the source.
    ///
    /// # Returns
    ///
    /// - `Ok(&AlgorithmCatalog)` - The loaded catalog
    /// - `Err(LoadError)` - The transport or parse failure; the store is left empty
    pub fn try_load(&self) -> Result<&AlgorithmCatalog, LoadError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let source = self
            .source
            .as_ref()
            .ok_or_else(|| LoadError::Unavailable("no catalog source configured".to_string()))?;

        let body = source.fetch(&self.path)?;
        let parsed: AlgorithmCatalog = serde_json::from_str(&body)?;

        log::debug!(
            "Loaded catalog from {}: {} supervised, {} unsupervised techniques",
            self.path,
            parsed.supervised.len(),
            parsed.unsupervised.len()
        );

        Ok(self.catalog.get_or_init(|| parsed))
    }

    /// Fetches the catalog, swallowing any failure.
    ///
    /// # Returns
    ///
    /// - `bool` - `true` when the store holds a catalog after the call
    pub fn load(&self) -> bool {
        match self.try_load() {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Catalog {} unavailable: {}", self.path, e);
                false
            }
        }
    }

    /// The loaded catalog, if any
    pub fn catalog(&self) -> Option<&AlgorithmCatalog> {
        self.catalog.get()
    }

    /// Whether a catalog has been loaded
    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Resource path this store fetches
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
