use super::*;
use std::io::Read;
use std::path::PathBuf;

/// Catalog document shipped with the crate (the seven techniques linked from the page)
pub const BUNDLED_CATALOG: &str = include_str!("../../data/algorithms.json");

/// A transport able to fetch the catalog document.
///
/// Implementations return the raw document text; parsing happens in the store.
pub trait CatalogSource {
    /// Fetches the resource at `path`.
    ///
    /// # Parameters
    ///
    /// - `path` - Relative path of the resource (e.g. `data/algorithms.json`)
    ///
    /// # Returns
    ///
    /// - `Result<String, LoadError>` - The document text, or the transport failure
    fn fetch(&self, path: &str) -> Result<String, LoadError>;
}

/// Reads resources from a directory on disk.
///
/// # Fields
///
/// - `root` - Directory that relative resource paths are resolved against
#[derive(Debug, Clone)]
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    /// Creates a source resolving paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let mut reader = LoadError::open_buffered(self.root.join(path))?;
        let mut body = String::new();
        reader.read_to_string(&mut body)?;
        Ok(body)
    }
}

/// Serves documents held in memory.
///
/// A path that was never registered answers with `LoadError::Unavailable`, the same outcome as
/// a non-success response from a remote server.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::catalog::{CatalogSource, StaticSource};
///
/// let source = StaticSource::new().with_document("a.json", "{}");
/// assert_eq!(source.fetch("a.json").unwrap(), "{}");
/// assert!(source.fetch("b.json").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, String, RandomState>,
}

impl StaticSource {
    /// Creates a source with no documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source serving the bundled catalog at the default catalog path.
    pub fn bundled() -> Self {
        Self::new().with_document(crate::config::DEFAULT_CATALOG_PATH, BUNDLED_CATALOG)
    }

    /// Registers `body` under `path`, replacing any earlier document.
    pub fn with_document(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(path.into(), body.into());
        self
    }
}

impl CatalogSource for StaticSource {
    fn fetch(&self, path: &str) -> Result<String, LoadError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Unavailable(format!("404 Not Found: {}", path)))
    }
}
