use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Error types that can occur while fetching the catalog or reading configuration
///
/// # Variants
///
/// - `Io` - Wraps standard I/O errors from file system operations (missing file, permission denied)
/// - `Json` - Wraps JSON deserialization errors when the document is not the expected shape
/// - `Unavailable` - The source could not produce the resource (the equivalent of a non-success response)
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Resource unavailable: {0}")]
    Unavailable(String),
}

impl LoadError {
    /// Opens a file and wraps it in a buffered reader.
    ///
    /// # Parameters
    ///
    /// - `path` - Path of the file to open
    ///
    /// # Returns
    ///
    /// - `Result<BufReader<File>, LoadError>` - Buffered reader over the file, or `LoadError::Io` if it cannot be opened
    pub fn open_buffered(path: impl AsRef<Path>) -> Result<BufReader<File>, LoadError> {
        let file = File::open(path)?;
        Ok(BufReader::new(file))
    }
}
