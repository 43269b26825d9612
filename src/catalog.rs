use crate::error::LoadError;
use ahash::RandomState;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Technique identifier → record map of one partition
pub type TechniqueMap = HashMap<String, TechniqueRecord, RandomState>;

/// The catalog document describing every technique the page knows about.
///
/// # Fields
///
/// - `supervised` - Techniques trained on labelled data
/// - `unsupervised` - Techniques trained without labels
///
/// A partition that is missing or malformed deserializes as empty, so a damaged catalog turns
/// into lookup misses instead of a load failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmCatalog {
    #[serde(default, deserialize_with = "lenient_partition")]
    pub supervised: Partition,
    #[serde(default, deserialize_with = "lenient_partition")]
    pub unsupervised: Partition,
}

/// One category of techniques.
///
/// # Fields
///
/// - `techniques` - Records keyed by technique identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    #[serde(default, deserialize_with = "lenient_techniques")]
    pub techniques: TechniqueMap,
}

impl Partition {
    /// Returns the record stored under `technique_id`, if any.
    pub fn get(&self, technique_id: &str) -> Option<&TechniqueRecord> {
        self.techniques.get(technique_id)
    }

    /// Number of techniques in the partition
    pub fn len(&self) -> usize {
        self.techniques.len()
    }

    /// Whether the partition holds no techniques
    pub fn is_empty(&self) -> bool {
        self.techniques.is_empty()
    }
}

/// Deserializes an optional field, turning a malformed value into `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_partition<'de, D>(deserializer: D) -> Result<Partition, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Keeps every record that parses and drops the others, so one bad entry only hides itself.
fn lenient_techniques<'de, D>(deserializer: D) -> Result<TechniqueMap, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Map<String, serde_json::Value>> = lenient(deserializer)?;
    let mut techniques = TechniqueMap::default();

    for (id, value) in raw.unwrap_or_default() {
        match serde_json::from_value::<TechniqueRecord>(value) {
            Ok(record) => {
                techniques.insert(id, record);
            }
            Err(e) => log::warn!("Skipping malformed technique `{}`: {}", id, e),
        }
    }

    Ok(techniques)
}

/// Data model of a single technique record
pub mod record;
/// Transports that fetch the catalog document
pub mod source;
/// The write-once store holding the loaded catalog
pub mod store;

pub use record::*;
pub use source::*;
pub use store::*;
