use crate::catalog::{AlgorithmCatalog, ContentStore, TechniqueRecord};

/// The partition a technique was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Supervised,
    Unsupervised,
}

impl Category {
    /// Catalog member name of the partition
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Supervised => "supervised",
            Category::Unsupervised => "unsupervised",
        }
    }
}

/// Looks a technique up in a catalog, supervised partition first.
///
/// When the same identifier exists in both partitions the supervised record wins.
///
/// # Parameters
///
/// - `catalog` - The catalog to search
/// - `technique_id` - Technique identifier, e.g. `knn`
///
/// # Returns
///
/// - `Option<(Category, &TechniqueRecord)>` - The matching record and its partition, or `None`
pub fn find_in_catalog<'a>(
    catalog: &'a AlgorithmCatalog,
    technique_id: &str,
) -> Option<(Category, &'a TechniqueRecord)> {
    catalog
        .supervised
        .get(technique_id)
        .map(|record| (Category::Supervised, record))
        .or_else(|| {
            catalog
                .unsupervised
                .get(technique_id)
                .map(|record| (Category::Unsupervised, record))
        })
}

/// Resolves a technique identifier and reports which partition it came from.
///
/// Always misses while the store holds no catalog.
pub fn resolve_with_category<'a>(
    store: &'a ContentStore,
    technique_id: &str,
) -> Option<(Category, &'a TechniqueRecord)> {
    let catalog = store.catalog()?;
    let found = find_in_catalog(catalog, technique_id);
    if found.is_none() {
        log::debug!("No technique named `{}` in the catalog", technique_id);
    }
    found
}

/// Resolves a technique identifier to its record.
///
/// # Parameters
///
/// - `store` - Content store holding the catalog
/// - `technique_id` - Technique identifier, e.g. `svm`
///
/// # Returns
///
/// - `Option<&TechniqueRecord>` - The record, or `None` when unknown or when no catalog is loaded
pub fn resolve<'a>(store: &'a ContentStore, technique_id: &str) -> Option<&'a TechniqueRecord> {
    resolve_with_category(store, technique_id).map(|(_, record)| record)
}
