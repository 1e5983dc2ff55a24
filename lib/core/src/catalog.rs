use crate::error::{Error, Result};
use crate::item::CatalogItem;
use ahash::AHashMap;
use std::ops::Deref;
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// An immutable, validated collection of catalog items.
///
/// Insertion order is preserved and is the tie-break order used by the
/// ranking engine. Dereferences to `[CatalogItem]`, so anything that takes
/// a slice of items takes a catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    by_id: AHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating every item and rejecting duplicate ids
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut by_id = AHashMap::with_capacity(items.len());

        for (idx, item) in items.iter().enumerate() {
            item.validate()?;
            if by_id.insert(item.id.clone(), idx).is_some() {
                return Err(Error::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self { items, by_id })
    }

    /// Parse a JSON array of items
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Load a JSON catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!("Loaded {} catalog items from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The sample catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

impl Deref for Catalog {
    type Target = [CatalogItem];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}
