//! In-memory catalogue store with built-in catalogues.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use unfurl_core::{
    application::{ApplicationError, ports::ScaffoldStore},
    domain::{DomainValidator as validator, ScaffoldCatalog},
    error::{UnfurlError, UnfurlResult},
};

use crate::builtin_catalogs;

/// Thread-safe in-memory catalogue store.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogStore {
    inner: Arc<RwLock<HashMap<String, ScaffoldCatalog>>>,
}

impl InMemoryCatalogStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a store with built-in catalogues loaded.
    pub fn with_builtin() -> UnfurlResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in catalogues.
    pub fn load_builtin(&self) -> UnfurlResult<()> {
        self.extend(builtin_catalogs::all_catalogs()?)
    }

    /// Insert every catalogue, replacing same-named ones.
    pub fn extend(&self, catalogs: impl IntoIterator<Item = ScaffoldCatalog>) -> UnfurlResult<()> {
        for catalog in catalogs {
            self.insert(catalog)?;
        }
        Ok(())
    }

    /// Sorted catalogue names.
    fn names(&self) -> UnfurlResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        let mut names: Vec<_> = inner.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    /// Get the number of catalogues.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaffoldStore for InMemoryCatalogStore {
    fn get(&self, name: &str) -> UnfurlResult<ScaffoldCatalog> {
        let found = {
            let inner = self
                .inner
                .read()
                .map_err(|_| ApplicationError::StoreLockError)?;
            inner.get(name).cloned()
        };

        match found {
            Some(catalog) => Ok(catalog),
            None => Err(ApplicationError::CatalogNotFound {
                name: name.to_string(),
                available: self.names()?,
            }
            .into()),
        }
    }

    fn list(&self) -> UnfurlResult<Vec<ScaffoldCatalog>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut catalogs: Vec<_> = inner.values().cloned().collect();
        catalogs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(catalogs)
    }

    fn insert(&self, catalog: ScaffoldCatalog) -> UnfurlResult<()> {
        // Validate before insertion
        validator::validate_catalog(&catalog).map_err(UnfurlError::Domain)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        debug!(name = %catalog.name, entries = catalog.entry_count(), "catalogue registered");
        inner.insert(catalog.name.clone(), catalog);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unfurl_core::domain::ScaffoldEntry;

    #[test]
    fn builtin_catalogues_are_listed_sorted() {
        let store = InMemoryCatalogStore::with_builtin().unwrap();
        let names: Vec<_> = store.list().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["nextjs", "none"]);
    }

    #[test]
    fn unknown_name_lists_alternatives() {
        let store = InMemoryCatalogStore::with_builtin().unwrap();

        match store.get("rails") {
            Err(UnfurlError::Application(ApplicationError::CatalogNotFound {
                name,
                available,
            })) => {
                assert_eq!(name, "rails");
                assert_eq!(available, vec!["nextjs", "none"]);
            }
            other => panic!("expected CatalogNotFound, got {other:?}"),
        }
    }

    #[test]
    fn insert_replaces_same_name() {
        let store = InMemoryCatalogStore::with_builtin().unwrap();
        store
            .insert(
                ScaffoldCatalog::new("nextjs")
                    .with_entry(ScaffoldEntry::try_new("package.json", "{}").unwrap()),
            )
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("nextjs").unwrap().entry_count(), 1);
    }

    #[test]
    fn invalid_catalogue_is_rejected() {
        let store = InMemoryCatalogStore::new();
        let entry = ScaffoldEntry::try_new("a.json", "{}").unwrap();
        let catalog = ScaffoldCatalog::new("dup")
            .with_entry(entry.clone())
            .with_entry(entry);

        assert!(store.insert(catalog).is_err());
        assert!(store.is_empty());
    }
}
