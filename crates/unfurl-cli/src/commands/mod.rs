//! Command handlers.

use std::path::Path;

use tracing::info;

use unfurl_adapters::{DirectoryCatalogLoader, InMemoryCatalogStore};
use unfurl_core::{application::ports::ScaffoldStore, error::UnfurlError};

use crate::error::CliResult;

pub mod extract;
pub mod scaffolds;

/// Built-in catalogues plus the one under `scaffold_dir`, if given.
///
/// Returns the loaded catalogue's name so it can be selected by default.
pub(crate) fn catalog_store(
    scaffold_dir: Option<&Path>,
) -> CliResult<(InMemoryCatalogStore, Option<String>)> {
    let store = InMemoryCatalogStore::with_builtin()?;

    let Some(dir) = scaffold_dir else {
        return Ok((store, None));
    };

    let catalog = DirectoryCatalogLoader::new(dir)
        .load()
        .map_err(UnfurlError::from)?;
    let name = catalog.name.clone();
    info!(name = %name, dir = %dir.display(), "Loaded scaffold catalogue");
    store.insert(catalog)?;

    Ok((store, Some(name)))
}
