//! `unfurl --list-scaffolds`.

use serde::Serialize;

use unfurl_core::application::ports::ScaffoldStore;

use crate::{
    cli::{ExtractArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct CatalogSummary<'a> {
    name: &'a str,
    description: &'a str,
    default: bool,
    entries: Vec<&'a str>,
}

pub fn execute(args: &ExtractArgs, config: &AppConfig, output: OutputManager) -> CliResult<()> {
    let (store, loaded) = super::catalog_store(args.scaffold_dir.as_deref())?;
    let default = args
        .scaffold
        .as_deref()
        .or(loaded.as_deref())
        .unwrap_or(config.extraction.scaffold.as_str());
    let catalogs = store.list()?;

    if output.format() == OutputFormat::Json {
        let summaries: Vec<_> = catalogs
            .iter()
            .map(|c| CatalogSummary {
                name: &c.name,
                description: &c.description,
                default: c.name == default,
                entries: c.entries().map(|e| e.path.as_str()).collect(),
            })
            .collect();
        return output.json(&summaries);
    }

    output.header("Available scaffolds:")?;
    for catalog in &catalogs {
        let marker = if catalog.name == default { "*" } else { " " };
        output.print(&format!(
            "{marker} {:<10} {} {}",
            catalog.name,
            catalog.description,
            output.dim(&format!("({} files)", catalog.entry_count()))
        ))?;
    }

    Ok(())
}
