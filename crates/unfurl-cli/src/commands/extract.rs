//! An extraction run: read the document, write the project, report.

use std::{fs, path::Path};

use tracing::{info, instrument};

use unfurl_adapters::LocalFilesystem;
use unfurl_core::{
    application::{ExtractionOptions, ExtractionReport, ExtractionService, FileOrigin},
    application::ports::ScaffoldStore,
    domain::{Document, Sanitizer},
};

use crate::{
    cli::{ExtractArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(input = ?args.input))]
pub fn execute(args: ExtractArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let input = args
        .input
        .ok_or(CliError::MissingArgument { name: "INPUT" })?;
    if !input.is_file() {
        return Err(CliError::InputNotFound { path: input });
    }

    let output_root = args
        .output
        .unwrap_or_else(|| config.default_output(&input));

    let (store, loaded) = super::catalog_store(args.scaffold_dir.as_deref())?;
    let scaffold = args
        .scaffold
        .or(loaded)
        .unwrap_or_else(|| config.extraction.scaffold.clone());

    // Resolve the catalogue before touching anything else.
    store.get(&scaffold)?;

    let tags = if args.reasoning_tags.is_empty() {
        &config.extraction.reasoning_tags
    } else {
        &args.reasoning_tags
    };
    let sanitizer = Sanitizer::for_tags(tags).map_err(|e| CliError::InvalidInput {
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;

    let text = fs::read_to_string(&input)
        .with_cli_context(|| format!("Failed to read {}", input.display()))?;
    info!(bytes = text.len(), "Document loaded");

    let service = ExtractionService::new(Box::new(LocalFilesystem::new()), Box::new(store))
        .with_sanitizer(sanitizer);
    let options = ExtractionOptions {
        scaffold,
        dry_run: args.dry_run,
    };
    let report = service.run(&Document::new(text), &output_root, &options)?;

    match output.format() {
        OutputFormat::Json => output.json(&report),
        _ => print_summary(&input, &report, &output),
    }
}

fn print_summary(input: &Path, report: &ExtractionReport, output: &OutputManager) -> CliResult<()> {
    if report.dry_run {
        output.header("Dry run: nothing was written")?;
    } else {
        output.header("Extracting project")?;
    }
    output.print(&"=".repeat(50))?;
    output.info(&format!("Input:  {}", input.display()))?;
    output.info(&format!("Output: {}/", report.output_root.display()))?;
    output.print("")?;

    for file in &report.files {
        let detail = match &file.origin {
            FileOrigin::Extracted { rule } => format!("({} bytes, {rule})", file.bytes),
            FileOrigin::Scaffold { .. } => format!("({} bytes, scaffold)", file.bytes),
        };
        output.print(&format!("  {} {}", file.path, output.dim(&detail)))?;
    }

    for rejected in &report.rejected {
        output.warning(&format!(
            "Skipped '{}' ({}): {}",
            rejected.path, rejected.rule, rejected.reason
        ))?;
    }

    if report.extracted().next().is_none() {
        output.warning("No files found in the document")?;
    }

    output.print("")?;
    let verb = if report.dry_run { "Would create" } else { "Created" };
    output.success(&format!(
        "{verb} {} files in {}/",
        report.total(),
        report.output_root.display()
    ))?;

    if !report.dry_run && !report.next_steps.is_empty() {
        output.print("")?;
        output.header("To run the project:")?;
        for step in &report.next_steps {
            output.print(&format!("  {step}"))?;
        }
    }

    Ok(())
}
