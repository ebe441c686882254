use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use std::fs;

use crate::core::{AliasStore, Config, ImportReport, ImportStrategy};
use crate::ui;

/// Handle `goto export`
pub fn export(config: &Config) -> Result<()> {
    let store = AliasStore::load(config).context("Failed to load alias store")?;
    print!("{}", store.export_string()?);
    Ok(())
}

/// Handle `goto import <file> [--strategy S]`
pub fn import(matches: &ArgMatches, config: &Config) -> Result<()> {
    let file = matches
        .get_one::<String>("file")
        .context("Import file is required")?;
    let strategy = matches
        .get_one::<String>("strategy")
        .map(String::as_str)
        .unwrap_or("skip");

    let report = import_file(config, file, strategy)?;

    for warning in &report.warnings {
        ui::warn(warning);
    }

    let mut summary = format!("Import complete: {} imported", report.imported);
    if report.skipped > 0 {
        summary.push_str(&format!(", {} skipped", report.skipped));
    }
    if report.renamed > 0 {
        summary.push_str(&format!(", {} renamed", report.renamed));
    }
    println!("{}", summary.green());
    Ok(())
}

/// Import a file into the configured store
///
/// The strategy is checked before the file is read, so a typo never touches
/// the store.
pub fn import_file(config: &Config, file: &str, strategy: &str) -> Result<ImportReport> {
    let strategy: ImportStrategy = strategy.parse()?;

    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read import file: {}", file))?;

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    let report = store.import_str(&content, strategy)?;

    log::info!(
        "Imported {} of {} aliases from {} ({})",
        report.imported + report.renamed,
        report.total(),
        file,
        strategy
    );
    Ok(report)
}
