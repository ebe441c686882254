use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{expand_path, AliasRecord, AliasStore, Config};
use crate::error::GotoError;

/// Handle `goto register <name> <directory> [--tags a,b]`
pub fn register(matches: &ArgMatches, config: &Config) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("Alias name is required")?;
    let directory = matches
        .get_one::<String>("directory")
        .context("Directory is required")?;
    let tags: Vec<String> = matches
        .get_many::<String>("tags")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let record = register_alias(config, name, directory, &tags)?;

    println!(
        "{}",
        format!("✓ Registered '{}' -> {}", record.name, record.path).green()
    );
    if !record.tags.is_empty() {
        println!("  Tags: {}", record.tags.join(", ").cyan());
    }
    Ok(())
}

/// Register an alias for an existing directory and return the stored record
pub fn register_alias(
    config: &Config,
    name: &str,
    directory: &str,
    tags: &[String],
) -> Result<AliasRecord> {
    let path = expand_path(directory)?;
    if !path.is_dir() {
        return Err(GotoError::DirectoryNotFound(path.display().to_string()).into());
    }

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    let record = AliasRecord::new(name, path.to_string_lossy());
    store.add_with_tags(record, tags)?;

    Ok(store.get(name)?.clone())
}

/// Handle `goto unregister <name>`
pub fn unregister(matches: &ArgMatches, config: &Config) -> Result<()> {
    let name = matches
        .get_one::<String>("name")
        .context("Alias name is required")?;

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    let removed = store.remove(name)?;

    println!(
        "{}",
        format!("✓ Removed '{}' ({})", removed.name, removed.path).green()
    );
    Ok(())
}

/// Handle `goto rename <old> <new>`
pub fn rename(matches: &ArgMatches, config: &Config) -> Result<()> {
    let old = matches
        .get_one::<String>("old")
        .context("Current name is required")?;
    let new = matches
        .get_one::<String>("new")
        .context("New name is required")?;

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    store.rename(old, new)?;

    println!("{}", format!("✓ Renamed '{}' to '{}'", old, new).green());
    Ok(())
}
