use anyhow::{Context, Result};
use clap::ArgMatches;
use std::env;
use std::path::Path;

use crate::core::{AliasStore, Config, DirectoryStack};
use crate::error::GotoError;

/// Handle `goto push <alias>`
///
/// The current directory is pushed only after the alias resolves, so a
/// failed lookup leaves the stack untouched.
pub fn push(matches: &ArgMatches, config: &Config) -> Result<()> {
    let alias = matches
        .get_one::<String>("alias")
        .context("Alias name is required")?;

    let cwd = env::current_dir().context("Failed to determine current directory")?;
    let target = push_from(config, alias, &cwd)?;
    println!("{}", target);
    Ok(())
}

/// Resolve `alias`, then record `from` on the stack; returns the target path
pub fn push_from(config: &Config, alias: &str, from: &Path) -> Result<String> {
    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    let target = store.navigate(alias)?;

    DirectoryStack::new(&config.stack_path).push(&from.to_string_lossy())?;
    Ok(target)
}

/// Handle `goto pop`
pub fn pop(config: &Config) -> Result<()> {
    let dir = DirectoryStack::new(&config.stack_path).pop()?;

    if !Path::new(&dir).is_dir() {
        return Err(GotoError::DirectoryNotFound(dir).into());
    }
    println!("{}", dir);
    Ok(())
}
