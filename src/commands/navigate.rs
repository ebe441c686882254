use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{AliasStore, Config};
use crate::error::GotoError;
use crate::ui;

/// Similarity at which a single suggestion is offered for confirmation
pub const CONFIRM_SIMILARITY: f64 = 0.7;

/// How many suggestions are listed on a miss
const MAX_SUGGESTIONS: usize = 5;

/// Handle `goto nav <alias>`
pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    let alias = matches
        .get_one::<String>("alias")
        .context("Alias name is required")?;
    navigate(config, alias)
}

/// Resolve an alias and print its directory for the shell wrapper
///
/// A miss falls back to fuzzy matching. When the best candidate is close
/// enough and the session is interactive, the user is asked to confirm it.
pub fn navigate(config: &Config, name: &str) -> Result<()> {
    let mut store = AliasStore::load(config).context("Failed to load alias store")?;

    let target = if store.contains(name) {
        name.to_string()
    } else {
        suggest(&store, config, name)?
    };

    let path = store.navigate(&target)?;
    println!("{}", path);
    Ok(())
}

/// Handle `goto expand <alias>`
pub fn expand(matches: &ArgMatches, config: &Config) -> Result<()> {
    let alias = matches
        .get_one::<String>("alias")
        .context("Alias name is required")?;

    let store = AliasStore::load(config).context("Failed to load alias store")?;
    println!("{}", store.get(alias)?.path);
    Ok(())
}

/// Pick a replacement for an unknown alias or fail with `AliasNotFound`
fn suggest(store: &AliasStore, config: &Config, name: &str) -> Result<String> {
    let matches = store.find_similar(name, config.fuzzy_threshold());
    let not_found = || GotoError::AliasNotFound(name.to_string());

    let Some(best) = matches.first() else {
        return Err(not_found().into());
    };

    if best.similarity >= CONFIRM_SIMILARITY && ui::is_interactive() {
        let question = format!("Alias '{}' not found. Did you mean '{}'? [y/N]", name, best.value);
        if ui::confirm(&question)? {
            return Ok(best.value.clone());
        }
        return Err(not_found().into());
    }

    eprintln!("{}", "Did you mean:".yellow());
    for m in matches.iter().take(MAX_SUGGESTIONS) {
        eprintln!("  {}", m.value.cyan());
    }
    Err(not_found().into())
}
