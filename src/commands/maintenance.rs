use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::{AliasStore, Config, DirectoryStack, SortOrder};
use crate::error::GotoError;
use crate::ui::formatters::{format_relative, format_time};

/// How many aliases the stats view ranks
const TOP_ALIASES: usize = 5;

/// Handle `goto cleanup [--dry-run]`
pub fn cleanup(matches: &ArgMatches, config: &Config) -> Result<()> {
    let dry_run = matches.get_flag("dry-run");
    let mut store = AliasStore::load(config).context("Failed to load alias store")?;

    if dry_run {
        let stale = store.stale();
        if stale.is_empty() {
            println!("{}", "All aliases point to existing directories.".green());
            return Ok(());
        }

        println!("{}", "Would remove:".yellow().bold());
        for alias in &stale {
            println!("  {}  {}", alias.name.cyan(), alias.path.dimmed());
        }
        println!();
        println!("{}", "Dry run: nothing was removed.".dimmed());
        return Ok(());
    }

    let removed = store.cleanup()?;
    if removed.is_empty() {
        println!("{}", "All aliases point to existing directories.".green());
        return Ok(());
    }

    for alias in &removed {
        println!("  {} {}  {}", "✗".red(), alias.name.cyan(), alias.path.dimmed());
    }
    println!(
        "{}",
        format!("✓ Removed {} stale alias(es)", removed.len()).green()
    );
    Ok(())
}

/// Handle `goto stats`
pub fn stats(config: &Config) -> Result<()> {
    let store = AliasStore::load(config).context("Failed to load alias store")?;
    let stack_depth = DirectoryStack::new(&config.stack_path).size()?;
    let now = Utc::now();

    let total_uses: u64 = store.aliases().iter().map(|a| a.use_count).sum();
    let never_used = store.aliases().iter().filter(|a| a.use_count == 0).count();

    println!("{}", "goto statistics".white().bold());
    println!("  Aliases:         {}", store.len().to_string().cyan());
    println!("  Navigations:     {}", total_uses.to_string().cyan());
    println!("  Never used:      {}", never_used);
    println!("  Stale:           {}", store.stale().len());
    println!("  Tags:            {}", store.tag_counts().len());
    println!("  Stack depth:     {}", stack_depth);

    let top: Vec<_> = store
        .sorted(SortOrder::Usage)
        .into_iter()
        .filter(|a| a.use_count > 0)
        .take(TOP_ALIASES)
        .collect();

    if !top.is_empty() {
        println!();
        println!("{}", "Most used".white().bold());
        for alias in top {
            println!(
                "  {:<20} {:>5}  {}",
                alias.name.cyan(),
                alias.use_count,
                format_relative(alias.last_used.as_ref(), now).dimmed()
            );
        }
    }

    if let Some(oldest) = store.aliases().iter().min_by_key(|a| a.created) {
        println!();
        println!(
            "  Oldest alias:    {} (created {})",
            oldest.name.cyan(),
            format_time(&oldest.created)
        );
    }

    Ok(())
}

/// Handle `goto recent [N] [--go N] [--clear]`
pub fn recent(matches: &ArgMatches, config: &Config) -> Result<()> {
    let mut store = AliasStore::load(config).context("Failed to load alias store")?;

    if matches.get_flag("clear") {
        store.clear_history()?;
        println!("{}", "✓ Cleared navigation history".green());
        return Ok(());
    }

    if let Some(&n) = matches.get_one::<usize>("go") {
        let name = nth_recent(&store, n)?;
        let path = store.navigate(&name)?;
        println!("{}", path);
        return Ok(());
    }

    let count = matches.get_one::<usize>("count").copied().unwrap_or(10);
    let recent = store.recent(count);
    if recent.is_empty() {
        println!("{}", "No aliases used yet.".yellow());
        return Ok(());
    }

    let now = Utc::now();
    for (i, alias) in recent.iter().enumerate() {
        println!(
            "{:>3}. {:<20} {}  {}",
            i + 1,
            alias.name.cyan().bold(),
            alias.path,
            format_relative(alias.last_used.as_ref(), now).dimmed()
        );
    }
    Ok(())
}

/// Name of the Nth (1-based) most recently used alias
pub fn nth_recent(store: &AliasStore, n: usize) -> Result<String> {
    let recent = store.recent(usize::MAX);
    n.checked_sub(1)
        .and_then(|i| recent.get(i))
        .map(|alias| alias.name.clone())
        .ok_or_else(|| GotoError::AliasNotFound(format!("#{}", n)).into())
}
