use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::alias_validator::normalize_tag;
use crate::core::{AliasStore, Config};

fn alias_and_tag(matches: &ArgMatches) -> Result<(&String, &String)> {
    let alias = matches
        .get_one::<String>("alias")
        .context("Alias name is required")?;
    let tag = matches.get_one::<String>("tag").context("Tag is required")?;
    Ok((alias, tag))
}

/// Handle `goto tag <alias> <tag>`
pub fn tag(matches: &ArgMatches, config: &Config) -> Result<()> {
    let (alias, tag) = alias_and_tag(matches)?;

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    store.add_tag(alias, tag)?;

    println!(
        "{}",
        format!("✓ Tagged '{}' with '{}'", alias, normalize_tag(tag)).green()
    );
    Ok(())
}

/// Handle `goto untag <alias> <tag>`
pub fn untag(matches: &ArgMatches, config: &Config) -> Result<()> {
    let (alias, tag) = alias_and_tag(matches)?;

    let mut store = AliasStore::load(config).context("Failed to load alias store")?;
    store.remove_tag(alias, tag)?;

    println!(
        "{}",
        format!("✓ Removed tag '{}' from '{}'", normalize_tag(tag), alias).green()
    );
    Ok(())
}

/// Handle `goto tags [--raw]`
pub fn list_tags(matches: &ArgMatches, config: &Config) -> Result<()> {
    let store = AliasStore::load(config).context("Failed to load alias store")?;
    let counts = store.tag_counts();

    if matches.get_flag("raw") {
        for tag in counts.keys() {
            println!("{}", tag);
        }
        return Ok(());
    }

    if counts.is_empty() {
        println!("{}", "No tags in use.".yellow());
        return Ok(());
    }

    for (tag, count) in &counts {
        let noun = if *count == 1 { "alias" } else { "aliases" };
        println!("{}  {}", tag.cyan().bold(), format!("({} {})", count, noun).dimmed());
    }
    Ok(())
}
