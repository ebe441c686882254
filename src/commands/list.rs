use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use crate::core::{AliasRecord, AliasStore, Config, SortOrder};
use crate::ui::formatters::{column_width, format_relative, format_tags, pad_to_width, truncate_to_width};

/// Widest name column before truncation
const NAME_MAX_WIDTH: usize = 24;

/// Handle `goto list [--sort ORDER] [--filter TAG] [--names]`
pub fn execute(matches: &clap::ArgMatches, config: &Config) -> Result<()> {
    let sort = match matches.get_one::<String>("sort") {
        Some(raw) => raw.parse::<SortOrder>()?,
        None => config.default_sort(),
    };
    let filter = matches.get_one::<String>("filter");

    let store = AliasStore::load(config).context("Failed to load alias store")?;

    if matches.get_flag("names") {
        for name in alias_names(&store) {
            println!("{}", name);
        }
        return Ok(());
    }

    let aliases: Vec<&AliasRecord> = match filter {
        Some(tag) => store.with_tag(tag, sort),
        None => store.sorted(sort),
    };

    if aliases.is_empty() {
        match filter {
            Some(tag) => println!("{}", format!("No aliases tagged '{}'.", tag).yellow()),
            None => {
                println!("{}", "No aliases registered.".yellow());
                println!("  Add one with {}", "goto register <name> <dir>".cyan().bold());
            }
        }
        return Ok(());
    }

    for line in render_rows(&aliases, config) {
        println!("{}", line);
    }
    Ok(())
}

/// Alias names in alphabetical order, for completion scripts
pub fn alias_names(store: &AliasStore) -> Vec<String> {
    store
        .sorted(SortOrder::Alpha)
        .into_iter()
        .map(|a| a.name.clone())
        .collect()
}

/// One aligned line per alias
fn render_rows(aliases: &[&AliasRecord], config: &Config) -> Vec<String> {
    let width = column_width(aliases.iter().map(|a| a.name.as_str()), 4).min(NAME_MAX_WIDTH);
    let now = Utc::now();

    aliases
        .iter()
        .map(|alias| {
            let name = pad_to_width(&truncate_to_width(&alias.name, width), width);
            let mut line = format!("{}  {}", name.cyan().bold(), alias.path);

            if !alias.target_exists() {
                line.push_str(&format!("  {}", "(missing)".red()));
            }
            if config.user.display.show_tags && !alias.tags.is_empty() {
                line.push_str(&format!("  {}", format_tags(&alias.tags).dimmed()));
            }
            if config.user.display.show_stats {
                let stats = format!(
                    "({} uses, {})",
                    alias.use_count,
                    format_relative(alias.last_used.as_ref(), now)
                );
                line.push_str(&format!("  {}", stats.dimmed()));
            }
            line
        })
        .collect()
}
