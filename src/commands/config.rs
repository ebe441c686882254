use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::Config;

/// Handle `goto config [--init]`
pub fn execute(matches: &ArgMatches, config: &Config) -> Result<()> {
    if matches.get_flag("init") {
        if config
            .write_default_file()
            .context("Failed to write default config file")?
        {
            println!(
                "{}",
                format!("✓ Wrote {}", config.config_path.display()).green()
            );
        } else {
            println!(
                "{}",
                format!("Config file already exists: {}", config.config_path.display()).yellow()
            );
        }
        return Ok(());
    }

    let source = if config.config_path.exists() {
        config.config_path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", config.config_path.display())
    };

    println!("{}", "Locations".white().bold());
    println!("  Data directory:  {}", config.data_dir.display().to_string().cyan());
    println!("  Config file:     {}", source);
    println!("  Alias store:     {}.toml", config.aliases_path.display());
    println!("  Directory stack: {}", config.stack_path.display());
    println!();
    println!("{}", "Settings".white().bold());
    print!("{}", config.render()?);
    Ok(())
}
