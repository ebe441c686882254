use anyhow::{Context, Result};
use clap::{ArgMatches, Command};
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions for the specified shell
pub fn execute(matches: &ArgMatches, cli: &mut Command) -> Result<()> {
    let shell = *matches
        .get_one::<Shell>("shell")
        .context("Shell argument is required")?;

    generate(shell, cli, "goto", &mut io::stdout());
    Ok(())
}
