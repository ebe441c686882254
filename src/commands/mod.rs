// Command handlers module
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod maintenance;
pub mod navigate;
pub mod register;
pub mod stack;
pub mod tags;
pub mod transfer;

use anyhow::Result;
use clap::ArgMatches;

use crate::core::Config;

/// Dispatch every subcommand that works on the alias database
///
/// `completions` and `init` are handled by the binary before any
/// configuration is loaded.
pub fn dispatch(matches: &ArgMatches, config: &Config) -> Result<()> {
    match matches.subcommand() {
        Some(("nav", sub_matches)) => navigate::execute(sub_matches, config),
        Some(("expand", sub_matches)) => navigate::expand(sub_matches, config),
        Some(("register", sub_matches)) => register::register(sub_matches, config),
        Some(("unregister", sub_matches)) => register::unregister(sub_matches, config),
        Some(("rename", sub_matches)) => register::rename(sub_matches, config),
        Some(("list", sub_matches)) => list::execute(sub_matches, config),
        Some(("tag", sub_matches)) => tags::tag(sub_matches, config),
        Some(("untag", sub_matches)) => tags::untag(sub_matches, config),
        Some(("tags", sub_matches)) => tags::list_tags(sub_matches, config),
        Some(("push", sub_matches)) => stack::push(sub_matches, config),
        Some(("pop", _)) => stack::pop(config),
        Some(("cleanup", sub_matches)) => maintenance::cleanup(sub_matches, config),
        Some(("stats", _)) => maintenance::stats(config),
        Some(("recent", sub_matches)) => maintenance::recent(sub_matches, config),
        Some(("export", _)) => transfer::export(config),
        Some(("import", sub_matches)) => transfer::import(sub_matches, config),
        Some(("config", sub_matches)) => config::execute(sub_matches, config),
        Some((alias, _)) => navigate::navigate(config, alias),
        None => {
            crate::cli::build_cli().print_help()?;
            Ok(())
        }
    }
}
