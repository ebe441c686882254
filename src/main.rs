use anyhow::Error;
use colored::*;
use std::process::ExitCode;

use goto::cli::build_cli;
use goto::commands;
use goto::error::exit_code;
use goto::{Config, GotoError};

fn main() -> ExitCode {
    goto::init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut cli = build_cli();
    let matches = match cli.try_get_matches_from_mut(std::env::args_os()) {
        Ok(matches) => matches,
        Err(e) => {
            // --help and --version land here too and are not failures
            e.print()?;
            if e.use_stderr() {
                std::process::exit(exit_code::INVALID_INPUT.into());
            }
            return Ok(());
        }
    };

    match matches.subcommand() {
        Some(("completions", sub_matches)) => commands::completions::execute(sub_matches, &mut cli),
        Some(("init", sub_matches)) => commands::init::execute(sub_matches),
        _ => {
            let config = Config::load()?;
            commands::dispatch(&matches, &config)
        }
    }
}

/// Exit code of the first typed error in the chain
fn exit_code_for(err: &Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<GotoError>())
        .map(GotoError::exit_code)
        .unwrap_or(exit_code::SYSTEM)
}
