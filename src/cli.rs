use clap::{value_parser, Arg, ArgAction, Command};
use clap_complete::Shell;

/// Build the `goto` command line
///
/// A first word that is not a known subcommand is treated as an alias to
/// navigate to, so `goto dev` behaves like `goto nav dev`.
pub fn build_cli() -> Command {
    Command::new("goto")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Jump to directories by short alias")
        .long_about(
            "Jump to directories by short alias\n\n\
             The goto binary prints target paths on stdout; the shell function\n\
             installed with 'goto init <shell>' performs the actual cd.",
        )
        .allow_external_subcommands(true)
        .subcommand(
            Command::new("nav")
                .about("Navigate to an alias (same as 'goto <alias>')")
                .arg(alias_arg()),
        )
        .subcommand(
            Command::new("expand")
                .about("Print the directory of an alias without recording usage")
                .arg(alias_arg()),
        )
        .subcommand(
            Command::new("register")
                .visible_alias("add")
                .about("Register a new alias for a directory")
                .arg(Arg::new("name").help("Alias name").required(true).index(1))
                .arg(
                    Arg::new("directory")
                        .help("Target directory (~ and $VARS are expanded)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("tags")
                        .short('t')
                        .long("tags")
                        .value_name("TAGS")
                        .help("Comma-separated tags")
                        .value_delimiter(','),
                ),
        )
        .subcommand(
            Command::new("unregister")
                .visible_alias("rm")
                .about("Remove an alias")
                .arg(Arg::new("name").help("Alias name").required(true).index(1)),
        )
        .subcommand(
            Command::new("rename")
                .about("Rename an alias, keeping its tags and usage history")
                .arg(Arg::new("old").help("Current name").required(true).index(1))
                .arg(Arg::new("new").help("New name").required(true).index(2)),
        )
        .subcommand(
            Command::new("list")
                .visible_alias("ls")
                .about("List aliases")
                .arg(
                    Arg::new("sort")
                        .short('s')
                        .long("sort")
                        .value_name("ORDER")
                        .help("Sort order")
                        .value_parser(["alpha", "usage", "recent"]),
                )
                .arg(
                    Arg::new("filter")
                        .short('f')
                        .long("filter")
                        .value_name("TAG")
                        .help("Only show aliases with this tag"),
                )
                .arg(
                    Arg::new("names")
                        .long("names")
                        .help("Print bare alias names, one per line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("tag")
                .about("Add a tag to an alias")
                .arg(alias_arg())
                .arg(Arg::new("tag").help("Tag to add").required(true).index(2)),
        )
        .subcommand(
            Command::new("untag")
                .about("Remove a tag from an alias")
                .arg(alias_arg())
                .arg(Arg::new("tag").help("Tag to remove").required(true).index(2)),
        )
        .subcommand(
            Command::new("tags")
                .about("List tags with their alias counts")
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Print bare tag names, one per line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("push")
                .about("Save the current directory on the stack and navigate to an alias")
                .arg(alias_arg()),
        )
        .subcommand(Command::new("pop").about("Return to the most recently pushed directory"))
        .subcommand(
            Command::new("cleanup")
                .about("Remove aliases whose directory no longer exists")
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be removed without removing it")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("stats").about("Show usage statistics"))
        .subcommand(
            Command::new("recent")
                .about("Show recently used aliases")
                .arg(
                    Arg::new("count")
                        .help("How many entries to show")
                        .index(1)
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                )
                .arg(
                    Arg::new("go")
                        .long("go")
                        .value_name("N")
                        .help("Navigate to the Nth most recent alias")
                        .value_parser(value_parser!(usize))
                        .conflicts_with("clear"),
                )
                .arg(
                    Arg::new("clear")
                        .long("clear")
                        .help("Forget last-used times (use counts are kept)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("export").about("Write all aliases to stdout"))
        .subcommand(
            Command::new("import")
                .about("Import aliases from a file written by 'goto export'")
                .arg(Arg::new("file").help("File to import").required(true).index(1))
                .arg(
                    Arg::new("strategy")
                        .short('s')
                        .long("strategy")
                        .value_name("STRATEGY")
                        .help("What to do with name conflicts: skip, overwrite or rename")
                        .default_value("skip"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("init")
                        .long("init")
                        .help("Write a default config file if none exists")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(Shell)),
                ),
        )
        .subcommand(
            Command::new("init")
                .about("Print the shell function that performs the cd")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(["bash", "zsh", "fish"]),
                ),
        )
}

fn alias_arg() -> Arg {
    Arg::new("alias").help("Alias name").required(true).index(1)
}
