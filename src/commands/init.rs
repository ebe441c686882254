use anyhow::{bail, Context, Result};
use clap::ArgMatches;

// The binary cannot change the parent shell's directory, so navigation
// commands print a path and this function does the cd. Management
// subcommands pass straight through.

const POSIX_WRAPPER: &str = r#"# goto shell integration
goto() {
    local target
    case "$1" in
        ""|-*|register|add|unregister|rm|rename|list|ls|tag|untag|tags|cleanup|stats|export|import|config|completions|init|expand|help)
            command goto "$@"
            return $?
            ;;
        recent)
            case " $* " in
                *" --go "*|*" --go="*) ;;
                *) command goto "$@"; return $? ;;
            esac
            ;;
    esac
    target="$(command goto "$@")" || return $?
    [ -n "$target" ] && cd -- "$target"
}
"#;

const FISH_WRAPPER: &str = r#"# goto shell integration
function goto
    switch "$argv[1]"
        case '' '-*' register add unregister rm rename list ls tag untag tags cleanup stats export import config completions init expand help
            command goto $argv
            return $status
        case recent
            if not contains -- --go $argv
                command goto $argv
                return $status
            end
    end
    set -l target (command goto $argv)
    or return $status
    test -n "$target"; and cd -- $target
end
"#;

/// Shell function source for `shell`
pub fn wrapper_for(shell: &str) -> Result<&'static str> {
    match shell {
        "bash" | "zsh" => Ok(POSIX_WRAPPER),
        "fish" => Ok(FISH_WRAPPER),
        other => bail!("Unsupported shell: {} (supported: bash, zsh, fish)", other),
    }
}

/// Handle `goto init <shell>`
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let shell = matches
        .get_one::<String>("shell")
        .context("Shell argument is required")?;

    print!("{}", wrapper_for(shell)?);
    Ok(())
}
