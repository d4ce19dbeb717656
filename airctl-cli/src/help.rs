//! Usage text and the clap `Command` the parser is built from.
//!
//! The derive struct in `main.rs` is the single source of truth for the
//! flags. This module swaps clap's `-V` for `-v` and replaces the generated
//! usage line with one that names the subcommand slot.

use clap::{Arg, ArgAction, CommandFactory};

use crate::Cli;

/// Synopsis without the `Usage:` prefix.
const SYNOPSIS: &str =
    "airctl [-h|--help] [-v|--version] [-q|--quiet] [--json] [-i|--interface NAME] COMMAND [ARGS...]";

const COMMANDS: &str = "\
Commands:
  scan                   List networks in range, strongest first
  interfaces             List Wi-Fi interfaces
  mac                    Show the interface's hardware address
  join SSID [PASSWORD]   Join a network (keychain password if omitted)
  disconnect             Leave the current network
  showpass SSID          Show the stored password for a network
  power status|on|off    Show or change the radio power state";

/// Usage block printed under usage errors.
pub(crate) fn usage() -> String {
    format!("Usage: {SYNOPSIS}\n\n{COMMANDS}")
}

/// Build the clap `Command` for [`Cli`].
pub(crate) fn build_command() -> clap::Command {
    Cli::command()
        .override_usage(SYNOPSIS)
        .after_help(COMMANDS)
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
}
