//! airctl - Command-line tool for managing the macOS Wi-Fi interface.
//!
//! ## Features
//!
//! - Scan for networks and list Wi-Fi interfaces
//! - Join networks, using the keychain when no password is given
//! - Disconnect, and read or change the radio power state
//! - Show the hardware address and stored network passwords
//! - Plain, quiet and JSON output modes
//! - Optional configuration file for the default interface

use {
    airctl::{Client, SystemKeychain, SystemWireless},
    clap::{FromArgMatches, Parser, error::ErrorKind},
    commands::{Command, Context},
    config::Config,
    env_logger::Env,
    error::{CliError, UsageError},
    log::debug,
    output::OutputMode,
    std::{
        env,
        ffi::OsString,
        io::{self, Write},
        path::PathBuf,
        process::ExitCode,
    },
};

mod commands;
mod config;
mod error;
mod help;
mod output;

/// airctl - Manage the Wi-Fi interface of a macOS host.
///
/// Environment variables:
///   `RUST_LOG` - Log filter (overrides --verbose)
///   `NO_COLOR` - Disable colored error output
#[derive(Parser, Debug)]
#[command(name = "airctl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Wi-Fi interface to use (default interface if not specified).
    #[arg(short, long, value_name = "NAME")]
    interface: Option<String>,

    /// Print results as JSON (scan and interfaces).
    #[arg(long)]
    json: bool,

    /// Print bare values only.
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (repeat for more detail).
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a configuration file.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,

    /// Command followed by its arguments, passed through verbatim.
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    rest: Vec<String>,
}

/// Everything decided from the command line.
#[derive(Debug)]
struct RunConfig {
    interface: Option<String>,
    mode: OutputMode,
    verbose: u8,
    config_path: Option<PathBuf>,
    command: Command,
}

#[derive(Debug)]
enum ParseOutcome {
    Run(RunConfig),
    /// Help or version was printed.
    Exit,
}

fn parse_args<I, T>(args: I) -> Result<ParseOutcome, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match help::build_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ParseOutcome::Exit);
        },
        Err(e) => return Err(UsageError::from(e).into()),
    };
    let cli = Cli::from_arg_matches(&matches).map_err(UsageError::from)?;

    // Checked before the subcommand so the conflict wins over any other
    // usage problem.
    let mode = OutputMode::from_flags(cli.json, cli.quiet)?;

    let (name, args) = cli
        .rest
        .split_first()
        .ok_or(UsageError::MissingSubcommand)?;
    let command = Command::parse(name, args)?;

    Ok(ParseOutcome::Run(RunConfig {
        interface: cli.interface,
        mode,
        verbose: cli.verbose,
        config_path: cli.config_path,
        command,
    }))
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(verbose >= 2)
        .format_timestamp(if verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();
}

fn execute(run: &RunConfig, fancy: bool) -> Result<(), CliError> {
    let config = match &run.config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    };
    let interface = config.interface_or(run.interface.as_deref());
    debug!("Command: {:?}, interface: {interface:?}", run.command);

    let wireless = SystemWireless::new()?;
    let keychain = SystemKeychain::new()?;
    let ctx = Context {
        client: Client::new(&wireless),
        credentials: &keychain,
        keychain_service: &config.keychain.service,
        interface,
        mode: run.mode,
        fancy,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&ctx, &run.command, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    // --- NO_COLOR and TTY detection ---
    let stderr_is_tty = console::Term::stderr().is_term();
    if env::var_os("NO_COLOR").is_some() || !stderr_is_tty {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }
    let fancy = stderr_is_tty && console::colors_enabled_stderr();

    let result = parse_args(env::args_os()).and_then(|outcome| match outcome {
        ParseOutcome::Exit => Ok(()),
        ParseOutcome::Run(run) => {
            init_logging(run.verbose);
            execute(&run, fancy)
        },
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => error::report(&e, &help::usage()),
    }
}
