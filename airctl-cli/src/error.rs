//! CLI error types and the single place they are reported.

use {
    console::style,
    log::debug,
    std::{io, process::ExitCode},
    thiserror::Error,
};

/// Problems with how the tool was invoked.
#[derive(Debug, Error)]
pub(crate) enum UsageError {
    #[error("no command given")]
    MissingSubcommand,

    #[error("--json and --quiet cannot be used together")]
    ConflictingFlags,

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("unknown power action '{0}' (expected status, on or off)")]
    UnknownPowerAction(String),

    #[error("'{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("a value is required for {0}")]
    MissingValue(String),

    /// Any other rejection from the argument parser.
    #[error("{0}")]
    InvalidArguments(String),
}

/// Everything that can end a run unsuccessfully.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Wireless(#[from] airctl::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl From<clap::Error> for UsageError {
    fn from(err: clap::Error) -> Self {
        use clap::error::{ContextKind, ContextValue, ErrorKind};

        if err.kind() == ErrorKind::InvalidValue {
            if let Some(ContextValue::String(arg)) = err.get(ContextKind::InvalidArg) {
                return Self::MissingValue(arg.clone());
            }
        }

        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::InvalidArguments(first.trim_start_matches("error: ").to_string())
    }
}

/// Follow-up advice for some wireless errors, logged at debug level.
fn hint(err: &airctl::Error) -> Option<&'static str> {
    use airctl::Error as E;

    match err {
        E::InterfaceNotFound(_) => Some("Run `airctl interfaces` to list Wi-Fi interfaces."),
        E::NoInterfaceAvailable => Some("No Wi-Fi hardware was found on this host."),
        E::NetworkNotFound(_) => Some("Run `airctl scan` to see networks in range."),
        E::PowerChangeFailed(_) | E::DisconnectFailed(_) => {
            Some("Changing Wi-Fi state may require administrator privileges.")
        },
        E::ScanFailed(_)
        | E::JoinFailed(_)
        | E::CredentialLookupFailed(_)
        | E::Platform { .. }
        | E::Parse(_)
        | E::Io(_)
        | E::Json(_)
        | E::Unsupported(_) => None,
    }
}

/// The text printed after `Error:`, always a single line.
fn error_line(err: &CliError) -> String {
    err.to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Print `err` to stderr and pick the exit status.
pub(crate) fn report(err: &CliError, usage: &str) -> ExitCode {
    let prefix = style("Error:").red().bold();

    match err {
        CliError::Output(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            // Reader went away (e.g. `airctl scan | head -1`).
            return ExitCode::SUCCESS;
        },
        CliError::Usage(_) => {
            eprintln!("{prefix} {}", error_line(err));
            eprintln!();
            eprintln!("{usage}");
        },
        CliError::Wireless(e) => {
            eprintln!("{prefix} {}", error_line(err));
            if let Some(hint) = hint(e) {
                debug!("{hint}");
            }
        },
        CliError::Output(_) => eprintln!("{prefix} {}", error_line(err)),
    }

    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_messages() {
        assert_eq!(
            UsageError::ConflictingFlags.to_string(),
            "--json and --quiet cannot be used together"
        );
        assert_eq!(
            UsageError::MissingArgument {
                command: "join",
                argument: "SSID"
            }
            .to_string(),
            "'join' requires SSID"
        );
        assert_eq!(
            UsageError::UnknownCommand("fly".into()).to_string(),
            "unknown command 'fly'"
        );
    }

    #[test]
    fn test_wireless_error_is_forwarded_verbatim() {
        let err = CliError::from(airctl::Error::JoinFailed("invalid password".into()));
        assert_eq!(err.to_string(), "Failed to join network: invalid password");
    }

    #[test]
    fn test_error_line_is_single_line() {
        let err = CliError::from(airctl::Error::Platform {
            program: "networksetup".into(),
            message: "Could not find network Cafe.\n  Error: -3900\n".into(),
        });
        let line = error_line(&err);
        assert!(!line.contains('\n'));
        assert_eq!(
            line,
            "networksetup failed: Could not find network Cafe.; Error: -3900"
        );

        let err = CliError::from(airctl::Error::InterfaceNotFound("en9".into()));
        assert_eq!(error_line(&err), "Interface not found: en9");
    }

    #[test]
    fn test_hints() {
        assert!(hint(&airctl::Error::InterfaceNotFound("en9".into())).is_some());
        assert!(hint(&airctl::Error::ScanFailed("busy".into())).is_none());
    }

    #[test]
    fn test_broken_pipe_is_success() {
        let err = CliError::Output(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(
            format!("{:?}", report(&err, "")),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }
}
