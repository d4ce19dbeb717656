//! Command implementations.
//!
//! One module per subcommand.
//! [`Command::parse`] turns the verbatim subcommand arguments into a typed
//! command before any Wi-Fi call is made, so usage errors never reach the
//! platform.

pub(crate) mod disconnect;
pub(crate) mod interfaces;
pub(crate) mod join;
pub(crate) mod mac;
pub(crate) mod power;
pub(crate) mod scan;
pub(crate) mod showpass;

use {
    crate::{
        error::{CliError, UsageError},
        output::OutputMode,
    },
    airctl::{Client, CredentialStore},
    std::io::Write,
};

/// On/off/status for the `power` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PowerAction {
    Status,
    On,
    Off,
}

/// A fully parsed subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Scan,
    Interfaces,
    Mac,
    Join {
        ssid: String,
        /// `None` when omitted; `Some("")` is an explicit empty password.
        password: Option<String>,
    },
    Disconnect,
    ShowPass {
        ssid: String,
    },
    Power(PowerAction),
}

impl Command {
    /// Parse a subcommand name and its arguments. Surplus arguments are
    /// ignored.
    pub(crate) fn parse(name: &str, args: &[String]) -> Result<Self, UsageError> {
        let arg = |i: usize, command: &'static str, argument: &'static str| {
            args.get(i)
                .cloned()
                .ok_or(UsageError::MissingArgument { command, argument })
        };

        match name {
            "scan" => Ok(Self::Scan),
            "interfaces" => Ok(Self::Interfaces),
            "mac" => Ok(Self::Mac),
            "join" => Ok(Self::Join {
                ssid: arg(0, "join", "SSID")?,
                password: args.get(1).cloned(),
            }),
            "disconnect" => Ok(Self::Disconnect),
            "showpass" => Ok(Self::ShowPass {
                ssid: arg(0, "showpass", "SSID")?,
            }),
            "power" => match arg(0, "power", "an action (status, on or off)")?.as_str() {
                "status" => Ok(Self::Power(PowerAction::Status)),
                "on" => Ok(Self::Power(PowerAction::On)),
                "off" => Ok(Self::Power(PowerAction::Off)),
                other => Err(UsageError::UnknownPowerAction(other.to_string())),
            },
            other => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }
}

/// Everything a handler needs, built once per run.
pub(crate) struct Context<'a> {
    pub client: Client<'a>,
    pub credentials: &'a dyn CredentialStore,
    /// Keychain service Wi-Fi passwords are filed under.
    pub keychain_service: &'a str,
    /// Interface requested on the command line or in the config file.
    pub interface: Option<&'a str>,
    pub mode: OutputMode,
    /// Whether stderr can show spinners.
    pub fancy: bool,
}

/// Resolve the interface (except for `interfaces`) and run `command`.
pub(crate) fn dispatch(
    ctx: &Context<'_>,
    command: &Command,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if *command == Command::Interfaces {
        return interfaces::cmd_interfaces(ctx, out);
    }

    let iface = ctx.client.interface(ctx.interface)?;

    match command {
        Command::Scan => scan::cmd_scan(ctx, &iface, out),
        Command::Mac => mac::cmd_mac(ctx, &iface, out),
        Command::Join { ssid, password } => {
            join::cmd_join(ctx, &iface, ssid, password.as_deref(), out)
        },
        Command::Disconnect => disconnect::cmd_disconnect(ctx, &iface, out),
        Command::ShowPass { ssid } => showpass::cmd_showpass(ctx, ssid, out),
        Command::Power(action) => power::cmd_power(ctx, &iface, *action, out),
        Command::Interfaces => interfaces::cmd_interfaces(ctx, out),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Runs commands against the in-memory backends.

    use super::*;
    use airctl::{MemoryCredentials, MemoryWireless};

    pub(crate) fn run(
        wireless: &MemoryWireless,
        credentials: &MemoryCredentials,
        interface: Option<&str>,
        mode: OutputMode,
        command: &Command,
    ) -> (Result<(), CliError>, String) {
        let ctx = Context {
            client: Client::new(wireless),
            credentials,
            keychain_service: airctl::DEFAULT_SERVICE,
            interface,
            mode,
            fancy: false,
        };
        let mut out = Vec::new();
        let result = dispatch(&ctx, command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }
}
