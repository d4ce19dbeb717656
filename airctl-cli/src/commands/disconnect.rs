//! `disconnect`: leave the current network.

use {
    super::Context,
    crate::error::CliError,
    airctl::Interface,
    std::io::Write,
};

/// Disconnect command implementation. Being already disconnected is not an
/// error.
pub(crate) fn cmd_disconnect(
    ctx: &Context<'_>,
    iface: &Interface<'_>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    iface.disconnect()?;
    if !ctx.mode.is_quiet() {
        writeln!(out, "Disconnected {} from the current network.", iface.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{Command, testing::run};
    use crate::{error::CliError, output::OutputMode};
    use airctl::{MemoryCredentials, MemoryInterface, MemoryWireless};

    #[test]
    fn test_disconnect_twice_succeeds() {
        let wireless =
            MemoryWireless::new().with_interface(MemoryInterface::new("en0").with_ssid("Home"));
        let creds = MemoryCredentials::new();

        let (result, out) = run(&wireless, &creds, None, OutputMode::Normal, &Command::Disconnect);
        result.unwrap();
        assert_eq!(out, "Disconnected en0 from the current network.\n");
        assert_eq!(wireless.interface("en0").unwrap().ssid, None);

        let (result, out) = run(&wireless, &creds, None, OutputMode::Quiet, &Command::Disconnect);
        result.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_disconnect_failure() {
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0"))
            .failing("disassociate", "not permitted");
        let (result, _) = run(
            &wireless,
            &MemoryCredentials::new(),
            None,
            OutputMode::Normal,
            &Command::Disconnect,
        );
        assert!(matches!(
            result,
            Err(CliError::Wireless(airctl::Error::DisconnectFailed(_)))
        ));
    }
}
