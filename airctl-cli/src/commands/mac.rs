//! `mac`: print the interface's hardware address.

use {
    super::Context,
    crate::error::CliError,
    airctl::Interface,
    std::io::Write,
};

/// Mac command implementation. There is no JSON form.
pub(crate) fn cmd_mac(
    ctx: &Context<'_>,
    iface: &Interface<'_>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let address = iface.hardware_address()?;
    if ctx.mode.is_quiet() {
        writeln!(out, "{address}")?;
    } else {
        writeln!(out, "Hardware address ({}): {address}", iface.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{Command, testing::run};
    use crate::output::OutputMode;
    use airctl::{MemoryCredentials, MemoryInterface, MemoryWireless};

    fn host() -> MemoryWireless {
        MemoryWireless::new().with_interface(
            MemoryInterface::new("en0").with_hardware_address("a4:83:e7:00:11:22"),
        )
    }

    #[test]
    fn test_mac_normal_and_quiet() {
        let creds = MemoryCredentials::new();
        let (result, out) = run(&host(), &creds, None, OutputMode::Normal, &Command::Mac);
        result.unwrap();
        assert_eq!(out, "Hardware address (en0): a4:83:e7:00:11:22\n");

        let (result, out) = run(&host(), &creds, None, OutputMode::Quiet, &Command::Mac);
        result.unwrap();
        assert_eq!(out, "a4:83:e7:00:11:22\n");
    }

    #[test]
    fn test_mac_json_uses_normal_format() {
        let (result, out) = run(
            &host(),
            &MemoryCredentials::new(),
            None,
            OutputMode::Json,
            &Command::Mac,
        );
        result.unwrap();
        assert_eq!(out, "Hardware address (en0): a4:83:e7:00:11:22\n");
    }
}
