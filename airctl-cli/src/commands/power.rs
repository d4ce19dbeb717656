//! `power status|on|off`.

use {
    super::{Context, PowerAction},
    crate::error::CliError,
    airctl::Interface,
    std::io::Write,
};

fn state(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// Power command implementation.
pub(crate) fn cmd_power(
    ctx: &Context<'_>,
    iface: &Interface<'_>,
    action: PowerAction,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let on = match action {
        PowerAction::Status => {
            let on = iface.power()?;
            if ctx.mode.is_quiet() {
                writeln!(out, "{}", state(on))?;
            } else {
                writeln!(out, "Wi-Fi power ({}): {}", iface.name(), state(on))?;
            }
            return Ok(());
        },
        PowerAction::On => true,
        PowerAction::Off => false,
    };

    iface.set_power(on)?;
    if !ctx.mode.is_quiet() {
        writeln!(out, "Wi-Fi power turned {} on {}.", state(on), iface.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{Command, testing::run};
    use super::*;
    use crate::output::OutputMode;
    use airctl::{MemoryCredentials, MemoryInterface, MemoryWireless};

    fn status(wireless: &MemoryWireless, mode: OutputMode) -> String {
        let (result, out) = run(
            wireless,
            &MemoryCredentials::new(),
            None,
            mode,
            &Command::Power(PowerAction::Status),
        );
        result.unwrap();
        out
    }

    #[test]
    fn test_power_toggle_then_status() {
        let wireless = MemoryWireless::new().with_interface(MemoryInterface::new("en0"));
        let creds = MemoryCredentials::new();

        let (result, out) = run(
            &wireless,
            &creds,
            None,
            OutputMode::Normal,
            &Command::Power(PowerAction::Off),
        );
        result.unwrap();
        assert_eq!(out, "Wi-Fi power turned off on en0.\n");
        assert_eq!(status(&wireless, OutputMode::Quiet), "off\n");
        assert_eq!(status(&wireless, OutputMode::Normal), "Wi-Fi power (en0): off\n");

        for _ in 0..2 {
            let (result, out) = run(
                &wireless,
                &creds,
                None,
                OutputMode::Quiet,
                &Command::Power(PowerAction::On),
            );
            result.unwrap();
            assert!(out.is_empty());
        }
        assert_eq!(status(&wireless, OutputMode::Quiet), "on\n");
    }

    #[test]
    fn test_power_change_failure() {
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0"))
            .failing("set_power", "operation not permitted");
        let (result, out) = run(
            &wireless,
            &MemoryCredentials::new(),
            None,
            OutputMode::Normal,
            &Command::Power(PowerAction::On),
        );
        assert!(matches!(
            result,
            Err(CliError::Wireless(airctl::Error::PowerChangeFailed(ref m))) if m.contains("not permitted")
        ));
        assert!(out.is_empty());
    }
}
