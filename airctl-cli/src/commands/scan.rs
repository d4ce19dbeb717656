//! `scan`: list networks in range.

use {
    super::Context,
    crate::{
        error::CliError,
        output::{OutputMode, write_json, write_table},
    },
    airctl::{Interface, NetworkRecord, unique_ssids},
    indicatif::{ProgressBar, ProgressStyle},
    std::{io::Write, time::Duration},
};

/// Scan command implementation.
pub(crate) fn cmd_scan(
    ctx: &Context<'_>,
    iface: &Interface<'_>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let spinner = if ctx.mode == OutputMode::Normal && ctx.fancy {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Scanning on {}...", iface.name()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = iface.scan();
    spinner.finish_and_clear();
    let records = result?;

    match ctx.mode {
        OutputMode::Json => write_json(out, &scan_json(&records))?,
        OutputMode::Quiet => {
            for ssid in unique_ssids(&records) {
                writeln!(out, "{ssid}")?;
            }
        },
        OutputMode::Normal if records.is_empty() => writeln!(out, "No networks found.")?,
        OutputMode::Normal => {
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|r| {
                    vec![
                        r.display_ssid().to_string(),
                        r.rssi.to_string(),
                        r.channel.map_or_else(|| "-".to_string(), |c| c.to_string()),
                        r.security.to_string(),
                    ]
                })
                .collect();
            write_table(out, &["SSID", "RSSI", "CHANNEL", "SECURITY"], &rows)?;
        },
    }

    Ok(())
}

/// JSON array in signal order. Hidden SSIDs are `""`, unknown channels `0`.
fn scan_json(records: &[NetworkRecord]) -> serde_json::Value {
    records
        .iter()
        .map(|r| {
            serde_json::json!({
                "ssid": r.ssid.as_deref().unwrap_or_default(),
                "rssi": r.rssi,
                "channel": r.channel.unwrap_or(0),
                "security": r.security.label(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::{Command, testing::run};
    use super::*;
    use airctl::{MemoryCredentials, MemoryInterface, MemoryWireless, Security};

    fn host() -> MemoryWireless {
        let mut hidden = NetworkRecord::new("", -80).with_security(Security::Wpa3);
        hidden.ssid = None;
        MemoryWireless::new().with_interface(
            MemoryInterface::new("en0")
                .with_network(
                    NetworkRecord::new("Cafe", -45)
                        .with_channel(6)
                        .with_security(Security::Open),
                )
                .with_network(
                    NetworkRecord::new("Home", -72)
                        .with_channel(36)
                        .with_security(Security::Wpa2),
                )
                .with_network(
                    NetworkRecord::new("Cafe", -30)
                        .with_channel(11)
                        .with_security(Security::Open),
                )
                .with_network(hidden),
        )
    }

    #[test]
    fn test_scan_json_sorted_by_rssi() {
        let (result, out) = run(
            &host(),
            &MemoryCredentials::new(),
            None,
            OutputMode::Json,
            &Command::Scan,
        );
        result.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let list = parsed.as_array().unwrap();
        let rssis: Vec<i64> = list.iter().map(|n| n["rssi"].as_i64().unwrap()).collect();
        assert_eq!(rssis, vec![-30, -45, -72, -80]);
        assert_eq!(
            list[0],
            serde_json::json!({"ssid": "Cafe", "rssi": -30, "channel": 11, "security": "Open"})
        );
        assert_eq!(list[3]["ssid"], "");
        assert_eq!(list[3]["security"], "WPA3");
    }

    #[test]
    fn test_scan_quiet_unique_sorted() {
        let (result, out) = run(
            &host(),
            &MemoryCredentials::new(),
            None,
            OutputMode::Quiet,
            &Command::Scan,
        );
        result.unwrap();
        assert_eq!(out, "<Hidden>\nCafe\nHome\n");
    }

    #[test]
    fn test_scan_table() {
        let (result, out) = run(
            &host(),
            &MemoryCredentials::new(),
            None,
            OutputMode::Normal,
            &Command::Scan,
        );
        result.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "SSID      RSSI  CHANNEL  SECURITY");
        assert_eq!(lines[1], "Cafe      -30   11       Open");
        assert_eq!(lines[3], "Home      -72   36       WPA2");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_scan_empty_results() {
        let wireless = MemoryWireless::new().with_interface(MemoryInterface::new("en0"));
        let creds = MemoryCredentials::new();

        let (_, out) = run(&wireless, &creds, None, OutputMode::Normal, &Command::Scan);
        assert_eq!(out, "No networks found.\n");
        let (_, out) = run(&wireless, &creds, None, OutputMode::Quiet, &Command::Scan);
        assert_eq!(out, "");
        let (_, out) = run(&wireless, &creds, None, OutputMode::Json, &Command::Scan);
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_scan_failure() {
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0"))
            .failing("scan", "radio busy");
        let (result, out) = run(
            &wireless,
            &MemoryCredentials::new(),
            None,
            OutputMode::Normal,
            &Command::Scan,
        );
        assert!(matches!(
            result,
            Err(CliError::Wireless(airctl::Error::ScanFailed(ref m))) if m.contains("radio busy")
        ));
        assert!(out.is_empty());
    }
}
