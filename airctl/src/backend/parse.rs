//! Parsers for the text and JSON emitted by the macOS tools.

use {
    crate::{
        error::{Error, Result},
        network::{NetworkRecord, Security},
    },
    log::trace,
    serde::Deserialize,
    serde_json::Value,
};

/// Signal assumed when the platform omits it (the usual noise floor).
pub(crate) const NOISE_FLOOR_DBM: i32 = -100;

/// Hardware port names that denote a wireless interface.
const WIRELESS_PORT_NAMES: &[&str] = &["Wi-Fi", "AirPort"];

/// One block of `networksetup -listallhardwareports`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HardwarePort {
    pub name: String,
    pub device: String,
}

impl HardwarePort {
    pub(crate) fn is_wireless(&self) -> bool {
        WIRELESS_PORT_NAMES.contains(&self.name.as_str())
    }
}

/// Parse `networksetup -listallhardwareports`.
///
/// ```text
/// Hardware Port: Wi-Fi
/// Device: en0
/// Ethernet Address: a4:83:e7:00:11:22
/// ```
pub(crate) fn parse_hardware_ports(output: &str) -> Vec<HardwarePort> {
    let mut ports = Vec::new();
    let mut name: Option<String> = None;

    for line in output.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("Hardware Port:") {
            name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Device:") {
            if let Some(name) = name.take() {
                ports.push(HardwarePort {
                    name,
                    device: value.trim().to_string(),
                });
            }
        }
    }

    ports
}

/// Parse `networksetup -getairportpower <device>`.
///
/// ```text
/// Wi-Fi Power (en0): On
/// ```
pub(crate) fn parse_airport_power(output: &str) -> Result<bool> {
    let line = output.trim();
    let state = line
        .strip_prefix("Wi-Fi Power")
        .or_else(|| line.strip_prefix("AirPort Power"))
        .and_then(|rest| rest.rsplit(':').next())
        .map(str::trim);

    match state {
        Some(s) if s.eq_ignore_ascii_case("on") => Ok(true),
        Some(s) if s.eq_ignore_ascii_case("off") => Ok(false),
        _ => Err(Error::Parse(line.to_string())),
    }
}

/// Parse `networksetup -getairportnetwork <device>`.
///
/// Returns `None` for "You are not associated with an AirPort network."
pub(crate) fn parse_current_network(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Current Wi-Fi Network:"))
        .map(str::trim)
        .filter(|ssid| !ssid.is_empty())
        .map(ToString::to_string)
}

/// Parse `networksetup -getmacaddress <device>`.
///
/// ```text
/// Ethernet Address: a4:83:e7:00:11:22 (Device: en0)
/// ```
pub(crate) fn parse_mac_address(output: &str) -> Result<String> {
    let line = output.trim();
    line.strip_prefix("Ethernet Address:")
        .and_then(|rest| rest.split_whitespace().next())
        .filter(|addr| addr.contains(':'))
        .map(ToString::to_string)
        .ok_or_else(|| Error::Parse(line.to_string()))
}

#[derive(Debug, Deserialize)]
struct ProfilerReport {
    #[serde(rename = "SPAirPortDataType", default)]
    sections: Vec<ProfilerSection>,
}

#[derive(Debug, Deserialize)]
struct ProfilerSection {
    #[serde(rename = "spairport_airport_interfaces", default)]
    interfaces: Vec<ProfilerInterface>,
}

#[derive(Debug, Deserialize)]
struct ProfilerInterface {
    #[serde(rename = "_name")]
    name: String,
    #[serde(rename = "spairport_current_network_information")]
    current: Option<ProfilerNetwork>,
    #[serde(rename = "spairport_airport_other_local_wireless_networks", default)]
    nearby: Vec<ProfilerNetwork>,
}

#[derive(Debug, Deserialize)]
struct ProfilerNetwork {
    #[serde(rename = "_name")]
    name: Option<String>,
    #[serde(rename = "spairport_network_bssid")]
    bssid: Option<String>,
    #[serde(rename = "spairport_network_channel")]
    channel: Option<Value>,
    #[serde(rename = "spairport_security_mode")]
    security: Option<String>,
    #[serde(rename = "spairport_signal_noise")]
    signal_noise: Option<String>,
}

impl ProfilerNetwork {
    fn into_record(self) -> NetworkRecord {
        NetworkRecord {
            ssid: self.name.filter(|s| !s.is_empty()),
            bssid: self.bssid,
            rssi: self
                .signal_noise
                .as_deref()
                .and_then(parse_signal)
                .unwrap_or(NOISE_FLOOR_DBM),
            channel: self.channel.as_ref().and_then(parse_channel),
            security: self
                .security
                .as_deref()
                .map_or(Security::Unknown, parse_security),
        }
    }
}

/// Parse `system_profiler SPAirPortDataType -json` into the networks visible
/// from `interface`, current network first.
pub(crate) fn parse_scan(json: &str, interface: &str) -> Result<Vec<NetworkRecord>> {
    let report: ProfilerReport = serde_json::from_str(json)?;

    let Some(found) = report
        .sections
        .into_iter()
        .flat_map(|s| s.interfaces)
        .find(|i| i.name == interface)
    else {
        trace!("No scan data for {interface}");
        return Ok(Vec::new());
    };

    Ok(found
        .current
        .into_iter()
        .chain(found.nearby)
        .map(ProfilerNetwork::into_record)
        .collect())
}

/// "-58 dBm / -92 dBm" -> -58
fn parse_signal(value: &str) -> Option<i32> {
    value.split_whitespace().next()?.parse().ok()
}

/// Channels appear either as a number or as "36 (5GHz, 80MHz)".
fn parse_channel(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|c| u32::try_from(c).ok()),
        Value::String(s) => {
            let digits: String = s.trim().chars().take_while(char::is_ascii_digit).collect();
            digits.parse().ok()
        },
        _ => None,
    }
}

/// Map `spairport_security_mode_*` identifiers onto [`Security`].
fn parse_security(mode: &str) -> Security {
    let mode = mode
        .trim_start_matches("spairport_security_mode_")
        .to_ascii_lowercase();

    if mode == "none" || mode == "open" {
        Security::Open
    } else if mode.contains("wpa2_wpa3") || mode.contains("transition") {
        Security::Wpa3Transition
    } else if mode.contains("wpa3") {
        Security::Wpa3
    } else if mode.contains("wpa2") {
        Security::Wpa2
    } else if mode.contains("wpa") {
        Security::Wpa
    } else if mode.contains("wep") {
        Security::Wep
    } else {
        Security::Unknown
    }
}
