//! Scan results and the helpers that order and select them.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder shown for networks that do not broadcast an SSID.
pub const HIDDEN_SSID: &str = "<Hidden>";

/// Security classification of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Security {
    /// No encryption.
    Open,
    /// WEP.
    Wep,
    /// WPA (personal or enterprise).
    Wpa,
    /// WPA2 (personal or enterprise).
    Wpa2,
    /// WPA3 (personal or enterprise).
    Wpa3,
    /// Mixed WPA2/WPA3 transition mode.
    Wpa3Transition,
    /// Anything the platform reports that does not fit the above.
    #[default]
    Unknown,
}

impl Security {
    /// Human-readable label, also used in JSON output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::Wpa3 => "WPA3",
            Self::Wpa3Transition => "WPA3-Transition",
            Self::Unknown => "Unknown",
        }
    }

    /// Whether joining requires a secret.
    pub fn requires_password(self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl fmt::Display for Security {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Security {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One network seen by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    /// Network name, `None` when hidden.
    pub ssid: Option<String>,
    /// Access point hardware address, when the platform reveals it.
    pub bssid: Option<String>,
    /// Signal strength in dBm (less negative is stronger).
    pub rssi: i32,
    /// Channel number, when reported.
    pub channel: Option<u32>,
    /// Security classification.
    pub security: Security,
}

impl NetworkRecord {
    /// Create a record with the given SSID and signal.
    pub fn new(ssid: impl Into<String>, rssi: i32) -> Self {
        Self {
            ssid: Some(ssid.into()),
            bssid: None,
            rssi,
            channel: None,
            security: Security::Open,
        }
    }

    /// Set the channel.
    #[must_use]
    pub fn with_channel(mut self, channel: u32) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Set the security classification.
    #[must_use]
    pub fn with_security(mut self, security: Security) -> Self {
        self.security = security;
        self
    }

    /// SSID for display, substituting [`HIDDEN_SSID`].
    pub fn display_ssid(&self) -> &str {
        self.ssid.as_deref().unwrap_or(HIDDEN_SSID)
    }

    /// Whether this record advertises the given SSID.
    pub fn matches_ssid(&self, ssid: &str) -> bool {
        self.ssid.as_deref() == Some(ssid)
    }
}

/// Sort records by descending signal strength.
///
/// The sort is stable, so records with equal RSSI keep the order in which
/// the platform reported them.
pub fn sort_by_signal(records: &mut [NetworkRecord]) {
    records.sort_by(|a, b| b.rssi.cmp(&a.rssi));
}

/// Distinct display SSIDs in alphabetical order, ignoring case. Names that
/// differ only in case fall back to byte order.
pub fn unique_ssids(records: &[NetworkRecord]) -> Vec<String> {
    let mut names: Vec<String> = records
        .iter()
        .map(|r| r.display_ssid().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    names.sort_by_cached_key(|name| (name.to_lowercase(), name.clone()));
    names
}

/// The record with the strongest signal; the first one wins a tie.
pub fn strongest(records: &[NetworkRecord]) -> Option<&NetworkRecord> {
    let mut best: Option<&NetworkRecord> = None;
    for record in records {
        match best {
            Some(current) if record.rssi <= current.rssi => {},
            _ => best = Some(record),
        }
    }
    best
}
