//! macOS backends built on the system's command-line tools.
//!
//! - `networksetup` for interface enumeration, power, association and the
//!   hardware address
//! - `system_profiler SPAirPortDataType -json` for scan results
//! - the `airport` utility for disassociation (gone from macOS 14.4 on)
//! - `security find-generic-password` for keychain lookups
//!
//! Each call spawns one short-lived process and blocks until it exits.

use {
    super::{
        CredentialQuery, CredentialStore, Wireless,
        command::{Tool, ToolOutput},
        parse,
    },
    crate::{
        error::{Error, Result},
        network::NetworkRecord,
    },
    log::debug,
    std::path::Path,
};

const NETWORKSETUP: &str = "/usr/sbin/networksetup";
const SYSTEM_PROFILER: &str = "/usr/sbin/system_profiler";
const AIRPORT: &str =
    "/System/Library/PrivateFrameworks/Apple80211.framework/Versions/Current/Resources/airport";
const SECURITY: &str = "/usr/bin/security";

/// `security` exit status for "The specified item could not be found".
const ERR_SEC_ITEM_NOT_FOUND: i32 = 44;

fn ensure_supported(what: &str) -> Result<()> {
    if cfg!(target_os = "macos") {
        Ok(())
    } else {
        Err(Error::Unsupported(format!(
            "{what} is only available on macOS"
        )))
    }
}

/// Fail with [`Error::Unsupported`] when a tool is missing from this host.
fn require_tool(path: &Path, what: &str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::Unsupported(format!(
            "{what} needs {}, which this macOS release does not ship",
            path.display()
        )))
    }
}

/// Turn a finished tool into its stdout, or a [`Error::Platform`].
fn stdout_of(program: &str, output: ToolOutput) -> Result<String> {
    if output.success() {
        Ok(output.stdout)
    } else {
        Err(Error::Platform {
            program: program.to_string(),
            message: output.message(),
        })
    }
}

/// `networksetup` reports most failures on stdout with exit status 0;
/// commands that succeed print nothing.
fn expect_silent(program: &str, output: &ToolOutput) -> Result<()> {
    if output.success() && output.stdout.trim().is_empty() && output.stderr.trim().is_empty() {
        Ok(())
    } else {
        Err(Error::Platform {
            program: program.to_string(),
            message: output.message(),
        })
    }
}

/// Wireless backend for the host's Wi-Fi hardware.
#[derive(Debug, Clone, Default)]
pub struct SystemWireless {
    _private: (),
}

impl SystemWireless {
    /// Create the backend, failing on hosts other than macOS.
    pub fn new() -> Result<Self> {
        ensure_supported("Wi-Fi control")?;
        Ok(Self { _private: () })
    }

    fn networksetup(args: &[&str]) -> Result<String> {
        let tool = args
            .iter()
            .fold(Tool::new(NETWORKSETUP), |tool, a| tool.arg(*a));
        stdout_of("networksetup", tool.run()?)
    }
}

impl Wireless for SystemWireless {
    fn interface_names(&self) -> Result<Vec<String>> {
        let output = Self::networksetup(&["-listallhardwareports"])?;
        let names: Vec<String> = parse::parse_hardware_ports(&output)
            .into_iter()
            .filter(parse::HardwarePort::is_wireless)
            .map(|p| p.device)
            .collect();
        debug!("Wireless hardware ports: {names:?}");
        Ok(names)
    }

    fn power(&self, interface: &str) -> Result<bool> {
        let output = Self::networksetup(&["-getairportpower", interface])?;
        parse::parse_airport_power(&output)
    }

    fn set_power(&self, interface: &str, on: bool) -> Result<()> {
        let state = if on { "on" } else { "off" };
        let output = Tool::new(NETWORKSETUP)
            .arg("-setairportpower")
            .arg(interface)
            .arg(state)
            .run()?;
        expect_silent("networksetup", &output)
    }

    fn current_ssid(&self, interface: &str) -> Result<Option<String>> {
        let output = Self::networksetup(&["-getairportnetwork", interface])?;
        Ok(parse::parse_current_network(&output))
    }

    fn hardware_address(&self, interface: &str) -> Result<String> {
        let output = Self::networksetup(&["-getmacaddress", interface])?;
        parse::parse_mac_address(&output)
    }

    fn scan(&self, interface: &str, ssid: Option<&str>) -> Result<Vec<NetworkRecord>> {
        let output = Tool::new(SYSTEM_PROFILER)
            .arg("SPAirPortDataType")
            .arg("-json")
            .run()?;
        let json = stdout_of("system_profiler", output)?;

        let mut records = parse::parse_scan(&json, interface)?;
        if let Some(ssid) = ssid {
            records.retain(|r| r.matches_ssid(ssid));
        }
        debug!("Scan on {interface} returned {} network(s)", records.len());
        Ok(records)
    }

    fn associate(
        &self,
        interface: &str,
        network: &NetworkRecord,
        password: Option<&str>,
    ) -> Result<()> {
        let Some(ssid) = network.ssid.as_deref() else {
            return Err(Error::Unsupported(
                "joining a hidden network by scan record".to_string(),
            ));
        };

        // networksetup picks the access point itself; the record only
        // supplies the SSID.
        let mut tool = Tool::new(NETWORKSETUP)
            .arg("-setairportnetwork")
            .arg(interface)
            .arg(ssid);
        if let Some(password) = password {
            tool = tool.secret(password);
        }
        let output = tool.run()?;
        expect_silent("networksetup", &output)
    }

    /// Uses the private `airport` utility, which macOS 14.4 and later no
    /// longer ship; there the call fails with [`Error::Unsupported`].
    fn disassociate(&self, interface: &str) -> Result<()> {
        debug!("Disassociating {interface}");
        require_tool(Path::new(AIRPORT), "Disconnecting")?;
        let output = Tool::new(AIRPORT).arg("-z").run()?;
        stdout_of("airport", output).map(|_| ())
    }
}

/// Credential store backed by the user's keychain search list.
#[derive(Debug, Clone, Default)]
pub struct SystemKeychain {
    _private: (),
}

impl SystemKeychain {
    /// Create the store, failing on hosts other than macOS.
    pub fn new() -> Result<Self> {
        ensure_supported("Keychain access")?;
        Ok(Self { _private: () })
    }
}

impl CredentialStore for SystemKeychain {
    fn find_password(&self, query: &CredentialQuery<'_>) -> Result<Option<String>> {
        let mut tool = Tool::new(SECURITY)
            .arg("find-generic-password")
            .arg("-s")
            .arg(query.service)
            .arg("-a")
            .arg(query.account);
        if let Some(label) = query.label {
            tool = tool.arg("-l").arg(label);
        }
        let output = tool.arg("-w").run()?;

        if output.code == Some(ERR_SEC_ITEM_NOT_FOUND) {
            return Ok(None);
        }
        let stdout = stdout_of("security", output)?;
        let secret = stdout.strip_suffix('\n').unwrap_or(&stdout);
        Ok(Some(secret.to_string()))
    }
}
