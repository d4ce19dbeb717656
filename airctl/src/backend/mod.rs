//! Backend abstraction over the platform's wireless and credential services.
//!
//! The facade in [`crate::client`] never talks to the operating system
//! directly. It goes through two traits:
//!
//! - [`Wireless`]: interface enumeration, scanning, association, power and
//!   hardware address.
//! - [`CredentialStore`]: read-only secret lookup.
//!
//! ```text
//! +------------------+     +------------------+
//! |  Client facade   |     |  Client facade   |
//! +--------+---------+     +--------+---------+
//!          |                        |
//!          v                        v
//! +--------+---------+     +--------+---------+
//! |  Wireless trait  |     |  Wireless trait  |
//! +--------+---------+     +--------+---------+
//!          |                        |
//!          v                        v
//! +--------+---------+     +--------+---------+
//! |  SystemWireless  |     |  MemoryWireless  |
//! | (networksetup,   |     |   (in-process)   |
//! |  system_profiler)|     |                  |
//! +------------------+     +------------------+
//!        macOS              tests (`testing`)
//! ```
//!
//! All methods take `&self`: every call is a blocking request to an external
//! service and the backends hold no state of their own worth borrowing
//! mutably.

#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod system;

mod command;
mod parse;

use crate::error::Result;
use crate::network::NetworkRecord;

/// Wireless management operations, keyed by interface name.
pub trait Wireless {
    /// Names of all wireless interfaces on the host.
    fn interface_names(&self) -> Result<Vec<String>>;

    /// Name of the default wireless interface, if the host has one.
    fn default_interface(&self) -> Result<Option<String>> {
        Ok(self.interface_names()?.into_iter().next())
    }

    /// Whether the radio is powered on.
    fn power(&self, interface: &str) -> Result<bool>;

    /// Power the radio on or off.
    fn set_power(&self, interface: &str, on: bool) -> Result<()>;

    /// SSID of the network the interface is associated with.
    fn current_ssid(&self, interface: &str) -> Result<Option<String>>;

    /// Hardware (MAC) address of the interface.
    fn hardware_address(&self, interface: &str) -> Result<String>;

    /// Scan for networks, optionally restricted to one SSID.
    ///
    /// Results are in the order the platform reports them.
    fn scan(&self, interface: &str, ssid: Option<&str>) -> Result<Vec<NetworkRecord>>;

    /// Associate with a network found by a previous scan.
    fn associate(
        &self,
        interface: &str,
        network: &NetworkRecord,
        password: Option<&str>,
    ) -> Result<()>;

    /// Drop the current association.
    fn disassociate(&self, interface: &str) -> Result<()>;
}

/// A read-only query against a credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialQuery<'a> {
    /// Service the secret is filed under.
    pub service: &'a str,
    /// Account name (the SSID for Wi-Fi passwords).
    pub account: &'a str,
    /// Optional label filter.
    pub label: Option<&'a str>,
}

/// Read-only access to a secure credential store.
pub trait CredentialStore {
    /// Look up the secret matching `query`.
    ///
    /// Returns `Ok(None)` when no entry matches.
    fn find_password(&self, query: &CredentialQuery<'_>) -> Result<Option<String>>;
}

#[cfg(any(test, feature = "testing"))]
pub use memory::{MemoryCredentials, MemoryInterface, MemoryWireless};
pub use system::{SystemKeychain, SystemWireless};
