//! # airctl
//!
//! A library for driving the Wi-Fi interface of a macOS host.
//!
//! The radio, the 802.11 stack and the keychain all belong to the operating
//! system. This crate provides:
//!
//! - A data model for interfaces and scan results
//! - [`Wireless`] and [`CredentialStore`] traits over the platform services
//! - A macOS backend driving `networksetup`, `system_profiler`, `airport`
//!   and `security`
//! - An in-memory backend for tests (`testing` feature)
//! - An interface facade ([`Client`], [`Interface`]) that resolves interfaces
//!   and maps platform failures onto [`Error`] variants
//!
//! ## Example
//!
//! ```rust,no_run
//! use airctl::{Client, SystemWireless};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = SystemWireless::new()?;
//!     let client = Client::new(&backend);
//!     let wifi = client.interface(None)?;
//!
//!     for network in wifi.scan()? {
//!         println!("{} {} dBm", network.display_ssid(), network.rssi);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod client;
pub mod credentials;
pub mod error;
pub mod network;

pub use {
    backend::{CredentialQuery, CredentialStore, SystemKeychain, SystemWireless, Wireless},
    client::{Client, Interface, InterfaceSummary},
    credentials::{DEFAULT_SERVICE, lookup_network_password},
    error::{Error, Result},
    network::{HIDDEN_SSID, NetworkRecord, Security, sort_by_signal, strongest, unique_ssids},
};

#[cfg(any(test, feature = "testing"))]
pub use backend::{MemoryCredentials, MemoryInterface, MemoryWireless};
