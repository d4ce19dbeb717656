//! Interface resolution and the per-interface facade.

use log::debug;
use serde::Serialize;

use crate::backend::Wireless;
use crate::error::{Error, Result};
use crate::network::{self, NetworkRecord};

/// Entry point for resolving and listing wireless interfaces.
#[derive(Clone, Copy)]
pub struct Client<'a> {
    backend: &'a dyn Wireless,
}

/// Snapshot of one interface, as listed by [`Client::interfaces`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceSummary {
    /// Interface name.
    pub name: String,
    /// Radio power.
    pub power_on: bool,
    /// Associated network.
    pub ssid: Option<String>,
}

impl<'a> Client<'a> {
    /// Wrap a backend.
    pub fn new(backend: &'a dyn Wireless) -> Self {
        Self { backend }
    }

    /// Resolve an interface by name, or the host's default when `name` is
    /// `None`.
    pub fn interface(&self, name: Option<&str>) -> Result<Interface<'a>> {
        let name = match name {
            Some(wanted) => self
                .backend
                .interface_names()?
                .into_iter()
                .find(|n| n == wanted)
                .ok_or_else(|| Error::InterfaceNotFound(wanted.to_string()))?,
            None => self
                .backend
                .default_interface()?
                .ok_or(Error::NoInterfaceAvailable)?,
        };
        debug!("Using interface {name}");
        Ok(Interface {
            backend: self.backend,
            name,
        })
    }

    /// Every wireless interface on the host.
    pub fn interfaces(&self) -> Result<Vec<InterfaceSummary>> {
        self.backend
            .interface_names()?
            .into_iter()
            .map(|name| {
                Ok(InterfaceSummary {
                    power_on: self.backend.power(&name)?,
                    ssid: self.backend.current_ssid(&name)?,
                    name,
                })
            })
            .collect()
    }
}

/// A resolved wireless interface.
pub struct Interface<'a> {
    backend: &'a dyn Wireless,
    name: String,
}

impl Interface<'_> {
    /// Interface name, e.g. `en0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the radio is on.
    pub fn power(&self) -> Result<bool> {
        self.backend.power(&self.name)
    }

    /// Power the radio on or off.
    pub fn set_power(&self, on: bool) -> Result<()> {
        self.backend
            .set_power(&self.name, on)
            .map_err(|e| Error::PowerChangeFailed(e.to_string()))
    }

    /// SSID of the associated network.
    pub fn ssid(&self) -> Result<Option<String>> {
        self.backend.current_ssid(&self.name)
    }

    /// Hardware (MAC) address.
    pub fn hardware_address(&self) -> Result<String> {
        self.backend.hardware_address(&self.name)
    }

    /// Scan for all networks, strongest first.
    pub fn scan(&self) -> Result<Vec<NetworkRecord>> {
        let mut records = self
            .backend
            .scan(&self.name, None)
            .map_err(|e| Error::ScanFailed(e.to_string()))?;
        network::sort_by_signal(&mut records);
        Ok(records)
    }

    /// Scan for `ssid` and pick the strongest access point advertising it.
    pub fn find_network(&self, ssid: &str) -> Result<NetworkRecord> {
        let records = self
            .backend
            .scan(&self.name, Some(ssid))
            .map_err(|e| Error::ScanFailed(e.to_string()))?;
        // Backends may ignore the filter.
        let matching: Vec<NetworkRecord> = records
            .into_iter()
            .filter(|r| r.matches_ssid(ssid))
            .collect();
        debug!("{} access point(s) advertise {ssid}", matching.len());
        network::strongest(&matching)
            .cloned()
            .ok_or_else(|| Error::NetworkNotFound(ssid.to_string()))
    }

    /// Associate with `network`. An empty password means an open network.
    pub fn associate(&self, network: &NetworkRecord, password: Option<&str>) -> Result<()> {
        let password = password.filter(|p| !p.is_empty());
        self.backend
            .associate(&self.name, network, password)
            .map_err(|e| Error::JoinFailed(e.to_string()))
    }

    /// Drop the current association. Succeeds when already disconnected.
    pub fn disconnect(&self) -> Result<()> {
        self.backend
            .disassociate(&self.name)
            .map_err(|e| Error::DisconnectFailed(e.to_string()))
    }
}
