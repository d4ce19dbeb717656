//! In-process backends that simulate a host's Wi-Fi hardware and keychain.
//!
//! Every call is recorded, and any operation can be made to fail, which makes
//! these backends suitable for exercising the command layer without touching
//! the real radio.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{CredentialQuery, CredentialStore, Wireless};
use crate::error::{Error, Result};
use crate::network::NetworkRecord;

/// Simulated state of one wireless interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryInterface {
    /// Interface name.
    pub name: String,
    /// Radio power.
    pub power: bool,
    /// Associated network.
    pub ssid: Option<String>,
    /// Hardware address.
    pub hardware_address: String,
    /// Networks visible to a scan, in platform order.
    pub networks: Vec<NetworkRecord>,
    /// Passwords the simulated access points accept, keyed by SSID.
    pub passwords: HashMap<String, String>,
}

impl MemoryInterface {
    /// A powered-on, unassociated interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            power: true,
            ssid: None,
            hardware_address: "00:00:00:00:00:00".to_string(),
            networks: Vec::new(),
            passwords: HashMap::new(),
        }
    }

    /// Set the power state.
    #[must_use]
    pub fn with_power(mut self, power: bool) -> Self {
        self.power = power;
        self
    }

    /// Mark the interface as associated with `ssid`.
    #[must_use]
    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = Some(ssid.into());
        self
    }

    /// Set the hardware address.
    #[must_use]
    pub fn with_hardware_address(mut self, address: impl Into<String>) -> Self {
        self.hardware_address = address.into();
        self
    }

    /// Add a network to the scan results.
    #[must_use]
    pub fn with_network(mut self, network: NetworkRecord) -> Self {
        self.networks.push(network);
        self
    }

    /// Require `password` when joining `ssid`.
    #[must_use]
    pub fn with_password(mut self, ssid: impl Into<String>, password: impl Into<String>) -> Self {
        self.passwords.insert(ssid.into(), password.into());
        self
    }
}

/// Simulated wireless backend.
#[derive(Debug, Default)]
pub struct MemoryWireless {
    interfaces: RefCell<Vec<MemoryInterface>>,
    failures: HashMap<&'static str, String>,
    calls: RefCell<Vec<String>>,
}

impl MemoryWireless {
    /// A host with no wireless interfaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an interface; the first one added is the default.
    #[must_use]
    pub fn with_interface(self, interface: MemoryInterface) -> Self {
        self.interfaces.borrow_mut().push(interface);
        self
    }

    /// Make `operation` (a [`Wireless`] method name) fail with `message`.
    #[must_use]
    pub fn failing(mut self, operation: &'static str, message: impl Into<String>) -> Self {
        self.failures.insert(operation, message.into());
        self
    }

    /// Calls made so far, as `method(interface)` strings.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Current state of the named interface.
    pub fn interface(&self, name: &str) -> Option<MemoryInterface> {
        self.interfaces
            .borrow()
            .iter()
            .find(|i| i.name == name)
            .cloned()
    }

    fn record(&self, operation: &'static str, interface: Option<&str>) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(format!("{operation}({})", interface.unwrap_or_default()));
        match self.failures.get(operation) {
            Some(message) => Err(Error::Platform {
                program: "memory".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn with_state<T>(
        &self,
        interface: &str,
        f: impl FnOnce(&mut MemoryInterface) -> Result<T>,
    ) -> Result<T> {
        let mut interfaces = self.interfaces.borrow_mut();
        let state = interfaces
            .iter_mut()
            .find(|i| i.name == interface)
            .ok_or_else(|| Error::Platform {
                program: "memory".to_string(),
                message: format!("no such interface {interface}"),
            })?;
        f(state)
    }
}

fn powered_off(interface: &str) -> Error {
    Error::Platform {
        program: "memory".to_string(),
        message: format!("{interface} is powered off"),
    }
}

impl Wireless for MemoryWireless {
    fn interface_names(&self) -> Result<Vec<String>> {
        self.record("interface_names", None)?;
        Ok(self
            .interfaces
            .borrow()
            .iter()
            .map(|i| i.name.clone())
            .collect())
    }

    fn power(&self, interface: &str) -> Result<bool> {
        self.record("power", Some(interface))?;
        self.with_state(interface, |s| Ok(s.power))
    }

    fn set_power(&self, interface: &str, on: bool) -> Result<()> {
        self.record("set_power", Some(interface))?;
        self.with_state(interface, |s| {
            s.power = on;
            if !on {
                s.ssid = None;
            }
            Ok(())
        })
    }

    fn current_ssid(&self, interface: &str) -> Result<Option<String>> {
        self.record("current_ssid", Some(interface))?;
        self.with_state(interface, |s| Ok(s.ssid.clone()))
    }

    fn hardware_address(&self, interface: &str) -> Result<String> {
        self.record("hardware_address", Some(interface))?;
        self.with_state(interface, |s| Ok(s.hardware_address.clone()))
    }

    fn scan(&self, interface: &str, ssid: Option<&str>) -> Result<Vec<NetworkRecord>> {
        self.record("scan", Some(interface))?;
        self.with_state(interface, |s| {
            if !s.power {
                return Err(powered_off(interface));
            }
            Ok(s.networks
                .iter()
                .filter(|n| ssid.is_none_or(|wanted| n.matches_ssid(wanted)))
                .cloned()
                .collect())
        })
    }

    fn associate(
        &self,
        interface: &str,
        network: &NetworkRecord,
        password: Option<&str>,
    ) -> Result<()> {
        self.record("associate", Some(interface))?;
        self.with_state(interface, |s| {
            if !s.power {
                return Err(powered_off(interface));
            }
            let ssid = network.ssid.clone().unwrap_or_default();
            if let Some(expected) = s.passwords.get(&ssid) {
                if password != Some(expected.as_str()) {
                    return Err(Error::Platform {
                        program: "memory".to_string(),
                        message: "invalid password".to_string(),
                    });
                }
            }
            s.ssid = Some(ssid);
            Ok(())
        })
    }

    fn disassociate(&self, interface: &str) -> Result<()> {
        self.record("disassociate", Some(interface))?;
        self.with_state(interface, |s| {
            s.ssid = None;
            Ok(())
        })
    }
}

/// One stored secret.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StoredSecret {
    service: String,
    account: String,
    label: Option<String>,
    secret: String,
}

/// Simulated credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    entries: Vec<StoredSecret>,
    failure: Option<String>,
    queries: RefCell<Vec<(String, String, Option<String>)>>,
}

impl MemoryCredentials {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `secret` under `service`/`account`.
    #[must_use]
    pub fn with_secret(
        mut self,
        service: impl Into<String>,
        account: impl Into<String>,
        label: Option<&str>,
        secret: impl Into<String>,
    ) -> Self {
        self.entries.push(StoredSecret {
            service: service.into(),
            account: account.into(),
            label: label.map(ToString::to_string),
            secret: secret.into(),
        });
        self
    }

    /// Make every lookup fail with `message`.
    #[must_use]
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Queries made so far as `(service, account, label)`.
    pub fn queries(&self) -> Vec<(String, String, Option<String>)> {
        self.queries.borrow().clone()
    }
}

impl CredentialStore for MemoryCredentials {
    fn find_password(&self, query: &CredentialQuery<'_>) -> Result<Option<String>> {
        self.queries.borrow_mut().push((
            query.service.to_string(),
            query.account.to_string(),
            query.label.map(ToString::to_string),
        ));
        if let Some(message) = &self.failure {
            return Err(Error::Platform {
                program: "memory".to_string(),
                message: message.clone(),
            });
        }

        Ok(self
            .entries
            .iter()
            .find(|e| {
                e.service == query.service
                    && e.account == query.account
                    && query
                        .label
                        .is_none_or(|label| e.label.as_deref() == Some(label))
            })
            .map(|e| e.secret.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Security;

    #[test]
    fn test_default_interface_is_first_added() {
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0"))
            .with_interface(MemoryInterface::new("en1"));
        assert_eq!(wireless.default_interface().unwrap().as_deref(), Some("en0"));
        assert_eq!(MemoryWireless::new().default_interface().unwrap(), None);
    }

    #[test]
    fn test_scan_filters_by_ssid() {
        let wireless = MemoryWireless::new().with_interface(
            MemoryInterface::new("en0")
                .with_network(NetworkRecord::new("Cafe", -50))
                .with_network(NetworkRecord::new("Home", -40)),
        );
        let found = wireless.scan("en0", Some("Cafe")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(wireless.scan("en0", None).unwrap().len(), 2);
    }

    #[test]
    fn test_scan_fails_when_powered_off() {
        let wireless =
            MemoryWireless::new().with_interface(MemoryInterface::new("en0").with_power(false));
        assert!(wireless.scan("en0", None).is_err());
    }

    #[test]
    fn test_associate_checks_password() {
        let network = NetworkRecord::new("Home", -40).with_security(Security::Wpa2);
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0").with_password("Home", "secret"));

        assert!(wireless.associate("en0", &network, Some("wrong")).is_err());
        assert!(wireless.associate("en0", &network, Some("secret")).is_ok());
        assert_eq!(
            wireless.interface("en0").unwrap().ssid.as_deref(),
            Some("Home")
        );
    }

    #[test]
    fn test_failure_injection_and_call_log() {
        let wireless = MemoryWireless::new()
            .with_interface(MemoryInterface::new("en0"))
            .failing("disassociate", "busy");
        assert!(wireless.power("en0").unwrap());
        assert!(wireless.disassociate("en0").is_err());
        assert_eq!(wireless.calls(), vec!["power(en0)", "disassociate(en0)"]);
    }

    #[test]
    fn test_credentials_label_filter() {
        let store = MemoryCredentials::new().with_secret("AirPort", "Home", None, "pw");
        let unlabeled = CredentialQuery {
            service: "AirPort",
            account: "Home",
            label: None,
        };
        let labeled = CredentialQuery {
            label: Some("Home"),
            ..unlabeled
        };
        assert_eq!(store.find_password(&unlabeled).unwrap().as_deref(), Some("pw"));
        assert_eq!(store.find_password(&labeled).unwrap(), None);
        assert_eq!(store.queries().len(), 2);
    }
}
