//! Wi-Fi password lookup against a [`CredentialStore`].

use log::debug;

use crate::backend::{CredentialQuery, CredentialStore};
use crate::error::{Error, Result};

/// Keychain service under which macOS files Wi-Fi passwords.
pub const DEFAULT_SERVICE: &str = "AirPort";

/// Look up the stored password for `ssid`.
///
/// Two queries are tried in order: service + account, then service + account
/// with the SSID as label. The first non-empty secret wins. The store is
/// never written to.
pub fn lookup_network_password(
    store: &dyn CredentialStore,
    service: &str,
    ssid: &str,
) -> Result<Option<String>> {
    let strategies = [
        CredentialQuery {
            service,
            account: ssid,
            label: None,
        },
        CredentialQuery {
            service,
            account: ssid,
            label: Some(ssid),
        },
    ];

    for query in &strategies {
        let found = store
            .find_password(query)
            .map_err(|e| Error::CredentialLookupFailed(e.to_string()))?;
        match found {
            Some(secret) if !secret.is_empty() => {
                debug!(
                    "Found credential for {ssid} (label filter: {})",
                    query.label.is_some()
                );
                return Ok(Some(secret));
            },
            _ => {},
        }
    }

    debug!("No credential stored for {ssid}");
    Ok(None)
}
