//! `join SSID [PASSWORD]`: associate with a network.

use {
    super::Context,
    crate::error::CliError,
    airctl::{Interface, lookup_network_password},
    log::debug,
    std::io::Write,
};

/// Join command implementation.
///
/// An omitted password triggers a keychain lookup, falling back to an open
/// association when nothing is stored. An empty password does the same on a
/// secured network; on an open network it skips the lookup. Joining the
/// network the interface is already on succeeds.
pub(crate) fn cmd_join(
    ctx: &Context<'_>,
    iface: &Interface<'_>,
    ssid: &str,
    password: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let quiet = ctx.mode.is_quiet();
    let mut progress = |line: String| -> std::io::Result<()> {
        if quiet { Ok(()) } else { writeln!(out, "{line}") }
    };

    progress(format!("Scanning for {ssid}..."))?;
    let network = iface.find_network(ssid)?;
    let channel = network
        .channel
        .map_or_else(|| "unknown".to_string(), |c| c.to_string());
    progress(format!(
        "Found {ssid} ({} dBm, channel {channel}, {})",
        network.rssi, network.security
    ))?;

    // An empty password only stands for itself on an open network.
    let stored;
    let password = match password {
        Some(given) if !given.is_empty() || !network.security.requires_password() => Some(given),
        _ => {
            progress(format!("Looking up password for {ssid} in keychain..."))?;
            stored = lookup_network_password(ctx.credentials, ctx.keychain_service, ssid)?;
            if stored.is_some() {
                progress("Using password from keychain".to_string())?;
            } else {
                debug!("No stored password for {ssid}, joining without one");
                progress("No stored password, joining without one".to_string())?;
            }
            stored.as_deref()
        },
    };

    progress(format!("Joining {ssid} on {}...", iface.name()))?;
    iface.associate(&network, password)?;

    writeln!(out, "Joined {ssid}.")?;
    Ok(())
}
