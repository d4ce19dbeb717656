//! `showpass SSID`: print a stored Wi-Fi password.

use {
    super::Context,
    crate::error::CliError,
    airctl::lookup_network_password,
    std::io::Write,
};

/// Showpass command implementation. Nothing found is not an error.
pub(crate) fn cmd_showpass(
    ctx: &Context<'_>,
    ssid: &str,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let found = lookup_network_password(ctx.credentials, ctx.keychain_service, ssid)?;

    match (found, ctx.mode.is_quiet()) {
        (Some(secret), true) => writeln!(out, "{secret}")?,
        (Some(secret), false) => writeln!(out, "Password for {ssid}: {secret}")?,
        (None, true) => {},
        (None, false) => writeln!(out, "No password found for {ssid}.")?,
    }
    Ok(())
}
