//! `interfaces`: list every Wi-Fi interface on the host.

use {
    super::Context,
    crate::{
        error::CliError,
        output::{OutputMode, write_json, write_table},
    },
    airctl::Error,
    std::io::Write,
};

/// Interfaces command implementation.
///
/// The interface named with `-i` (or else the default one) is flagged as
/// current. An explicitly named interface must exist.
pub(crate) fn cmd_interfaces(ctx: &Context<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    let current = match ctx.client.interface(ctx.interface) {
        Ok(iface) => Some(iface.name().to_string()),
        Err(Error::NoInterfaceAvailable) => None,
        Err(e) => return Err(e.into()),
    };
    let list = ctx.client.interfaces()?;

    match ctx.mode {
        OutputMode::Json => {
            write_json(out, &serde_json::to_value(&list).map_err(airctl::Error::from)?)?;
        },
        OutputMode::Quiet => {
            for summary in &list {
                writeln!(out, "{}", summary.name)?;
            }
        },
        OutputMode::Normal if list.is_empty() => writeln!(out, "No Wi-Fi interfaces found.")?,
        OutputMode::Normal => {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|s| {
                    let marker = if current.as_deref() == Some(s.name.as_str()) {
                        "*"
                    } else {
                        ""
                    };
                    vec![
                        marker.to_string(),
                        s.name.clone(),
                        if s.power_on { "on" } else { "off" }.to_string(),
                        s.ssid.clone().unwrap_or_default(),
                    ]
                })
                .collect();
            write_table(out, &["", "NAME", "POWER", "NETWORK"], &rows)?;
        },
    }

    Ok(())
}
