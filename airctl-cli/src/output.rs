//! Output modes and shared formatting.

use std::io::{self, Write};

use crate::error::UsageError;

/// How results are written to stdout, chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum OutputMode {
    /// Headers, labels and progress text.
    #[default]
    Normal,
    /// Bare values only.
    Quiet,
    /// Machine-readable JSON, for commands that support it.
    Json,
}

impl OutputMode {
    /// Pick the mode from the `--json` and `--quiet` flags.
    pub(crate) fn from_flags(json: bool, quiet: bool) -> Result<Self, UsageError> {
        match (json, quiet) {
            (true, true) => Err(UsageError::ConflictingFlags),
            (true, false) => Ok(Self::Json),
            (false, true) => Ok(Self::Quiet),
            (false, false) => Ok(Self::Normal),
        }
    }

    pub(crate) fn is_quiet(self) -> bool {
        self == Self::Quiet
    }
}

/// Pretty-print `value` followed by a newline.
pub(crate) fn write_json(out: &mut dyn Write, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Left-aligned columns separated by two spaces, trailing blanks trimmed.
///
/// Every row must have as many cells as `header`.
pub(crate) fn write_table(
    out: &mut dyn Write,
    header: &[&str],
    rows: &[Vec<String>],
) -> io::Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", render_row(header.iter().copied(), &widths))?;
    for row in rows {
        writeln!(out, "{}", render_row(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false).unwrap(), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false).unwrap(), OutputMode::Json);
        assert_eq!(OutputMode::from_flags(false, true).unwrap(), OutputMode::Quiet);
        assert!(matches!(
            OutputMode::from_flags(true, true),
            Err(UsageError::ConflictingFlags)
        ));
    }

    #[test]
    fn test_write_table_aligns_columns() {
        let mut buf = Vec::new();
        write_table(
            &mut buf,
            &["SSID", "RSSI"],
            &[
                vec!["Home Network".into(), "-40".into()],
                vec!["Cafe".into(), "-71".into()],
            ],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "SSID          RSSI\nHome Network  -40\nCafe          -71\n"
        );
    }

    #[test]
    fn test_write_json_pretty() {
        let mut buf = Vec::new();
        write_json(&mut buf, &serde_json::json!([])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[]\n");
    }
}
