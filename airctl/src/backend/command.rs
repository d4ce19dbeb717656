//! Subprocess invocation for the platform tools.

use {
    crate::error::Result,
    log::{debug, trace},
    std::process::Command,
};

/// Shown in logs instead of secret arguments.
const REDACTED: &str = "********";

/// A single invocation of a platform tool.
pub(crate) struct Tool {
    program: String,
    args: Vec<String>,
    secrets: Vec<usize>,
}

/// Captured result of a finished tool.
#[derive(Debug, Clone, Default)]
pub(crate) struct ToolOutput {
    /// Exit code, `None` if the tool was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl Tool {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            secrets: Vec::new(),
        }
    }

    pub(crate) fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append an argument that must never appear in logs.
    pub(crate) fn secret(mut self, arg: impl Into<String>) -> Self {
        self.secrets.push(self.args.len());
        self.args.push(arg.into());
        self
    }

    pub(crate) fn program(&self) -> &str {
        &self.program
    }

    fn display_args(&self) -> String {
        self.args
            .iter()
            .enumerate()
            .map(|(i, a)| {
                if self.secrets.contains(&i) {
                    REDACTED
                } else {
                    a.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run to completion, capturing both output streams.
    pub(crate) fn run(self) -> Result<ToolOutput> {
        debug!("Running {} {}", self.program, self.display_args());

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()?;

        let result = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(
            "{} exited with {:?}, stdout={:?}, stderr={:?}",
            self.program, result.code, result.stdout, result.stderr
        );
        Ok(result)
    }
}

impl ToolOutput {
    pub(crate) fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best description of what went wrong, on a single line.
    pub(crate) fn message(&self) -> String {
        let stderr = one_line(&self.stderr);
        if !stderr.is_empty() {
            return stderr;
        }
        let stdout = one_line(&self.stdout);
        if !stdout.is_empty() {
            return stdout;
        }
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Non-blank lines of `text`, trimmed and joined with `"; "`.
fn one_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
