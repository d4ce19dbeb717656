//! Error types for airctl.

use std::io;
use thiserror::Error;

/// Result type for airctl operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for airctl operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No wireless interface carries the requested name.
    #[error("Interface not found: {0}")]
    InterfaceNotFound(String),

    /// The host has no default wireless interface.
    #[error("No Wi-Fi interface available")]
    NoInterfaceAvailable,

    /// Scanning failed.
    #[error("Scan failed: {0}")]
    ScanFailed(String),

    /// A scan for a specific SSID returned nothing.
    #[error("Network not found: {0}")]
    NetworkNotFound(String),

    /// Association with a network failed.
    #[error("Failed to join network: {0}")]
    JoinFailed(String),

    /// Disassociation failed.
    #[error("Failed to disconnect: {0}")]
    DisconnectFailed(String),

    /// Changing the power state failed.
    #[error("Failed to change power state: {0}")]
    PowerChangeFailed(String),

    /// The credential store could not be queried.
    #[error("Credential lookup failed: {0}")]
    CredentialLookupFailed(String),

    /// A platform tool ran but reported failure.
    #[error("{program} failed: {message}")]
    Platform {
        /// Tool that was invoked.
        program: String,
        /// Description reported by the tool.
        message: String,
    },

    /// Output of a platform tool could not be understood.
    #[error("Unexpected output: {0}")]
    Parse(String),

    /// I/O error (spawning platform tools).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON from a platform tool.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Operation not supported on this platform.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}
