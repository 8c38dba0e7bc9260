//! Provisioning error types.

use thiserror::Error;

/// Errors raised while constructing a validated [`ConfigBundle`].
///
/// All variants are fatal at startup. Configuration errors are not
/// transient, so callers abort with an operator-visible diagnostic
/// instead of retrying.
///
/// [`ConfigBundle`]: crate::ConfigBundle
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required text field was empty (or absent from the source).
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// Broker port outside [1, 65535].
    #[error("invalid broker_port: {port}")]
    InvalidPort { port: u16 },

    /// Wi-Fi password length outside the WPA2 passphrase range.
    #[error("wifi_password length {len} outside accepted range (0 or 8-63 bytes)")]
    InvalidWifiPassword { len: usize },

    /// Broker endpoint is not a syntactically valid hostname.
    #[error("invalid broker_endpoint: {reason}")]
    InvalidEndpoint { reason: String },

    /// A certificate/key field lacks a matching BEGIN/END PEM marker pair.
    #[error("malformed PEM in {field}: {reason}")]
    MalformedPem { field: &'static str, reason: String },

    /// A field still carries unresolved provisioning-template text.
    #[error("placeholder text detected in {field}: provisioning incomplete")]
    PlaceholderDetected { field: &'static str },

    /// A provisioning source could not be read or parsed.
    #[error("provisioning source error: {0}")]
    Source(String),
}

/// Convenience alias for provisioning results.
pub type ConfigResult<T> = Result<T, ConfigError>;
