//! Device provisioning bundle for VoltWatch ADC telemetry devices.
//!
//! Before a device can associate to Wi-Fi and open a mutually
//! authenticated MQTT session, it needs network credentials, a broker
//! endpoint, a client identity, and PEM certificate/key material. This
//! crate models that bundle:
//! - `RawBundle` — unvalidated input from a TOML file or environment
//! - `ConfigBundle` — immutable, validated, shared by reference
//! - `ConfigError` — fatal construction-time validation failures
//! - `topics` — the ADC telemetry topic / policy-resource contract
//!
//! Wi-Fi association, the TLS handshake, and the MQTT client live
//! elsewhere; they consume a validated `&ConfigBundle`.

pub mod bundle;
pub mod error;
pub mod pem;
pub mod source;
pub mod topics;

// Re-exports for convenience.
pub use bundle::ConfigBundle;
pub use error::{ConfigError, ConfigResult};
pub use source::RawBundle;
