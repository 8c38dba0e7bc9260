//! Provisioning checker — validates a VoltWatch provisioning source
//! before a device image ships.
//!
//! Usage:
//!   vw-provision-check /etc/voltwatch/provision.toml
//!   vw-provision-check --env        (reads VW_* environment variables)
//!
//! Exits 0 when the bundle validates; exits 1 with a diagnostic naming
//! the offending field otherwise. Secrets never appear in the output.

use tracing_subscriber::EnvFilter;

use vw_provision::{ConfigBundle, ConfigError, RawBundle, topics};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "vw-provision-check starting"
    );

    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/etc/voltwatch/provision.toml".to_string());

    match load_and_validate(&source) {
        Ok(bundle) => {
            tracing::info!(
                wifi_ssid = %bundle.wifi_ssid(),
                endpoint = %bundle.broker_endpoint(),
                port = bundle.broker_port(),
                client_id = %bundle.client_id(),
                has_public_key = bundle.device_public_key_pem().is_some(),
                "provisioning bundle valid"
            );
            tracing::info!(
                connect_resource = %topics::client_arn_suffix(bundle.client_id()),
                publish_resource = %topics::telemetry_arn_suffix(),
                subscribe_resource = %topics::telemetry_filter_arn_suffix(),
                "verify the broker policy grants these resources"
            );
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, source, "provisioning bundle rejected");
            std::process::exit(1);
        }
    }
}

fn load_and_validate(source: &str) -> Result<ConfigBundle, ConfigError> {
    let raw = if source == "--env" {
        RawBundle::from_env()?
    } else {
        RawBundle::from_file(source)?
    };
    ConfigBundle::validate(raw)
}
