//! Broker topic and policy-resource names for the ADC telemetry contract.
//!
//! The cloud-side authorization policy must grant the device's client
//! identifier connect, publish, subscribe, and receive on the telemetry
//! topic. A client ID that doesn't match the policy's bound resources is
//! rejected at connect time. Nothing here enforces that contract; these
//! helpers exist so operators and the provisioning checker can print the
//! exact resource suffixes to verify against the policy.

/// Topic the device publishes ADC readings on.
pub const TELEMETRY: &str = "ADC";

/// Policy resource suffix that must be bound to the connect permission.
pub fn client_arn_suffix(client_id: &str) -> String {
    format!("client/{client_id}")
}

/// Policy resource suffix for publish/receive on the telemetry topic.
pub fn telemetry_arn_suffix() -> String {
    format!("topic/{TELEMETRY}")
}

/// Policy resource suffix for subscribe on the telemetry topic.
pub fn telemetry_filter_arn_suffix() -> String {
    format!("topicfilter/{TELEMETRY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_suffix() {
        assert_eq!(client_arn_suffix("device-01"), "client/device-01");
    }

    #[test]
    fn telemetry_suffixes() {
        assert_eq!(telemetry_arn_suffix(), "topic/ADC");
        assert_eq!(telemetry_filter_arn_suffix(), "topicfilter/ADC");
    }
}
