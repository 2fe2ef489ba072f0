//! Fixed advisories for emergency preemption and incident handling.
//!
//! None of these are computed. They are modelled as enums so the wire
//! spelling lives in exactly one place.

use serde::Serialize;

/// Status reported after routine traffic adjustment.
pub const TRAFFIC_ADJUSTED_STATUS: &str = "Traffic adjusted";

/// Message returned with every emergency preemption.
pub const EMERGENCY_PRIORITY_MESSAGE: &str = "Emergency vehicle given priority";

/// Priority assigned to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Priority {
    #[default]
    #[serde(rename = "HIGH")]
    High,
}

/// Command a hypothetical controller should apply to the signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SignalCommand {
    #[default]
    #[serde(rename = "GREEN IMMEDIATELY")]
    GreenImmediately,
}

/// Severity attached to a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Severity {
    #[default]
    #[serde(rename = "MEDIUM")]
    Medium,
}

/// Action taken for a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum IncidentAction {
    #[default]
    #[serde(rename = "Authorities alerted")]
    AuthoritiesAlerted,
}

/// Final handling state of a reported incident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum HandlingStatus {
    #[default]
    #[serde(rename = "HANDLED")]
    Handled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn advisories_serialize_to_wire_strings() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("HIGH"));
        assert_eq!(
            serde_json::to_value(SignalCommand::GreenImmediately).unwrap(),
            json!("GREEN IMMEDIATELY")
        );
        assert_eq!(serde_json::to_value(Severity::Medium).unwrap(), json!("MEDIUM"));
        assert_eq!(
            serde_json::to_value(IncidentAction::AuthoritiesAlerted).unwrap(),
            json!("Authorities alerted")
        );
        assert_eq!(serde_json::to_value(HandlingStatus::Handled).unwrap(), json!("HANDLED"));
    }
}
