//! HTTP DTOs for signal endpoints.
//!
//! Field names are the public wire format. The path-driven simulation
//! endpoints and the body-driven control endpoints return different shapes,
//! so each gets its own response type.

use serde::{Deserialize, Serialize};

use crate::domain::signal::{
    HandlingStatus, IncidentAction, Priority, Severity, SignalCommand, SignalTiming,
    TrafficLength, EMERGENCY_PRIORITY_MESSAGE, TRAFFIC_ADJUSTED_STATUS,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to adjust the signal for a measured queue.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustTrafficRequest {
    pub traffic_length: TrafficLength,
}

/// Request to preempt the signal for an emergency vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyRequest {
    pub vehicle_type: String,
}

/// Incident report. Both fields may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncidentRequest {
    #[serde(default)]
    pub incident_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for `GET /simulate_traffic/:length`.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficSimulationResponse {
    pub traffic_length_km: TrafficLength,
    pub red_light_seconds: u32,
}

impl From<SignalTiming> for TrafficSimulationResponse {
    fn from(timing: SignalTiming) -> Self {
        Self {
            traffic_length_km: timing.traffic_length(),
            red_light_seconds: timing.red_light_seconds(),
        }
    }
}

/// Response for `POST /traffic`.
#[derive(Debug, Clone, Serialize)]
pub struct TrafficAdjustedResponse {
    pub status: &'static str,
    pub traffic_length_km: TrafficLength,
    pub red_light_seconds: u32,
}

impl From<SignalTiming> for TrafficAdjustedResponse {
    fn from(timing: SignalTiming) -> Self {
        Self {
            status: TRAFFIC_ADJUSTED_STATUS,
            traffic_length_km: timing.traffic_length(),
            red_light_seconds: timing.red_light_seconds(),
        }
    }
}

/// Response for `GET /simulate_emergency/:vehicle`.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencySimulationResponse {
    pub vehicle: String,
    pub signal: SignalCommand,
    pub priority: Priority,
}

impl EmergencySimulationResponse {
    pub fn for_vehicle(vehicle: String) -> Self {
        Self {
            vehicle,
            signal: SignalCommand::GreenImmediately,
            priority: Priority::High,
        }
    }
}

/// Response for `POST /emergency`.
#[derive(Debug, Clone, Serialize)]
pub struct EmergencyResponse {
    pub priority: Priority,
    pub vehicle: String,
    pub signal: SignalCommand,
    pub message: &'static str,
}

impl EmergencyResponse {
    pub fn for_vehicle(vehicle: String) -> Self {
        Self {
            priority: Priority::High,
            vehicle,
            signal: SignalCommand::GreenImmediately,
            message: EMERGENCY_PRIORITY_MESSAGE,
        }
    }
}

/// Response for `GET /simulate_incident/:incident`.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentSimulationResponse {
    pub incident: String,
    pub action: IncidentAction,
    pub severity: Severity,
}

impl IncidentSimulationResponse {
    pub fn for_incident(incident: String) -> Self {
        Self {
            incident,
            action: IncidentAction::AuthoritiesAlerted,
            severity: Severity::Medium,
        }
    }
}

/// Response for `POST /incident`. Absent fields serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentResponse {
    pub incident: Option<String>,
    pub location: Option<String>,
    pub action: IncidentAction,
    pub severity: Severity,
    pub status: HandlingStatus,
}

impl From<IncidentRequest> for IncidentResponse {
    fn from(req: IncidentRequest) -> Self {
        Self {
            incident: req.incident_type,
            location: req.location,
            action: IncidentAction::AuthoritiesAlerted,
            severity: Severity::Medium,
            status: HandlingStatus::Handled,
        }
    }
}
