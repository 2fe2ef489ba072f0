//! HTTP handlers for signal endpoints.
//!
//! Handlers are stateless: each one parses its input, asks the domain for a
//! decision where there is one, and serializes the advisory.

use axum::Json;

use crate::adapters::http::extract::{ValidatedJson, ValidatedPath};
use crate::domain::signal::{SignalTiming, TrafficLength};

use super::dto::{
    AdjustTrafficRequest, EmergencyRequest, EmergencyResponse, EmergencySimulationResponse,
    IncidentRequest, IncidentResponse, IncidentSimulationResponse, TrafficAdjustedResponse,
    TrafficSimulationResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Simulation endpoints (path-driven)
// ════════════════════════════════════════════════════════════════════════════

/// GET /simulate_traffic/:length - Red-light timing for a queue length
pub async fn simulate_traffic(
    ValidatedPath(traffic_length): ValidatedPath<TrafficLength>,
) -> Json<TrafficSimulationResponse> {
    let timing = SignalTiming::decide(traffic_length);
    tracing::debug!(
        traffic_length_km = traffic_length.km(),
        condition = %timing.condition(),
        red_light_seconds = timing.red_light_seconds(),
        "Simulated traffic timing"
    );

    Json(timing.into())
}

/// GET /simulate_emergency/:vehicle - Preemption advisory for a vehicle
pub async fn simulate_emergency(
    ValidatedPath(vehicle): ValidatedPath<String>,
) -> Json<EmergencySimulationResponse> {
    tracing::info!(vehicle = %vehicle, "Simulated emergency preemption");
    Json(EmergencySimulationResponse::for_vehicle(vehicle))
}

/// GET /simulate_incident/:incident - Incident advisory
pub async fn simulate_incident(
    ValidatedPath(incident): ValidatedPath<String>,
) -> Json<IncidentSimulationResponse> {
    tracing::info!(incident = %incident, "Simulated incident");
    Json(IncidentSimulationResponse::for_incident(incident))
}

// ════════════════════════════════════════════════════════════════════════════
// Control endpoints (body-driven)
// ════════════════════════════════════════════════════════════════════════════

/// POST /traffic - Adjust the signal for a measured queue
pub async fn adjust_traffic(
    ValidatedJson(req): ValidatedJson<AdjustTrafficRequest>,
) -> Json<TrafficAdjustedResponse> {
    let timing = SignalTiming::decide(req.traffic_length);
    tracing::debug!(
        traffic_length_km = req.traffic_length.km(),
        condition = %timing.condition(),
        red_light_seconds = timing.red_light_seconds(),
        "Traffic adjusted"
    );

    Json(timing.into())
}

/// POST /emergency - Give an emergency vehicle priority
pub async fn emergency_vehicle(
    ValidatedJson(req): ValidatedJson<EmergencyRequest>,
) -> Json<EmergencyResponse> {
    tracing::info!(vehicle = %req.vehicle_type, "Emergency vehicle given priority");
    Json(EmergencyResponse::for_vehicle(req.vehicle_type))
}

/// POST /incident - Record that an incident was handled
pub async fn incident_detected(
    ValidatedJson(req): ValidatedJson<IncidentRequest>,
) -> Json<IncidentResponse> {
    tracing::info!(
        incident = req.incident_type.as_deref().unwrap_or("<unspecified>"),
        location = req.location.as_deref().unwrap_or("<unspecified>"),
        "Incident handled"
    );
    Json(req.into())
}
