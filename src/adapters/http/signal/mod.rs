//! HTTP adapter for signal endpoints.
//!
//! Three path-driven simulation endpoints for manual exploration and three
//! body-driven control endpoints for programmatic use.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AdjustTrafficRequest, EmergencyRequest, EmergencyResponse, EmergencySimulationResponse,
    IncidentRequest, IncidentResponse, IncidentSimulationResponse, TrafficAdjustedResponse,
    TrafficSimulationResponse,
};
pub use routes::signal_routes;
