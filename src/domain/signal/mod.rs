//! Signal domain module.
//!
//! Everything the service decides lives here. The HTTP layer only parses
//! input, calls into this module and serializes what comes back.
//!
//! - [`decide_red_light_time`] - the timing rule for routine traffic
//! - [`TrafficLength`] - validated queue length in kilometers
//! - [`Priority`], [`SignalCommand`], [`Severity`], [`IncidentAction`],
//!   [`HandlingStatus`] - fixed advisories with their wire spelling

mod decision;
mod errors;
mod scenario;
mod traffic_length;

pub use decision::{
    decide_red_light_time, SignalTiming, TrafficCondition, HEAVY_TRAFFIC_RED_SECONDS,
    HEAVY_TRAFFIC_THRESHOLD_KM, LIGHT_TRAFFIC_RED_SECONDS,
};
pub use errors::TrafficLengthError;
pub use scenario::{
    HandlingStatus, IncidentAction, Priority, Severity, SignalCommand,
    EMERGENCY_PRIORITY_MESSAGE, TRAFFIC_ADJUSTED_STATUS,
};
pub use traffic_length::TrafficLength;
