//! Red-light timing rule.

use serde::Serialize;
use std::fmt;

use super::TrafficLength;

/// Queue length above which traffic counts as heavy. The bound itself is light.
pub const HEAVY_TRAFFIC_THRESHOLD_KM: f64 = 1.5;

/// Red phase for heavy traffic.
pub const HEAVY_TRAFFIC_RED_SECONDS: u32 = 30;

/// Red phase for light traffic.
pub const LIGHT_TRAFFIC_RED_SECONDS: u32 = 20;

/// Decides how long the red light stays on for a given queue length.
///
/// Anything strictly above [`HEAVY_TRAFFIC_THRESHOLD_KM`] gets the long red
/// phase. Zero and negative lengths are not rejected and get the short phase.
pub fn decide_red_light_time(traffic_length_km: f64) -> u32 {
    TrafficCondition::classify(traffic_length_km).red_light_seconds()
}

/// Coarse classification of the queue behind a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficCondition {
    Light,
    Heavy,
}

impl TrafficCondition {
    /// Classifies a queue length in kilometers.
    pub fn classify(traffic_length_km: f64) -> Self {
        if traffic_length_km > HEAVY_TRAFFIC_THRESHOLD_KM {
            TrafficCondition::Heavy
        } else {
            TrafficCondition::Light
        }
    }

    /// Red phase duration for this condition.
    pub fn red_light_seconds(&self) -> u32 {
        match self {
            TrafficCondition::Heavy => HEAVY_TRAFFIC_RED_SECONDS,
            TrafficCondition::Light => LIGHT_TRAFFIC_RED_SECONDS,
        }
    }
}

impl fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrafficCondition::Light => write!(f, "light"),
            TrafficCondition::Heavy => write!(f, "heavy"),
        }
    }
}

/// Outcome of the timing rule for one queue measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalTiming {
    traffic_length: TrafficLength,
    condition: TrafficCondition,
    red_light_seconds: u32,
}

impl SignalTiming {
    /// Runs the timing rule on a validated traffic length.
    pub fn decide(traffic_length: TrafficLength) -> Self {
        let condition = TrafficCondition::classify(traffic_length.km());
        Self {
            traffic_length,
            condition,
            red_light_seconds: decide_red_light_time(traffic_length.km()),
        }
    }

    pub fn traffic_length(&self) -> TrafficLength {
        self.traffic_length
    }

    pub fn condition(&self) -> TrafficCondition {
        self.condition
    }

    pub fn red_light_seconds(&self) -> u32 {
        self.red_light_seconds
    }
}
