//! Traffic length value object (kilometers of queued traffic).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::TrafficLengthError;

/// Length of the queue waiting at a signal, in kilometers.
///
/// Only finite values are representable. Zero and negative lengths are
/// accepted as-is; the timing rule treats them as light traffic.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TrafficLength(f64);

impl TrafficLength {
    /// Creates a traffic length, rejecting NaN and infinities.
    pub fn try_new(km: f64) -> Result<Self, TrafficLengthError> {
        if !km.is_finite() {
            return Err(TrafficLengthError::NotFinite(km));
        }
        Ok(Self(km))
    }

    /// Returns the length in kilometers.
    pub fn km(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TrafficLength {
    type Error = TrafficLengthError;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::try_new(km)
    }
}

impl From<TrafficLength> for f64 {
    fn from(length: TrafficLength) -> Self {
        length.0
    }
}

impl FromStr for TrafficLength {
    type Err = TrafficLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let km = s
            .trim()
            .parse::<f64>()
            .map_err(|_| TrafficLengthError::NotANumber(s.to_string()))?;
        Self::try_new(km)
    }
}

impl fmt::Display for TrafficLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_decimal_segments() {
        assert_eq!("2".parse::<TrafficLength>().unwrap().km(), 2.0);
        assert_eq!("0.5".parse::<TrafficLength>().unwrap().km(), 0.5);
        assert_eq!("-1.25".parse::<TrafficLength>().unwrap().km(), -1.25);
    }

    #[test]
    fn rejects_non_numeric_segments() {
        let err = "abc".parse::<TrafficLength>().unwrap_err();
        assert_eq!(err, TrafficLengthError::NotANumber("abc".to_string()));
        assert!("".parse::<TrafficLength>().is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!("NaN".parse::<TrafficLength>().is_err());
        assert!("inf".parse::<TrafficLength>().is_err());
        assert!(TrafficLength::try_new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn deserializes_from_json_number() {
        let length: TrafficLength = serde_json::from_str("1.5").unwrap();
        assert_eq!(length.km(), 1.5);
        let length: TrafficLength = serde_json::from_str("2").unwrap();
        assert_eq!(length.km(), 2.0);
    }

    #[test]
    fn rejects_json_string() {
        assert!(serde_json::from_str::<TrafficLength>("\"2\"").is_err());
    }

    #[test]
    fn serializes_as_plain_number() {
        let length = TrafficLength::try_new(2.0).unwrap();
        assert_eq!(serde_json::to_string(&length).unwrap(), "2.0");
    }

    #[test]
    fn display_includes_unit() {
        assert_eq!(TrafficLength::try_new(0.5).unwrap().to_string(), "0.5 km");
    }
}
