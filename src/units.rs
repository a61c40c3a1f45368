//! Unit-system tagging and pure unit conversions.
//!
//! Snapshots carry no unit tag of their own, so whoever holds one must also
//! hold the [`Units`] it was fetched in and only convert when crossing that
//! boundary; converting an imperial-fetched value with the forward formulas
//! double-converts.

use std::fmt;

/// Unit system sent on a weather request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Units {
    /// Celsius, m/s, hPa. The default when a caller expresses no preference.
    #[default]
    Metric,
    /// Fahrenheit, mph, inHg.
    Imperial,
}

impl Units {
    pub fn as_str(self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MPH_PER_MPS: f64 = 2.23694;
const INHG_PER_HPA: f64 = 0.02953;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn mps_to_mph(mps: f64) -> f64 {
    mps * MPH_PER_MPS
}

pub fn mph_to_mps(mph: f64) -> f64 {
    mph / MPH_PER_MPS
}

pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * INHG_PER_HPA
}

pub fn inhg_to_hpa(inhg: f64) -> f64 {
    inhg / INHG_PER_HPA
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn temperature_anchor_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
        assert!(close(fahrenheit_to_celsius(-40.0), -40.0, 1e-12));
    }

    #[test]
    fn wind_speed_conversion() {
        assert!(close(mps_to_mph(1.0), 2.23694, 1e-9));
        assert!(close(mph_to_mps(mps_to_mph(7.5)), 7.5, 1e-12));
    }

    #[test]
    fn pressure_conversion() {
        assert!(close(hpa_to_inhg(1013.0), 29.92, 0.01));
        assert!(close(inhg_to_hpa(hpa_to_inhg(1013.0)), 1013.0, 1e-9));
    }

    #[test]
    fn units_parameter_values() {
        assert_eq!(Units::Metric.as_str(), "metric");
        assert_eq!(Units::Imperial.as_str(), "imperial");
        assert_eq!(Units::default(), Units::Metric);
    }
}
