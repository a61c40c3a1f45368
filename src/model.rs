//! Decoded shape of the provider's current-weather payload.
//!
//! All numeric fields are relative to whatever unit system was sent on the
//! request that produced the snapshot; the payload itself carries no unit
//! tag, so the caller must remember which [`crate::Units`] it asked for.

use serde::Deserialize;

/// One immutable decoded weather observation for a place at fetch time.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSnapshot {
    pub coord: Coordinates,
    /// At least one element expected, but never guaranteed by the provider.
    pub weather: Vec<Condition>,
    pub main: MainBlock,
    pub wind: Wind,
    /// Offset from UTC in seconds.
    pub timezone: i32,
    /// City display name.
    pub name: String,
}

impl WeatherSnapshot {
    /// Human description of the leading condition, or a placeholder when the
    /// provider sent an empty condition list.
    pub fn primary_condition(&self) -> &str {
        self.weather
            .first()
            .map_or("Unknown", |c| c.description.as_str())
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lon: f64,
    pub lat: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Coarse category, e.g. "Clouds".
    pub main: String,
    /// Human wording, e.g. "broken clouds".
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    /// hPa when fetched in metric.
    pub pressure: u32,
    /// Percent.
    pub humidity: u8,
    /// Absent for some stations; a legitimate state, not an error.
    pub sea_level: Option<u32>,
    #[serde(rename = "grnd_level")]
    pub ground_level: Option<u32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "coord": {"lon": 15.9667, "lat": 45.8},
        "weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
        "main": {
            "temp": 18.55,
            "feels_like": 18.21,
            "temp_min": 17.68,
            "temp_max": 19.44,
            "pressure": 1016,
            "humidity": 64,
            "sea_level": 1016,
            "grnd_level": 999
        },
        "wind": {"speed": 3.6, "deg": 270},
        "timezone": 7200,
        "name": "Zagreb"
    }"#;

    #[test]
    fn decodes_full_payload_without_rounding() {
        let snapshot: WeatherSnapshot = serde_json::from_str(PAYLOAD).expect("payload decodes");

        assert_eq!(snapshot.name, "Zagreb");
        assert_eq!(snapshot.coord.lon, 15.9667);
        assert_eq!(snapshot.coord.lat, 45.8);
        assert_eq!(snapshot.main.temp, 18.55);
        assert_eq!(snapshot.main.feels_like, 18.21);
        assert_eq!(snapshot.main.temp_min, 17.68);
        assert_eq!(snapshot.main.temp_max, 19.44);
        assert_eq!(snapshot.main.pressure, 1016);
        assert_eq!(snapshot.main.humidity, 64);
        assert_eq!(snapshot.main.sea_level, Some(1016));
        assert_eq!(snapshot.main.ground_level, Some(999));
        assert_eq!(snapshot.wind.speed, 3.6);
        assert_eq!(snapshot.timezone, 7200);
        assert_eq!(snapshot.primary_condition(), "broken clouds");
    }

    #[test]
    fn pressure_levels_are_optional() {
        let trimmed = r#"{
            "coord": {"lon": 15.9667, "lat": 45.8},
            "weather": [{"main": "Clear", "description": "clear sky"}],
            "main": {
                "temp": 18.55,
                "feels_like": 18.21,
                "temp_min": 17.68,
                "temp_max": 19.44,
                "pressure": 1016,
                "humidity": 64
            },
            "wind": {"speed": 3.6},
            "timezone": 7200,
            "name": "Zagreb"
        }"#;
        let snapshot: WeatherSnapshot =
            serde_json::from_str(trimmed).expect("payload without levels decodes");

        assert_eq!(snapshot.main.sea_level, None);
        assert_eq!(snapshot.main.ground_level, None);
    }

    #[test]
    fn empty_condition_list_falls_back_to_placeholder() {
        let no_conditions = PAYLOAD.replace(
            r#"[{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}]"#,
            "[]",
        );
        let snapshot: WeatherSnapshot =
            serde_json::from_str(&no_conditions).expect("payload decodes");

        assert_eq!(snapshot.primary_condition(), "Unknown");
    }
}
