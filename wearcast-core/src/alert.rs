use serde::{Deserialize, Serialize};

use crate::{
    condition::{Hazard, classify_hazard},
    model::WeatherSnapshot,
};

/// Alert severity, ordered `Info < Warning < Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub icon: String,
    pub title: String,
    pub message: String,
}

/// Bound of one tier in a mutually exclusive rule group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    AtLeast(f64),
    AtMost(f64),
    Below(f64),
}

impl Threshold {
    pub fn contains(self, value: f64) -> bool {
        match self {
            Threshold::AtLeast(min) => value >= min,
            Threshold::AtMost(max) => value <= max,
            Threshold::Below(limit) => value < limit,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlertTemplate {
    pub kind: AlertKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

impl AlertTemplate {
    const fn new(
        kind: AlertKind,
        icon: &'static str,
        title: &'static str,
        message: &'static str,
    ) -> Self {
        Self { kind, icon, title, message }
    }

    fn to_alert(self) -> Alert {
        self.with_message(self.message.to_string())
    }

    fn with_message(self, message: String) -> Alert {
        Alert {
            kind: self.kind,
            icon: self.icon.to_string(),
            title: self.title.to_string(),
            message,
        }
    }
}

pub type Tier = (Threshold, AlertTemplate);

/// Evaluated top-down; -10 must be checked before 0 and 35 before 30.
pub const TEMPERATURE_TIERS: &[Tier] = &[
    (
        Threshold::AtLeast(35.0),
        AlertTemplate::new(
            AlertKind::Danger,
            "🔥",
            "Extreme Heat Warning",
            "Temperature is dangerously high. Stay hydrated, avoid prolonged sun exposure, and seek air conditioning.",
        ),
    ),
    (
        Threshold::AtMost(-10.0),
        AlertTemplate::new(
            AlertKind::Danger,
            "🥶",
            "Extreme Cold Warning",
            "Dangerously cold conditions. Limit outdoor exposure and dress in multiple layers.",
        ),
    ),
    (
        Threshold::AtLeast(30.0),
        AlertTemplate::new(
            AlertKind::Warning,
            "🌡️",
            "Heat Advisory",
            "Very hot weather. Stay hydrated and take breaks in shade.",
        ),
    ),
    (
        Threshold::AtMost(0.0),
        AlertTemplate::new(
            AlertKind::Warning,
            "❄️",
            "Freezing Conditions",
            "Below freezing temperatures. Watch for icy conditions.",
        ),
    ),
];

pub const HUMIDITY_TIERS: &[Tier] = &[
    (
        Threshold::AtLeast(80.0),
        AlertTemplate::new(
            AlertKind::Warning,
            "💧",
            "High Humidity",
            "Very humid conditions. You may feel hotter than actual temperature.",
        ),
    ),
    (
        Threshold::AtMost(20.0),
        AlertTemplate::new(
            AlertKind::Info,
            "🏜️",
            "Low Humidity",
            "Very dry air. Stay hydrated and consider using moisturizer.",
        ),
    ),
];

/// m/s; 15 is roughly 54 km/h, 10 roughly 36 km/h.
pub const WIND_TIERS: &[Tier] = &[
    (
        Threshold::AtLeast(15.0),
        AlertTemplate::new(
            AlertKind::Warning,
            "💨",
            "Strong Winds",
            "High wind speeds. Secure loose items and be cautious outdoors.",
        ),
    ),
    (
        Threshold::AtLeast(10.0),
        AlertTemplate::new(
            AlertKind::Info,
            "🌬️",
            "Windy Conditions",
            "Moderate winds. Consider wind-resistant clothing.",
        ),
    ),
];

/// km.
pub const VISIBILITY_TIERS: &[Tier] = &[
    (
        Threshold::Below(1.0),
        AlertTemplate::new(
            AlertKind::Danger,
            "🌫️",
            "Very Poor Visibility",
            "Extremely limited visibility. Avoid driving if possible.",
        ),
    ),
    (
        Threshold::Below(5.0),
        AlertTemplate::new(
            AlertKind::Warning,
            "🌁",
            "Poor Visibility",
            "Reduced visibility due to fog or haze. Drive carefully.",
        ),
    ),
];

const FEELS_LIKE_DELTA: f64 = 5.0;

const FEELS_HOTTER: AlertTemplate = AlertTemplate::new(AlertKind::Info, "🌡️", "Feels Hotter", "");
const FEELS_COLDER: AlertTemplate = AlertTemplate::new(AlertKind::Info, "💨", "Feels Colder", "");

const THUNDERSTORM: AlertTemplate = AlertTemplate::new(
    AlertKind::Danger,
    "⛈️",
    "Thunderstorm Alert",
    "Thunderstorms in the area. Stay indoors and avoid open areas.",
);
const HEAVY_RAIN: AlertTemplate = AlertTemplate::new(
    AlertKind::Warning,
    "🌧️",
    "Heavy Rain Warning",
    "Heavy rainfall expected. Watch for flooding and carry waterproof gear.",
);
const HEAVY_SNOW: AlertTemplate = AlertTemplate::new(
    AlertKind::Danger,
    "🌨️",
    "Heavy Snow Alert",
    "Heavy snowfall conditions. Avoid unnecessary travel.",
);

/// Derive alerts from a snapshot.
///
/// Groups run in a fixed order (temperature, feels-like delta, humidity, wind,
/// visibility, condition text) and each contributes at most one alert.
pub fn derive_alerts(snapshot: &WeatherSnapshot) -> Vec<Alert> {
    [
        first_tier(TEMPERATURE_TIERS, snapshot.temp),
        feels_like_alert(snapshot.temp, snapshot.feels_like),
        first_tier(HUMIDITY_TIERS, f64::from(snapshot.humidity)),
        first_tier(WIND_TIERS, snapshot.wind_speed),
        first_tier(VISIBILITY_TIERS, snapshot.visibility),
        hazard_alert(&snapshot.description),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// First tier whose threshold contains `value`.
pub fn first_tier(tiers: &[Tier], value: f64) -> Option<Alert> {
    tiers
        .iter()
        .find(|(threshold, _)| threshold.contains(value))
        .map(|(_, template)| template.to_alert())
}

fn feels_like_alert(temp: f64, feels_like: f64) -> Option<Alert> {
    // Strictly greater: a delta of exactly 5 stays silent.
    if (feels_like - temp).abs() <= FEELS_LIKE_DELTA {
        return None;
    }

    let alert = if feels_like > temp {
        FEELS_HOTTER.with_message(format!(
            "Feels like {feels_like:.1}°C due to humidity. Dress lighter than temperature suggests."
        ))
    } else {
        FEELS_COLDER.with_message(format!(
            "Feels like {feels_like:.1}°C due to wind chill. Dress warmer than temperature suggests."
        ))
    };

    Some(alert)
}

fn hazard_alert(description: &str) -> Option<Alert> {
    let template = match classify_hazard(description)? {
        Hazard::Thunderstorm => THUNDERSTORM,
        Hazard::HeavyRain => HEAVY_RAIN,
        Hazard::HeavySnow => HEAVY_SNOW,
    };

    Some(template.to_alert())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mild() -> WeatherSnapshot {
        WeatherSnapshot {
            city: "Testville".into(),
            temp: 18.0,
            feels_like: 18.0,
            description: "clear sky".into(),
            humidity: 50,
            wind_speed: 2.0,
            visibility: 10.0,
        }
    }

    fn titles(alerts: &[Alert]) -> Vec<&str> {
        alerts.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn mild_weather_has_no_alerts() {
        assert!(derive_alerts(&mild()).is_empty());
    }

    #[test]
    fn temperature_tier_boundaries() {
        let at = |temp: f64| {
            let snapshot = WeatherSnapshot { temp, feels_like: temp, ..mild() };
            derive_alerts(&snapshot)
        };

        assert_eq!(titles(&at(35.0)), ["Extreme Heat Warning"]);
        assert_eq!(at(35.0)[0].kind, AlertKind::Danger);
        assert_eq!(titles(&at(30.0)), ["Heat Advisory"]);
        assert_eq!(at(30.0)[0].kind, AlertKind::Warning);
        assert!(at(29.9).is_empty());
        assert!(at(0.1).is_empty());
        assert_eq!(titles(&at(0.0)), ["Freezing Conditions"]);
        assert_eq!(titles(&at(-9.9)), ["Freezing Conditions"]);
        assert_eq!(titles(&at(-10.0)), ["Extreme Cold Warning"]);
    }

    #[test]
    fn feels_hotter_embeds_rounded_value() {
        let snapshot = WeatherSnapshot { temp: 20.0, feels_like: 26.0, ..mild() };
        let alerts = derive_alerts(&snapshot);

        assert_eq!(titles(&alerts), ["Feels Hotter"]);
        assert_eq!(alerts[0].kind, AlertKind::Info);
        assert!(alerts[0].message.contains("26.0"));
    }

    #[test]
    fn feels_colder_when_feels_like_is_lower() {
        let snapshot = WeatherSnapshot { temp: 12.0, feels_like: 5.44, ..mild() };
        let alerts = derive_alerts(&snapshot);

        assert_eq!(titles(&alerts), ["Feels Colder"]);
        assert!(alerts[0].message.contains("5.4°C"));
    }

    #[test]
    fn feels_like_delta_of_exactly_five_is_silent() {
        let hotter = WeatherSnapshot { temp: 20.0, feels_like: 25.0, ..mild() };
        let colder = WeatherSnapshot { temp: 20.0, feels_like: 15.0, ..mild() };

        assert!(derive_alerts(&hotter).is_empty());
        assert!(derive_alerts(&colder).is_empty());
    }

    #[test]
    fn humidity_tiers() {
        let at = |humidity: u8| derive_alerts(&WeatherSnapshot { humidity, ..mild() });

        assert_eq!(titles(&at(80)), ["High Humidity"]);
        assert!(at(79).is_empty());
        assert!(at(21).is_empty());
        assert_eq!(titles(&at(20)), ["Low Humidity"]);
        assert_eq!(at(0)[0].kind, AlertKind::Info);
    }

    #[test]
    fn wind_tiers() {
        let at = |wind_speed: f64| derive_alerts(&WeatherSnapshot { wind_speed, ..mild() });

        assert_eq!(titles(&at(15.0)), ["Strong Winds"]);
        assert_eq!(at(15.0)[0].kind, AlertKind::Warning);
        assert_eq!(titles(&at(10.0)), ["Windy Conditions"]);
        assert_eq!(at(10.0)[0].kind, AlertKind::Info);
        assert!(at(9.9).is_empty());
    }

    #[test]
    fn visibility_tiers() {
        let at = |visibility: f64| derive_alerts(&WeatherSnapshot { visibility, ..mild() });

        assert_eq!(titles(&at(0.5)), ["Very Poor Visibility"]);
        assert_eq!(titles(&at(1.0)), ["Poor Visibility"]);
        assert_eq!(titles(&at(4.99)), ["Poor Visibility"]);
        assert!(at(5.0).is_empty());
    }

    #[test]
    fn condition_text_alerts() {
        let at = |description: &str| {
            derive_alerts(&WeatherSnapshot { description: description.into(), ..mild() })
        };

        assert_eq!(titles(&at("thunderstorm with heavy rain")), ["Thunderstorm Alert"]);
        assert_eq!(titles(&at("downpour")), ["Heavy Rain Warning"]);
        assert_eq!(at("heavy rain")[0].kind, AlertKind::Warning);
        assert_eq!(titles(&at("blizzard")), ["Heavy Snow Alert"]);
        assert!(at("light rain").is_empty());
    }

    #[test]
    fn groups_emit_in_fixed_order() {
        let snapshot = WeatherSnapshot {
            city: "Anywhere".into(),
            temp: 31.0,
            feels_like: 38.0,
            description: "thunderstorm".into(),
            humidity: 85,
            wind_speed: 16.0,
            visibility: 0.4,
        };

        assert_eq!(
            titles(&derive_alerts(&snapshot)),
            [
                "Heat Advisory",
                "Feels Hotter",
                "High Humidity",
                "Strong Winds",
                "Very Poor Visibility",
                "Thunderstorm Alert",
            ]
        );
    }

    #[test]
    fn extreme_heat_scenario() {
        let snapshot = WeatherSnapshot {
            temp: 36.0,
            feels_like: 36.0,
            description: "clear sky".into(),
            humidity: 50,
            wind_speed: 2.0,
            visibility: 10.0,
            ..mild()
        };
        let alerts = derive_alerts(&snapshot);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::Danger);
        assert_eq!(alerts[0].title, "Extreme Heat Warning");
    }

    #[test]
    fn extreme_cold_snow_scenario() {
        let snapshot = WeatherSnapshot {
            temp: -15.0,
            feels_like: -15.0,
            description: "heavy snow".into(),
            humidity: 40,
            wind_speed: 5.0,
            visibility: 3.0,
            ..mild()
        };
        let alerts = derive_alerts(&snapshot);

        assert_eq!(
            titles(&alerts),
            ["Extreme Cold Warning", "Poor Visibility", "Heavy Snow Alert"]
        );
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, [AlertKind::Danger, AlertKind::Warning, AlertKind::Danger]);
    }

    #[test]
    fn severity_is_ordered() {
        assert!(AlertKind::Info < AlertKind::Warning);
        assert!(AlertKind::Warning < AlertKind::Danger);
    }

    #[test]
    fn alert_serializes_kind_as_type() {
        let alert = FEELS_HOTTER.with_message("m".into());
        let json = serde_json::to_value(&alert).expect("serialize alert");

        assert_eq!(json["type"], "info");
        assert_eq!(json["title"], "Feels Hotter");
    }

    #[test]
    fn derivation_is_repeatable() {
        let snapshot = WeatherSnapshot { temp: 33.0, wind_speed: 12.0, ..mild() };

        assert_eq!(derive_alerts(&snapshot), derive_alerts(&snapshot));
    }
}
