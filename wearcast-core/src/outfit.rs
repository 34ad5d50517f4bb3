use crate::{
    alert::{Alert, AlertKind},
    condition::{Precipitation, classify_precipitation},
    model::WeatherSnapshot,
    ordered::unique_in_order,
};

/// Base wardrobe by minimum temperature (°C), warmest first.
const BASE_WARDROBE: &[(f64, &[&str])] = &[
    (30.0, &["light shorts", "tank top", "sunglasses", "sunhat"]),
    (25.0, &["shorts", "t-shirt", "sunglasses"]),
    (20.0, &["light jeans", "short-sleeve shirt"]),
    (15.0, &["jeans", "long-sleeve shirt"]),
    (10.0, &["pants", "sweater", "light jacket"]),
    (0.0, &["warm pants", "hoodie", "jacket"]),
];

const EXTREME_COLD_WARDROBE: &[&str] = &["thermal wear", "heavy coat", "winter boots", "gloves"];

const RAIN_GEAR: &[&str] = &["umbrella", "raincoat", "waterproof shoes"];
const SNOW_GEAR: &[&str] = &["snow boots", "warm gloves", "scarf", "hat"];
const STORM_GEAR: &[&str] = &["stay indoors", "waterproof jacket"];

const WIND_GEAR: &[&str] = &["windbreaker", "secure hat"];
const WINDY_SPEED: f64 = 10.0;

const BREATHABLE: &[&str] = &["breathable fabrics", "moisture-wicking clothes"];
const MUGGY_HUMIDITY: u8 = 70;
const MUGGY_TEMP: f64 = 20.0;

const HEAT_RELIEF: &[&str] = &["cooling towel", "electrolyte drinks"];
const COLD_RELIEF: &[&str] = &["hand warmers", "insulated boots"];

/// Recommend clothing and gear for a snapshot and the alerts derived from it.
///
/// The result keeps first-occurrence order and never repeats an item.
pub fn recommend_outfit(snapshot: &WeatherSnapshot, alerts: &[Alert]) -> Vec<String> {
    let mut items: Vec<&'static str> = base_wardrobe(snapshot.temp).to_vec();

    if let Some(precipitation) = classify_precipitation(&snapshot.description) {
        items.extend_from_slice(precipitation_gear(precipitation));
    }

    if snapshot.wind_speed >= WINDY_SPEED {
        items.extend_from_slice(WIND_GEAR);
    }

    if snapshot.humidity >= MUGGY_HUMIDITY && snapshot.temp >= MUGGY_TEMP {
        items.extend_from_slice(BREATHABLE);
    }

    for alert in alerts {
        if let Some(relief) = relief_for(alert) {
            items.extend_from_slice(relief);
        }
    }

    unique_in_order(items).into_iter().map(str::to_string).collect()
}

/// Exactly one set per temperature; anything below 0 (or NaN) is extreme cold.
pub fn base_wardrobe(temp: f64) -> &'static [&'static str] {
    BASE_WARDROBE
        .iter()
        .find(|(min, _)| temp >= *min)
        .map(|(_, items)| *items)
        .unwrap_or(EXTREME_COLD_WARDROBE)
}

fn precipitation_gear(precipitation: Precipitation) -> &'static [&'static str] {
    match precipitation {
        Precipitation::Rain => RAIN_GEAR,
        Precipitation::Snow => SNOW_GEAR,
        Precipitation::Thunderstorm => STORM_GEAR,
    }
}

fn relief_for(alert: &Alert) -> Option<&'static [&'static str]> {
    if alert.kind != AlertKind::Danger {
        return None;
    }

    let title = alert.title.to_lowercase();
    if title.contains("heat") {
        Some(HEAT_RELIEF)
    } else if title.contains("cold") {
        Some(COLD_RELIEF)
    } else {
        None
    }
}
