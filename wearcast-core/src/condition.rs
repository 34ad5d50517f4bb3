//! Classification of the provider's free-text weather description.
//!
//! Rules only ever see the enums below, so moving from substring matching to
//! provider condition codes only touches this module.

/// Severe conditions that raise an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    Thunderstorm,
    HeavyRain,
    HeavySnow,
}

/// Precipitation that changes what to wear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precipitation {
    Rain,
    Snow,
    Thunderstorm,
}

const HAZARD_TERMS: &[(&[&str], Hazard)] = &[
    (&["thunderstorm"], Hazard::Thunderstorm),
    (&["heavy rain", "downpour"], Hazard::HeavyRain),
    (&["blizzard", "heavy snow"], Hazard::HeavySnow),
];

// "thunderstorm with light rain" is rain first.
const PRECIPITATION_TERMS: &[(&[&str], Precipitation)] = &[
    (&["rain"], Precipitation::Rain),
    (&["snow"], Precipitation::Snow),
    (&["thunderstorm"], Precipitation::Thunderstorm),
];

pub fn classify_hazard(description: &str) -> Option<Hazard> {
    first_match(HAZARD_TERMS, description)
}

pub fn classify_precipitation(description: &str) -> Option<Precipitation> {
    first_match(PRECIPITATION_TERMS, description)
}

fn first_match<T: Copy>(table: &[(&[&str], T)], description: &str) -> Option<T> {
    let description = description.to_lowercase();

    table
        .iter()
        .find(|(terms, _)| terms.iter().any(|term| description.contains(term)))
        .map(|(_, class)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_prefers_thunderstorm_over_heavy_rain() {
        assert_eq!(
            classify_hazard("thunderstorm with heavy rain"),
            Some(Hazard::Thunderstorm)
        );
    }

    #[test]
    fn hazard_matches_every_synonym() {
        assert_eq!(classify_hazard("heavy rain"), Some(Hazard::HeavyRain));
        assert_eq!(classify_hazard("sudden downpour"), Some(Hazard::HeavyRain));
        assert_eq!(classify_hazard("blizzard"), Some(Hazard::HeavySnow));
        assert_eq!(classify_hazard("heavy snow"), Some(Hazard::HeavySnow));
        assert_eq!(classify_hazard("light rain"), None);
        assert_eq!(classify_hazard("clear sky"), None);
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(classify_hazard("Heavy Snow"), Some(Hazard::HeavySnow));
        assert_eq!(classify_precipitation("Light RAIN"), Some(Precipitation::Rain));
    }

    #[test]
    fn precipitation_checks_rain_before_thunderstorm() {
        assert_eq!(
            classify_precipitation("thunderstorm with light rain"),
            Some(Precipitation::Rain)
        );
        assert_eq!(classify_precipitation("thunderstorm"), Some(Precipitation::Thunderstorm));
        assert_eq!(classify_precipitation("light snow"), Some(Precipitation::Snow));
        assert_eq!(classify_precipitation("overcast clouds"), None);
    }
}
