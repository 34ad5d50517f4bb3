use serde::{Deserialize, Serialize};

use crate::{
    alert::{Alert, derive_alerts},
    model::WeatherSnapshot,
    outfit::recommend_outfit,
};

/// Alerts and outfit suggestions derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub alerts: Vec<Alert>,
    pub suggestions: Vec<String>,
}

/// Run the alert deriver, then feed its output to the outfit recommender.
pub fn advise(snapshot: &WeatherSnapshot) -> Advice {
    let alerts = derive_alerts(snapshot);
    let suggestions = recommend_outfit(snapshot, &alerts);

    tracing::debug!(
        city = %snapshot.city,
        alerts = alerts.len(),
        suggestions = suggestions.len(),
        "derived advice"
    );

    Advice { alerts, suggestions }
}
