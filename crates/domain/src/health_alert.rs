use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAlert {
    #[serde(default)]
    pub id: ID,
    pub title: String,
    pub description: String,
    pub prevention: String,
}

impl HealthAlert {
    pub fn new(title: &str, description: &str, prevention: &str) -> Self {
        Self {
            id: ID::new(),
            title: title.into(),
            description: description.into(),
            prevention: prevention.into(),
        }
    }
}

impl Entity for HealthAlert {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Case insensitive match on the title. An empty query matches everything.
pub fn search_health_alerts(alerts: &[HealthAlert], query: &str) -> Vec<HealthAlert> {
    if query.is_empty() {
        return alerts.to_vec();
    }
    let query = query.to_lowercase();
    alerts
        .iter()
        .filter(|alert| alert.title.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn catalog() -> Vec<HealthAlert> {
        vec![
            HealthAlert::new("Influenza (Flu)", "", ""),
            HealthAlert::new("COVID-19", "", ""),
            HealthAlert::new("Heart Disease", "", ""),
        ]
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search_health_alerts(&catalog(), "").len(), 3);
    }

    #[test]
    fn query_ignores_case() {
        let found = search_health_alerts(&catalog(), "covid");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "COVID-19");
    }

    #[test]
    fn unknown_query_returns_nothing() {
        assert!(search_health_alerts(&catalog(), "malaria").is_empty());
    }
}
