use crate::domain::common::{Record, RecordId};
use crate::enums::AlertSeverity;
use crate::shared::search::Filterable;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Алерт мониторинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: RecordId,
    pub title: String,
    pub message: String,
    pub severity: AlertSeverity,
    /// Система-источник (prometheus, k8s-events, ...)
    pub source: String,
    /// Затронутый ресурс (имя хоста, пода и т.п.)
    pub resource: String,
    /// RFC 3339
    pub fired_at: String,
    #[serde(default)]
    pub acknowledged: bool,
}

impl Alert {
    pub fn fired_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.fired_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Сработал в окне `[now - window, now]`
    pub fn fired_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.fired_at_utc() {
            Some(at) => at <= now && now - at <= window,
            None => false,
        }
    }
}

impl Record for Alert {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn record_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "alert"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertFacet {
    Severity,
    Source,
}

impl Filterable for Alert {
    type Facet = AlertFacet;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.message.as_str(),
            self.resource.as_str(),
        ]
    }

    fn facet_value(&self, facet: AlertFacet) -> Option<&str> {
        match facet {
            AlertFacet::Severity => Some(self.severity.code()),
            AlertFacet::Source => Some(self.source.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(fired_at: &str) -> Alert {
        Alert {
            id: RecordId::new("al-1"),
            title: "CPU 使用率过高".to_string(),
            message: "web-01 CPU > 90%".to_string(),
            severity: AlertSeverity::Critical,
            source: "prometheus".to_string(),
            resource: "web-01".to_string(),
            fired_at: fired_at.to_string(),
            acknowledged: false,
        }
    }

    #[test]
    fn test_fired_within_window() {
        let now = DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert!(alert("2024-03-15T11:30:00Z").fired_within(now, Duration::hours(1)));
        assert!(!alert("2024-03-15T09:00:00Z").fired_within(now, Duration::hours(1)));
        // из будущего не считается
        assert!(!alert("2024-03-15T12:30:00Z").fired_within(now, Duration::hours(1)));
        assert!(!alert("not a date").fired_within(now, Duration::hours(1)));
    }
}
