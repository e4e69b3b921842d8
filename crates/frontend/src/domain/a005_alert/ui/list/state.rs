use chrono::{DateTime, Duration, Utc};
use contracts::domain::a005_alert::aggregate::{Alert, AlertFacet};
use contracts::shared::search::{filter_records, FacetSelection, RecordQuery};
use leptos::prelude::*;

/// Окно по времени срабатывания
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertWindow {
    All,
    LastHour,
    LastDay,
    LastWeek,
}

impl AlertWindow {
    pub fn all() -> [AlertWindow; 4] {
        [
            AlertWindow::All,
            AlertWindow::LastHour,
            AlertWindow::LastDay,
            AlertWindow::LastWeek,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AlertWindow::All => "all",
            AlertWindow::LastHour => "1h",
            AlertWindow::LastDay => "24h",
            AlertWindow::LastWeek => "7d",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlertWindow::All => "全部时间",
            AlertWindow::LastHour => "最近 1 小时",
            AlertWindow::LastDay => "最近 24 小时",
            AlertWindow::LastWeek => "最近 7 天",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|w| w.code() == code)
            .unwrap_or(AlertWindow::All)
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            AlertWindow::All => None,
            AlertWindow::LastHour => Some(Duration::hours(1)),
            AlertWindow::LastDay => Some(Duration::days(1)),
            AlertWindow::LastWeek => Some(Duration::days(7)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AlertListState {
    pub search: String,
    pub severity: FacetSelection,
    pub source: FacetSelection,
    pub only_unacked: bool,
    pub window: AlertWindow,
    /// Пустая строка: порядок хранилища
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for AlertListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            severity: FacetSelection::All,
            source: FacetSelection::All,
            only_unacked: false,
            window: AlertWindow::All,
            sort_field: String::new(),
            sort_ascending: true,
        }
    }
}

impl AlertListState {
    pub fn query(&self) -> RecordQuery<AlertFacet> {
        RecordQuery::text(self.search.clone())
            .with_facet(AlertFacet::Severity, &self.severity)
            .with_facet(AlertFacet::Source, &self.source)
    }

    /// Текст и фасеты, затем признак подтверждения и окно времени
    pub fn visible(&self, alerts: &[Alert], now: DateTime<Utc>) -> Vec<Alert> {
        filter_records(alerts, &self.query())
            .into_iter()
            .filter(|a| !self.only_unacked || !a.acknowledged)
            .filter(|a| match self.window.duration() {
                Some(window) => a.fired_within(now, window),
                None => true,
            })
            .cloned()
            .collect()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn active_filters_count(&self) -> usize {
        self.query().active_facets_count()
            + usize::from(self.only_unacked)
            + usize::from(self.window != AlertWindow::All)
    }
}

pub fn create_state() -> RwSignal<AlertListState> {
    RwSignal::new(AlertListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::fixtures::dashboard_data;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ids(state: &AlertListState) -> Vec<String> {
        state
            .visible(dashboard_data().alerts.records(), now())
            .into_iter()
            .map(|a| a.id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_resource_search() {
        let state = AlertListState {
            search: "log-collector".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["alert-003", "alert-004"]);
    }

    #[test]
    fn test_only_unacked_and_severity() {
        let state = AlertListState {
            severity: FacetSelection::from_key("critical"),
            only_unacked: true,
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["alert-001", "alert-005"]);
        assert_eq!(state.active_filters_count(), 2);
    }

    #[test]
    fn test_time_window() {
        let state = AlertListState {
            window: AlertWindow::LastHour,
            ..Default::default()
        };
        assert!(ids(&state).is_empty());

        let state = AlertListState {
            window: AlertWindow::LastDay,
            ..Default::default()
        };
        assert_eq!(ids(&state).len(), 7);
    }

    #[test]
    fn test_window_follows_clock() {
        let state = AlertListState {
            window: AlertWindow::LastHour,
            ..Default::default()
        };
        let alerts = dashboard_data().alerts.records();
        let at = |h, m| Utc.with_ymd_and_hms(2024, 6, 1, h, m, 0).unwrap();
        let ids_at = |now| -> Vec<String> {
            state
                .visible(alerts, now)
                .into_iter()
                .map(|a| a.id.as_str().to_string())
                .collect()
        };

        assert_eq!(
            ids_at(at(10, 30)),
            vec!["alert-001", "alert-002", "alert-005", "alert-006"]
        );
        assert!(ids_at(at(12, 0)).is_empty());
    }

    #[test]
    fn test_default_view_keeps_store_order() {
        let alerts = dashboard_data().alerts.records();
        let shown: Vec<String> = AlertListState::default()
            .visible(alerts, now())
            .into_iter()
            .map(|a| a.id.as_str().to_string())
            .collect();
        let stored: Vec<String> = alerts.iter().map(|a| a.id.as_str().to_string()).collect();
        assert_eq!(shown, stored);
    }

    #[test]
    fn test_window_codes() {
        assert_eq!(AlertWindow::from_code("24h"), AlertWindow::LastDay);
        assert_eq!(AlertWindow::from_code("bogus"), AlertWindow::All);
    }
}
