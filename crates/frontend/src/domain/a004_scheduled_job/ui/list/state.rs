use contracts::domain::a004_scheduled_job::aggregate::JobFacet;
use contracts::shared::search::{FacetSelection, RecordQuery};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ScheduledJobListState {
    pub search: String,
    pub status: FacetSelection,
    /// Пустая строка: строки в порядке хранилища
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for ScheduledJobListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FacetSelection::All,
            sort_field: String::new(),
            sort_ascending: true,
        }
    }
}

impl ScheduledJobListState {
    pub fn query(&self) -> RecordQuery<JobFacet> {
        RecordQuery::text(self.search.clone()).with_facet(JobFacet::Status, &self.status)
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }
}

pub fn create_state() -> RwSignal<ScheduledJobListState> {
    RwSignal::new(ScheduledJobListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::dashboard_data;
    use contracts::shared::search::filter_records;

    fn ids(state: &ScheduledJobListState) -> Vec<&'static str> {
        filter_records(dashboard_data().scheduled_jobs.records(), &state.query())
            .into_iter()
            .map(|j| j.id.as_str())
            .collect()
    }

    #[test]
    fn test_search_by_target_and_tag() {
        let state = ScheduledJobListState {
            search: "staging-cluster".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["job-007", "job-008"]);

        let state = ScheduledJobListState {
            search: "MySQL".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["job-001", "job-008"]);
    }

    #[test]
    fn test_status_facet() {
        let state = ScheduledJobListState {
            status: FacetSelection::from_key("failed"),
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["job-002", "job-008"]);
    }

    #[test]
    fn test_schedule_text_is_searchable() {
        let state = ScheduledJobListState {
            search: "@once".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&state), vec!["job-008"]);
    }
}
