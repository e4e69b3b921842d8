use contracts::domain::a001_host::aggregate::HostFacet;
use contracts::shared::search::{FacetSelection, RecordQuery};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct HostListState {
    pub search: String,
    pub status: FacetSelection,
    pub region: FacetSelection,
    /// Пустая строка: строки в порядке хранилища
    pub sort_field: String,
    pub sort_ascending: bool,
    pub filters_expanded: bool,
}

impl Default for HostListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: FacetSelection::All,
            region: FacetSelection::All,
            sort_field: String::new(),
            sort_ascending: true,
            filters_expanded: true,
        }
    }
}

impl HostListState {
    /// Запрос для текущего состояния фильтров
    pub fn query(&self) -> RecordQuery<HostFacet> {
        RecordQuery::text(self.search.clone())
            .with_facet(HostFacet::Status, &self.status)
            .with_facet(HostFacet::Region, &self.region)
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = field.to_string();
            self.sort_ascending = true;
        }
    }

    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.status = FacetSelection::All;
        self.region = FacetSelection::All;
    }
}

pub fn create_state() -> RwSignal<HostListState> {
    RwSignal::new(HostListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::dashboard_data;
    use contracts::shared::search::filter_records;

    fn names(state: &HostListState) -> Vec<String> {
        filter_records(dashboard_data().hosts.records(), &state.query())
            .into_iter()
            .map(|h| h.name.clone())
            .collect()
    }

    #[test]
    fn test_default_state_shows_all_hosts() {
        assert_eq!(names(&HostListState::default()).len(), 8);
    }

    #[test]
    fn test_ssh_tag_search_is_case_insensitive() {
        let state = HostListState {
            search: "ssh".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&state), vec!["bastion-01"]);
    }

    #[test]
    fn test_region_and_status_facets() {
        let mut state = HostListState {
            region: FacetSelection::from_key("cn-east-2"),
            ..Default::default()
        };
        assert_eq!(names(&state), vec!["db-master-01", "db-slave-01"]);

        state.status = FacetSelection::from_key("warning");
        assert_eq!(names(&state), vec!["db-master-01"]);

        state.reset_filters();
        assert_eq!(names(&state).len(), 8);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = HostListState::default();
        assert!(state.sort_field.is_empty());
        state.toggle_sort("name");
        assert_eq!(state.sort_field, "name");
        assert!(state.sort_ascending);
        state.toggle_sort("name");
        assert!(!state.sort_ascending);
        state.toggle_sort("cpu");
        assert_eq!(state.sort_field, "cpu");
        assert!(state.sort_ascending);
    }
}
