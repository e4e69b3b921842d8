use contracts::domain::a003_k8s_resource::aggregate::K8sFacet;
use contracts::shared::search::{FacetSelection, RecordQuery};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct K8sResourceListState {
    pub search: String,
    pub namespace: FacetSelection,
    pub kind: FacetSelection,
    pub status: FacetSelection,
    pub cluster: FacetSelection,
    /// Пустая строка: строки в порядке хранилища
    pub sort_field: String,
    pub sort_ascending: bool,
}

impl Default for K8sResourceListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            namespace: FacetSelection::All,
            kind: FacetSelection::All,
            status: FacetSelection::All,
            cluster: FacetSelection::All,
            sort_field: String::new(),
            sort_ascending: true,
        }
    }
}

impl K8sResourceListState {
    pub fn query(&self) -> RecordQuery<K8sFacet> {
        RecordQuery::text(self.search.clone())
            .with_facet(K8sFacet::Namespace, &self.namespace)
            .with_facet(K8sFacet::Kind, &self.kind)
            .with_facet(K8sFacet::Status, &self.status)
            .with_facet(K8sFacet::Cluster, &self.cluster)
    }

    /// Слот фасета по типу, чтобы селекторы не дублировали код
    pub fn facet_mut(&mut self, facet: K8sFacet) -> &mut FacetSelection {
        match facet {
            K8sFacet::Namespace => &mut self.namespace,
            K8sFacet::Kind => &mut self.kind,
            K8sFacet::Status => &mut self.status,
            K8sFacet::Cluster => &mut self.cluster,
        }
    }

    pub fn facet(&self, facet: K8sFacet) -> &FacetSelection {
        match facet {
            K8sFacet::Namespace => &self.namespace,
            K8sFacet::Kind => &self.kind,
            K8sFacet::Status => &self.status,
            K8sFacet::Cluster => &self.cluster,
        }
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

pub fn create_state() -> RwSignal<K8sResourceListState> {
    RwSignal::new(K8sResourceListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::fixtures::dashboard_data;
    use contracts::shared::search::filter_records;

    fn names(state: &K8sResourceListState) -> Vec<&'static str> {
        filter_records(dashboard_data().k8s_resources.records(), &state.query())
            .into_iter()
            .map(|r| r.name.as_str())
            .collect()
    }

    #[test]
    fn test_label_search() {
        let state = K8sResourceListState {
            search: "APP=GATEWAY".to_string(),
            ..Default::default()
        };
        assert_eq!(
            names(&state),
            vec!["api-gateway", "api-gateway-7d9f8c-x2k4p", "gateway-config"]
        );
    }

    #[test]
    fn test_facets_compose() {
        let mut state = K8sResourceListState::default();
        *state.facet_mut(K8sFacet::Namespace) = FacetSelection::from_key("prod");
        *state.facet_mut(K8sFacet::Kind) = FacetSelection::from_key("Deployment");
        assert_eq!(names(&state), vec!["api-gateway", "order-service"]);
        assert_eq!(state.query().active_facets_count(), 2);

        *state.facet_mut(K8sFacet::Cluster) = FacetSelection::from_key("staging-cluster");
        assert!(names(&state).is_empty());
    }

    #[test]
    fn test_kind_facet_is_case_sensitive() {
        let mut state = K8sResourceListState::default();
        *state.facet_mut(K8sFacet::Kind) = FacetSelection::from_key("deployment");
        assert!(names(&state).is_empty());
    }
}
