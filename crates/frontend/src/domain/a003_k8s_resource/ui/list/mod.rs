pub mod state;

use self::state::{create_state, K8sResourceListState};
use crate::shared::components::facet_select::{plain_options, FacetOption, FacetSelect};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::list_utils::{filter_list, highlight_matches, sort_list, SearchInput, Sortable};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_k8s_resource::aggregate::{K8sFacet, K8sResource};
use contracts::enums::K8sStatus;
use contracts::fixtures::dashboard_data;
use contracts::shared::search::{distinct_values, FacetSelection};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

/// Фасеты в порядке отображения селекторов
const FACETS: [(K8sFacet, &str); 4] = [
    (K8sFacet::Namespace, "命名空间"),
    (K8sFacet::Kind, "类型"),
    (K8sFacet::Status, "状态"),
    (K8sFacet::Cluster, "集群"),
];

impl Sortable for K8sResource {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "namespace" => self
                .namespace
                .cmp(&other.namespace)
                .then_with(|| self.name.cmp(&other.name)),
            "kind" => self.kind.code().cmp(other.kind.code()),
            "status" => self.status.code().cmp(other.status.code()),
            "cluster" => self.cluster.cmp(&other.cluster),
            _ => Ordering::Equal,
        }
    }
}

/// Варианты фасета; для статуса подписи локализованы
pub fn facet_options(resources: &[K8sResource], facet: K8sFacet) -> Vec<FacetOption> {
    let values = distinct_values(resources, facet);
    match facet {
        K8sFacet::Status => values
            .into_iter()
            .map(|code| {
                let label = K8sStatus::from_code(&code)
                    .map(|s| s.display_name().to_string())
                    .unwrap_or_else(|| code.clone());
                (code, label)
            })
            .collect(),
        _ => plain_options(values),
    }
}

/// Строки таблицы в порядке хранилища, пока не выбрана колонка сортировки
pub fn visible_resources(resources: &[K8sResource], state: &K8sResourceListState) -> Vec<K8sResource> {
    let mut rows = filter_list(resources, &state.query());
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn K8sResourceList() -> impl IntoView {
    let state = create_state();
    let resources: &'static [K8sResource] = dashboard_data().k8s_resources.records();

    let filtered = Memo::new(move |_| state.with(|s| visible_resources(resources, s)));

    let is_expanded = RwSignal::new(true);
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div id="a003_k8s_resource--list" data-page-category=PAGE_CAT_LIST class="page">
            <PageHeader title="容器资源" subtitle={"Kubernetes 工作负载与配置".to_string()} />

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.query().active_facets_count()))
                    shown_count=Signal::derive(move || filtered.with(|rows| rows.len()))
                    total_count=Signal::derive(move || resources.len())
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                            placeholder="搜索名称、命名空间或标签..."
                        />
                        {FACETS.into_iter().map(|(facet, label)| view! {
                            <FacetSelect
                                label=label
                                options=Signal::derive(move || facet_options(resources, facet))
                                selected=Signal::derive(move || state.with(|s| s.facet(facet).clone()))
                                on_change=Callback::new(move |sel: FacetSelection| {
                                    state.update(|s| *s.facet_mut(facet) = sel)
                                })
                            />
                        }).collect_view()}
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="名称" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=180.0 />
                                <SortableHeaderCell label="命名空间" sort_field="namespace" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="类型" sort_field="kind" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="状态" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="集群" sort_field="cluster" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <TableHeaderCell min_width=70.0>"副本"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"运行时长"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"标签"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                filtered.get().into_iter().map(|r| {
                                    let replicas_class = if r.replicas.as_ref().is_some_and(|rep| rep.is_degraded()) {
                                        "text-warning"
                                    } else {
                                        ""
                                    };
                                    let cluster = r.cluster.clone();
                                    let replicas_label = r.replicas_label();
                                    let age = r.age.clone();
                                    let name_hl = highlight_matches(&r.name, &query);
                                    let namespace_hl = highlight_matches(&r.namespace, &query);
                                    let labels_hl = r.labels.iter().map(|label| {
                                        let label_hl = highlight_matches(label, &query);
                                        view! {
                                            <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                                                {label_hl}
                                            </Badge>
                                        }
                                    }).collect_view();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {name_hl}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{namespace_hl}</TableCell>
                                            <TableCell>{r.kind.code()}</TableCell>
                                            <TableCell><StatusBadge value=r.status /></TableCell>
                                            <TableCell>{cluster}</TableCell>
                                            <TableCell class=replicas_class>{replicas_label}</TableCell>
                                            <TableCell>{age}</TableCell>
                                            <TableCell>
                                                <div class="tag-list">
                                                    {labels_hl}
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|rows| rows.is_empty())>
                        <div class="table__empty">"没有匹配的资源"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facet_options() {
        let resources = dashboard_data().k8s_resources.records();
        assert_eq!(
            facet_options(resources, K8sFacet::Namespace)
                .into_iter()
                .map(|(v, _)| v)
                .collect::<Vec<_>>(),
            vec!["prod", "data", "staging", "monitoring"]
        );
        let status = facet_options(resources, K8sFacet::Status);
        assert_eq!(status[0].0, "running");
        assert_ne!(status[0].0, status[0].1);
    }

    #[test]
    fn test_default_view_keeps_store_order() {
        let resources = dashboard_data().k8s_resources.records();
        let shown = visible_resources(resources, &K8sResourceListState::default());
        let names: Vec<&str> = shown.iter().map(|r| r.name.as_str()).collect();
        let stored: Vec<&str> = resources.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, stored);
        assert_eq!(names[0], "api-gateway");
        assert_eq!(names[1], "api-gateway-7d9f8c-x2k4p");
    }

    #[test]
    fn test_sort_by_namespace_then_name() {
        let mut rows = dashboard_data().k8s_resources.records().to_vec();
        sort_list(&mut rows, "namespace", true);
        assert_eq!(rows[0].namespace, "data");
        assert_eq!(rows[0].name, "mysql");
        assert_eq!(rows[1].name, "mysql-headless");
    }
}
