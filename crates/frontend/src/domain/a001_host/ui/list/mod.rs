pub mod state;

use self::state::{create_state, HostListState};
use crate::shared::components::facet_select::{plain_options, FacetOption, FacetSelect};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::{format_throughput, SortableHeaderCell};
use crate::shared::components::usage_bar::UsageBar;
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::{format_datetime, now_utc};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, sort_list, SearchInput, Sortable};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::polling::use_visible_polling_with_deps;
use contracts::domain::a001_host::aggregate::{Host, HostFacet};
use contracts::enums::HostStatus;
use contracts::fixtures::dashboard_data;
use contracts::shared::search::{distinct_values, FacetSelection};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Host {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let by_f64 = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "ip" => self.ip.cmp(&other.ip),
            "status" => self.status.code().cmp(other.status.code()),
            "region" => self.region.cmp(&other.region),
            "cpu" => by_f64(self.cpu, other.cpu),
            "memory" => by_f64(self.memory, other.memory),
            "disk" => by_f64(self.disk, other.disk),
            "network" => by_f64(self.network, other.network),
            _ => Ordering::Equal,
        }
    }
}

/// Варианты статуса с локализованной подписью
pub fn status_options(hosts: &[Host]) -> Vec<FacetOption> {
    distinct_values(hosts, HostFacet::Status)
        .into_iter()
        .map(|code| {
            let label = HostStatus::from_code(&code)
                .map(|s| s.display_name().to_string())
                .unwrap_or_else(|| code.clone());
            (code, label)
        })
        .collect()
}

fn load_hosts() -> Vec<Host> {
    dashboard_data().hosts.records().to_vec()
}

/// Строки таблицы: фильтр в порядке хранилища, сортировка только по выбранной колонке
pub fn visible_hosts(hosts: &[Host], state: &HostListState) -> Vec<Host> {
    let mut rows = filter_list(hosts, &state.query());
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn HostList() -> impl IntoView {
    let hosts_ms = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .refresh
        .hosts_ms;

    let state = create_state();
    let (items, set_items) = signal(load_hosts());
    let (refreshed_at, set_refreshed_at) = signal(now_utc());

    let refresh = move || {
        set_items.set(load_hosts());
        set_refreshed_at.set(now_utc());
    };

    // после изменения фильтров отсчёт интервала начинается заново
    use_visible_polling_with_deps(refresh, Signal::derive(move || hosts_ms), move || {
        state.track()
    });

    let filtered = Memo::new(move |_| state.with(|s| items.with(|all| visible_hosts(all, s))));

    let is_expanded = RwSignal::new(true);
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let active_filters_count = Signal::derive(move || state.with(|s| s.query().active_facets_count()));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div id="a001_host--list" data-page-category=PAGE_CAT_LIST class="page">
            <PageHeader
                title="主机管理"
                subtitle=Signal::derive(move || {
                    Some(format!("更新于 {}", format_datetime(&refreshed_at.get().to_rfc3339())))
                })
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                    {icon("refresh")}
                    "刷新"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_expanded
                    active_filters_count=active_filters_count
                    shown_count=Signal::derive(move || filtered.with(|rows| rows.len()))
                    total_count=Signal::derive(move || items.with(|all| all.len()))
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                            placeholder="搜索名称、IP 或标签..."
                        />
                        <FacetSelect
                            label="状态"
                            options=Signal::derive(move || items.with(|all| status_options(all)))
                            selected=Signal::derive(move || state.with(|s| s.status.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.status = sel))
                        />
                        <FacetSelect
                            label="区域"
                            options=Signal::derive(move || {
                                items.with(|all| plain_options(distinct_values(all, HostFacet::Region)))
                            })
                            selected=Signal::derive(move || state.with(|s| s.region.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.region = sel))
                        />
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| state.update(|s| s.reset_filters())
                        >
                            "重置"
                        </Button>
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="名称" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=140.0 />
                                <SortableHeaderCell label="IP" sort_field="ip" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=110.0 />
                                <SortableHeaderCell label="状态" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="区域" sort_field="region" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="CPU" sort_field="cpu" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="内存" sort_field="memory" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="磁盘" sort_field="disk" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=120.0 />
                                <SortableHeaderCell label="网络" sort_field="network" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort align="right" />
                                <TableHeaderCell min_width=160.0>"标签"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                filtered.get().into_iter().map(|host| {
                                    let row_class = if host.is_reachable() {
                                        "table__row"
                                    } else {
                                        "table__row table__row--muted"
                                    };
                                    let name_hl = highlight_matches(&host.name, &query);
                                    let ip_hl = highlight_matches(&host.ip, &query);
                                    let tags_hl = host.tags.iter().map(|tag| {
                                        let tag_hl = highlight_matches(tag, &query);
                                        view! {
                                            <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                                                {tag_hl}
                                            </Badge>
                                        }
                                    }).collect_view();
                                    view! {
                                        <TableRow class=row_class>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {name_hl}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{ip_hl}</TableCell>
                                            <TableCell><StatusBadge value=host.status /></TableCell>
                                            <TableCell>{host.region.clone()}</TableCell>
                                            <TableCell><UsageBar value=host.cpu /></TableCell>
                                            <TableCell><UsageBar value=host.memory /></TableCell>
                                            <TableCell><UsageBar value=host.disk /></TableCell>
                                            <TableCell class="text-right">{format_throughput(host.network)}</TableCell>
                                            <TableCell>
                                                <div class="tag-list">
                                                    {tags_hl}
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || filtered.with(|rows| rows.is_empty())>
                        <div class="table__empty">"没有匹配的主机"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
