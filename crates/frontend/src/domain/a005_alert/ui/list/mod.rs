pub mod state;

use self::state::{create_state, AlertListState, AlertWindow};
use crate::shared::components::facet_select::{plain_options, FacetOption, FacetSelect};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::{format_datetime, format_relative_str, now_utc};
use crate::shared::list_utils::{highlight_matches, sort_list, SearchInput, Sortable};
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::polling::use_visible_polling;
use chrono::{DateTime, Utc};
use contracts::domain::a005_alert::aggregate::{Alert, AlertFacet};
use contracts::enums::AlertSeverity;
use contracts::fixtures::dashboard_data;
use contracts::shared::search::{distinct_values, FacetSelection};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

/// Чем выше, тем серьёзнее
fn severity_rank(severity: AlertSeverity) -> u8 {
    match severity {
        AlertSeverity::Critical => 2,
        AlertSeverity::Warning => 1,
        AlertSeverity::Info => 0,
    }
}

impl Sortable for Alert {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "fired_at" => self.fired_at_utc().cmp(&other.fired_at_utc()),
            "severity" => severity_rank(self.severity).cmp(&severity_rank(other.severity)),
            "source" => self.source.cmp(&other.source),
            _ => Ordering::Equal,
        }
    }
}

pub fn severity_options(alerts: &[Alert]) -> Vec<FacetOption> {
    distinct_values(alerts, AlertFacet::Severity)
        .into_iter()
        .map(|code| {
            let label = AlertSeverity::from_code(&code)
                .map(|s| s.display_name().to_string())
                .unwrap_or_else(|| code.clone());
            (code, label)
        })
        .collect()
}

/// Строки таблицы на момент `now`; сортировка только по клику на заголовок
pub fn visible_alerts(alerts: &[Alert], state: &AlertListState, now: DateTime<Utc>) -> Vec<Alert> {
    let mut rows = state.visible(alerts, now);
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn AlertList() -> impl IntoView {
    let alerts_ms = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .refresh
        .alerts_ms;

    let state = create_state();
    let alerts: &'static [Alert] = dashboard_data().alerts.records();

    // часы для окна времени идут вместе с опросом
    let (now, set_now) = signal(now_utc());
    use_visible_polling(move || set_now.set(now_utc()), Signal::derive(move || alerts_ms));

    let visible = Memo::new(move |_| {
        let now = now.get();
        state.with(|s| visible_alerts(alerts, s, now))
    });

    let window_code = RwSignal::new(AlertWindow::All.code().to_string());
    let only_unacked = RwSignal::new(false);

    Effect::new(move |_| {
        let (code, unacked) = state.with(|s| (s.window.code(), s.only_unacked));
        if window_code.get_untracked() != code {
            window_code.set(code.to_string());
        }
        if only_unacked.get_untracked() != unacked {
            only_unacked.set(unacked);
        }
    });

    Effect::new(move |_| {
        let window = AlertWindow::from_code(&window_code.get());
        let unacked = only_unacked.get();
        let changed = state.with_untracked(|s| s.window != window || s.only_unacked != unacked);
        if changed {
            state.update(|s| {
                s.window = window;
                s.only_unacked = unacked;
            });
        }
    });

    let is_expanded = RwSignal::new(true);
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div id="a005_alert--list" data-page-category=PAGE_CAT_LIST class="page">
            <PageHeader
                title="告警"
                subtitle=Signal::derive(move || {
                    let unacked = alerts.iter().filter(|a| !a.acknowledged).count();
                    Some(format!("未处理 {} / 共 {}", unacked, alerts.len()))
                })
            />

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filters_count()))
                    shown_count=Signal::derive(move || visible.with(|rows| rows.len()))
                    total_count=Signal::derive(move || alerts.len())
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                            placeholder="搜索标题、内容或资源..."
                        />
                        <FacetSelect
                            label="级别"
                            options=Signal::derive(move || severity_options(alerts))
                            selected=Signal::derive(move || state.with(|s| s.severity.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.severity = sel))
                        />
                        <FacetSelect
                            label="来源"
                            options=Signal::derive(move || plain_options(distinct_values(alerts, AlertFacet::Source)))
                            selected=Signal::derive(move || state.with(|s| s.source.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.source = sel))
                        />
                        <div class="facet-select">
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"时间"</Label>
                                <Select value=window_code>
                                    {AlertWindow::all().into_iter().map(|w| view! {
                                        <option value=w.code()>{w.display_name()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                        </div>
                        <Checkbox checked=only_unacked label="仅未处理" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="级别" sort_field="severity" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 />
                                <TableHeaderCell min_width=260.0>"标题"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"资源"</TableHeaderCell>
                                <SortableHeaderCell label="来源" sort_field="source" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="触发时间" sort_field="fired_at" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=200.0 />
                                <TableHeaderCell min_width=80.0>"状态"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                let now = now.get();
                                visible.get().into_iter().map(|alert| {
                                    let fired = format!(
                                        "{} ({})",
                                        format_datetime(&alert.fired_at),
                                        format_relative_str(&alert.fired_at, now)
                                    );
                                    let row_class = if alert.acknowledged {
                                        "table__row table__row--muted"
                                    } else {
                                        "table__row"
                                    };
                                    let title_hl = highlight_matches(&alert.title, &query);
                                    let message_hl = highlight_matches(&alert.message, &query);
                                    let resource_hl = highlight_matches(&alert.resource, &query);
                                    view! {
                                        <TableRow class=row_class>
                                            <TableCell><StatusBadge value=alert.severity /></TableCell>
                                            <TableCell>
                                                <div>{title_hl}</div>
                                                <div class="text-muted">{message_hl}</div>
                                            </TableCell>
                                            <TableCell>{resource_hl}</TableCell>
                                            <TableCell>{alert.source.clone()}</TableCell>
                                            <TableCell>{fired}</TableCell>
                                            <TableCell>
                                                {if alert.acknowledged {
                                                    view! { <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Subtle>"已确认"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Important>"未处理"</Badge> }.into_any()
                                                }}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }).collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || visible.with(|rows| rows.is_empty())>
                        <div class="table__empty">"没有匹配的告警"</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
