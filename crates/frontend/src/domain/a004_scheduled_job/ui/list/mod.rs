pub mod state;

use self::state::{create_state, ScheduledJobListState};
use crate::shared::components::facet_select::{FacetOption, FacetSelect};
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::{BadgeTone, StatusBadge};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::date_utils::{format_datetime, format_relative, now_utc};
use crate::shared::list_utils::{filter_list, highlight_matches, sort_list, SearchInput, Sortable};
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_scheduled_job::aggregate::{JobFacet, ScheduledJob};
use contracts::enums::JobStatus;
use contracts::fixtures::dashboard_data;
use contracts::shared::search::{distinct_values, FacetSelection};
use contracts::shared::summary::summarize;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for ScheduledJob {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.cmp(&other.name),
            "target" => self.target.cmp(&other.target),
            "status" => self.status.code().cmp(other.status.code()),
            // без запуска считается самым старым
            "last_run" => self.last_run_at().cmp(&other.last_run_at()),
            "duration" => self.duration_secs.cmp(&other.duration_secs),
            _ => Ordering::Equal,
        }
    }
}

fn status_label(code: &str) -> String {
    JobStatus::from_code(code)
        .map(|s| s.display_name().to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn status_options(jobs: &[ScheduledJob]) -> Vec<FacetOption> {
    distinct_values(jobs, JobFacet::Status)
        .into_iter()
        .map(|code| {
            let label = status_label(&code);
            (code, label)
        })
        .collect()
}

/// Строки таблицы; без выбранной колонки порядок как в хранилище
pub fn visible_jobs(jobs: &[ScheduledJob], state: &ScheduledJobListState) -> Vec<ScheduledJob> {
    let mut rows = filter_list(jobs, &state.query());
    sort_list(&mut rows, &state.sort_field, state.sort_ascending);
    rows
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduledJobList() -> impl IntoView {
    let state = create_state();
    let jobs: &'static [ScheduledJob] = dashboard_data().scheduled_jobs.records();
    let status_summary = summarize(jobs, JobFacet::Status);

    let filtered = Memo::new(move |_| state.with(|s| visible_jobs(jobs, s)));

    let is_expanded = RwSignal::new(true);
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));

    view! {
        <div id="a004_scheduled_job--list" data-page-category=PAGE_CAT_LIST class="page">
            <PageHeader title="定时任务" subtitle={format!("共 {} 个任务", status_summary.total)}>
                <Space gap=SpaceGap::Small>
                    {status_summary.counts.iter().map(|(code, count)| {
                        let selection = FacetSelection::Only(code.clone());
                        let color = JobStatus::from_code(code)
                            .map(|s| s.badge_color())
                            .unwrap_or(BadgeColor::Subtle);
                        view! {
                            <span
                                class="status-summary__item"
                                title="按状态筛选"
                                on:click=move |_| state.update(|s| s.status = selection.clone())
                            >
                                <Badge appearance=BadgeAppearance::Tint color=color>
                                    {format!("{} {}", status_label(code), count)}
                                </Badge>
                            </span>
                        }
                    }).collect_view()}
                </Space>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=is_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.query().active_facets_count()))
                    shown_count=Signal::derive(move || filtered.with(|rows| rows.len()))
                    total_count=Signal::derive(move || jobs.len())
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                            placeholder="搜索名称、目标、表达式或标签..."
                        />
                        <FacetSelect
                            label="状态"
                            options=Signal::derive(move || status_options(jobs))
                            selected=Signal::derive(move || state.with(|s| s.status.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.status = sel))
                        />
                        {move || {
                            state.with(|s| match &s.status {
                                FacetSelection::Only(code) => Some(view! {
                                    <FilterTag
                                        label=format!("状态: {}", status_label(code))
                                        on_remove=Callback::new(move |_| state.update(|s| s.status = FacetSelection::All))
                                    />
                                }),
                                FacetSelection::All => None,
                            })
                        }}
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="名称" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=160.0 />
                                <TableHeaderCell min_width=110.0>"调度"</TableHeaderCell>
                                <SortableHeaderCell label="目标" sort_field="target" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                <SortableHeaderCell label="状态" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=80.0 />
                                <SortableHeaderCell label="上次运行" sort_field="last_run" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort min_width=200.0 />
                                <SortableHeaderCell label="耗时" sort_field="duration" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort align="right" min_width=80.0 />
                                <TableHeaderCell min_width=140.0>"标签"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let query = search.get();
                                let now = now_utc();
                                filtered.get().into_iter().map(|job| {
                                    let last_run = match (job.last_run.as_deref(), job.last_run_at()) {
                                        (Some(raw), Some(at)) => format!("{} ({})", format_datetime(raw), format_relative(at, now)),
                                        (Some(raw), None) => raw.to_string(),
                                        _ => "从未运行".to_string(),
                                    };
                                    let name_hl = highlight_matches(&job.name, &query);
                                    let schedule_hl = highlight_matches(&job.schedule, &query);
                                    let target_hl = highlight_matches(&job.target, &query);
                                    let tags_hl = job.tags.iter().map(|tag| {
                                        let tag_hl = highlight_matches(tag, &query);
                                        view! {
                                            <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                                                {tag_hl}
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
                                            <TableCell><code>{schedule_hl}</code></TableCell>
                                            <TableCell>{target_hl}</TableCell>
                                            <TableCell><StatusBadge value=job.status /></TableCell>
                                            <TableCell>{last_run}</TableCell>
                                            <TableCell class="text-right">{job.duration_label()}</TableCell>
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
                        <div class="table__empty">"没有匹配的任务"</div>
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
    fn test_default_view_keeps_store_order() {
        let jobs = dashboard_data().scheduled_jobs.records();
        let shown = visible_jobs(jobs, &ScheduledJobListState::default());
        let ids: Vec<&str> = shown.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["job-001", "job-002", "job-003", "job-004", "job-005", "job-006", "job-007", "job-008"]
        );
    }

    #[test]
    fn test_never_run_jobs_sort_last_descending() {
        let mut rows = dashboard_data().scheduled_jobs.records().to_vec();
        sort_list(&mut rows, "last_run", false);
        assert_eq!(rows[0].id.as_str(), "job-005");
        assert_eq!(rows.last().map(|j| j.id.as_str()), Some("job-004"));
    }

    #[test]
    fn test_status_options_localized() {
        let options = status_options(dashboard_data().scheduled_jobs.records());
        assert_eq!(options[0], ("success".to_string(), "成功".to_string()));
    }
}
