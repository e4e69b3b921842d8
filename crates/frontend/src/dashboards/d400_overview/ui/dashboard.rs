use crate::dashboards::d400_overview::snapshot::OverviewSnapshot;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardTone, StatCard};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::components::table::format_percent;
use crate::shared::components::usage_bar::UsageBar;
use crate::shared::config::DashboardConfig;
use crate::shared::date_utils::{format_datetime, format_relative_str, now_utc};
use crate::shared::icons::icon;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::polling::use_visible_polling;
use contracts::enums::{AlertSeverity, HostStatus};
use contracts::fixtures::dashboard_data;
use contracts::shared::polling::PollingSchedule;
use leptos::prelude::*;
use thaw::*;

/// Тон карточки "主机在线"
pub fn hosts_tone(online: usize, total: usize) -> CardTone {
    if total == 0 {
        CardTone::Neutral
    } else if online == total {
        CardTone::Good
    } else if online == 0 {
        CardTone::Bad
    } else {
        CardTone::Warning
    }
}

/// Тон карточки алертов: красный при наличии критичных
pub fn alerts_tone(unacked: usize, critical: usize) -> CardTone {
    match (unacked, critical) {
        (0, _) => CardTone::Good,
        (_, 0) => CardTone::Warning,
        _ => CardTone::Bad,
    }
}

pub fn failures_tone(failed: usize) -> CardTone {
    if failed == 0 {
        CardTone::Good
    } else {
        CardTone::Bad
    }
}

/// Обзорный дашборд: карточки, здоровье хостов и последние алерты.
///
/// Пересчитывается по таймеру, пока вкладка браузера видима.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let overview_ms = use_context::<DashboardConfig>()
        .unwrap_or_default()
        .refresh
        .overview_ms;

    let (snapshot, set_snapshot) = signal(OverviewSnapshot::compute(dashboard_data(), now_utc()));
    let (refresh_count, set_refresh_count) = signal(0u32);

    let refresh = move || {
        set_snapshot.set(OverviewSnapshot::compute(dashboard_data(), now_utc()));
        set_refresh_count.update(|n| *n += 1);
    };

    use_visible_polling(refresh, Signal::derive(move || overview_ms));

    let polling_enabled = PollingSchedule::new(overview_ms).is_enabled();

    let subtitle = Signal::derive(move || {
        let s = snapshot.get();
        Some(format!(
            "更新于 {} · 刷新 {} 次{}",
            format_datetime(&s.computed_at.to_rfc3339()),
            refresh_count.get(),
            if polling_enabled { "" } else { " · 自动刷新已关闭" }
        ))
    });

    let open_tab = move |key: &'static str| {
        move |_| tabs_store.open_tab(key, tab_label_for_key(key))
    };

    view! {
        <div id="d400_overview--dashboard" data-page-category=PAGE_CAT_DASHBOARD class="page">
            <PageHeader title="概览" subtitle=subtitle>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                    {icon("refresh")}
                    "立即刷新"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <div on:click=open_tab("a001_host")>
                        <StatCard
                            label="主机在线"
                            icon_name="server"
                            value=Signal::derive(move || {
                                let s = snapshot.get();
                                format!("{} / {}", s.hosts_online(), s.hosts.total)
                            })
                            tone=Signal::derive(move || {
                                let s = snapshot.get();
                                hosts_tone(s.hosts_online(), s.hosts.total)
                            })
                            subtitle=Signal::derive(move || {
                                let s = snapshot.get();
                                Some(format!(
                                    "离线 {} · 维护 {}",
                                    s.hosts.count_of(HostStatus::Offline.code()),
                                    s.hosts.count_of(HostStatus::Maintenance.code())
                                ))
                            })
                        />
                    </div>
                    <div on:click=open_tab("a005_alert")>
                        <StatCard
                            label="未处理告警"
                            icon_name="bell"
                            value=Signal::derive(move || snapshot.get().unacked_alerts.to_string())
                            tone=Signal::derive(move || {
                                let s = snapshot.get();
                                alerts_tone(s.unacked_alerts, s.unacked_critical)
                            })
                            subtitle=Signal::derive(move || {
                                Some(format!("严重 {}", snapshot.get().unacked_critical))
                            })
                        />
                    </div>
                    <div on:click=open_tab("a004_scheduled_job")>
                        <StatCard
                            label="失败任务"
                            icon_name="calendar"
                            value=Signal::derive(move || snapshot.get().jobs_failed().to_string())
                            tone=Signal::derive(move || failures_tone(snapshot.get().jobs_failed()))
                            subtitle=Signal::derive(move || {
                                Some(format!("共 {} 个任务", snapshot.get().jobs.total))
                            })
                        />
                    </div>
                    <div on:click=open_tab("a003_k8s_resource")>
                        <StatCard
                            label="容器资源"
                            icon_name="box"
                            value=Signal::derive(move || snapshot.get().k8s_kinds.total.to_string())
                            tone=Signal::derive(move || failures_tone(snapshot.get().k8s_unhealthy))
                            subtitle=Signal::derive(move || {
                                Some(format!("异常 {}", snapshot.get().k8s_unhealthy))
                            })
                        />
                    </div>
                </div>

                <div class="overview-columns">
                    <Card class="overview-card">
                        <h3 class="card__title">{icon("activity")}"主机健康"</h3>
                        {move || {
                            let health = snapshot.get().host_health;
                            view! {
                                <div class="overview-health">
                                    <div class="overview-health__row">
                                        <span>"平均 CPU"</span>
                                        <UsageBar value=health.avg_cpu />
                                    </div>
                                    <div class="overview-health__row">
                                        <span>"平均内存"</span>
                                        <UsageBar value=health.avg_memory />
                                    </div>
                                    <div class="overview-health__row">
                                        <span>"平均磁盘"</span>
                                        <UsageBar value=health.avg_disk />
                                    </div>
                                </div>
                            }
                        }}
                        <ul class="overview-breakdown">
                            {move || {
                                let hosts = snapshot.get().hosts;
                                hosts
                                    .counts
                                    .iter()
                                    .map(|(code, count)| {
                                        let badge = match HostStatus::from_code(code) {
                                            Some(status) => view! { <StatusBadge value=status /> }.into_any(),
                                            None => view! {
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"未知"</Badge>
                                            }
                                            .into_any(),
                                        };
                                        view! {
                                            <li>
                                                {badge}
                                                <span>{*count}</span>
                                                <span class="text-muted">{format_percent(hosts.share_of(code))}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Card>

                    <Card class="overview-card">
                        <h3 class="card__title">{icon("alert-triangle")}"最新告警"</h3>
                        {move || {
                            let s = snapshot.get();
                            if s.recent_alerts.is_empty() {
                                return view! { <div class="placeholder">"暂无未处理告警"</div> }.into_any();
                            }
                            let now = s.computed_at;
                            view! {
                                <ul class="overview-alerts">
                                    {s.recent_alerts
                                        .into_iter()
                                        .map(|alert| {
                                            let severity = alert.severity;
                                            let when = format_relative_str(&alert.fired_at, now);
                                            let critical = alert.severity == AlertSeverity::Critical;
                                            view! {
                                                <li
                                                    class="overview-alerts__item"
                                                    class:overview-alerts__item--critical=critical
                                                    on:click=open_tab("a005_alert")
                                                >
                                                    <StatusBadge value=severity />
                                                    <span class="overview-alerts__title">{alert.title}</span>
                                                    <span class="text-muted">{alert.resource}</span>
                                                    <span class="text-muted">{when}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            }
                            .into_any()
                        }}
                    </Card>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hosts_tone() {
        assert_eq!(hosts_tone(0, 0), CardTone::Neutral);
        assert_eq!(hosts_tone(8, 8), CardTone::Good);
        assert_eq!(hosts_tone(5, 8), CardTone::Warning);
        assert_eq!(hosts_tone(0, 8), CardTone::Bad);
    }

    #[test]
    fn test_alerts_tone() {
        assert_eq!(alerts_tone(0, 0), CardTone::Good);
        assert_eq!(alerts_tone(3, 0), CardTone::Warning);
        assert_eq!(alerts_tone(3, 1), CardTone::Bad);
        assert_eq!(failures_tone(0), CardTone::Good);
        assert_eq!(failures_tone(2), CardTone::Bad);
    }
}
