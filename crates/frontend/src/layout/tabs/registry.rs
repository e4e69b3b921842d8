//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_host::ui::list::HostList;
use crate::domain::a002_help_document::ui::center::HelpCenter;
use crate::domain::a003_k8s_resource::ui::list::K8sResourceList;
use crate::domain::a004_scheduled_job::ui::list::ScheduledJobList;
use crate::domain::a005_alert::ui::list::AlertList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Все ключи, для которых есть контент
pub const TAB_KEYS: &[&str] = &[
    "d400_overview",
    "a001_host",
    "a002_help_document",
    "a003_k8s_resource",
    "a004_scheduled_job",
    "a005_alert",
];

pub fn is_registered_tab(key: &str) -> bool {
    TAB_KEYS.contains(&key)
}

/// Рендерит контент таба по ключу
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // Aggregates
        "a001_host" => view! { <HostList /> }.into_any(),
        "a002_help_document" => view! { <HelpCenter /> }.into_any(),
        "a003_k8s_resource" => view! { <K8sResourceList /> }.into_any(),
        "a004_scheduled_job" => view! { <ScheduledJobList /> }.into_any(),
        "a005_alert" => view! { <AlertList /> }.into_any(),

        // Unknown / Fallback
        _ => {
            log!("⚠️ Unknown tab type: {}", key);
            let key_for_close = key.to_string();
            view! {
                <div class="placeholder">
                    <span>{format!("未知页面: {}", key)}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| tabs_store.close_tab(&key_for_close)
                    >
                        "关闭"
                    </Button>
                </div>
            }
            .into_any()
        }
    }
}
