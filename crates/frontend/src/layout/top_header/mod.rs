//! TopHeader component - application top navigation bar.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Подпись интервала обновления для шапки
pub fn refresh_label(interval_ms: i64) -> String {
    if interval_ms <= 0 {
        "自动刷新: 关闭".to_string()
    } else if interval_ms % 1000 == 0 {
        format!("自动刷新: {} 秒", interval_ms / 1000)
    } else {
        format!("自动刷新: {} 毫秒", interval_ms)
    }
}

/// TopHeader component - main application top bar.
///
/// Uses AppGlobalContext for sidebar visibility control.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = use_context::<DashboardConfig>().unwrap_or_default();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"DevOps 管理平台"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__hint">
                    {icon("refresh")}
                    {refresh_label(config.refresh.overview_ms)}
                </span>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "隐藏导航" } else { "显示导航" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>

                <button
                    class="top-header__icon-btn"
                    title="告警"
                    on:click=move |_| ctx.open_tab("a005_alert", crate::layout::tabs::tab_label_for_key("a005_alert"))
                >
                    {icon("bell")}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_label() {
        assert_eq!(refresh_label(0), "自动刷新: 关闭");
        assert_eq!(refresh_label(-5), "自动刷新: 关闭");
        assert_eq!(refresh_label(30000), "自动刷新: 30 秒");
        assert_eq!(refresh_label(1500), "自动刷新: 1500 毫秒");
    }
}
