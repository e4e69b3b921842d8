use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::config::current_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = current_config();
    log::info!(
        "dashboard config: overview every {} ms, hosts every {} ms, default tab '{}'",
        config.refresh.overview_ms,
        config.refresh.hosts_ms,
        config.ui.default_tab
    );

    // Provide the AppGlobalContext store to the whole app via context.
    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);
    provide_context(config.clone());

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration(&config.ui.default_tab);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}
