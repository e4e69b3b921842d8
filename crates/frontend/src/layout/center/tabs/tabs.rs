use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Панель заголовков вкладок и их содержимое.
///
/// Содержимое каждой вкладки создаётся один раз при открытии и живёт до
/// закрытия; неактивные вкладки только скрываются.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || {
                        let tabs = tabs_store.opened.get();
                        log!("📋 <For> each triggered. Tabs count: {}", tabs.len());
                        tabs
                    }
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
                <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                    <div class="placeholder">"从左侧菜单选择一个页面"</div>
                </Show>
            </div>
        </div>
    }
}
