//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

/// Группа без пунктов сама является вкладкой: её `id` это ключ таба
fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "d400_overview",
            label: tab_label_for_key("d400_overview"),
            icon: "layout-dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "infrastructure",
            label: "基础设施",
            icon: "server",
            items: vec![
                ("a001_host", tab_label_for_key("a001_host"), "server"),
                ("a003_k8s_resource", tab_label_for_key("a003_k8s_resource"), "box"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "运维",
            icon: "activity",
            items: vec![
                ("a004_scheduled_job", tab_label_for_key("a004_scheduled_job"), "calendar"),
                ("a005_alert", tab_label_for_key("a005_alert"), "bell"),
            ],
        },
        MenuGroup {
            id: "a002_help_document",
            label: tab_label_for_key("a002_help_document"),
            icon: "help-circle",
            items: vec![],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();

    // Группы с пунктами раскрыты при старте
    let expanded_groups = RwSignal::new(
        groups
            .iter()
            .filter(|g| !g.items.is_empty())
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let has_children = !group.items.is_empty();

                let group_id_stored = StoredValue::new(group_id.clone());
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                let gid = group_id_stored.get_value();
                                !has_children && ctx.active.get().as_ref() == Some(&gid)
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group.id, group.label);
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| {
                                let gid_exp = group_id_for_exp.clone();
                                view! {
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_exp)
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                }
                            })}
                        </div>

                        // Children
                        {has_children.then(|| {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(id)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        ctx.open_tab(id, label);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::registry::is_registered_tab;

    #[test]
    fn test_every_menu_entry_opens_a_registered_tab() {
        for group in get_menu_groups() {
            if group.items.is_empty() {
                assert!(is_registered_tab(group.id), "{}", group.id);
            }
            for (id, label, _) in group.items {
                assert!(is_registered_tab(id), "{}", id);
                assert_ne!(label, id);
            }
        }
    }
}
