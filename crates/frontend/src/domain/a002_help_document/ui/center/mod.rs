pub mod state;
pub mod tips_panel;

use self::state::{category_counts, create_state};
use self::tips_panel::TipsPanel;
use crate::shared::components::facet_select::{FacetOption, FacetSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, highlight_matches, SearchInput};
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use contracts::domain::a002_help_document::aggregate::{HelpDocument, HelpFacet};
use contracts::enums::Difficulty;
use contracts::fixtures::dashboard_data;
use contracts::shared::search::{distinct_values, FacetSelection};
use leptos::prelude::*;
use thaw::*;

/// Открыть ссылку в новой вкладке браузера
pub fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, cannot open {}", url);
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("failed to open {}: {:?}", url, e);
    }
}

/// Варианты сложности в порядке появления в данных
pub fn difficulty_options(docs: &[HelpDocument]) -> Vec<FacetOption> {
    distinct_values(docs, HelpFacet::Difficulty)
        .into_iter()
        .map(|code| {
            let label = Difficulty::from_code(&code)
                .map(|d| d.display_name().to_string())
                .unwrap_or_else(|| code.clone());
            (code, label)
        })
        .collect()
}

/// Выбранный чип выделяется
fn chip_appearance(active: bool) -> ButtonAppearance {
    if active {
        ButtonAppearance::Primary
    } else {
        ButtonAppearance::Secondary
    }
}

/// Справочный центр: поиск, чипы категорий, шаги и подсказки
#[component]
#[allow(non_snake_case)]
pub fn HelpCenter() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let docs_base_url = StoredValue::new(config.help.docs_base_url.clone());
    let tips_delay_ms = config.help.tips_delay_ms;

    let state = create_state();
    let docs: &'static [HelpDocument] = dashboard_data().help_documents.records();

    let filtered = Memo::new(move |_| state.with(|s| filter_list(docs, &s.query())));
    let chips = Memo::new(move |_| state.with(|s| category_counts(docs, s)));
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let tip_context = Signal::derive(move || state.with(|s| s.tip_context_key()));

    let select_category = move |selection: FacetSelection| {
        state.update(|s| s.category = selection);
    };

    view! {
        <div id="a002_help_document--custom" data-page-category=PAGE_CAT_CUSTOM class="page help-center">
            <PageHeader title="帮助中心" subtitle={"常见操作指南与使用提示".to_string()}>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open_external(&docs_base_url.get_value())
                >
                    {icon("external-link")}
                    "完整文档"
                </Button>
            </PageHeader>

            <div class="page__content help-center__layout">
                <div class="help-center__main">
                    <Flex class="help-center__toolbar" gap=FlexGap::Small align=FlexAlign::End>
                        <SearchInput
                            value=search
                            on_change=Callback::new(move |v: String| state.update(|s| s.search = v))
                            placeholder="搜索标题、内容或标签..."
                        />
                        <FacetSelect
                            label="难度"
                            options=Signal::derive(move || difficulty_options(docs))
                            selected=Signal::derive(move || state.with(|s| s.difficulty.clone()))
                            on_change=Callback::new(move |sel: FacetSelection| state.update(|s| s.difficulty = sel))
                        />
                    </Flex>

                    <Space class="help-center__chips" gap=SpaceGap::Small>
                        <Button
                            class="chip"
                            size=ButtonSize::Small
                            appearance=Signal::derive(move || chip_appearance(!state.with(|s| s.category.is_active())))
                            on_click=move |_| select_category(FacetSelection::All)
                        >
                            "全部"
                        </Button>
                        {move || chips.get().into_iter().map(|(category, count)| {
                            let selection = FacetSelection::Only(category.clone());
                            let selection_for_active = selection.clone();
                            view! {
                                <Button
                                    class=if count == 0 { "chip chip--empty" } else { "chip" }
                                    size=ButtonSize::Small
                                    appearance=Signal::derive(move || {
                                        chip_appearance(state.with(|s| s.category == selection_for_active))
                                    })
                                    on_click=move |_| select_category(selection.clone())
                                >
                                    {category}
                                    <span class="chip__count">{count}</span>
                                </Button>
                            }
                        }).collect_view()}
                    </Space>

                    <div class="help-center__docs">
                        {move || {
                            let query = search.get();
                            let rows = filtered.get();
                            if rows.is_empty() {
                                return view! { <div class="placeholder">"没有找到相关文档"</div> }.into_any();
                            }
                            rows.into_iter().map(|doc| {
                                let doc_id = doc.id.as_str().to_string();
                                let doc_id_for_toggle = doc_id.clone();
                                let is_expanded = move || state.with(|s| s.is_expanded(&doc_id));
                                let steps: Vec<String> = doc.steps().into_iter().map(str::to_string).collect();
                                let steps_stored = StoredValue::new(steps);
                                let query_for_steps = query.clone();
                                let external_url = doc.external_url.clone();
                                let tags_hl = doc.tags.iter().map(|tag| {
                                    let tag_hl = highlight_matches(tag, &query);
                                    view! {
                                        <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Informative>
                                            {tag_hl}
                                        </Badge>
                                    }
                                }).collect_view();
                                view! {
                                    <article class="help-doc">
                                        <header
                                            class="help-doc__header"
                                            on:click=move |_| state.update(|s| s.toggle_expanded(&doc_id_for_toggle))
                                        >
                                            <span class="help-doc__chevron" class:help-doc__chevron--expanded=is_expanded.clone()>
                                                {icon("chevron-right")}
                                            </span>
                                            <h4 class="help-doc__title">{highlight_matches(&doc.title, &query)}</h4>
                                            <StatusBadge value=doc.difficulty />
                                            <span class="help-doc__category">{doc.category.clone()}</span>
                                        </header>
                                        <div class="help-doc__summary">{highlight_matches(doc.summary(), &query)}</div>
                                        <div class="help-doc__tags">
                                            {tags_hl}
                                        </div>
                                        <Show when=is_expanded>
                                            <ol class="help-doc__steps">
                                                {steps_stored.get_value().into_iter().map(|step| view! {
                                                    <li>{highlight_matches(&step, &query_for_steps)}</li>
                                                }).collect_view()}
                                            </ol>
                                        </Show>
                                        {external_url.map(|url| view! {
                                            <Button
                                                appearance=ButtonAppearance::Transparent
                                                size=ButtonSize::Small
                                                on_click=move |_| open_external(&url)
                                            >
                                                {icon("external-link")}
                                                "查看外部文档"
                                            </Button>
                                        })}
                                    </article>
                                }
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>

                <TipsPanel context_key=tip_context delay_ms=tips_delay_ms />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_options() {
        let options = difficulty_options(dashboard_data().help_documents.records());
        let codes: Vec<&str> = options.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(codes, vec!["beginner", "intermediate", "advanced"]);
    }
}
