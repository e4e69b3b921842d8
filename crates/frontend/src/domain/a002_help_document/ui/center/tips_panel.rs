//! Панель подсказок справочного центра

use crate::shared::icons::icon;
use contracts::fixtures::tip_source;
use contracts::shared::tips::{load_tips, Tip, TipContext, TipSource};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Источник подсказок поверх встроенных данных; ошибка разбора
/// отдаётся наверх и гасится в `load_tips`
struct FixtureTipSource;

impl TipSource for FixtureTipSource {
    fn tips_for(&self, context: TipContext) -> anyhow::Result<Vec<Tip>> {
        tip_source()?.tips_for(context)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TipsState {
    Loading,
    Loaded(Vec<Tip>),
}

/// Подсказки для контекста `context_key`.
///
/// Загрузка асинхронная с имитацией задержки; ответ для устаревшего
/// контекста отбрасывается.
#[component]
pub fn TipsPanel(
    #[prop(into)] context_key: Signal<String>,
    /// Задержка загрузки, мс
    delay_ms: u32,
) -> impl IntoView {
    let (tips_state, set_tips_state) = signal(TipsState::Loading);
    let request_seq = StoredValue::new(0u64);

    Effect::new(move |_| {
        let key = context_key.get();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        set_tips_state.set(TipsState::Loading);

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let tips = load_tips(&FixtureTipSource, &key);
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            set_tips_state.set(TipsState::Loaded(tips));
        });
    });

    view! {
        <aside class="tips-panel">
            <h3 class="tips-panel__title">{icon("lightbulb")}"使用提示"</h3>
            {move || match tips_state.get() {
                TipsState::Loading => view! {
                    <div class="tips-panel__loading">"加载中..."</div>
                }.into_any(),
                TipsState::Loaded(tips) if tips.is_empty() => view! {
                    <div class="tips-panel__empty">"暂无相关提示"</div>
                }.into_any(),
                TipsState::Loaded(tips) => view! {
                    <ul class="tips-panel__list">
                        {tips.into_iter().map(|tip| view! {
                            <li class="tips-panel__item">
                                <div class="tips-panel__item-title">{tip.title}</div>
                                <div class="tips-panel__item-body">{tip.body}</div>
                            </li>
                        }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_source_per_context() {
        assert_eq!(load_tips(&FixtureTipSource, "hosts").len(), 2);
        assert_eq!(load_tips(&FixtureTipSource, "kubernetes").len(), 1);
        assert!(load_tips(&FixtureTipSource, "安全合规").is_empty());
    }
}
