//! Селектор значения фасета с пунктом "全部"

use contracts::shared::search::{FacetSelection, ALL_FACET_KEY};
use leptos::prelude::*;
use thaw::*;

/// Вариант в списке: (значение, подпись)
pub type FacetOption = (String, String);

/// Новый выбор, если значение в `Select` расходится с состоянием страницы
pub fn selection_change(picked_key: &str, current: &FacetSelection) -> Option<FacetSelection> {
    let picked = FacetSelection::from_key(picked_key);
    (picked != *current).then_some(picked)
}

/// Выпадающий список для фасетного фильтра.
///
/// Варианты передаются уже вычисленными (обычно через `distinct_values`),
/// поэтому новый фасет в данных сразу появляется в списке.
#[component]
pub fn FacetSelect(
    /// Подпись поля
    #[prop(into)]
    label: String,
    /// Доступные значения
    #[prop(into)]
    options: Signal<Vec<FacetOption>>,
    /// Текущий выбор
    #[prop(into)]
    selected: Signal<FacetSelection>,
    on_change: Callback<FacetSelection>,
) -> impl IntoView {
    let value = RwSignal::new(selected.get_untracked().as_key().to_string());

    // state -> Select (сброс фильтров, клик по бейджу статуса)
    Effect::new(move |_| {
        let key = selected.get().as_key().to_string();
        if value.get_untracked() != key {
            value.set(key);
        }
    });

    // Select -> state
    Effect::new(move |_| {
        let picked = value.get();
        if let Some(selection) = selected.with_untracked(|current| selection_change(&picked, current)) {
            on_change.run(selection);
        }
    });

    view! {
        <div class="facet-select">
            <Flex vertical=true gap=FlexGap::Small>
                <Label>{label}</Label>
                <Select value=value>
                    <option value=ALL_FACET_KEY>"全部"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|(code, caption)| {
                                view! { <option value=code>{caption}</option> }
                            })
                            .collect_view()
                    }}
                </Select>
            </Flex>
        </div>
    }
}

/// Варианты, где подпись совпадает со значением
pub fn plain_options(values: Vec<String>) -> Vec<FacetOption> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_options() {
        assert_eq!(
            plain_options(vec!["prod".to_string(), "data".to_string()]),
            vec![
                ("prod".to_string(), "prod".to_string()),
                ("data".to_string(), "data".to_string())
            ]
        );
    }

    #[test]
    fn test_selection_change() {
        assert_eq!(
            selection_change("online", &FacetSelection::All),
            Some(FacetSelection::Only("online".to_string()))
        );
        assert_eq!(selection_change(ALL_FACET_KEY, &FacetSelection::All), None);
        assert_eq!(
            selection_change("online", &FacetSelection::Only("online".to_string())),
            None
        );
        assert_eq!(
            selection_change("", &FacetSelection::Only("online".to_string())),
            Some(FacetSelection::All)
        );
    }
}
