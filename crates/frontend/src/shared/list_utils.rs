/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use contracts::shared::search::{filter_records, Filterable, RecordQuery};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-highlight">{text[start..end].to_string()}</mark> }
                .into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Байтовые диапазоны совпадений `filter` в `text` без учёта регистра.
///
/// Регистр приводится так же, как в `RecordQuery` (`str::to_lowercase` по
/// всей строке), поэтому подсвечивается ровно то, что нашёл фильтр.
/// Диапазоны всегда лежат на границах символов исходной строки.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }

    let needle = filter.to_lowercase();
    let lowered = text.to_lowercase();

    // байт в `lowered` -> начало исходного символа; длина свёртки символа
    // от контекста не зависит (σ и ς занимают по два байта)
    let mut origin: Vec<usize> = Vec::with_capacity(lowered.len());
    for (i, c) in text.char_indices() {
        let folded: usize = c.to_lowercase().map(char::len_utf8).sum();
        origin.extend(std::iter::repeat(i).take(folded));
    }
    if origin.len() != lowered.len() {
        return Vec::new();
    }

    lowered
        .match_indices(needle.as_str())
        .map(|(start, m)| {
            let last = origin[start + m.len() - 1];
            let end = last + text[last..].chars().next().map(char::len_utf8).unwrap_or(0);
            (origin[start], end)
        })
        .collect()
}

/// Сортирует список по указанному полю
///
/// Пустое поле означает "не сортировать": остаётся порядок хранилища.
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    if field.is_empty() {
        return;
    }
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список запросом, сохраняя порядок
pub fn filter_list<T: Filterable + Clone>(items: &[T], query: &RecordQuery<T::Facet>) -> Vec<T> {
    filter_records(items, query).into_iter().cloned().collect()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
    /// Задержка перед применением, мс
    #[prop(optional, default = 200)]
    debounce_ms: u32,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "搜索...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());

    // Отложенный вызов; Drop у Timeout отменяет предыдущий
    let pending = StoredValue::new_local(None::<Timeout>);

    // внешний сброс фильтров
    Effect::new(move |_| {
        let applied = value.get();
        if input_value.get_untracked() != applied {
            pending.set_value(None);
            input_value.set(applied);
        }
    });

    Effect::new(move |_| {
        let typed = input_value.get();
        if typed == value.get_untracked() {
            pending.set_value(None);
            return;
        }
        let timeout = Timeout::new(debounce_ms, move || {
            on_change.run(typed);
        });
        pending.set_value(Some(timeout));
    });

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input" class:search-input--active=is_filter_active>
            <Input value=input_value placeholder=placeholder />
            <Show when=move || !input_value.get().is_empty()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=clear_filter
                >
                    {crate::shared::icons::icon("x")}
                </Button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                "value" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Nginx web NGINX", "nginx"), vec![(0, 5), (10, 15)]);
        assert!(match_ranges("nginx", "").is_empty());
        assert!(match_ranges("nginx", "apache").is_empty());
    }

    #[test]
    fn test_match_ranges_on_char_boundaries() {
        let text = "远程登录主机";
        let ranges = match_ranges(text, "登录");
        assert_eq!(ranges, vec![(6, 12)]);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "登录");
    }

    #[test]
    fn test_match_ranges_fold_like_record_query() {
        use contracts::shared::search::matches_text;

        struct Doc(&'static str);
        impl Filterable for Doc {
            type Facet = ();
            fn search_fields(&self) -> Vec<&str> {
                vec![self.0]
            }
            fn facet_value(&self, _facet: ()) -> Option<&str> {
                None
            }
        }

        // финальная сигма: "ΟΔΟΣ" -> "οδος"
        assert!(matches_text(&Doc("ΟΔΟΣ"), "οδος"));
        assert_eq!(match_ranges("ΟΔΟΣ", "οδος"), vec![(0, 8)]);

        let text = "İstanbul";
        let ranges = match_ranges(text, "stan");
        assert_eq!(ranges, vec![(2, 6)]);
        assert_eq!(&text[ranges[0].0..ranges[0].1], "stan");
    }

    #[test]
    fn test_empty_sort_field_keeps_order() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, "", true);
        assert_eq!(rows, vec![Row("b", 2), Row("a", 3), Row("c", 1)]);
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 2), Row("a", 3), Row("c", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows, vec![Row("a", 3), Row("b", 2), Row("c", 1)]);
        sort_list(&mut rows, "value", false);
        assert_eq!(rows, vec![Row("a", 3), Row("b", 2), Row("c", 1)]);
        sort_list(&mut rows, "value", true);
        assert_eq!(rows, vec![Row("c", 1), Row("b", 2), Row("a", 3)]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "ip", true), " ⇅");
        assert_eq!(get_sort_class("ip", "ip"), "sort-indicator sort-indicator--active");
    }
}
