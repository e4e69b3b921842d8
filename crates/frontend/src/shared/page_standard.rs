//! Категории страниц, открываемых во вкладках.
//!
//! Каждая страница объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"a001_host--list"`)
//!   - `data-page-category` с одной из констант ниже

/// Список записей: таблица с фильтрами
pub const PAGE_CAT_LIST: &str = "list";

/// Аналитический дашборд
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Свободная вёрстка (справочный центр)
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_CUSTOM];

/// Собрать id страницы `{entity}--{category}`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{}--{}", entity, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && is_known_category(parts[1])
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
