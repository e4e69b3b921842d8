//! Клиентский поиск и фасетная фильтрация.
//!
//! Запись попадает в выборку, если проходит текстовый поиск И каждый
//! активный фасет:
//!
//! ```text
//! (field_1 ∋ q OR field_2 ∋ q OR tag_1 ∋ q ...) AND facet_1 == v1 AND facet_2 == v2 ...
//! ```
//!
//! Поиск регистронезависимый, без якорей, без trim и нормализации пунктуации.
//! Порядок записей хранилища не меняется, ранжирования нет.

use std::collections::HashSet;
use std::fmt::Debug;

/// Значение-сентинел "фильтр не выбран" в селекторах UI
pub const ALL_FACET_KEY: &str = "all";

/// Запись, которую можно отфильтровать строкой поиска и фасетами
pub trait Filterable {
    /// Категориальные поля записи
    type Facet: Copy + Eq + Debug;

    /// Текстовые поля, участвующие в поиске (объединяются через OR)
    fn search_fields(&self) -> Vec<&str>;

    /// Значение фасета; `None` трактуется как пустая строка
    fn facet_value(&self, facet: Self::Facet) -> Option<&str>;
}

// ============================================================================
// Facet selection
// ============================================================================

/// Выбор в фасетном селекторе
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FacetSelection {
    /// Фильтр не выбран: проходят все записи
    #[default]
    All,
    /// Точное, регистрозависимое совпадение
    Only(String),
}

impl FacetSelection {
    /// Разобрать значение селектора (`"all"` или пустая строка = без фильтра)
    pub fn from_key(value: &str) -> Self {
        if value.is_empty() || value == ALL_FACET_KEY {
            FacetSelection::All
        } else {
            FacetSelection::Only(value.to_string())
        }
    }

    /// Значение для `<select>`
    pub fn as_key(&self) -> &str {
        match self {
            FacetSelection::All => ALL_FACET_KEY,
            FacetSelection::Only(value) => value.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FacetSelection::Only(_))
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Only(expected) => expected == value,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

/// Запрос к хранилищу: текстовые условия + фасетные ограничения.
///
/// Пустой запрос пропускает все записи. Несколько условий объединяются
/// через AND, поэтому два последовательных прохода фильтра эквивалентны
/// одному проходу с `a.and(b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordQuery<F> {
    terms: Vec<String>,
    facets: Vec<(F, String)>,
}

impl<F> Default for RecordQuery<F> {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            facets: Vec::new(),
        }
    }
}

impl<F: Copy + Eq + Debug> RecordQuery<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запрос только по тексту
    pub fn text(query: impl Into<String>) -> Self {
        Self::new().with_text(query)
    }

    /// Добавить текстовое условие. Пустая строка условия не добавляет.
    pub fn with_text(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        if !query.is_empty() {
            self.terms.push(query.to_lowercase());
        }
        self
    }

    /// Добавить фасетное ограничение. `FacetSelection::All` ничего не добавляет.
    pub fn with_facet(mut self, facet: F, selection: &FacetSelection) -> Self {
        if let FacetSelection::Only(value) = selection {
            self.facets.push((facet, value.clone()));
        }
        self
    }

    /// Конъюнкция двух запросов
    pub fn and(mut self, other: RecordQuery<F>) -> Self {
        self.terms.extend(other.terms);
        self.facets.extend(other.facets);
        self
    }

    /// Запрос пропускает всё
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.facets.is_empty()
    }

    /// Количество активных фасетов (для бейджа на панели фильтров)
    pub fn active_facets_count(&self) -> usize {
        self.facets.len()
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Filterable<Facet = F>,
    {
        self.matches_text(record) && self.matches_facets(record)
    }

    fn matches_text<T>(&self, record: &T) -> bool
    where
        T: Filterable<Facet = F>,
    {
        if self.terms.is_empty() {
            return true;
        }
        let fields: Vec<String> = record
            .search_fields()
            .into_iter()
            .map(str::to_lowercase)
            .collect();
        self.terms
            .iter()
            .all(|term| fields.iter().any(|field| field.contains(term.as_str())))
    }

    fn matches_facets<T>(&self, record: &T) -> bool
    where
        T: Filterable<Facet = F>,
    {
        self.facets
            .iter()
            .all(|(facet, expected)| record.facet_value(*facet).unwrap_or("") == expected)
    }
}

// ============================================================================
// Operations
// ============================================================================

/// Регистронезависимый поиск подстроки в текстовых полях записи
pub fn matches_text<T: Filterable>(record: &T, query: &str) -> bool {
    RecordQuery::<T::Facet>::text(query).matches(record)
}

/// Отфильтровать записи, сохранив исходный порядок
pub fn filter_records<'a, T: Filterable>(
    records: &'a [T],
    query: &RecordQuery<T::Facet>,
) -> Vec<&'a T> {
    records.iter().filter(|r| query.matches(*r)).collect()
}

/// Уникальные значения фасета в порядке первого появления.
///
/// Записи без значения фасета пропускаются.
pub fn distinct_values<T: Filterable>(records: &[T], facet: T::Facet) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        if let Some(value) = record.facet_value(facet) {
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_host::aggregate::{Host, HostFacet};
    use crate::domain::a002_help_document::aggregate::{HelpDocument, HelpFacet};
    use crate::domain::common::RecordId;
    use crate::enums::{Difficulty, HostStatus};

    fn doc(id: &str, title: &str, content: &str, category: &str, tags: &[&str]) -> HelpDocument {
        HelpDocument {
            id: RecordId::new(id),
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            difficulty: Difficulty::Beginner,
            external_url: None,
        }
    }

    fn host(id: &str, status: HostStatus, region: &str) -> Host {
        Host {
            id: RecordId::new(id),
            name: format!("node-{}", id),
            ip: format!("10.0.0.{}", id.len()),
            status,
            cpu: 0.0,
            memory: 0.0,
            disk: 0.0,
            network: 0.0,
            tags: vec![],
            region: region.to_string(),
        }
    }

    fn docs() -> Vec<HelpDocument> {
        vec![
            doc("doc-1", "平台快速入门", "登录控制台\n创建项目", "快速上手", &["入门"]),
            doc("doc-2", "添加主机", "填写主机 IP\n安装 Agent", "主机管理", &["agent"]),
            doc("doc-3", "远程登录", "使用终端连接主机", "主机管理", &["SSH", "终端"]),
        ]
    }

    fn ids<T: crate::domain::common::Record>(records: &[&T]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let store = docs();
        let result = filter_records(&store, &RecordQuery::text(""));
        assert_eq!(ids(&result), vec!["doc-1", "doc-2", "doc-3"]);
    }

    #[test]
    fn test_substring_is_case_insensitive_and_unanchored() {
        let store = docs();
        let result = filter_records(&store, &RecordQuery::text("AGEN"));
        assert_eq!(ids(&result), vec!["doc-2"]);

        // совпадение в середине content
        let result = filter_records(&store, &RecordQuery::text("终端连接"));
        assert_eq!(ids(&result), vec!["doc-3"]);
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let store = docs();
        assert!(filter_records(&store, &RecordQuery::text(" 添加主机")).is_empty());
        assert_eq!(
            ids(&filter_records(&store, &RecordQuery::text("主机 IP"))),
            vec!["doc-2"]
        );
    }

    #[test]
    fn test_tag_only_match_is_included() {
        let store = docs();
        let result = filter_records(&store, &RecordQuery::text("SSH"));
        assert_eq!(ids(&result), vec!["doc-3"]);
        assert!(!store[2].title.contains("SSH"));
        assert!(!store[2].content.contains("SSH"));
    }

    #[test]
    fn test_every_record_found_by_its_own_field() {
        let store = docs();
        for record in &store {
            for field in record.search_fields() {
                let upper = field.to_uppercase();
                let result = filter_records(&store, &RecordQuery::text(upper));
                assert!(
                    result.iter().any(|r| r.id == record.id),
                    "{} not found by '{}'",
                    record.id,
                    field
                );
            }
        }
    }

    #[test]
    fn test_unknown_facet_value_returns_nothing() {
        let store = docs();
        let query = RecordQuery::text("")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("不存在"));
        assert!(filter_records(&store, &query).is_empty());

        let query = RecordQuery::text("主机")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("不存在"));
        assert!(filter_records(&store, &query).is_empty());
    }

    #[test]
    fn test_facet_match_is_case_sensitive() {
        let store = vec![host("a", HostStatus::Online, "us-west-1")];
        let query = RecordQuery::new()
            .with_facet(HostFacet::Region, &FacetSelection::from_key("US-WEST-1"));
        assert!(filter_records(&store, &query).is_empty());
    }

    #[test]
    fn test_and_of_text_or_and_facets() {
        let store = docs();

        // текст матчит doc-2 (title) и doc-3 (content), фасет оставляет оба
        let query = RecordQuery::text("主机")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("主机管理"));
        assert_eq!(ids(&filter_records(&store, &query)), vec!["doc-2", "doc-3"]);

        // текст матчит только тег doc-3, фасет совпадает
        let query = RecordQuery::text("ssh")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("主机管理"));
        assert_eq!(ids(&filter_records(&store, &query)), vec!["doc-3"]);

        // текст матчит doc-1, фасет исключает его
        let query = RecordQuery::text("入门")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("主机管理"));
        assert!(filter_records(&store, &query).is_empty());

        // второй фасет тоже обязателен
        let query = RecordQuery::text("主机")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("主机管理"))
            .with_facet(HelpFacet::Difficulty, &FacetSelection::from_key("advanced"));
        assert!(filter_records(&store, &query).is_empty());
    }

    #[test]
    fn test_all_selection_is_pass_through() {
        let store = docs();
        let query = RecordQuery::text("")
            .with_facet(HelpFacet::Category, &FacetSelection::All)
            .with_facet(HelpFacet::Difficulty, &FacetSelection::from_key("all"));
        assert!(query.is_empty());
        assert_eq!(filter_records(&store, &query).len(), 3);
    }

    #[test]
    fn test_two_passes_equal_combined_query() {
        let store = docs();
        let first = RecordQuery::text("主机")
            .with_facet(HelpFacet::Category, &FacetSelection::from_key("主机管理"));
        let second = RecordQuery::text("ssh")
            .with_facet(HelpFacet::Difficulty, &FacetSelection::from_key("beginner"));

        let once: Vec<HelpDocument> = filter_records(&store, &first).into_iter().cloned().collect();
        let twice = filter_records(&once, &second);
        let combined = filter_records(&store, &first.clone().and(second.clone()));

        assert_eq!(ids(&twice), ids(&combined));
        assert_eq!(ids(&combined), vec!["doc-3"]);
    }

    #[test]
    fn test_region_facet_keeps_relative_order() {
        let store = vec![
            host("h1", HostStatus::Online, "us-west-1"),
            host("h2", HostStatus::Offline, "cn-north-1"),
            host("h3", HostStatus::Warning, "us-west-1"),
            host("h4", HostStatus::Online, "eu-central-1"),
        ];
        let query = RecordQuery::text("")
            .with_facet(HostFacet::Region, &FacetSelection::from_key("us-west-1"));
        assert_eq!(ids(&filter_records(&store, &query)), vec!["h1", "h3"]);
    }

    #[test]
    fn test_distinct_values_first_occurrence_order() {
        let store = vec![
            doc("doc-1", "a", "", "快速上手", &[]),
            doc("doc-2", "b", "", "主机管理", &[]),
            doc("doc-3", "c", "", "主机管理", &[]),
        ];
        let categories = distinct_values(&store, HelpFacet::Category);
        assert_eq!(categories, vec!["快速上手", "主机管理"]);
        assert_eq!(distinct_values(&store, HelpFacet::Category), categories);
    }

    #[test]
    fn test_distinct_values_follow_store_contents() {
        let mut store = docs();
        assert_eq!(
            distinct_values(&store, HelpFacet::Category),
            vec!["快速上手", "主机管理"]
        );
        store.push(doc("doc-4", "告警规则", "", "监控告警", &[]));
        assert_eq!(
            distinct_values(&store, HelpFacet::Category),
            vec!["快速上手", "主机管理", "监控告警"]
        );
        assert!(distinct_values(&Vec::<HelpDocument>::new(), HelpFacet::Category).is_empty());
    }

    #[test]
    fn test_facet_selection_keys() {
        assert_eq!(FacetSelection::from_key("all"), FacetSelection::All);
        assert_eq!(FacetSelection::from_key(""), FacetSelection::All);
        assert_eq!(FacetSelection::All.as_key(), "all");
        let only = FacetSelection::from_key("online");
        assert!(only.is_active());
        assert_eq!(only.as_key(), "online");
        assert!(only.matches("online"));
        assert!(!only.matches("Online"));
    }

    #[test]
    fn test_matches_text_helper() {
        let store = docs();
        assert!(matches_text(&store[0], ""));
        assert!(matches_text(&store[0], "快速"));
        assert!(!matches_text(&store[0], "快速上手"));
    }
}
