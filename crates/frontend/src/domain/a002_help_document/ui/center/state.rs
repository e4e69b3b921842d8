use contracts::domain::a002_help_document::aggregate::{HelpDocument, HelpFacet};
use contracts::shared::search::{distinct_values, filter_records, FacetSelection, RecordQuery};
use contracts::shared::tips::TipContext;
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct HelpCenterState {
    pub search: String,
    pub category: FacetSelection,
    pub difficulty: FacetSelection,
    /// id раскрытых документов
    pub expanded: Vec<String>,
}

impl HelpCenterState {
    pub fn query(&self) -> RecordQuery<HelpFacet> {
        self.text_query()
            .with_facet(HelpFacet::Category, &self.category)
    }

    /// Запрос без категории, для счётчиков на чипах
    fn text_query(&self) -> RecordQuery<HelpFacet> {
        RecordQuery::text(self.search.clone()).with_facet(HelpFacet::Difficulty, &self.difficulty)
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(pos) = self.expanded.iter().position(|x| x == id) {
            self.expanded.remove(pos);
        } else {
            self.expanded.push(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.iter().any(|x| x == id)
    }

    /// Ключ контекста подсказок для выбранной категории
    pub fn tip_context_key(&self) -> String {
        match &self.category {
            FacetSelection::All => TipContext::Help.as_str().to_string(),
            FacetSelection::Only(category) => tip_context_for_category(category).to_string(),
        }
    }
}

/// Категория справки -> ключ контекста подсказок.
///
/// Для категорий без сопоставления возвращается сама категория: такой ключ
/// неизвестен источнику подсказок, и панель показывает "нет подсказок".
pub fn tip_context_for_category(category: &str) -> &str {
    match category {
        "快速上手" => TipContext::Help.as_str(),
        "主机管理" => TipContext::Hosts.as_str(),
        "容器服务" => TipContext::Kubernetes.as_str(),
        "任务调度" => TipContext::Jobs.as_str(),
        "监控告警" => TipContext::Alerts.as_str(),
        other => other,
    }
}

/// Чипы категорий: (категория, число документов с учётом поиска и сложности).
///
/// Набор категорий берётся из всего хранилища, поэтому чип не исчезает,
/// когда поиск его обнуляет.
pub fn category_counts(docs: &[HelpDocument], state: &HelpCenterState) -> Vec<(String, usize)> {
    let matching = filter_records(docs, &state.text_query());
    distinct_values(docs, HelpFacet::Category)
        .into_iter()
        .map(|category| {
            let count = matching
                .iter()
                .filter(|d| d.category == category)
                .count();
            (category, count)
        })
        .collect()
}

pub fn create_state() -> RwSignal<HelpCenterState> {
    RwSignal::new(HelpCenterState::default())
}
