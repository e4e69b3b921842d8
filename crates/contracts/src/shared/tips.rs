//! Подсказки справочного центра.
//!
//! Подсказки — необязательное обогащение: любая ошибка загрузки даёт пустой
//! список и предупреждение в лог, без повторов. Неизвестный контекст
//! означает "подсказок нет", а не подстановку набора по умолчанию.

use serde::{Deserialize, Serialize};

/// Раздел дашборда, для которого показываются подсказки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipContext {
    Hosts,
    Kubernetes,
    Jobs,
    Alerts,
    Help,
}

impl TipContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipContext::Hosts => "hosts",
            TipContext::Kubernetes => "kubernetes",
            TipContext::Jobs => "jobs",
            TipContext::Alerts => "alerts",
            TipContext::Help => "help",
        }
    }

    /// `None` для неизвестного ключа
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "hosts" => Some(TipContext::Hosts),
            "kubernetes" => Some(TipContext::Kubernetes),
            "jobs" => Some(TipContext::Jobs),
            "alerts" => Some(TipContext::Alerts),
            "help" => Some(TipContext::Help),
            _ => None,
        }
    }

    pub fn all() -> [TipContext; 5] {
        [
            TipContext::Hosts,
            TipContext::Kubernetes,
            TipContext::Jobs,
            TipContext::Alerts,
            TipContext::Help,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub id: String,
    pub context: TipContext,
    pub title: String,
    pub body: String,
}

/// Источник подсказок
pub trait TipSource {
    fn tips_for(&self, context: TipContext) -> anyhow::Result<Vec<Tip>>;
}

/// Подсказки из статического набора
#[derive(Debug, Clone, Default)]
pub struct StaticTipSource {
    tips: Vec<Tip>,
}

impl StaticTipSource {
    pub fn new(tips: Vec<Tip>) -> Self {
        Self { tips }
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }
}

impl TipSource for StaticTipSource {
    fn tips_for(&self, context: TipContext) -> anyhow::Result<Vec<Tip>> {
        Ok(self
            .tips
            .iter()
            .filter(|tip| tip.context == context)
            .cloned()
            .collect())
    }
}

/// Загрузить подсказки по ключу контекста, при любой ошибке вернуть пустой список
pub fn load_tips<S: TipSource + ?Sized>(source: &S, context_key: &str) -> Vec<Tip> {
    let Some(context) = TipContext::from_key(context_key) else {
        log::debug!("no tips available for unknown context '{}'", context_key);
        return Vec::new();
    };

    match source.tips_for(context) {
        Ok(tips) => tips,
        Err(e) => {
            log::warn!("failed to load tips for '{}': {:#}", context.as_str(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenSource;

    impl TipSource for BrokenSource {
        fn tips_for(&self, _context: TipContext) -> anyhow::Result<Vec<Tip>> {
            anyhow::bail!("tips service unavailable")
        }
    }

    fn tip(id: &str, context: TipContext) -> Tip {
        Tip {
            id: id.to_string(),
            context,
            title: format!("tip {}", id),
            body: String::new(),
        }
    }

    fn source() -> StaticTipSource {
        StaticTipSource::new(vec![
            tip("t1", TipContext::Hosts),
            tip("t2", TipContext::Alerts),
            tip("t3", TipContext::Hosts),
        ])
    }

    #[test]
    fn test_tips_for_known_context() {
        let tips = load_tips(&source(), "hosts");
        let ids: Vec<&str> = tips.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3"]);
    }

    #[test]
    fn test_unknown_context_has_no_enrichment() {
        assert!(load_tips(&source(), "default").is_empty());
        assert!(load_tips(&source(), "Hosts").is_empty());
        assert!(load_tips(&source(), "").is_empty());
    }

    #[test]
    fn test_failing_source_falls_back_to_empty() {
        assert!(load_tips(&BrokenSource, "hosts").is_empty());
    }

    #[test]
    fn test_context_keys_round_trip() {
        for context in TipContext::all() {
            assert_eq!(TipContext::from_key(context.as_str()), Some(context));
        }
    }
}
