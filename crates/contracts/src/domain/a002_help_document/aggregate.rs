use crate::domain::common::{Record, RecordId};
use crate::enums::Difficulty;
use crate::shared::search::Filterable;
use serde::{Deserialize, Serialize};

/// Статья справочного центра.
///
/// `content` может содержать переводы строк: каждая непустая строка
/// считается отдельным шагом инструкции.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpDocument {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    /// Открытое множество, выводится из самих документов
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    /// Внешняя документация, открывается в новой вкладке
    #[serde(default)]
    pub external_url: Option<String>,
}

impl HelpDocument {
    /// Шаги инструкции в исходном порядке
    pub fn steps(&self) -> Vec<&str> {
        self.content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect()
    }

    /// Краткое описание: первый шаг
    pub fn summary(&self) -> &str {
        self.steps().first().copied().unwrap_or("")
    }
}

impl Record for HelpDocument {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn record_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "help_document"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpFacet {
    Category,
    Difficulty,
}

impl Filterable for HelpDocument {
    type Facet = HelpFacet;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: HelpFacet) -> Option<&str> {
        match facet {
            HelpFacet::Category => Some(self.category.as_str()),
            HelpFacet::Difficulty => Some(self.difficulty.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_split_on_newlines() {
        let doc = HelpDocument {
            id: RecordId::new("doc-1"),
            title: "添加主机".to_string(),
            content: "1. 打开主机管理\n\n2. 点击添加\n3. 填写 IP 地址\n".to_string(),
            category: "主机管理".to_string(),
            tags: vec![],
            difficulty: Difficulty::Beginner,
            external_url: None,
        };
        assert_eq!(
            doc.steps(),
            vec!["1. 打开主机管理", "2. 点击添加", "3. 填写 IP 地址"]
        );
        assert_eq!(doc.summary(), "1. 打开主机管理");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "doc-9",
            "title": "SSH 密钥",
            "content": "生成密钥",
            "category": "安全",
            "tags": ["SSH"],
            "difficulty": "advanced",
            "externalUrl": "https://example.com/ssh"
        }"#;
        let doc: HelpDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.difficulty, Difficulty::Advanced);
        assert_eq!(doc.external_url.as_deref(), Some("https://example.com/ssh"));
    }
}
