use serde::{Deserialize, Serialize};
use std::fmt;

/// Стабильный идентификатор записи (никогда не переиспользуется)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Трейт для всех записей хранилища
pub trait Record {
    /// Получить ID записи
    fn id(&self) -> &RecordId;

    /// Индекс типа записи в системе (например, "a001")
    fn record_index() -> &'static str;

    /// Имя коллекции для логов и ключей табов (например, "host")
    fn collection_name() -> &'static str;
}
