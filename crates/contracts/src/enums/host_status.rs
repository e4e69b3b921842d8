use serde::{Deserialize, Serialize};

/// Состояние хоста (определяет цвет в таблице)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    Online,
    Offline,
    Warning,
    Maintenance,
}

impl HostStatus {
    /// Код статуса, совпадает с сериализованным значением
    pub fn code(&self) -> &'static str {
        match self {
            HostStatus::Online => "online",
            HostStatus::Offline => "offline",
            HostStatus::Warning => "warning",
            HostStatus::Maintenance => "maintenance",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            HostStatus::Online => "在线",
            HostStatus::Offline => "离线",
            HostStatus::Warning => "告警",
            HostStatus::Maintenance => "维护中",
        }
    }

    pub fn all() -> Vec<HostStatus> {
        vec![
            HostStatus::Online,
            HostStatus::Offline,
            HostStatus::Warning,
            HostStatus::Maintenance,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "online" => Some(HostStatus::Online),
            "offline" => Some(HostStatus::Offline),
            "warning" => Some(HostStatus::Warning),
            "maintenance" => Some(HostStatus::Maintenance),
            _ => None,
        }
    }
}
