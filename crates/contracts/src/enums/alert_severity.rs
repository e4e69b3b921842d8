use serde::{Deserialize, Serialize};

/// Критичность алерта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

impl AlertSeverity {
    pub fn code(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "critical",
            AlertSeverity::Warning => "warning",
            AlertSeverity::Info => "info",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "严重",
            AlertSeverity::Warning => "警告",
            AlertSeverity::Info => "提示",
        }
    }

    pub fn all() -> Vec<AlertSeverity> {
        vec![
            AlertSeverity::Critical,
            AlertSeverity::Warning,
            AlertSeverity::Info,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "critical" => Some(AlertSeverity::Critical),
            "warning" => Some(AlertSeverity::Warning),
            "info" => Some(AlertSeverity::Info),
            _ => None,
        }
    }
}
