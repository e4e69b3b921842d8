use serde::{Deserialize, Serialize};

/// Фаза ресурса Kubernetes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum K8sStatus {
    Running,
    Pending,
    Failed,
    Succeeded,
}

impl K8sStatus {
    pub fn code(&self) -> &'static str {
        match self {
            K8sStatus::Running => "running",
            K8sStatus::Pending => "pending",
            K8sStatus::Failed => "failed",
            K8sStatus::Succeeded => "succeeded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            K8sStatus::Running => "Running",
            K8sStatus::Pending => "Pending",
            K8sStatus::Failed => "Failed",
            K8sStatus::Succeeded => "Succeeded",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "running" => Some(K8sStatus::Running),
            "pending" => Some(K8sStatus::Pending),
            "failed" => Some(K8sStatus::Failed),
            "succeeded" => Some(K8sStatus::Succeeded),
            _ => None,
        }
    }
}
