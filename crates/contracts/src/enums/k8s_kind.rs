use serde::{Deserialize, Serialize};

/// Тип ресурса Kubernetes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum K8sKind {
    Pod,
    Deployment,
    Service,
    StatefulSet,
    ConfigMap,
}

impl K8sKind {
    /// Код совпадает с полем `kind` манифеста
    pub fn code(&self) -> &'static str {
        match self {
            K8sKind::Pod => "Pod",
            K8sKind::Deployment => "Deployment",
            K8sKind::Service => "Service",
            K8sKind::StatefulSet => "StatefulSet",
            K8sKind::ConfigMap => "ConfigMap",
        }
    }

    pub fn all() -> Vec<K8sKind> {
        vec![
            K8sKind::Pod,
            K8sKind::Deployment,
            K8sKind::Service,
            K8sKind::StatefulSet,
            K8sKind::ConfigMap,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pod" => Some(K8sKind::Pod),
            "Deployment" => Some(K8sKind::Deployment),
            "Service" => Some(K8sKind::Service),
            "StatefulSet" => Some(K8sKind::StatefulSet),
            "ConfigMap" => Some(K8sKind::ConfigMap),
            _ => None,
        }
    }
}
