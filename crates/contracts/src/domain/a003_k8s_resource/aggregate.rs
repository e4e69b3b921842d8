use crate::domain::common::{Record, RecordId};
use crate::enums::{K8sKind, K8sStatus};
use crate::shared::search::Filterable;
use serde::{Deserialize, Serialize};

/// Ресурс Kubernetes (снимок из кластера)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct K8sResource {
    pub id: RecordId,
    pub name: String,
    pub namespace: String,
    pub kind: K8sKind,
    pub status: K8sStatus,
    pub cluster: String,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Готовые / желаемые реплики (только для workload-ресурсов)
    #[serde(default)]
    pub replicas: Option<Replicas>,
    pub age: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replicas {
    pub ready: u32,
    pub desired: u32,
}

impl Replicas {
    pub fn is_degraded(&self) -> bool {
        self.ready < self.desired
    }
}

impl K8sResource {
    /// "2/3" для таблицы, "-" если реплик нет
    pub fn replicas_label(&self) -> String {
        match self.replicas {
            Some(r) => format!("{}/{}", r.ready, r.desired),
            None => "-".to_string(),
        }
    }
}

impl Record for K8sResource {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn record_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "k8s_resource"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum K8sFacet {
    Namespace,
    Kind,
    Status,
    Cluster,
}

impl Filterable for K8sResource {
    type Facet = K8sFacet;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.namespace.as_str()];
        fields.extend(self.labels.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: K8sFacet) -> Option<&str> {
        match facet {
            K8sFacet::Namespace => Some(self.namespace.as_str()),
            K8sFacet::Kind => Some(self.kind.code()),
            K8sFacet::Status => Some(self.status.code()),
            K8sFacet::Cluster => Some(self.cluster.as_str()),
        }
    }
}
