use crate::domain::common::{Record, RecordId};
use crate::enums::HostStatus;
use crate::shared::search::Filterable;
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Хост из инвентаря.
///
/// Метрики утилизации не валидируются: границы 0..=100 применяются только
/// при отображении (см. [`Host::display_percent`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    pub id: RecordId,
    pub name: String,
    pub ip: String,
    pub status: HostStatus,
    /// CPU, %
    pub cpu: f64,
    /// Память, %
    pub memory: f64,
    /// Диск, %
    pub disk: f64,
    /// Сеть, MB/s
    pub network: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub region: String,
}

impl Host {
    /// Процент для прогресс-бара, обрезанный до 0..=100
    pub fn display_percent(value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, 100.0)
    }

    /// Хост отвечает (online или warning)
    pub fn is_reachable(&self) -> bool {
        matches!(self.status, HostStatus::Online | HostStatus::Warning)
    }
}

impl Record for Host {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn record_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "host"
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Фасеты хоста
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostFacet {
    Status,
    Region,
}

impl Filterable for Host {
    type Facet = HostFacet;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.ip.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: HostFacet) -> Option<&str> {
        match facet {
            HostFacet::Status => Some(self.status.code()),
            HostFacet::Region => Some(self.region.as_str()),
        }
    }
}

// ============================================================================
// Health
// ============================================================================

/// Средняя утилизация по набору хостов
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HostHealth {
    pub avg_cpu: f64,
    pub avg_memory: f64,
    pub avg_disk: f64,
}

impl HostHealth {
    /// Для пустого набора все средние равны 0
    pub fn from_hosts<'a>(hosts: impl IntoIterator<Item = &'a Host>) -> Self {
        let mut count = 0usize;
        let mut total = HostHealth::default();
        for host in hosts {
            count += 1;
            total.avg_cpu += host.cpu;
            total.avg_memory += host.memory;
            total.avg_disk += host.disk;
        }
        if count == 0 {
            return HostHealth::default();
        }
        let n = count as f64;
        HostHealth {
            avg_cpu: total.avg_cpu / n,
            avg_memory: total.avg_memory / n,
            avg_disk: total.avg_disk / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(cpu: f64, memory: f64, disk: f64) -> Host {
        Host {
            id: RecordId::new("h"),
            name: "web-01".to_string(),
            ip: "10.0.1.1".to_string(),
            status: HostStatus::Online,
            cpu,
            memory,
            disk,
            network: 0.0,
            tags: vec!["nginx".to_string()],
            region: "cn-east-1".to_string(),
        }
    }

    #[test]
    fn test_display_percent_clamps() {
        assert_eq!(Host::display_percent(-5.0), 0.0);
        assert_eq!(Host::display_percent(42.5), 42.5);
        assert_eq!(Host::display_percent(180.0), 100.0);
        assert_eq!(Host::display_percent(f64::NAN), 0.0);
    }

    #[test]
    fn test_search_fields_include_tags() {
        let h = host(1.0, 2.0, 3.0);
        assert_eq!(h.search_fields(), vec!["web-01", "10.0.1.1", "nginx"]);
        assert_eq!(h.facet_value(HostFacet::Status), Some("online"));
        assert_eq!(h.facet_value(HostFacet::Region), Some("cn-east-1"));
    }

    #[test]
    fn test_health_averages() {
        let hosts = vec![host(10.0, 20.0, 30.0), host(30.0, 40.0, 50.0)];
        let health = HostHealth::from_hosts(&hosts);
        assert_eq!(health.avg_cpu, 20.0);
        assert_eq!(health.avg_memory, 30.0);
        assert_eq!(health.avg_disk, 40.0);
        assert_eq!(HostHealth::from_hosts(&Vec::<Host>::new()), HostHealth::default());
    }
}
