//! Сводные показатели для обзорного дашборда

use chrono::{DateTime, Utc};
use contracts::domain::a001_host::aggregate::{HostFacet, HostHealth};
use contracts::domain::a003_k8s_resource::aggregate::{K8sFacet, K8sResource};
use contracts::domain::a004_scheduled_job::aggregate::JobFacet;
use contracts::domain::a005_alert::aggregate::{Alert, AlertFacet};
use contracts::enums::{AlertSeverity, HostStatus, JobStatus, K8sStatus};
use contracts::fixtures::DashboardData;
use contracts::shared::summary::{summarize, StatusSummary};

/// Сколько последних алертов показывать
pub const RECENT_ALERTS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSnapshot {
    pub hosts: StatusSummary,
    pub host_health: HostHealth,
    pub alert_severity: StatusSummary,
    pub unacked_alerts: usize,
    pub unacked_critical: usize,
    pub jobs: StatusSummary,
    pub k8s_kinds: StatusSummary,
    pub k8s_unhealthy: usize,
    /// Неподтверждённые алерты, новые сверху
    pub recent_alerts: Vec<Alert>,
    pub computed_at: DateTime<Utc>,
}

impl OverviewSnapshot {
    pub fn compute(data: &DashboardData, now: DateTime<Utc>) -> Self {
        let hosts = data.hosts.records();
        let alerts = data.alerts.records();
        let k8s = data.k8s_resources.records();

        let unacked: Vec<&Alert> = alerts.iter().filter(|a| !a.acknowledged).collect();
        let unacked_critical = unacked
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical)
            .count();

        Self {
            hosts: summarize(hosts, HostFacet::Status),
            host_health: HostHealth::from_hosts(hosts),
            alert_severity: summarize(alerts, AlertFacet::Severity),
            unacked_alerts: unacked.len(),
            unacked_critical,
            jobs: summarize(data.scheduled_jobs.records(), JobFacet::Status),
            k8s_kinds: summarize(k8s, K8sFacet::Kind),
            k8s_unhealthy: k8s.iter().filter(|r| is_unhealthy(r)).count(),
            recent_alerts: recent_unacked(alerts, RECENT_ALERTS_LIMIT),
            computed_at: now,
        }
    }

    pub fn hosts_online(&self) -> usize {
        self.hosts.count_of(HostStatus::Online.code())
    }

    pub fn jobs_failed(&self) -> usize {
        self.jobs.count_of(JobStatus::Failed.code())
    }
}

/// Ресурс с ошибкой или неполным набором реплик
pub fn is_unhealthy(resource: &K8sResource) -> bool {
    resource.status == K8sStatus::Failed
        || resource.replicas.as_ref().is_some_and(|r| r.is_degraded())
}

/// Неподтверждённые алерты по убыванию времени; без валидного времени в конце
pub fn recent_unacked(alerts: &[Alert], limit: usize) -> Vec<Alert> {
    let mut unacked: Vec<&Alert> = alerts.iter().filter(|a| !a.acknowledged).collect();
    unacked.sort_by(|a, b| b.fired_at_utc().cmp(&a.fired_at_utc()));
    unacked.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::fixtures::dashboard_data;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_snapshot_from_fixtures() {
        let snapshot = OverviewSnapshot::compute(dashboard_data(), now());

        assert_eq!(snapshot.hosts.total, 8);
        assert_eq!(snapshot.hosts_online(), 5);
        assert_eq!(snapshot.unacked_alerts, 6);
        assert_eq!(snapshot.unacked_critical, 2);
        assert_eq!(snapshot.jobs_failed(), 2);
        assert_eq!(snapshot.k8s_kinds.total, 10);
        assert_eq!(snapshot.k8s_unhealthy, 3);
        assert_eq!(snapshot.computed_at, now());
    }

    #[test]
    fn test_recent_alerts_newest_first() {
        let snapshot = OverviewSnapshot::compute(dashboard_data(), now());
        let ids: Vec<&str> = snapshot
            .recent_alerts
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["alert-001", "alert-002", "alert-006", "alert-005", "alert-004"]
        );
    }

    #[test]
    fn test_empty_data() {
        let snapshot = OverviewSnapshot::compute(&DashboardData::default(), now());
        assert_eq!(snapshot.hosts.total, 0);
        assert_eq!(snapshot.host_health, HostHealth::default());
        assert!(snapshot.recent_alerts.is_empty());
    }
}
