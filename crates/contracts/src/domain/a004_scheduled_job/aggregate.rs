use crate::domain::common::{Record, RecordId};
use crate::enums::JobStatus;
use crate::shared::search::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Запланированная задача (cron-расписание на хосте или кластере)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledJob {
    pub id: RecordId,
    pub name: String,
    /// Cron-выражение, не интерпретируется на клиенте
    pub schedule: String,
    pub status: JobStatus,
    /// Хост или кластер, на котором выполняется задача
    pub target: String,
    /// RFC 3339
    #[serde(default)]
    pub last_run: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ScheduledJob {
    /// Время последнего запуска; некорректная строка трактуется как отсутствие
    pub fn last_run_at(&self) -> Option<DateTime<Utc>> {
        self.last_run
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// "1m 05s" / "42s" / "-"
    pub fn duration_label(&self) -> String {
        match self.duration_secs {
            Some(secs) if secs >= 60 => format!("{}m {:02}s", secs / 60, secs % 60),
            Some(secs) => format!("{}s", secs),
            None => "-".to_string(),
        }
    }
}

impl Record for ScheduledJob {
    fn id(&self) -> &RecordId {
        &self.id
    }

    fn record_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "scheduled_job"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobFacet {
    Status,
}

impl Filterable for ScheduledJob {
    type Facet = JobFacet;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.target.as_str(),
            self.schedule.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, facet: JobFacet) -> Option<&str> {
        match facet {
            JobFacet::Status => Some(self.status.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(last_run: Option<&str>, duration_secs: Option<u64>) -> ScheduledJob {
        ScheduledJob {
            id: RecordId::new("job-1"),
            name: "backup-db".to_string(),
            schedule: "0 2 * * *".to_string(),
            status: JobStatus::Success,
            target: "db-01".to_string(),
            last_run: last_run.map(str::to_string),
            duration_secs,
            tags: vec![],
        }
    }

    #[test]
    fn test_last_run_parsing() {
        let j = job(Some("2024-03-15T02:00:00Z"), None);
        let at = j.last_run_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2024-03-15T02:00:00+00:00");

        assert!(job(Some("yesterday"), None).last_run_at().is_none());
        assert!(job(None, None).last_run_at().is_none());
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(job(None, Some(65)).duration_label(), "1m 05s");
        assert_eq!(job(None, Some(42)).duration_label(), "42s");
        assert_eq!(job(None, None).duration_label(), "-");
    }
}
