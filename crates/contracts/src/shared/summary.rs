//! Сводки по статусам для карточек дашборда

use crate::shared::search::Filterable;

/// Количество записей по значениям фасета
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSummary {
    pub total: usize,
    /// (значение, количество) в порядке первого появления
    pub counts: Vec<(String, usize)>,
}

impl StatusSummary {
    pub fn count_of(&self, value: &str) -> usize {
        self.counts
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Доля значения в процентах (0 для пустой сводки)
    pub fn share_of(&self, value: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count_of(value) as f64 * 100.0 / self.total as f64
    }
}

/// Подсчитать записи по значениям фасета
pub fn summarize<T: Filterable>(records: &[T], facet: T::Facet) -> StatusSummary {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let value = record.facet_value(facet).unwrap_or("");
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    StatusSummary {
        total: records.len(),
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_scheduled_job::aggregate::{JobFacet, ScheduledJob};
    use crate::domain::common::RecordId;
    use crate::enums::JobStatus;

    fn job(id: &str, status: JobStatus) -> ScheduledJob {
        ScheduledJob {
            id: RecordId::new(id),
            name: id.to_string(),
            schedule: "*/5 * * * *".to_string(),
            status,
            target: "k8s-prod".to_string(),
            last_run: None,
            duration_secs: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_summarize_counts_in_first_occurrence_order() {
        let jobs = vec![
            job("j1", JobStatus::Failed),
            job("j2", JobStatus::Success),
            job("j3", JobStatus::Failed),
            job("j4", JobStatus::Running),
        ];
        let summary = summarize(&jobs, JobFacet::Status);
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.counts,
            vec![
                ("failed".to_string(), 2),
                ("success".to_string(), 1),
                ("running".to_string(), 1),
            ]
        );
        assert_eq!(summary.count_of("failed"), 2);
        assert_eq!(summary.count_of("paused"), 0);
        assert_eq!(summary.share_of("failed"), 50.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&Vec::<ScheduledJob>::new(), JobFacet::Status);
        assert_eq!(summary, StatusSummary::default());
        assert_eq!(summary.share_of("failed"), 0.0);
    }
}
