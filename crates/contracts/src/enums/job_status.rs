use serde::{Deserialize, Serialize};

/// Состояние запланированной задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Success,
    Failed,
    Pending,
    Paused,
}

impl JobStatus {
    pub fn code(&self) -> &'static str {
        match self {
            JobStatus::Running => "running",
            JobStatus::Success => "success",
            JobStatus::Failed => "failed",
            JobStatus::Pending => "pending",
            JobStatus::Paused => "paused",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JobStatus::Running => "运行中",
            JobStatus::Success => "成功",
            JobStatus::Failed => "失败",
            JobStatus::Pending => "等待中",
            JobStatus::Paused => "已暂停",
        }
    }

    pub fn all() -> Vec<JobStatus> {
        vec![
            JobStatus::Running,
            JobStatus::Success,
            JobStatus::Failed,
            JobStatus::Pending,
            JobStatus::Paused,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "running" => Some(JobStatus::Running),
            "success" => Some(JobStatus::Success),
            "failed" => Some(JobStatus::Failed),
            "pending" => Some(JobStatus::Pending),
            "paused" => Some(JobStatus::Paused),
            _ => None,
        }
    }
}
