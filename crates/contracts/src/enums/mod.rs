pub mod alert_severity;
pub mod difficulty;
pub mod host_status;
pub mod job_status;
pub mod k8s_kind;
pub mod k8s_status;

pub use alert_severity::AlertSeverity;
pub use difficulty::Difficulty;
pub use host_status::HostStatus;
pub use job_status::JobStatus;
pub use k8s_kind::K8sKind;
pub use k8s_status::K8sStatus;
