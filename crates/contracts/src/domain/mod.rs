pub mod a001_host;
pub mod a002_help_document;
pub mod a003_k8s_resource;
pub mod a004_scheduled_job;
pub mod a005_alert;
pub mod common;
