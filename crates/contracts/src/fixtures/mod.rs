//! Статические данные дашборда.
//!
//! Загружаются один раз при первом обращении и дальше не меняются.
//! Некорректный набор не роняет приложение: в лог пишется предупреждение,
//! а соответствующее хранилище остаётся пустым.

use crate::domain::a001_host::aggregate::Host;
use crate::domain::a002_help_document::aggregate::HelpDocument;
use crate::domain::a003_k8s_resource::aggregate::K8sResource;
use crate::domain::a004_scheduled_job::aggregate::ScheduledJob;
use crate::domain::a005_alert::aggregate::Alert;
use crate::domain::common::{Record, RecordStore};
use crate::shared::tips::{StaticTipSource, Tip};
use anyhow::Context;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;

const HOSTS_JSON: &str = include_str!("data/hosts.json");
const HELP_DOCUMENTS_JSON: &str = include_str!("data/help_documents.json");
const K8S_RESOURCES_JSON: &str = include_str!("data/k8s_resources.json");
const SCHEDULED_JOBS_JSON: &str = include_str!("data/scheduled_jobs.json");
const ALERTS_JSON: &str = include_str!("data/alerts.json");
const TIPS_JSON: &str = include_str!("data/tips.json");

/// Все хранилища дашборда
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub hosts: RecordStore<Host>,
    pub help_documents: RecordStore<HelpDocument>,
    pub k8s_resources: RecordStore<K8sResource>,
    pub scheduled_jobs: RecordStore<ScheduledJob>,
    pub alerts: RecordStore<Alert>,
}

static DASHBOARD_DATA: Lazy<DashboardData> = Lazy::new(|| DashboardData {
    hosts: load_store_or_empty(HOSTS_JSON),
    help_documents: load_store_or_empty(HELP_DOCUMENTS_JSON),
    k8s_resources: load_store_or_empty(K8S_RESOURCES_JSON),
    scheduled_jobs: load_store_or_empty(SCHEDULED_JOBS_JSON),
    alerts: load_store_or_empty(ALERTS_JSON),
});

/// Снимок данных, общий для всего приложения
pub fn dashboard_data() -> &'static DashboardData {
    &DASHBOARD_DATA
}

/// Источник подсказок справочного центра
pub fn tip_source() -> anyhow::Result<StaticTipSource> {
    let tips: Vec<Tip> = serde_json::from_str(TIPS_JSON).context("parse tips fixture")?;
    Ok(StaticTipSource::new(tips))
}

/// Разобрать JSON-массив записей и проверить уникальность id
pub fn parse_store<T>(json: &str) -> anyhow::Result<RecordStore<T>>
where
    T: Record + DeserializeOwned,
{
    let records: Vec<T> = serde_json::from_str(json)
        .with_context(|| format!("parse {} fixture", T::collection_name()))?;
    RecordStore::new(records)
}

fn load_store_or_empty<T>(json: &str) -> RecordStore<T>
where
    T: Record + DeserializeOwned,
{
    match parse_store(json) {
        Ok(store) => {
            log::debug!("loaded {} {} records", store.len(), T::collection_name());
            store
        }
        Err(e) => {
            log::warn!("{} fixture rejected: {:#}", T::collection_name(), e);
            RecordStore::default()
        }
    }
}
