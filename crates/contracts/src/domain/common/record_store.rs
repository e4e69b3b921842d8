use super::{Record, RecordId};
use std::collections::HashSet;

/// Неизменяемое упорядоченное хранилище записей.
///
/// Заполняется один раз при старте и дальше только читается. Порядок записей
/// сохраняется во всех производных представлениях.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> RecordStore<T> {
    /// Создать хранилище, проверив уникальность `id`
    pub fn new(records: Vec<T>) -> anyhow::Result<Self> {
        let mut seen: HashSet<&RecordId> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                anyhow::bail!(
                    "duplicate {} id '{}'",
                    T::collection_name(),
                    record.id()
                );
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Найти запись по ID
    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id().as_str() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_host::aggregate::Host;
    use crate::enums::HostStatus;

    fn host(id: &str) -> Host {
        Host {
            id: RecordId::new(id),
            name: format!("node-{}", id),
            ip: "10.0.0.1".to_string(),
            status: HostStatus::Online,
            cpu: 10.0,
            memory: 20.0,
            disk: 30.0,
            network: 1.5,
            tags: vec![],
            region: "cn-north-1".to_string(),
        }
    }

    #[test]
    fn test_store_keeps_order() {
        let store = RecordStore::new(vec![host("h-2"), host("h-1"), host("h-3")]).unwrap();
        let ids: Vec<&str> = store.records().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h-2", "h-1", "h-3"]);
        assert_eq!(store.get("h-1").map(|h| h.name.as_str()), Some("node-h-1"));
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = RecordStore::new(vec![host("h-1"), host("h-1")]);
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("h-1"));
    }
}
