//! # In-Memory Storage Module
//!
//! A record store kept entirely in memory. Each table or singleton is stored
//! under its name as a JSON string, the same shape a browser key-value store
//! would hold. Used by tests and for throwaway sessions.

use anyhow::Result;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::storage::traits::{Connection, Singleton, Table};

/// Key-value store of serialized tables; clones share the same entries
#[derive(Clone, Default)]
pub struct MemoryConnection {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized value stored under a key
    pub fn raw_entry(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow::anyhow!("In-memory store lock poisoned"))
    }
}

impl Connection for MemoryConnection {
    fn get_table<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>> {
        let entries = self.lock()?;
        match entries.get(table.name()) {
            Some(json) => {
                let records: Vec<T> = serde_json::from_str(json)?;
                debug!("Loaded {} records from memory table '{}'", records.len(), table.name());
                Ok(records)
            }
            None => Ok(Vec::new()),
        }
    }

    fn put_table<T: Serialize>(&self, table: Table, records: &[T]) -> Result<()> {
        let json = serde_json::to_string(records)?;
        self.lock()?.insert(table.name().to_string(), json);
        debug!("Saved {} records to memory table '{}'", records.len(), table.name());
        Ok(())
    }

    fn get_singleton<T: Serialize + DeserializeOwned + Default>(&self, key: Singleton) -> Result<T> {
        let existing = self.lock()?.get(key.name()).cloned();
        match existing {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => {
                let record = T::default();
                self.put_singleton(key, &record)?;
                Ok(record)
            }
        }
    }

    fn put_singleton<T: Serialize>(&self, key: Singleton, record: &T) -> Result<()> {
        let json = serde_json::to_string(record)?;
        self.lock()?.insert(key.name().to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Counter {
        value: u32,
    }

    #[test]
    fn test_missing_table_reads_empty() {
        let connection = MemoryConnection::new();
        let rows: Vec<Counter> = connection.get_table(Table::Payments).unwrap();
        assert!(rows.is_empty());
        assert!(connection.raw_entry("payments").unwrap().is_none());
    }

    #[test]
    fn test_put_table_stores_json_and_replaces() {
        let connection = MemoryConnection::new();
        connection
            .put_table(Table::Members, &[Counter { value: 1 }, Counter { value: 2 }])
            .unwrap();
        assert_eq!(
            connection.raw_entry("members").unwrap().as_deref(),
            Some(r#"[{"value":1},{"value":2}]"#)
        );

        connection.put_table(Table::Members, &[Counter { value: 3 }]).unwrap();
        let rows: Vec<Counter> = connection.get_table(Table::Members).unwrap();
        assert_eq!(rows, vec![Counter { value: 3 }]);
    }

    #[test]
    fn test_clones_share_entries() {
        let connection = MemoryConnection::new();
        let clone = connection.clone();
        clone.put_table(Table::Users, &[Counter { value: 9 }]).unwrap();
        let rows: Vec<Counter> = connection.get_table(Table::Users).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_singleton_default_is_persisted() {
        let connection = MemoryConnection::new();
        let counter: Counter = connection.get_singleton(Singleton::Settings).unwrap();
        assert_eq!(counter, Counter::default());
        assert!(connection.raw_entry("settings").unwrap().is_some());
    }
}
