use anyhow::{Context, Result};
use csv::{Reader, Writer};
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::backend::storage::traits::{Connection, Singleton, Table};

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV_VAR: &str = "GYMMASTER_DATA_DIR";

/// Name of the application folder inside the platform data directory
const APP_DIRECTORY_NAME: &str = "GymMaster";

/// CsvConnection manages the data directory and the files backing each table
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: Arc<PathBuf>,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
        })
    }

    /// Create a new CSV connection in the default data directory
    /// This uses $GYMMASTER_DATA_DIR when set, otherwise `<data dir>/GymMaster`
    pub fn new_default() -> Result<Self> {
        Self::new(Self::default_data_directory()?)
    }

    /// Resolve the default data directory without creating it
    pub fn default_data_directory() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV_VAR) {
            let dir = dir.trim();
            if !dir.is_empty() {
                info!("Using data directory from {}: {}", DATA_DIR_ENV_VAR, dir);
                return Ok(PathBuf::from(dir));
            }
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine the platform data directory"))?;
        let default_dir = data_dir.join(APP_DIRECTORY_NAME);
        info!("Using default data directory: {}", default_dir.display());
        Ok(default_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> PathBuf {
        self.base_directory.as_ref().clone()
    }

    /// Get the CSV file path backing a table
    pub fn table_file_path(&self, table: Table) -> PathBuf {
        self.base_directory.join(format!("{}.csv", table.name()))
    }

    /// Get the YAML file path backing a singleton
    pub fn singleton_file_path(&self, key: Singleton) -> PathBuf {
        self.base_directory.join(format!("{}.yaml", key.name()))
    }

    /// Write `contents` next to `target` and rename it into place
    fn write_atomically(&self, target: &Path, contents: &[u8]) -> Result<()> {
        let temp_path = target.with_extension("tmp");
        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, target)
            .with_context(|| format!("Failed to replace {}", target.display()))?;
        Ok(())
    }
}

impl Connection for CsvConnection {
    fn get_table<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>> {
        let file_path = self.table_file_path(table);

        if !file_path.exists() {
            debug!("Table file {:?} doesn't exist, returning empty table", file_path);
            return Ok(Vec::new());
        }

        let mut csv_reader = Reader::from_path(&file_path)
            .with_context(|| format!("Failed to open {}", file_path.display()))?;

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: T = result
                .with_context(|| format!("Malformed record in {}", file_path.display()))?;
            records.push(record);
        }

        debug!("Loaded {} records from {:?}", records.len(), file_path);
        Ok(records)
    }

    fn put_table<T: Serialize>(&self, table: Table, records: &[T]) -> Result<()> {
        let file_path = self.table_file_path(table);

        let mut csv_writer = Writer::from_writer(Vec::new());
        for record in records {
            csv_writer.serialize(record)?;
        }
        let contents = csv_writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {}", e))?;

        self.write_atomically(&file_path, &contents)?;

        debug!("Saved {} records to {:?}", records.len(), file_path);
        Ok(())
    }

    fn get_singleton<T: Serialize + DeserializeOwned + Default>(&self, key: Singleton) -> Result<T> {
        let file_path = self.singleton_file_path(key);

        if file_path.exists() {
            let yaml_content = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?;
            let record: T = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Malformed YAML in {}", file_path.display()))?;
            debug!("Loaded {} from {:?}", key.name(), file_path);
            Ok(record)
        } else {
            let record = T::default();
            self.put_singleton(key, &record)?;
            info!("Created default {} at {:?}", key.name(), file_path);
            Ok(record)
        }
    }

    fn put_singleton<T: Serialize>(&self, key: Singleton, record: &T) -> Result<()> {
        let file_path = self.singleton_file_path(key);
        let yaml_content = serde_yaml::to_string(record)?;
        self.write_atomically(&file_path, yaml_content.as_bytes())?;
        debug!("Saved {} to {:?}", key.name(), file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: String,
        label: String,
        value: f64,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Config {
        threshold: f64,
    }

    impl Default for Config {
        fn default() -> Self {
            Self { threshold: 42.0 }
        }
    }

    fn setup_test_connection() -> (CsvConnection, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to create connection");
        (connection, temp_dir)
    }

    #[test]
    fn test_new_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let connection = CsvConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(connection.base_directory(), nested);
    }

    #[test]
    fn test_missing_table_reads_empty() {
        let (connection, _temp_dir) = setup_test_connection();
        let rows: Vec<Row> = connection.get_table(Table::Members).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_put_table_replaces_whole_table() {
        let (connection, _temp_dir) = setup_test_connection();

        let first = vec![
            Row { id: "a".to_string(), label: "Plano, mensal".to_string(), value: 1.5 },
            Row { id: "b".to_string(), label: String::new(), value: 2.0 },
        ];
        connection.put_table(Table::Payments, &first).unwrap();
        let loaded: Vec<Row> = connection.get_table(Table::Payments).unwrap();
        assert_eq!(loaded, first);

        let second = vec![Row { id: "c".to_string(), label: "only".to_string(), value: 3.0 }];
        connection.put_table(Table::Payments, &second).unwrap();
        let loaded: Vec<Row> = connection.get_table(Table::Payments).unwrap();
        assert_eq!(loaded, second);

        // No temp file left behind
        assert!(!connection.table_file_path(Table::Payments).with_extension("tmp").exists());
    }

    #[test]
    fn test_empty_table_round_trips() {
        let (connection, _temp_dir) = setup_test_connection();
        connection.put_table::<Row>(Table::Users, &[]).unwrap();
        let rows: Vec<Row> = connection.get_table(Table::Users).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_singleton_created_with_default() {
        let (connection, _temp_dir) = setup_test_connection();

        let config: Config = connection.get_singleton(Singleton::Settings).unwrap();
        assert_eq!(config, Config::default());
        assert!(connection.singleton_file_path(Singleton::Settings).exists());
    }

    #[test]
    fn test_singleton_persists_across_connections() {
        let (connection, temp_dir) = setup_test_connection();
        connection
            .put_singleton(Singleton::Settings, &Config { threshold: 7.5 })
            .unwrap();

        // Simulate an app restart
        let reopened = CsvConnection::new(temp_dir.path()).unwrap();
        let config: Config = reopened.get_singleton(Singleton::Settings).unwrap();
        assert_eq!(config.threshold, 7.5);
    }

    #[test]
    fn test_malformed_table_fails_whole_read() {
        let (connection, _temp_dir) = setup_test_connection();
        fs::write(
            connection.table_file_path(Table::Members),
            "id,label,value\na,ok,1.0\nb,bad,not-a-number\n",
        )
        .unwrap();

        let result: Result<Vec<Row>> = connection.get_table(Table::Members);
        assert!(result.is_err());
    }
}
