//! Test utilities module for automatic cleanup and consistent test infrastructure
//!
//! This module provides RAII-based cleanup that guarantees test data is removed
//! even if tests panic or fail.

use anyhow::Result;
use tempfile::TempDir;

use super::connection::CsvConnection;

/// Test environment that provides a temporary directory and connection
/// that will be automatically cleaned up when the environment is dropped,
/// even if tests panic or fail.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }

    /// Open a second connection on the same directory (simulates an app restart)
    pub fn reopen(&self) -> Result<CsvConnection> {
        CsvConnection::new(&self.base_path)
    }
}
