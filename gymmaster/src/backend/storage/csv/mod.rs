//! # CSV Storage Module
//!
//! This module provides the file-based record store used in production.
//! Each table lives in its own CSV file and the settings singleton in a YAML
//! file, all inside one data directory.
//!
//! ## File Structure
//!
//! ```text
//! GymMaster/
//! ├── members.csv
//! ├── payments.csv
//! ├── users.csv
//! └── settings.yaml
//! ```
//!
//! ## CSV Format
//!
//! ```csv
//! id,name,phone,email,registration_date,due_date,notes,plan,plan_price
//! member::0b6f...,Ana Silva,923000000,ana@example.com,2024-01-15,2024-02-15,,Mensal,15000.0
//! ```
//!
//! Writes serialize the whole table into a temp file that is renamed over the
//! previous one.

pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use connection::{CsvConnection, DATA_DIR_ENV_VAR};
