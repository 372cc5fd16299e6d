//! # Storage Module
//!
//! Handles all data persistence for the gym tracker.
//!
//! The domain layer only talks to the [`Connection`] trait and to the
//! per-entity storage traits, so the backing store can be swapped without
//! touching business logic.
//!
//! ## Current Implementations
//!
//! - **CSV files** (`csv`): one CSV file per table plus a YAML settings file
//!   in the data directory. Used by the application.
//! - **In-memory** (`memory`): JSON strings in a shared map. Used by tests.
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Whole-table writes**: Every mutation rewrites the affected table
//! - **Dependency Inversion**: Services are generic over the connection type

pub mod csv;
pub mod memory;
pub mod repositories;
pub mod traits;

pub use self::csv::CsvConnection;
pub use memory::MemoryConnection;
pub use repositories::{MemberRepository, PaymentRepository, SettingsRepository, UserRepository};
pub use traits::{
    Connection, MemberStorage, PaymentStorage, SettingsStorage, Singleton, Table, UserStorage,
};
