//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! There are two levels:
//!
//! - [`Connection`]: a key-value record store holding whole tables (lists of
//!   records) and singletons. Every backend implements this.
//! - Per-entity storage traits ([`MemberStorage`], [`PaymentStorage`],
//!   [`UserStorage`], [`SettingsStorage`]) implemented by the repositories in
//!   `storage::repositories` on top of any connection.

use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::domain::models::member::Member as DomainMember;
use crate::backend::domain::models::payment::Payment as DomainPayment;
use crate::backend::domain::models::settings::Settings as DomainSettings;
use crate::backend::domain::models::user::User as DomainUser;

/// Logical tables held by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Members,
    Payments,
}

impl Table {
    /// Key used for the table in the underlying store
    pub fn name(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Members => "members",
            Table::Payments => "payments",
        }
    }
}

/// Single-record entries held by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Singleton {
    Settings,
}

impl Singleton {
    pub fn name(&self) -> &'static str {
        match self {
            Singleton::Settings => "settings",
        }
    }
}

/// Trait defining the interface for storage connections
///
/// A connection is a key-value record store. Tables are read and written as a
/// whole: `put_table` replaces the full list of records, so from the caller's
/// perspective every write is atomic. Missing tables read as empty and a
/// missing singleton reads as its default value (which is persisted on first
/// access).
pub trait Connection: Send + Sync + Clone {
    /// Read every record of a table
    fn get_table<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>>;

    /// Replace the whole table with `records`
    fn put_table<T: Serialize>(&self, table: Table, records: &[T]) -> Result<()>;

    /// Read a singleton, initializing it with `T::default()` if absent
    fn get_singleton<T: Serialize + DeserializeOwned + Default>(&self, key: Singleton) -> Result<T>;

    /// Replace a singleton
    fn put_singleton<T: Serialize>(&self, key: Singleton, record: &T) -> Result<()>;
}

/// Trait defining the interface for member storage operations
pub trait MemberStorage: Send + Sync {
    /// Store a new member
    fn store_member(&self, member: &DomainMember) -> Result<()>;

    /// Retrieve a specific member by ID
    fn get_member(&self, member_id: &str) -> Result<Option<DomainMember>>;

    /// List all members in insertion order
    fn list_members(&self) -> Result<Vec<DomainMember>>;

    /// Replace an existing member
    /// Returns false if no member with that ID exists (nothing is written)
    fn update_member(&self, member: &DomainMember) -> Result<bool>;

    /// Delete a member by ID
    /// Returns true if the member was found and deleted, false otherwise
    fn delete_member(&self, member_id: &str) -> Result<bool>;
}

/// Trait defining the interface for payment storage operations
pub trait PaymentStorage: Send + Sync {
    /// Append a new payment
    fn store_payment(&self, payment: &DomainPayment) -> Result<()>;

    /// List all payments in insertion order
    fn list_payments(&self) -> Result<Vec<DomainPayment>>;

    /// List the payments referencing a specific member
    fn list_payments_for_member(&self, member_id: &str) -> Result<Vec<DomainPayment>>;

    /// Delete every payment referencing a member
    /// Returns the number of payments actually deleted
    fn delete_payments_for_member(&self, member_id: &str) -> Result<u32>;
}

/// Trait defining the interface for user account storage operations
pub trait UserStorage: Send + Sync {
    /// Store a new user
    fn store_user(&self, user: &DomainUser) -> Result<()>;

    /// Find a user by exact (case-sensitive) email
    fn get_user_by_email(&self, email: &str) -> Result<Option<DomainUser>>;

    /// List all users
    fn list_users(&self) -> Result<Vec<DomainUser>>;
}

/// Trait defining the interface for application settings storage
pub trait SettingsStorage: Send + Sync {
    /// Get the settings, creating the defaults on first access
    fn get_settings(&self) -> Result<DomainSettings>;

    /// Replace the settings
    fn update_settings(&self, settings: &DomainSettings) -> Result<()>;
}
