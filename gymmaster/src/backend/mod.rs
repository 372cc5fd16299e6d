//! # Backend Module
//!
//! Contains all non-UI logic for the gym membership tracker.
//!
//! This module brings together:
//! - **Domain**: member lifecycle, payment ledger, statistics, accounts
//! - **Storage**: the record store (CSV files or in-memory)
//! - **IO**: mappers between the `shared` DTOs and the domain
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (any renderer of the shared DTOs)
//!     ↓
//! IO Layer (mappers)
//!     ↓
//! Domain Layer (business logic, services)
//!     ↓
//! Storage Layer (record store)
//! ```

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::backend::domain::{
    MemberService, NotificationService, PaymentService, SettingsService, StatisticsService,
    UserService,
};
use crate::backend::storage::{Connection, CsvConnection, MemoryConnection};

/// Holds every service, all sharing one record store
#[derive(Clone)]
pub struct Backend<C: Connection> {
    pub member_service: MemberService<C>,
    pub payment_service: PaymentService<C>,
    pub statistics_service: StatisticsService<C>,
    pub notification_service: NotificationService<C>,
    pub user_service: UserService<C>,
    pub settings_service: SettingsService<C>,
}

impl<C: Connection> Backend<C> {
    pub fn new(connection: C) -> Self {
        info!("Setting up domain services");
        Self {
            member_service: MemberService::new(connection.clone()),
            payment_service: PaymentService::new(connection.clone()),
            statistics_service: StatisticsService::new(connection.clone()),
            notification_service: NotificationService::new(connection.clone()),
            user_service: UserService::new(connection.clone()),
            settings_service: SettingsService::new(connection),
        }
    }
}

impl Backend<CsvConnection> {
    /// Open the record store in `data_directory`, creating it if needed
    pub fn open<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        info!("Opening data directory {}", data_directory.as_ref().display());
        Ok(Self::new(CsvConnection::new(data_directory)?))
    }

    /// Open the record store in the configured default data directory
    pub fn open_default() -> Result<Self> {
        let connection = CsvConnection::new_default()?;
        info!("Opened data directory {}", connection.base_directory().display());
        Ok(Self::new(connection))
    }
}

impl Backend<MemoryConnection> {
    pub fn in_memory() -> Self {
        Self::new(MemoryConnection::new())
    }
}
