//! # Domain Module
//!
//! Contains the business logic for the gym: member lifecycle, the payment
//! ledger, revenue statistics, administrator accounts and settings.
//!
//! Services are generic over a storage [`Connection`](crate::backend::storage::Connection)
//! and never touch files directly, so the same code runs against the CSV
//! data directory and the in-memory store used by tests.
//!
//! ## Module Organization
//!
//! - **member_service**: create, read, search, update and delete members
//! - **payment_service**: record payments and list them with member names
//! - **statistics_service**: revenue by reference month, member counts, goal progress
//! - **notification_service**: due-date notifications for the dashboard
//! - **user_service**: administrator registration and login
//! - **settings_service**: monthly revenue goal
//! - **calendar**: date parsing and reference-month arithmetic
//!
//! ## Business Rules
//!
//! - A member's status is derived from the due date on every read and never stored
//! - Members due within 7 days (inclusive) are in alert; past-due members are expired
//! - Deleting a member deletes its payments
//! - Revenue is attributed by reference month, not payment date
//! - Amounts, plan prices and the revenue goal must be positive

pub mod calendar;
pub mod commands;
pub mod error;
pub mod member_service;
pub mod models;
pub mod notification_service;
pub mod password;
pub mod payment_service;
pub mod settings_service;
pub mod statistics_service;
pub mod user_service;

pub use error::DomainError;
pub use member_service::MemberService;
pub use notification_service::NotificationService;
pub use payment_service::PaymentService;
pub use settings_service::SettingsService;
pub use statistics_service::StatisticsService;
pub use user_service::UserService;
