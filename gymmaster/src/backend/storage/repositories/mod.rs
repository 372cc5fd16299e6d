//! Per-entity repositories built on top of any [`Connection`].
//!
//! [`Connection`]: crate::backend::storage::Connection

pub mod member_repository;
pub mod payment_repository;
pub mod settings_repository;
pub mod user_repository;

pub use member_repository::MemberRepository;
pub use payment_repository::PaymentRepository;
pub use settings_repository::SettingsRepository;
pub use user_repository::UserRepository;
