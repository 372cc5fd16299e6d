pub mod member;
pub mod notification;
pub mod payment;
pub mod settings;
pub mod user;
