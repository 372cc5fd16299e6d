//! Domain model for an administrator account.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across all users, compared case-sensitively
    pub email: String,
    pub phone: String,
    /// argon2 PHC string
    pub password_hash: String,
    pub created_at: NaiveDate,
    pub role: UserRole,
}

impl User {
    pub fn generate_id() -> String {
        format!("user::{}", Uuid::new_v4())
    }
}
