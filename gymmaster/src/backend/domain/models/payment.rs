//! Domain model for a payment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder shown when a payment references a member that no longer exists
pub const UNKNOWN_MEMBER_NAME: &str = "Member not found";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: String,
    /// Not enforced by storage; may dangle
    pub member_id: String,
    pub payment_date: NaiveDate,
    pub amount: f64,
    /// Normalized `YYYY-MM`
    pub reference_month: String,
    pub payment_method: String,
    pub notes: String,
}

impl Payment {
    /// Generate a unique ID for a payment
    pub fn generate_id() -> String {
        format!("payment::{}", Uuid::new_v4())
    }
}

/// A payment joined with the referenced member's name
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentWithMember {
    pub payment: Payment,
    pub member_name: String,
}
