//! Domain model for a gym member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::domain::calendar::days_until;

/// Days before the due date at which a member switches to `Alert`
pub const ALERT_WINDOW_DAYS: i64 = 7;

/// Persisted member record. Status is not stored; see [`MemberStatus::derive`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub registration_date: NaiveDate,
    pub due_date: NaiveDate,
    pub notes: String,
    pub plan: String,
    pub plan_price: f64,
}

impl Member {
    /// Generate a unique ID for a member
    pub fn generate_id() -> String {
        format!("member::{}", Uuid::new_v4())
    }

    /// Days until this member's plan expires, relative to `today`
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        days_until(self.due_date, today)
    }

    /// Attach the status derived for `today`
    pub fn with_status(self, today: NaiveDate) -> MemberWithStatus {
        let days_remaining = self.days_remaining(today);
        MemberWithStatus {
            status: MemberStatus::from_days_remaining(days_remaining),
            days_remaining,
            member: self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Alert,
    Expired,
}

impl MemberStatus {
    /// `< 0` expired, `0..=7` alert, otherwise active
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        if days_remaining < 0 {
            MemberStatus::Expired
        } else if days_remaining <= ALERT_WINDOW_DAYS {
            MemberStatus::Alert
        } else {
            MemberStatus::Active
        }
    }

    /// Status of a plan due on `due_date`, as seen on `today`
    pub fn derive(due_date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days_remaining(days_until(due_date, today))
    }
}

/// A member together with the status computed for a given day
#[derive(Debug, Clone, PartialEq)]
pub struct MemberWithStatus {
    pub member: Member,
    pub status: MemberStatus,
    pub days_remaining: i64,
}
