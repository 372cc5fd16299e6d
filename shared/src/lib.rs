use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Membership status derived from how many days remain until the due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// More than 7 days remaining
    Active,
    /// Due within the next 7 days (today included)
    Alert,
    /// Due date already passed
    Expired,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberStatus::Active => "active",
            MemberStatus::Alert => "alert",
            MemberStatus::Expired => "expired",
        };
        f.write_str(label)
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "alert" => Ok(MemberStatus::Alert),
            "expired" => Ok(MemberStatus::Expired),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}

/// A gym member as shown to the UI, with its status computed for today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Member ID in format: "member::<uuid>"
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Registration date (YYYY-MM-DD)
    pub registration_date: String,
    /// Plan expiry date (YYYY-MM-DD)
    pub due_date: String,
    pub status: MemberStatus,
    /// Whole calendar days until the due date (negative once expired)
    pub days_remaining: i64,
    pub notes: String,
    pub plan: String,
    pub plan_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Plan expiry date (YYYY-MM-DD)
    pub due_date: String,
    pub plan: String,
    pub plan_price: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateMemberRequest {
    pub member_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub due_date: String,
    pub plan: String,
    pub plan_price: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberResponse {
    pub member: Member,
    pub success_message: String,
}

/// Filter applied to the member table (name substring and status)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberSearchRequest {
    pub name: Option<String>,
    pub status: Option<MemberStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteMemberResponse {
    pub deleted_payments: u32,
    pub success_message: String,
}

/// A payment joined with the name of the member it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment ID in format: "payment::<uuid>"
    pub id: String,
    pub member_id: String,
    /// Member name, or a placeholder when the member no longer exists
    pub member_name: String,
    /// Date the payment was made (YYYY-MM-DD)
    pub payment_date: String,
    pub amount: f64,
    /// Month the payment counts toward (YYYY-MM)
    pub reference_month: String,
    pub payment_method: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentListResponse {
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub member_id: String,
    /// Optional payment date (YYYY-MM-DD) - uses today if not provided
    pub payment_date: Option<String>,
    pub amount: f64,
    pub reference_month: String,
    pub payment_method: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentResponse {
    pub payment_id: String,
    pub success_message: String,
}

/// Revenue attributed to one reference month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label (YYYY-MM)
    pub month: String,
    pub revenue: f64,
}

/// Snapshot of the figures shown on the dashboard and report pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub current_month_revenue: f64,
    /// Last six months, oldest first, ending at the current month
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub total_members: u32,
    pub active_members: u32,
    pub alert_members: u32,
    pub expired_members: u32,
    pub average_ticket: f64,
    pub revenue_goal: f64,
    pub goal_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Expired,
    DueToday,
    DueSoon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub member_id: String,
    pub member_name: String,
    pub days_remaining: i64,
    pub kind: NotificationKind,
    /// Human-readable line, e.g. "Ana Silva - due in 3 days"
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// When present it must match `password`
    pub confirm_password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueGoalResponse {
    pub monthly_revenue_goal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRevenueGoalRequest {
    pub monthly_revenue_goal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_status_display_and_parse() {
        for status in [MemberStatus::Active, MemberStatus::Alert, MemberStatus::Expired] {
            let parsed: MemberStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert_eq!("  ALERT ".parse::<MemberStatus>().unwrap(), MemberStatus::Alert);
        assert!("overdue".parse::<MemberStatus>().is_err());
    }

    #[test]
    fn test_member_status_serializes_lowercase() {
        let json = serde_json::to_string(&MemberStatus::Expired).unwrap();
        assert_eq!(json, "\"expired\"");
    }

    #[test]
    fn test_search_request_defaults_to_no_filter() {
        let request = MemberSearchRequest::default();
        assert!(request.name.is_none());
        assert!(request.status.is_none());
    }
}
