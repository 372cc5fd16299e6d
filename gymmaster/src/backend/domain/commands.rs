//! Domain-level command and query types
//! These structs are used by services inside the domain layer. The UI layer
//! maps the public DTOs defined in the `shared` crate to these internal types
//! (see `io::mappers`).

pub mod members {
    use crate::backend::domain::models::member::{MemberStatus, MemberWithStatus};

    /// Input for creating a new member.
    #[derive(Debug, Clone)]
    pub struct CreateMemberCommand {
        pub name: String,
        pub phone: String,
        pub email: String,
        /// Plan expiry date (YYYY-MM-DD)
        pub due_date: String,
        pub plan: String,
        pub plan_price: f64,
        pub notes: Option<String>,
    }

    /// Input for replacing a member's mutable fields.
    #[derive(Debug, Clone)]
    pub struct UpdateMemberCommand {
        pub member_id: String,
        pub name: String,
        pub phone: String,
        pub email: String,
        pub due_date: String,
        pub plan: String,
        pub plan_price: f64,
        pub notes: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct GetMemberCommand {
        pub member_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteMemberCommand {
        pub member_id: String,
    }

    /// Query for filtering the member list.
    #[derive(Debug, Clone, Default)]
    pub struct MemberSearchQuery {
        /// Case-insensitive substring of the member name
        pub name: Option<String>,
        pub status: Option<MemberStatus>,
    }

    #[derive(Debug, Clone)]
    pub struct CreateMemberResult {
        pub member: MemberWithStatus,
    }

    #[derive(Debug, Clone)]
    pub struct GetMemberResult {
        pub member: Option<MemberWithStatus>,
    }

    #[derive(Debug, Clone)]
    pub struct ListMembersResult {
        pub members: Vec<MemberWithStatus>,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateMemberResult {
        pub member: MemberWithStatus,
    }

    /// Result of deleting a member. Deleting an unknown ID is not an error.
    #[derive(Debug, Clone)]
    pub struct DeleteMemberResult {
        pub member_removed: bool,
        pub deleted_payments: u32,
        pub success_message: String,
    }
}

pub mod payments {
    use crate::backend::domain::models::payment::{Payment, PaymentWithMember};

    /// Input for recording a payment.
    #[derive(Debug, Clone)]
    pub struct RecordPaymentCommand {
        pub member_id: String,
        /// Optional payment date (YYYY-MM-DD) - uses today if not provided
        pub payment_date: Option<String>,
        pub amount: f64,
        /// Reference month (YYYY-MM)
        pub reference_month: String,
        pub payment_method: String,
        pub notes: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct RecordPaymentResult {
        pub payment: Payment,
    }

    #[derive(Debug, Clone)]
    pub struct PaymentListResult {
        pub payments: Vec<PaymentWithMember>,
    }
}

pub mod users {
    use crate::backend::domain::models::user::User;

    #[derive(Debug, Clone)]
    pub struct RegisterUserCommand {
        pub name: String,
        pub email: String,
        pub phone: String,
        pub password: String,
        /// When present it must match `password`
        pub confirm_password: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }

    #[derive(Debug, Clone)]
    pub struct RegisterUserResult {
        pub user: User,
    }

    #[derive(Debug, Clone)]
    pub struct LoginResult {
        /// None when the email is unknown or the password is wrong
        pub user: Option<User>,
    }
}

pub mod statistics {
    use crate::backend::domain::calendar::ReferenceMonth;

    /// Revenue attributed to one reference month
    #[derive(Debug, Clone, PartialEq)]
    pub struct MonthlyRevenue {
        pub month: ReferenceMonth,
        pub total: f64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MemberCounts {
        pub total: u32,
        pub active: u32,
        pub alert: u32,
        pub expired: u32,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct DashboardStatistics {
        pub current_month_revenue: f64,
        pub monthly_revenue: Vec<MonthlyRevenue>,
        pub member_counts: MemberCounts,
        pub average_ticket: f64,
        pub revenue_goal: f64,
        pub goal_percentage: f64,
    }
}
