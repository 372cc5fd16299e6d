//! Due-date notifications produced for the dashboard.

use crate::backend::domain::models::member::MemberWithStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Expired,
    DueToday,
    DueSoon,
}

impl NotificationKind {
    pub fn from_days_remaining(days_remaining: i64) -> Self {
        match days_remaining {
            d if d < 0 => NotificationKind::Expired,
            0 => NotificationKind::DueToday,
            _ => NotificationKind::DueSoon,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub member_id: String,
    pub member_name: String,
    pub days_remaining: i64,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn for_member(tracked: &MemberWithStatus) -> Self {
        Self {
            member_id: tracked.member.id.clone(),
            member_name: tracked.member.name.clone(),
            days_remaining: tracked.days_remaining,
            kind: NotificationKind::from_days_remaining(tracked.days_remaining),
        }
    }

    /// Human-readable line for the notification panel
    pub fn message(&self) -> String {
        match self.kind {
            NotificationKind::Expired => format!("{} - expired", self.member_name),
            NotificationKind::DueToday => format!("{} - due today!", self.member_name),
            NotificationKind::DueSoon if self.days_remaining == 1 => {
                format!("{} - due in 1 day", self.member_name)
            }
            NotificationKind::DueSoon => {
                format!("{} - due in {} days", self.member_name, self.days_remaining)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(days_remaining: i64) -> Notification {
        Notification {
            member_id: "member::1".to_string(),
            member_name: "Bruno".to_string(),
            days_remaining,
            kind: NotificationKind::from_days_remaining(days_remaining),
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(notification(-2).message(), "Bruno - expired");
        assert_eq!(notification(0).message(), "Bruno - due today!");
        assert_eq!(notification(1).message(), "Bruno - due in 1 day");
        assert_eq!(notification(5).message(), "Bruno - due in 5 days");
    }
}
