//! Due-date notifications for members whose plan runs out within the alert
//! window. Expired members are left to the member list's status filter.

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;

use crate::backend::domain::calendar;
use crate::backend::domain::models::member::{MemberStatus, ALERT_WINDOW_DAYS};
use crate::backend::domain::models::notification::Notification;
use crate::backend::storage::{Connection, MemberRepository, MemberStorage};

#[derive(Clone)]
pub struct NotificationService<C: Connection> {
    member_repository: MemberRepository<C>,
}

impl<C: Connection> NotificationService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            member_repository: MemberRepository::new(connection),
        }
    }

    pub fn list_notifications(&self) -> Result<Vec<Notification>> {
        self.list_notifications_as_of(calendar::today())
    }

    /// One notification per non-expired member due within the alert window,
    /// in member insertion order
    pub fn list_notifications_as_of(&self, today: NaiveDate) -> Result<Vec<Notification>> {
        let notifications: Vec<Notification> = self
            .member_repository
            .list_members()?
            .into_iter()
            .map(|m| m.with_status(today))
            .filter(|m| m.status != MemberStatus::Expired && m.days_remaining <= ALERT_WINDOW_DAYS)
            .map(|m| Notification::for_member(&m))
            .collect();

        debug!("{} notifications as of {}", notifications.len(), today);

        Ok(notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::member::Member;
    use crate::backend::domain::models::notification::NotificationKind;
    use crate::backend::storage::MemoryConnection;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn store(repo: &MemberRepository<MemoryConnection>, name: &str, due_in_days: i64) {
        repo.store_member(&Member {
            id: Member::generate_id(),
            name: name.to_string(),
            phone: String::new(),
            email: String::new(),
            registration_date: today(),
            due_date: today() + Duration::days(due_in_days),
            notes: String::new(),
            plan: "Mensal".to_string(),
            plan_price: 100.0,
        })
        .unwrap();
    }

    #[test]
    fn test_notifications_cover_alert_window_only() {
        let connection = MemoryConnection::new();
        let repo = MemberRepository::new(connection.clone());
        store(&repo, "Expired", -1);
        store(&repo, "Today", 0);
        store(&repo, "Tomorrow", 1);
        store(&repo, "Week", 7);
        store(&repo, "Later", 8);

        let service = NotificationService::new(connection);
        let notifications = service.list_notifications_as_of(today()).unwrap();

        let messages: Vec<String> = notifications.iter().map(|n| n.message()).collect();
        assert_eq!(
            messages,
            vec!["Today - due today!", "Tomorrow - due in 1 day", "Week - due in 7 days"]
        );
        assert_eq!(notifications[0].kind, NotificationKind::DueToday);
        assert!(notifications.iter().all(|n| n.kind != NotificationKind::Expired));
    }

    #[test]
    fn test_no_members_no_notifications() {
        let service = NotificationService::new(MemoryConnection::new());
        assert!(service.list_notifications_as_of(today()).unwrap().is_empty());
    }
}
