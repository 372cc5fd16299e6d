//! gymmaster/src/backend/io/mappers/statistics_mapper.rs

use crate::backend::domain::commands::statistics::{DashboardStatistics, MonthlyRevenue};
use crate::backend::domain::models::notification::{
    Notification as DomainNotification, NotificationKind as DomainNotificationKind,
};
use crate::backend::domain::models::settings::Settings;
use shared::{
    DashboardStats, MonthlyRevenue as SharedMonthlyRevenue, Notification as SharedNotification,
    NotificationKind as SharedNotificationKind, NotificationListResponse, RevenueGoalResponse,
    UpdateRevenueGoalRequest,
};

/// Mapper for dashboard statistics, notifications and the revenue goal.
pub struct StatisticsMapper;

impl StatisticsMapper {
    pub fn to_monthly_revenue_dto(domain: MonthlyRevenue) -> SharedMonthlyRevenue {
        SharedMonthlyRevenue {
            month: domain.month.to_string(),
            revenue: domain.total,
        }
    }

    pub fn to_dashboard_dto(domain: DashboardStatistics) -> DashboardStats {
        DashboardStats {
            current_month_revenue: domain.current_month_revenue,
            monthly_revenue: domain
                .monthly_revenue
                .into_iter()
                .map(Self::to_monthly_revenue_dto)
                .collect(),
            total_members: domain.member_counts.total,
            active_members: domain.member_counts.active,
            alert_members: domain.member_counts.alert,
            expired_members: domain.member_counts.expired,
            average_ticket: domain.average_ticket,
            revenue_goal: domain.revenue_goal,
            goal_percentage: domain.goal_percentage,
        }
    }

    pub fn to_notification_dto(domain: DomainNotification) -> SharedNotification {
        let message = domain.message();
        SharedNotification {
            kind: match domain.kind {
                DomainNotificationKind::Expired => SharedNotificationKind::Expired,
                DomainNotificationKind::DueToday => SharedNotificationKind::DueToday,
                DomainNotificationKind::DueSoon => SharedNotificationKind::DueSoon,
            },
            member_id: domain.member_id,
            member_name: domain.member_name,
            days_remaining: domain.days_remaining,
            message,
        }
    }

    pub fn to_notification_list_dto(domain: Vec<DomainNotification>) -> NotificationListResponse {
        NotificationListResponse {
            notifications: domain.into_iter().map(Self::to_notification_dto).collect(),
        }
    }

    pub fn to_revenue_goal_dto(settings: &Settings) -> RevenueGoalResponse {
        RevenueGoalResponse {
            monthly_revenue_goal: settings.monthly_revenue_goal,
        }
    }

    pub fn goal_from_request(request: UpdateRevenueGoalRequest) -> f64 {
        request.monthly_revenue_goal
    }
}
