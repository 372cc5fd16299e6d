//! Revenue and membership statistics for the dashboard.
//!
//! Revenue is attributed by a payment's reference month, not its payment
//! date. Every figure here is computed from the stored tables on each call.

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use std::collections::HashMap;

use crate::backend::domain::calendar::{self, ReferenceMonth};
use crate::backend::domain::commands::statistics::{DashboardStatistics, MemberCounts, MonthlyRevenue};
use crate::backend::domain::models::member::{Member, MemberStatus};
use crate::backend::domain::models::payment::Payment;
use crate::backend::storage::{
    Connection, MemberRepository, MemberStorage, PaymentRepository, PaymentStorage,
    SettingsRepository, SettingsStorage,
};

/// Number of months in the revenue chart, current month included
pub const REVENUE_SERIES_MONTHS: usize = 6;

#[derive(Clone)]
pub struct StatisticsService<C: Connection> {
    member_repository: MemberRepository<C>,
    payment_repository: PaymentRepository<C>,
    settings_repository: SettingsRepository<C>,
}

impl<C: Connection> StatisticsService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            member_repository: MemberRepository::new(connection.clone()),
            payment_repository: PaymentRepository::new(connection.clone()),
            settings_repository: SettingsRepository::new(connection),
        }
    }

    /// Revenue attributed to the current month
    pub fn current_month_revenue(&self) -> Result<f64> {
        self.current_month_revenue_as_of(calendar::today())
    }

    pub fn current_month_revenue_as_of(&self, today: NaiveDate) -> Result<f64> {
        let payments = self.payment_repository.list_payments()?;
        Ok(revenue_for_month(&payments, ReferenceMonth::from_date(today)))
    }

    /// Revenue for the current month and the five before it, oldest first
    pub fn six_month_revenue(&self) -> Result<Vec<MonthlyRevenue>> {
        self.six_month_revenue_as_of(calendar::today())
    }

    pub fn six_month_revenue_as_of(&self, today: NaiveDate) -> Result<Vec<MonthlyRevenue>> {
        let payments = self.payment_repository.list_payments()?;
        Ok(revenue_series(&payments, ReferenceMonth::from_date(today)))
    }

    pub fn member_counts(&self) -> Result<MemberCounts> {
        self.member_counts_as_of(calendar::today())
    }

    pub fn member_counts_as_of(&self, today: NaiveDate) -> Result<MemberCounts> {
        let members = self.member_repository.list_members()?;
        Ok(count_members(&members, today))
    }

    /// Mean plan price over all members, 0 when there are none
    pub fn average_ticket(&self) -> Result<f64> {
        let prices: Vec<f64> = self
            .member_repository
            .list_members()?
            .iter()
            .map(|m| m.plan_price)
            .collect();
        Ok(average(&prices))
    }

    /// Current-month revenue as a percentage of the configured goal
    pub fn goal_percentage(&self) -> Result<f64> {
        self.goal_percentage_as_of(calendar::today())
    }

    pub fn goal_percentage_as_of(&self, today: NaiveDate) -> Result<f64> {
        let goal = self.settings_repository.get_settings()?.monthly_revenue_goal;
        let revenue = self.current_month_revenue_as_of(today)?;
        Ok(percentage_of_goal(revenue, goal))
    }

    /// Everything the dashboard shows, computed from one read of each table
    pub fn dashboard_statistics(&self) -> Result<DashboardStatistics> {
        self.dashboard_statistics_as_of(calendar::today())
    }

    pub fn dashboard_statistics_as_of(&self, today: NaiveDate) -> Result<DashboardStatistics> {
        let payments = self.payment_repository.list_payments()?;
        let members = self.member_repository.list_members()?;
        let revenue_goal = self.settings_repository.get_settings()?.monthly_revenue_goal;

        let current_month = ReferenceMonth::from_date(today);
        let current_month_revenue = revenue_for_month(&payments, current_month);

        let member_counts = count_members(&members, today);

        let prices: Vec<f64> = members.iter().map(|m| m.plan_price).collect();

        debug!(
            "Dashboard as of {}: {} members, {} payments",
            today,
            members.len(),
            payments.len()
        );

        Ok(DashboardStatistics {
            current_month_revenue,
            monthly_revenue: revenue_series(&payments, current_month),
            member_counts,
            average_ticket: average(&prices),
            revenue_goal,
            goal_percentage: percentage_of_goal(current_month_revenue, revenue_goal),
        })
    }
}

fn revenue_for_month(payments: &[Payment], month: ReferenceMonth) -> f64 {
    let label = month.to_string();
    payments
        .iter()
        .filter(|p| p.reference_month == label)
        .map(|p| p.amount)
        .sum()
}

fn revenue_series(payments: &[Payment], current: ReferenceMonth) -> Vec<MonthlyRevenue> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for payment in payments {
        *totals.entry(payment.reference_month.as_str()).or_insert(0.0) += payment.amount;
    }

    current
        .trailing(REVENUE_SERIES_MONTHS)
        .into_iter()
        .map(|month| MonthlyRevenue {
            total: totals.get(month.to_string().as_str()).copied().unwrap_or(0.0),
            month,
        })
        .collect()
}

fn count_members(members: &[Member], today: NaiveDate) -> MemberCounts {
    let mut counts = MemberCounts::default();
    for member in members {
        counts.total += 1;
        match MemberStatus::derive(member.due_date, today) {
            MemberStatus::Active => counts.active += 1,
            MemberStatus::Alert => counts.alert += 1,
            MemberStatus::Expired => counts.expired += 1,
        }
    }
    counts
}

fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn percentage_of_goal(revenue: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        0.0
    } else {
        revenue / goal * 100.0
    }
}
