//! Command-line inspection of a GymMaster data directory.
//!
//! Prints the dashboard figures and the due-date notifications for today.
//! The data directory is taken from `GYMMASTER_DATA_DIR` or the platform
//! data directory.

use log::info;

use gymmaster::backend::io::StatisticsMapper;
use gymmaster::backend::Backend;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Starting GymMaster");

    let backend = Backend::open_default()?;

    let stats = StatisticsMapper::to_dashboard_dto(backend.statistics_service.dashboard_statistics()?);
    println!("Current month revenue: {:.2}", stats.current_month_revenue);
    println!(
        "Goal: {:.2} ({:.1}% reached)",
        stats.revenue_goal, stats.goal_percentage
    );
    println!(
        "Members: {} total, {} active, {} alert, {} expired",
        stats.total_members, stats.active_members, stats.alert_members, stats.expired_members
    );
    println!("Average ticket: {:.2}", stats.average_ticket);

    println!("\nRevenue by month:");
    for month in &stats.monthly_revenue {
        println!("  {}  {:>12.2}", month.month, month.revenue);
    }

    let notifications =
        StatisticsMapper::to_notification_list_dto(backend.notification_service.list_notifications()?);
    if notifications.notifications.is_empty() {
        println!("\nNo upcoming due dates.");
    } else {
        println!("\nNotifications:");
        for notification in &notifications.notifications {
            println!("  {}", notification.message);
        }
    }

    Ok(())
}
