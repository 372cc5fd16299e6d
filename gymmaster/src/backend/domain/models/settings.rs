//! Application-wide settings singleton.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_REVENUE_GOAL: f64 = 500_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Target revenue per reference month
    pub monthly_revenue_goal: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            monthly_revenue_goal: DEFAULT_MONTHLY_REVENUE_GOAL,
        }
    }
}
