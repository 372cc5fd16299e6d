//! Monthly revenue goal setting.

use anyhow::Result;
use log::info;

use crate::backend::domain::error::DomainError;
use crate::backend::domain::models::settings::Settings;
use crate::backend::storage::{Connection, SettingsRepository, SettingsStorage};

#[derive(Clone)]
pub struct SettingsService<C: Connection> {
    settings_repository: SettingsRepository<C>,
}

impl<C: Connection> SettingsService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            settings_repository: SettingsRepository::new(connection),
        }
    }

    /// The configured goal, initialized to the default on first access
    pub fn get_revenue_goal(&self) -> Result<f64> {
        Ok(self.settings_repository.get_settings()?.monthly_revenue_goal)
    }

    pub fn set_revenue_goal(&self, goal: f64) -> Result<Settings> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(DomainError::Validation("Revenue goal must be positive".to_string()).into());
        }

        let mut settings = self.settings_repository.get_settings()?;
        settings.monthly_revenue_goal = goal;
        self.settings_repository.update_settings(&settings)?;

        info!("Monthly revenue goal set to {:.2}", goal);

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::settings::DEFAULT_MONTHLY_REVENUE_GOAL;
    use crate::backend::storage::MemoryConnection;

    #[test]
    fn test_default_then_set_goal() {
        let service = SettingsService::new(MemoryConnection::new());
        assert_eq!(service.get_revenue_goal().unwrap(), DEFAULT_MONTHLY_REVENUE_GOAL);

        service.set_revenue_goal(750_000.0).unwrap();
        assert_eq!(service.get_revenue_goal().unwrap(), 750_000.0);
    }

    #[test]
    fn test_rejects_non_positive_goal() {
        let service = SettingsService::new(MemoryConnection::new());
        for goal in [0.0, -1.0, f64::INFINITY] {
            let err = service.set_revenue_goal(goal).unwrap_err();
            assert!(matches!(DomainError::from_anyhow(&err), Some(DomainError::Validation(_))));
        }
        assert_eq!(service.get_revenue_goal().unwrap(), DEFAULT_MONTHLY_REVENUE_GOAL);
    }
}
