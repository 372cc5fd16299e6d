use anyhow::Result;
use log::info;

use crate::backend::domain::models::settings::Settings as DomainSettings;
use crate::backend::storage::traits::{Connection, SettingsStorage, Singleton};

#[derive(Clone)]
pub struct SettingsRepository<C: Connection> {
    connection: C,
}

impl<C: Connection> SettingsRepository<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }
}

impl<C: Connection> SettingsStorage for SettingsRepository<C> {
    fn get_settings(&self) -> Result<DomainSettings> {
        self.connection.get_singleton(Singleton::Settings)
    }

    fn update_settings(&self, settings: &DomainSettings) -> Result<()> {
        self.connection.put_singleton(Singleton::Settings, settings)?;
        info!("Updated settings: monthly revenue goal = {:.2}", settings.monthly_revenue_goal);
        Ok(())
    }
}
