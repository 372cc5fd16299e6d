use anyhow::Result;
use log::info;

use crate::backend::domain::models::user::User as DomainUser;
use crate::backend::storage::traits::{Connection, Table, UserStorage};

#[derive(Clone)]
pub struct UserRepository<C: Connection> {
    connection: C,
}

impl<C: Connection> UserRepository<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }
}

impl<C: Connection> UserStorage for UserRepository<C> {
    fn store_user(&self, user: &DomainUser) -> Result<()> {
        let mut users: Vec<DomainUser> = self.connection.get_table(Table::Users)?;
        users.push(user.clone());
        self.connection.put_table(Table::Users, &users)?;
        info!("Stored user {} ({})", user.email, user.id);
        Ok(())
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<DomainUser>> {
        let users: Vec<DomainUser> = self.connection.get_table(Table::Users)?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    fn list_users(&self) -> Result<Vec<DomainUser>> {
        self.connection.get_table(Table::Users)
    }
}
