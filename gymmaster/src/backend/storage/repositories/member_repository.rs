use anyhow::Result;
use log::{debug, info};

use crate::backend::domain::models::member::Member as DomainMember;
use crate::backend::storage::traits::{Connection, MemberStorage, Table};

/// Member repository storing the whole member table through a connection
#[derive(Clone)]
pub struct MemberRepository<C: Connection> {
    connection: C,
}

impl<C: Connection> MemberRepository<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    fn read_members(&self) -> Result<Vec<DomainMember>> {
        self.connection.get_table(Table::Members)
    }

    fn write_members(&self, members: &[DomainMember]) -> Result<()> {
        self.connection.put_table(Table::Members, members)
    }
}

impl<C: Connection> MemberStorage for MemberRepository<C> {
    fn store_member(&self, member: &DomainMember) -> Result<()> {
        let mut members = self.read_members()?;
        members.push(member.clone());
        self.write_members(&members)?;
        info!("Stored member {} ({})", member.name, member.id);
        Ok(())
    }

    fn get_member(&self, member_id: &str) -> Result<Option<DomainMember>> {
        let member = self
            .read_members()?
            .into_iter()
            .find(|m| m.id == member_id);
        debug!("Lookup member {}: found={}", member_id, member.is_some());
        Ok(member)
    }

    fn list_members(&self) -> Result<Vec<DomainMember>> {
        self.read_members()
    }

    fn update_member(&self, member: &DomainMember) -> Result<bool> {
        let mut members = self.read_members()?;
        match members.iter_mut().find(|m| m.id == member.id) {
            Some(existing) => {
                *existing = member.clone();
                self.write_members(&members)?;
                info!("Updated member {} ({})", member.name, member.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete_member(&self, member_id: &str) -> Result<bool> {
        let mut members = self.read_members()?;
        let before = members.len();
        members.retain(|m| m.id != member_id);

        if members.len() == before {
            return Ok(false);
        }

        self.write_members(&members)?;
        info!("Deleted member {}", member_id);
        Ok(true)
    }
}
