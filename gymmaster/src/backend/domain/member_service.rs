//! Member lifecycle operations.
//!
//! Members are created, read, updated and deleted here. Status is never
//! stored: every read derives it from the due date and the given day, so the
//! persisted record stays the single source of truth.

use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::backend::domain::calendar::{self, parse_date};
use crate::backend::domain::commands::members::{
    CreateMemberCommand, CreateMemberResult, DeleteMemberCommand, DeleteMemberResult,
    GetMemberCommand, GetMemberResult, ListMembersResult, MemberSearchQuery, UpdateMemberCommand,
    UpdateMemberResult,
};
use crate::backend::domain::error::DomainError;
use crate::backend::domain::models::member::Member as DomainMember;
use crate::backend::storage::{
    Connection, MemberRepository, MemberStorage, PaymentRepository, PaymentStorage,
};

/// Fields shared by the create and update commands, validated
struct MemberFields {
    name: String,
    due_date: NaiveDate,
    plan_price: f64,
}

/// Service for managing gym members
#[derive(Clone)]
pub struct MemberService<C: Connection> {
    member_repository: MemberRepository<C>,
    payment_repository: PaymentRepository<C>,
}

impl<C: Connection> MemberService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            member_repository: MemberRepository::new(connection.clone()),
            payment_repository: PaymentRepository::new(connection),
        }
    }

    /// Create a new member registered today
    pub fn create_member(&self, command: CreateMemberCommand) -> Result<CreateMemberResult> {
        self.create_member_as_of(command, calendar::today())
    }

    /// Create a new member registered on `today`
    pub fn create_member_as_of(
        &self,
        command: CreateMemberCommand,
        today: NaiveDate,
    ) -> Result<CreateMemberResult> {
        info!("Creating member: name={}, due_date={}", command.name, command.due_date);

        let fields = Self::validate_fields(&command.name, &command.due_date, command.plan_price)?;

        let member = DomainMember {
            id: DomainMember::generate_id(),
            name: fields.name,
            phone: command.phone.trim().to_string(),
            email: command.email.trim().to_string(),
            registration_date: today,
            due_date: fields.due_date,
            notes: command.notes.unwrap_or_default(),
            plan: command.plan.trim().to_string(),
            plan_price: fields.plan_price,
        };

        self.member_repository.store_member(&member)?;

        info!("Created member: {} with ID: {}", member.name, member.id);

        Ok(CreateMemberResult {
            member: member.with_status(today),
        })
    }

    /// Get a member by ID with its status for today
    pub fn get_member(&self, command: GetMemberCommand) -> Result<GetMemberResult> {
        self.get_member_as_of(command, calendar::today())
    }

    pub fn get_member_as_of(&self, command: GetMemberCommand, today: NaiveDate) -> Result<GetMemberResult> {
        let member = self.member_repository.get_member(&command.member_id)?;

        if member.is_none() {
            warn!("Member not found: {}", command.member_id);
        }

        Ok(GetMemberResult {
            member: member.map(|m| m.with_status(today)),
        })
    }

    /// List all members with their status for today
    pub fn list_members(&self) -> Result<ListMembersResult> {
        self.list_members_as_of(calendar::today())
    }

    pub fn list_members_as_of(&self, today: NaiveDate) -> Result<ListMembersResult> {
        let members: Vec<_> = self
            .member_repository
            .list_members()?
            .into_iter()
            .map(|m| m.with_status(today))
            .collect();

        debug!("Listed {} members as of {}", members.len(), today);

        Ok(ListMembersResult { members })
    }

    /// Filter members by name substring and/or status
    pub fn search_members(&self, query: MemberSearchQuery) -> Result<ListMembersResult> {
        self.search_members_as_of(query, calendar::today())
    }

    pub fn search_members_as_of(
        &self,
        query: MemberSearchQuery,
        today: NaiveDate,
    ) -> Result<ListMembersResult> {
        let needle = query
            .name
            .as_deref()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty());

        let members = self
            .list_members_as_of(today)?
            .members
            .into_iter()
            .filter(|m| match &needle {
                Some(needle) => m.member.name.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .filter(|m| query.status.map_or(true, |status| m.status == status))
            .collect();

        Ok(ListMembersResult { members })
    }

    /// Replace a member's mutable fields, keeping its ID and registration date
    pub fn update_member(&self, command: UpdateMemberCommand) -> Result<UpdateMemberResult> {
        self.update_member_as_of(command, calendar::today())
    }

    pub fn update_member_as_of(
        &self,
        command: UpdateMemberCommand,
        today: NaiveDate,
    ) -> Result<UpdateMemberResult> {
        info!("Updating member: {}", command.member_id);

        let fields = Self::validate_fields(&command.name, &command.due_date, command.plan_price)?;

        let mut member = self
            .member_repository
            .get_member(&command.member_id)?
            .ok_or_else(|| DomainError::MemberNotFound(command.member_id.clone()))?;

        member.name = fields.name;
        member.phone = command.phone.trim().to_string();
        member.email = command.email.trim().to_string();
        member.due_date = fields.due_date;
        member.plan = command.plan.trim().to_string();
        member.plan_price = fields.plan_price;
        member.notes = command.notes.unwrap_or_default();

        if !self.member_repository.update_member(&member)? {
            return Err(DomainError::MemberNotFound(command.member_id).into());
        }

        info!("Updated member: {} with ID: {}", member.name, member.id);

        Ok(UpdateMemberResult {
            member: member.with_status(today),
        })
    }

    /// Delete a member and every payment that references it
    pub fn delete_member(&self, command: DeleteMemberCommand) -> Result<DeleteMemberResult> {
        info!("Deleting member: {}", command.member_id);

        let member_removed = self.member_repository.delete_member(&command.member_id)?;
        let deleted_payments = self
            .payment_repository
            .delete_payments_for_member(&command.member_id)?;

        if !member_removed {
            warn!("Delete requested for unknown member: {}", command.member_id);
        }

        info!(
            "Deleted member {} (removed={}, payments={})",
            command.member_id, member_removed, deleted_payments
        );

        Ok(DeleteMemberResult {
            member_removed,
            deleted_payments,
            success_message: "Member deleted successfully".to_string(),
        })
    }

    /// Validate the required member fields
    fn validate_fields(name: &str, due_date: &str, plan_price: f64) -> Result<MemberFields, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::Validation("Member name cannot be empty".to_string()));
        }

        if due_date.trim().is_empty() {
            return Err(DomainError::Validation("Due date is required".to_string()));
        }
        let due_date = parse_date(due_date, "due date")?;

        if !plan_price.is_finite() || plan_price <= 0.0 {
            return Err(DomainError::Validation("Plan price must be positive".to_string()));
        }

        Ok(MemberFields {
            name: name.to_string(),
            due_date,
            plan_price,
        })
    }
}
