//! Payment ledger operations.
//!
//! Payments are append-only here; they disappear only through the member
//! delete cascade in `MemberService`. A payment's `member_id` is not checked
//! against the member table, so listings join the name at read time and fall
//! back to a placeholder.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::collections::HashMap;

use crate::backend::domain::calendar::{self, parse_date, ReferenceMonth};
use crate::backend::domain::commands::payments::{
    PaymentListResult, RecordPaymentCommand, RecordPaymentResult,
};
use crate::backend::domain::error::DomainError;
use crate::backend::domain::models::payment::{Payment, PaymentWithMember, UNKNOWN_MEMBER_NAME};
use crate::backend::storage::{
    Connection, MemberRepository, MemberStorage, PaymentRepository, PaymentStorage,
};

#[derive(Clone)]
pub struct PaymentService<C: Connection> {
    payment_repository: PaymentRepository<C>,
    member_repository: MemberRepository<C>,
}

impl<C: Connection> PaymentService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            payment_repository: PaymentRepository::new(connection.clone()),
            member_repository: MemberRepository::new(connection),
        }
    }

    /// Record a payment; the payment date defaults to today
    pub fn record_payment(&self, command: RecordPaymentCommand) -> Result<RecordPaymentResult> {
        self.record_payment_as_of(command, calendar::today())
    }

    pub fn record_payment_as_of(
        &self,
        command: RecordPaymentCommand,
        today: NaiveDate,
    ) -> Result<RecordPaymentResult> {
        info!(
            "Recording payment: member={}, amount={}, month={}",
            command.member_id, command.amount, command.reference_month
        );

        let member_id = command.member_id.trim();
        if member_id.is_empty() {
            return Err(DomainError::Validation("A member must be selected".to_string()).into());
        }

        if !command.amount.is_finite() || command.amount <= 0.0 {
            return Err(DomainError::Validation("Payment amount must be positive".to_string()).into());
        }

        let reference_month = ReferenceMonth::parse(&command.reference_month)?;

        let payment_date = match command.payment_date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => parse_date(date, "payment date")?,
            _ => today,
        };

        if self.member_repository.get_member(member_id)?.is_none() {
            warn!("Recording payment for unknown member: {}", member_id);
        }

        let payment = Payment {
            id: Payment::generate_id(),
            member_id: member_id.to_string(),
            payment_date,
            amount: command.amount,
            reference_month: reference_month.to_string(),
            payment_method: command.payment_method.trim().to_string(),
            notes: command.notes.unwrap_or_default(),
        };

        self.payment_repository.store_payment(&payment)?;

        info!("Recorded payment {} of {} for {}", payment.id, payment.amount, payment.reference_month);

        Ok(RecordPaymentResult { payment })
    }

    /// Every payment in insertion order, joined with the member's name
    pub fn list_payments(&self) -> Result<PaymentListResult> {
        let payments = self.payment_repository.list_payments()?;
        self.join_member_names(payments)
    }

    /// Payments recorded for one member, in insertion order
    pub fn list_member_payments(&self, member_id: &str) -> Result<PaymentListResult> {
        let payments = self.payment_repository.list_payments_for_member(member_id)?;
        self.join_member_names(payments)
    }

    fn join_member_names(&self, payments: Vec<Payment>) -> Result<PaymentListResult> {
        let names: HashMap<String, String> = self
            .member_repository
            .list_members()?
            .into_iter()
            .map(|m| (m.id, m.name))
            .collect();

        let payments = payments
            .into_iter()
            .map(|payment| {
                let member_name = names
                    .get(&payment.member_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_MEMBER_NAME.to_string());
                PaymentWithMember { payment, member_name }
            })
            .collect();

        Ok(PaymentListResult { payments })
    }
}
