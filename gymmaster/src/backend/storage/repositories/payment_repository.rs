use anyhow::Result;
use log::info;

use crate::backend::domain::models::payment::Payment as DomainPayment;
use crate::backend::storage::traits::{Connection, PaymentStorage, Table};

/// Append-only payment ledger stored through a connection
#[derive(Clone)]
pub struct PaymentRepository<C: Connection> {
    connection: C,
}

impl<C: Connection> PaymentRepository<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    fn read_payments(&self) -> Result<Vec<DomainPayment>> {
        self.connection.get_table(Table::Payments)
    }
}

impl<C: Connection> PaymentStorage for PaymentRepository<C> {
    fn store_payment(&self, payment: &DomainPayment) -> Result<()> {
        let mut payments = self.read_payments()?;
        payments.push(payment.clone());
        self.connection.put_table(Table::Payments, &payments)?;
        info!(
            "Stored payment {} of {:.2} for member {} ({})",
            payment.id, payment.amount, payment.member_id, payment.reference_month
        );
        Ok(())
    }

    fn list_payments(&self) -> Result<Vec<DomainPayment>> {
        self.read_payments()
    }

    fn list_payments_for_member(&self, member_id: &str) -> Result<Vec<DomainPayment>> {
        Ok(self
            .read_payments()?
            .into_iter()
            .filter(|p| p.member_id == member_id)
            .collect())
    }

    fn delete_payments_for_member(&self, member_id: &str) -> Result<u32> {
        let mut payments = self.read_payments()?;
        let before = payments.len();
        payments.retain(|p| p.member_id != member_id);
        let deleted = (before - payments.len()) as u32;

        if deleted > 0 {
            self.connection.put_table(Table::Payments, &payments)?;
            info!("Deleted {} payments for member {}", deleted, member_id);
        }

        Ok(deleted)
    }
}
