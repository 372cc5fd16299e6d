//! gymmaster/src/backend/io/mappers/payment_mapper.rs

use crate::backend::domain::commands::payments::{PaymentListResult, RecordPaymentCommand, RecordPaymentResult};
use crate::backend::domain::models::payment::PaymentWithMember;
use crate::backend::io::mappers::DATE_FORMAT;
use shared::{
    Payment as SharedPayment, PaymentListResponse, RecordPaymentRequest, RecordPaymentResponse,
};

/// Mapper between shared payment DTOs and domain payment types.
pub struct PaymentMapper;

impl PaymentMapper {
    pub fn to_dto(domain: PaymentWithMember) -> SharedPayment {
        let payment = domain.payment;
        SharedPayment {
            id: payment.id,
            member_id: payment.member_id,
            member_name: domain.member_name,
            payment_date: payment.payment_date.format(DATE_FORMAT).to_string(),
            amount: payment.amount,
            reference_month: payment.reference_month,
            payment_method: payment.payment_method,
            notes: payment.notes,
        }
    }

    pub fn to_payment_list_dto(result: PaymentListResult) -> PaymentListResponse {
        PaymentListResponse {
            payments: result.payments.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_record_response_dto(result: RecordPaymentResult) -> RecordPaymentResponse {
        RecordPaymentResponse {
            payment_id: result.payment.id,
            success_message: "Payment recorded successfully".to_string(),
        }
    }

    pub fn to_record_command(request: RecordPaymentRequest) -> RecordPaymentCommand {
        RecordPaymentCommand {
            member_id: request.member_id,
            payment_date: request.payment_date,
            amount: request.amount,
            reference_month: request.reference_month,
            payment_method: request.payment_method,
            notes: request.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::payment::{Payment, UNKNOWN_MEMBER_NAME};
    use chrono::NaiveDate;

    #[test]
    fn test_to_dto_keeps_placeholder_name() {
        let dto = PaymentMapper::to_dto(PaymentWithMember {
            payment: Payment {
                id: "payment::1".to_string(),
                member_id: "member::gone".to_string(),
                payment_date: NaiveDate::from_ymd_opt(2024, 7, 9).unwrap(),
                amount: 15000.0,
                reference_month: "2024-07".to_string(),
                payment_method: "Transfer".to_string(),
                notes: String::new(),
            },
            member_name: UNKNOWN_MEMBER_NAME.to_string(),
        });
        assert_eq!(dto.member_name, "Member not found");
        assert_eq!(dto.payment_date, "2024-07-09");
        assert_eq!(dto.reference_month, "2024-07");
    }
}
