//! gymmaster/src/backend/io/mappers/member_mapper.rs

use crate::backend::domain::commands::members::{
    CreateMemberCommand, DeleteMemberResult, ListMembersResult, MemberSearchQuery,
    UpdateMemberCommand,
};
use crate::backend::domain::models::member::{MemberStatus as DomainMemberStatus, MemberWithStatus};
use crate::backend::io::mappers::DATE_FORMAT;
use shared::{
    CreateMemberRequest, DeleteMemberResponse, Member as SharedMember, MemberListResponse,
    MemberResponse, MemberSearchRequest, MemberStatus as SharedMemberStatus, UpdateMemberRequest,
};

/// Mapper between shared member DTOs and domain member types.
pub struct MemberMapper;

impl MemberMapper {
    pub fn status_to_dto(status: DomainMemberStatus) -> SharedMemberStatus {
        match status {
            DomainMemberStatus::Active => SharedMemberStatus::Active,
            DomainMemberStatus::Alert => SharedMemberStatus::Alert,
            DomainMemberStatus::Expired => SharedMemberStatus::Expired,
        }
    }

    pub fn status_to_domain(status: SharedMemberStatus) -> DomainMemberStatus {
        match status {
            SharedMemberStatus::Active => DomainMemberStatus::Active,
            SharedMemberStatus::Alert => DomainMemberStatus::Alert,
            SharedMemberStatus::Expired => DomainMemberStatus::Expired,
        }
    }

    /// Converts a domain member with its derived status to a shared Member DTO.
    pub fn to_dto(domain: MemberWithStatus) -> SharedMember {
        let member = domain.member;
        SharedMember {
            id: member.id,
            name: member.name,
            phone: member.phone,
            email: member.email,
            registration_date: member.registration_date.format(DATE_FORMAT).to_string(),
            due_date: member.due_date.format(DATE_FORMAT).to_string(),
            status: Self::status_to_dto(domain.status),
            days_remaining: domain.days_remaining,
            notes: member.notes,
            plan: member.plan,
            plan_price: member.plan_price,
        }
    }

    pub fn to_member_list_dto(result: ListMembersResult) -> MemberListResponse {
        MemberListResponse {
            members: result.members.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_member_response_dto(domain: MemberWithStatus, message: &str) -> MemberResponse {
        MemberResponse {
            member: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }

    pub fn to_delete_response_dto(result: DeleteMemberResult) -> DeleteMemberResponse {
        DeleteMemberResponse {
            deleted_payments: result.deleted_payments,
            success_message: result.success_message,
        }
    }

    pub fn to_create_command(request: CreateMemberRequest) -> CreateMemberCommand {
        CreateMemberCommand {
            name: request.name,
            phone: request.phone,
            email: request.email,
            due_date: request.due_date,
            plan: request.plan,
            plan_price: request.plan_price,
            notes: request.notes,
        }
    }

    pub fn to_update_command(request: UpdateMemberRequest) -> UpdateMemberCommand {
        UpdateMemberCommand {
            member_id: request.member_id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            due_date: request.due_date,
            plan: request.plan,
            plan_price: request.plan_price,
            notes: request.notes,
        }
    }

    pub fn to_search_query(request: MemberSearchRequest) -> MemberSearchQuery {
        MemberSearchQuery {
            name: request.name,
            status: request.status.map(Self::status_to_domain),
        }
    }
}
