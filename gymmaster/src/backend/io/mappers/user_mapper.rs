//! gymmaster/src/backend/io/mappers/user_mapper.rs

use crate::backend::domain::commands::users::{LoginCommand, RegisterUserCommand};
use crate::backend::domain::models::user::User as DomainUser;
use shared::{LoginRequest, RegisterUserRequest, UserProfile};

/// Mapper between shared user DTOs and domain users. The password hash never
/// leaves the domain.
pub struct UserMapper;

impl UserMapper {
    pub fn to_profile_dto(domain: DomainUser) -> UserProfile {
        UserProfile {
            id: domain.id,
            name: domain.name,
            email: domain.email,
            phone: domain.phone,
            role: domain.role.as_str().to_string(),
        }
    }

    pub fn to_register_command(request: RegisterUserRequest) -> RegisterUserCommand {
        RegisterUserCommand {
            name: request.name,
            email: request.email,
            phone: request.phone,
            password: request.password,
            confirm_password: request.confirm_password,
        }
    }

    pub fn to_login_command(request: LoginRequest) -> LoginCommand {
        LoginCommand {
            email: request.email,
            password: request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::user::UserRole;
    use chrono::NaiveDate;

    #[test]
    fn test_profile_omits_password_hash() {
        let profile = UserMapper::to_profile_dto(DomainUser {
            id: "user::1".to_string(),
            name: "Carla".to_string(),
            email: "carla@gym.ao".to_string(),
            phone: String::new(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            role: UserRole::Admin,
        });
        assert_eq!(profile.role, "admin");

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("argon2"));
    }
}
