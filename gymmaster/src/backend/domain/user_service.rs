//! Administrator accounts: first-access registration and login.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::backend::domain::calendar;
use crate::backend::domain::commands::users::{
    LoginCommand, LoginResult, RegisterUserCommand, RegisterUserResult,
};
use crate::backend::domain::error::DomainError;
use crate::backend::domain::models::user::{User, UserRole};
use crate::backend::domain::password::{hash_password, verify_password};
use crate::backend::storage::{Connection, UserRepository, UserStorage};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Clone)]
pub struct UserService<C: Connection> {
    user_repository: UserRepository<C>,
}

impl<C: Connection> UserService<C> {
    pub fn new(connection: C) -> Self {
        Self {
            user_repository: UserRepository::new(connection),
        }
    }

    /// Whether an administrator account exists yet
    pub fn has_users(&self) -> Result<bool> {
        Ok(!self.user_repository.list_users()?.is_empty())
    }

    pub fn register_user(&self, command: RegisterUserCommand) -> Result<RegisterUserResult> {
        self.register_user_as_of(command, calendar::today())
    }

    pub fn register_user_as_of(
        &self,
        command: RegisterUserCommand,
        today: NaiveDate,
    ) -> Result<RegisterUserResult> {
        let name = command.name.trim();
        let email = command.email.trim();
        info!("Registering user: {}", email);

        if name.is_empty() || email.is_empty() || command.password.is_empty() {
            return Err(DomainError::Validation(
                "Name, email and password are required".to_string(),
            )
            .into());
        }

        if command.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ))
            .into());
        }

        if let Some(confirmation) = &command.confirm_password {
            if *confirmation != command.password {
                return Err(DomainError::Validation("Passwords do not match".to_string()).into());
            }
        }

        if self.user_repository.get_user_by_email(email)?.is_some() {
            warn!("Registration rejected, email already in use: {}", email);
            return Err(DomainError::DuplicateEmail(email.to_string()).into());
        }

        let user = User {
            id: User::generate_id(),
            name: name.to_string(),
            email: email.to_string(),
            phone: command.phone.trim().to_string(),
            password_hash: hash_password(&command.password)?,
            created_at: today,
            role: UserRole::Admin,
        };

        self.user_repository.store_user(&user)?;

        info!("Registered user {} with ID: {}", user.email, user.id);

        Ok(RegisterUserResult { user })
    }

    /// Look up the user and check the password; a miss is `None`, not an error
    pub fn verify_login(&self, command: LoginCommand) -> Result<LoginResult> {
        let email = command.email.trim();

        let user = match self.user_repository.get_user_by_email(email)? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email: {}", email);
                return Ok(LoginResult { user: None });
            }
        };

        if verify_password(&command.password, &user.password_hash)? {
            info!("User logged in: {}", user.email);
            Ok(LoginResult { user: Some(user) })
        } else {
            warn!("Wrong password for: {}", email);
            Ok(LoginResult { user: None })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use crate::backend::storage::MemoryConnection;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn register_command(email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand {
            name: "Carla Mendes".to_string(),
            email: email.to_string(),
            phone: "923 000 111".to_string(),
            password: password.to_string(),
            confirm_password: Some(password.to_string()),
        }
    }

    fn login(email: &str, password: &str) -> LoginCommand {
        LoginCommand {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_and_login() {
        let service = UserService::new(MemoryConnection::new());
        assert!(!service.has_users().unwrap());

        let user = service
            .register_user_as_of(register_command("carla@gym.ao", "segredo"), today())
            .unwrap()
            .user;
        assert!(service.has_users().unwrap());
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.created_at, today());
        assert_ne!(user.password_hash, "segredo");

        let logged_in = service.verify_login(login("carla@gym.ao", "segredo")).unwrap().user;
        assert_eq!(logged_in.map(|u| u.id), Some(user.id));

        assert!(service.verify_login(login("carla@gym.ao", "errado")).unwrap().user.is_none());
        assert!(service.verify_login(login("nobody@gym.ao", "segredo")).unwrap().user.is_none());
    }

    #[test]
    fn test_register_validation() {
        let service = UserService::new(MemoryConnection::new());

        let mut missing_name = register_command("a@gym.ao", "segredo");
        missing_name.name = " ".to_string();
        assert!(service.register_user_as_of(missing_name, today()).is_err());

        assert!(service.register_user_as_of(register_command("", "segredo"), today()).is_err());

        let err = service
            .register_user_as_of(register_command("a@gym.ao", "12345"), today())
            .unwrap_err();
        assert!(matches!(DomainError::from_anyhow(&err), Some(DomainError::Validation(_))));

        let mut mismatch = register_command("a@gym.ao", "segredo");
        mismatch.confirm_password = Some("segredo!".to_string());
        assert!(service.register_user_as_of(mismatch, today()).is_err());

        let mut no_confirmation = register_command("a@gym.ao", "segredo");
        no_confirmation.confirm_password = None;
        assert!(service.register_user_as_of(no_confirmation, today()).is_ok());
    }

    #[test]
    fn test_duplicate_email_leaves_table_unchanged() {
        let env = TestEnvironment::new().unwrap();
        let service = UserService::new(env.connection.clone());
        service
            .register_user_as_of(register_command("carla@gym.ao", "segredo"), today())
            .unwrap();
        let before = std::fs::read_to_string(env.base_path.join("users.csv")).unwrap();

        let err = service
            .register_user_as_of(register_command("carla@gym.ao", "outra-senha"), today())
            .unwrap_err();
        assert_eq!(
            DomainError::from_anyhow(&err),
            Some(&DomainError::DuplicateEmail("carla@gym.ao".to_string()))
        );

        let after = std::fs::read_to_string(env.base_path.join("users.csv")).unwrap();
        assert_eq!(before, after);

        // Emails are compared exactly
        service
            .register_user_as_of(register_command("Carla@gym.ao", "segredo"), today())
            .unwrap();
        let reopened = UserService::new(env.reopen().unwrap());
        assert!(reopened.verify_login(login("Carla@gym.ao", "segredo")).unwrap().user.is_some());
    }
}
