use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_student: bool,
    pub is_instructor: bool,
    pub created_at: String,
    pub updated_at: String,
    pub last_login_at: Option<String>,
}

/// DTO for the account registration form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAccountDto {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub confirmation: String,
}

impl CreateAccountDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username cannot be empty".into());
        }
        if !self.email.contains('@') {
            return Err("Invalid email format".into());
        }
        if self.password != self.confirmation {
            return Err("Passwords do not match, please correct it.".into());
        }
        Ok(())
    }
}

/// Response to a successful account registration; the new account is
/// logged in right away, so a token pair rides along.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAccountResponse {
    pub message: String,
    pub auth: crate::system::auth::LoginResponse,
}

/// Response to a successful role registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRoleResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateAccountDto {
        CreateAccountDto {
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            password: "hunter2hunter2".into(),
            confirmation: "hunter2hunter2".into(),
        }
    }

    #[test]
    fn test_valid_dto() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut dto = valid_dto();
        dto.username = "   ".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_bad_email_rejected() {
        let mut dto = valid_dto();
        dto.email = "not-an-email".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let mut dto = valid_dto();
        dto.confirmation = "different".into();
        let err = dto.validate().unwrap_err();
        assert!(err.contains("Passwords do not match"));
    }
}
