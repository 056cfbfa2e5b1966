use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{Account, CreateAccountDto};

use super::repository;
use crate::shared::error::RegistrationError;
use crate::system::auth::password;

/// Create a new account from the register-page form
pub async fn create_account(dto: CreateAccountDto) -> Result<Account, RegistrationError> {
    dto.validate().map_err(RegistrationError::InvalidForm)?;

    password::validate_password_strength(&dto.password)
        .map_err(|e| RegistrationError::InvalidForm(e.to_string()))?;

    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(RegistrationError::UsernameTaken);
    }

    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    let account = Account {
        id: user_id,
        username: dto.username,
        email: dto.email,
        first_name: dto.first_name,
        last_name: dto.last_name,
        is_student: false,
        is_instructor: false,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&account, &password_hash).await?;

    Ok(account)
}

/// Get account by ID
pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    repository::get_by_id(id).await
}

/// Verify account credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<Account>> {
    let account = match repository::get_by_username(username).await? {
        Some(a) => a,
        None => return Ok(None),
    };

    let password_hash = repository::get_password_hash(&account.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&account.id).await;

    Ok(Some(account))
}
