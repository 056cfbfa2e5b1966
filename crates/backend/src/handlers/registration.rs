use axum::extract::{Json, Path};
use contracts::domain::instructors::InstructorRegisterDto;
use contracts::domain::students::StudentRegisterDto;
use contracts::enums::RegisterRole;
use contracts::system::users::{CreateAccountDto, RegisterAccountResponse, RegisterRoleResponse};

use crate::domain::{instructors, students};
use crate::shared::error::RegistrationError;
use crate::system::auth::extractor::CurrentUser;
use crate::system::handlers::auth::issue_tokens;
use crate::system::users::service as user_service;

/// Create a new account (public).
///
/// Mirrors the account form on the register page: on success the new
/// account is logged in and told to fill out one of the role forms.
pub async fn register_user(
    Json(dto): Json<CreateAccountDto>,
) -> Result<Json<RegisterAccountResponse>, RegistrationError> {
    let account = user_service::create_account(dto).await?;

    let auth = issue_tokens(&account)
        .await
        .map_err(RegistrationError::Internal)?;

    tracing::info!("Account created: {}", account.username);

    Ok(Json(RegisterAccountResponse {
        message: "User created, now fill out either a Student or Instructor form".to_string(),
        auth,
    }))
}

/// Register a student or instructor profile for the logged-in account.
///
/// The role comes in as its wire token; anything that does not parse to a
/// profile role is rejected up front, the same way the register page
/// rejects an unrecognized selector label.
pub async fn register_role(
    CurrentUser(claims): CurrentUser,
    Path(role): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<RegisterRoleResponse>, RegistrationError> {
    let parsed = RegisterRole::from_code(&role)
        .filter(RegisterRole::is_profile_role)
        .ok_or_else(|| RegistrationError::UnknownRole(role.clone()))?;

    match parsed {
        RegisterRole::Student => {
            let dto: StudentRegisterDto = serde_json::from_value(body)
                .map_err(|e| RegistrationError::InvalidForm(e.to_string()))?;
            students::service::register(&claims.sub, dto).await?;
        }
        RegisterRole::Instructor => {
            let dto: InstructorRegisterDto = serde_json::from_value(body)
                .map_err(|e| RegistrationError::InvalidForm(e.to_string()))?;
            instructors::service::register(&claims.sub, dto).await?;
        }
        RegisterRole::User => return Err(RegistrationError::UnknownRole(role)),
    }

    tracing::info!("{} profile created for {}", parsed, claims.username);

    Ok(Json(RegisterRoleResponse {
        message: format!(
            "Great, you just made your {} account, now you can participate in classes and submit assignments!",
            parsed.code()
        ),
    }))
}
