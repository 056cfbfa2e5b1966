use chrono::Utc;
use contracts::domain::instructors::{InstructorProfile, InstructorRegisterDto};

use super::repository;
use crate::shared::error::RegistrationError;
use crate::system::users::repository as users_repository;
use contracts::enums::RegisterRole;

/// Register an instructor profile for an existing account.
pub async fn register(
    user_id: &str,
    dto: InstructorRegisterDto,
) -> Result<InstructorProfile, RegistrationError> {
    dto.validate().map_err(RegistrationError::InvalidForm)?;

    let account = users_repository::get_by_id(user_id)
        .await?
        .ok_or(RegistrationError::AccountNotFound)?;

    if account.is_student
        || account.is_instructor
        || repository::get_by_user_id(user_id).await?.is_some()
    {
        return Err(RegistrationError::RoleAlreadyRegistered);
    }

    let profile = InstructorProfile {
        user_id: user_id.to_string(),
        date_of_birth: dto.date_of_birth,
        department: dto.department,
        created_at: Utc::now().to_rfc3339(),
    };

    repository::insert(&profile).await?;
    users_repository::set_role_flag(user_id, RegisterRole::Instructor).await?;

    Ok(profile)
}
