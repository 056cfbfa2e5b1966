use anyhow::{Context, Result};
use contracts::domain::instructors::InstructorProfile;
use contracts::enums::Department;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Insert an instructor profile
pub async fn insert(profile: &InstructorProfile) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO instructor_profile (user_id, date_of_birth, department, created_at)
         VALUES (?, ?, ?, ?)",
        [
            profile.user_id.clone().into(),
            profile.date_of_birth.to_string().into(),
            profile.department.code().into(),
            profile.created_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert instructor profile")?;

    Ok(())
}

/// Get instructor profile by account ID
pub async fn get_by_user_id(user_id: &str) -> Result<Option<InstructorProfile>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id, date_of_birth, department, created_at
             FROM instructor_profile WHERE user_id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let date_of_birth: String = row.try_get("", "date_of_birth")?;
            let department: String = row.try_get("", "department")?;

            let profile = InstructorProfile {
                user_id: row.try_get("", "user_id")?,
                date_of_birth: date_of_birth
                    .parse()
                    .context("Invalid date_of_birth in instructor_profile")?,
                department: Department::from_code(&department)
                    .ok_or_else(|| anyhow::anyhow!("Unknown department: {}", department))?,
                created_at: row.try_get("", "created_at")?,
            };
            Ok(Some(profile))
        }
        None => Ok(None),
    }
}
