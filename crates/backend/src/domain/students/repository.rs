use anyhow::{Context, Result};
use contracts::domain::students::StudentProfile;
use contracts::enums::{Major, Standing};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Insert a student profile
pub async fn insert(profile: &StudentProfile) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO student_profile (user_id, date_of_birth, major, standing, credits, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
        [
            profile.user_id.clone().into(),
            profile.date_of_birth.to_string().into(),
            profile.major.code().into(),
            profile.standing.code().into(),
            (profile.credits as i64).into(),
            profile.created_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert student profile")?;

    Ok(())
}

/// Get student profile by account ID
pub async fn get_by_user_id(user_id: &str) -> Result<Option<StudentProfile>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id, date_of_birth, major, standing, credits, created_at
             FROM student_profile WHERE user_id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let date_of_birth: String = row.try_get("", "date_of_birth")?;
            let major: String = row.try_get("", "major")?;
            let standing: String = row.try_get("", "standing")?;
            let credits: i64 = row.try_get("", "credits")?;

            let profile = StudentProfile {
                user_id: row.try_get("", "user_id")?,
                date_of_birth: date_of_birth
                    .parse()
                    .context("Invalid date_of_birth in student_profile")?,
                major: Major::from_code(&major)
                    .ok_or_else(|| anyhow::anyhow!("Unknown major: {}", major))?,
                standing: Standing::from_code(&standing)
                    .ok_or_else(|| anyhow::anyhow!("Unknown standing: {}", standing))?,
                credits: credits as u32,
                created_at: row.try_get("", "created_at")?,
            };
            Ok(Some(profile))
        }
        None => Ok(None),
    }
}
