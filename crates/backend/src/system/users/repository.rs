use anyhow::{Context, Result};
use contracts::enums::RegisterRole;
use contracts::system::users::Account;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

fn account_from_row(row: &sea_orm::QueryResult) -> Result<Account> {
    Ok(Account {
        id: row.try_get("", "id")?,
        username: row.try_get("", "username")?,
        email: row.try_get("", "email")?,
        first_name: row.try_get("", "first_name")?,
        last_name: row.try_get("", "last_name")?,
        is_student: row.try_get::<i32>("", "is_student")? != 0,
        is_instructor: row.try_get::<i32>("", "is_instructor")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

/// Create account with password hash
pub async fn create_with_password(account: &Account, password_hash: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, username, email, password_hash, first_name, last_name, is_student, is_instructor, created_at, updated_at, last_login_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            account.id.clone().into(),
            account.username.clone().into(),
            account.email.clone().into(),
            password_hash.to_string().into(),
            account.first_name.clone().into(),
            account.last_name.clone().into(),
            (if account.is_student { 1 } else { 0 }).into(),
            (if account.is_instructor { 1 } else { 0 }).into(),
            account.created_at.clone().into(),
            account.updated_at.clone().into(),
            account.last_login_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert account")?;

    Ok(())
}

/// Get account by ID
pub async fn get_by_id(id: &str) -> Result<Option<Account>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, email, first_name, last_name, is_student, is_instructor, created_at, updated_at, last_login_at
             FROM sys_users WHERE id = ?",
            [id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(account_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Get account by username
pub async fn get_by_username(username: &str) -> Result<Option<Account>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, username, email, first_name, last_name, is_student, is_instructor, created_at, updated_at, last_login_at
             FROM sys_users WHERE username = ?",
            [username.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(account_from_row(&row)?)),
        None => Ok(None),
    }
}

/// Get password hash for account
pub async fn get_password_hash(user_id: &str) -> Result<Option<String>> {
    use crate::shared::data::db::get_connection;

    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;

    match result {
        Some(row) => {
            let hash: String = row.try_get("", "password_hash")?;
            Ok(Some(hash))
        }
        None => Ok(None),
    }
}

/// Update last login timestamp
pub async fn update_last_login(id: &str) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let now = chrono::Utc::now().to_rfc3339();
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
        [now.into(), id.to_string().into()],
    ))
    .await
    .context("Failed to update last login")?;

    Ok(())
}

/// Mark the account as holding a student or instructor profile
pub async fn set_role_flag(id: &str, role: RegisterRole) -> Result<()> {
    use crate::shared::data::db::get_connection;

    let sql = match role {
        RegisterRole::Student => {
            "UPDATE sys_users SET is_student = 1, updated_at = ? WHERE id = ?"
        }
        RegisterRole::Instructor => {
            "UPDATE sys_users SET is_instructor = 1, updated_at = ? WHERE id = ?"
        }
        RegisterRole::User => return Err(anyhow::anyhow!("'user' carries no role flag")),
    };

    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        sql,
        [
            chrono::Utc::now().to_rfc3339().into(),
            id.to_string().into(),
        ],
    ))
    .await
    .context("Failed to set role flag")?;

    Ok(())
}
