use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_path).is_absolute() {
        std::path::PathBuf::from(db_path)
    } else {
        std::env::current_dir()?.join(db_path)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_table(
        &conn,
        "sys_users",
        r#"
            CREATE TABLE sys_users (
                id TEXT PRIMARY KEY NOT NULL,
                username TEXT NOT NULL UNIQUE,
                email TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                is_student INTEGER NOT NULL DEFAULT 0,
                is_instructor INTEGER NOT NULL DEFAULT 0,
                created_at TEXT,
                updated_at TEXT,
                last_login_at TEXT
            );
        "#,
    )
    .await?;

    ensure_table(
        &conn,
        "sys_refresh_tokens",
        r#"
            CREATE TABLE sys_refresh_tokens (
                id TEXT PRIMARY KEY NOT NULL,
                user_id TEXT NOT NULL,
                token_hash TEXT NOT NULL,
                expires_at TEXT NOT NULL,
                created_at TEXT NOT NULL,
                revoked_at TEXT
            );
        "#,
    )
    .await?;

    ensure_table(
        &conn,
        "sys_settings",
        r#"
            CREATE TABLE sys_settings (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                description TEXT,
                created_at TEXT,
                updated_at TEXT
            );
        "#,
    )
    .await?;

    ensure_table(
        &conn,
        "student_profile",
        r#"
            CREATE TABLE student_profile (
                user_id TEXT PRIMARY KEY NOT NULL,
                date_of_birth TEXT NOT NULL,
                major TEXT NOT NULL,
                standing TEXT NOT NULL,
                credits INTEGER NOT NULL DEFAULT 0,
                created_at TEXT
            );
        "#,
    )
    .await?;

    ensure_table(
        &conn,
        "instructor_profile",
        r#"
            CREATE TABLE instructor_profile (
                user_id TEXT PRIMARY KEY NOT NULL,
                date_of_birth TEXT NOT NULL,
                department TEXT NOT NULL,
                created_at TEXT
            );
        "#,
    )
    .await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create `table` from `create_sql` unless it already exists
async fn ensure_table(
    conn: &DatabaseConnection,
    table: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
