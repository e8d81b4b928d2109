use anyhow::{Context, Result};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

const AUTH_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS sys_users (
        id TEXT PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        full_name TEXT,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        last_login_at TEXT
    )",
    "CREATE TABLE IF NOT EXISTS sys_settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        description TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
];

/// Create authentication tables if they are missing
pub async fn apply_auth_migration() -> Result<()> {
    let conn = get_connection();

    for sql in AUTH_TABLES {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await
        .context("Failed to apply auth migration")?;
    }

    tracing::info!("Auth tables are in place");

    Ok(())
}

/// Ensure admin user exists (create if table is empty)
pub async fn ensure_admin_user_exists() -> Result<()> {
    use crate::system::users::{repository, service};

    let count = repository::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating default admin user...");

        let password =
            std::env::var("POS_ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string());
        let from_env = std::env::var("POS_ADMIN_PASSWORD").is_ok();

        let admin_id =
            service::create("admin", &password, Some("Administrator".to_string())).await?;

        tracing::warn!("═══════════════════════════════════════════════");
        tracing::warn!("  Default admin user created!");
        tracing::warn!("  Username: admin");
        if from_env {
            tracing::warn!("  Password: taken from POS_ADMIN_PASSWORD");
        } else {
            tracing::warn!("  Password: admin");
            tracing::warn!("  ⚠️  PLEASE CHANGE THE PASSWORD IMMEDIATELY!");
        }
        tracing::warn!("  User ID: {}", admin_id);
        tracing::warn!("═══════════════════════════════════════════════");
    }

    Ok(())
}
