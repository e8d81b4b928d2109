use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

async fn table_exists(conn: &DatabaseConnection, name: &str) -> anyhow::Result<bool> {
    let sql = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        name
    );
    let rows = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    Ok(!rows.is_empty())
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/pos.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    // a001_order: order documents, one row per order, items as JSON.
    // Orders are never deleted, completed ones are only filtered out of
    // the active views.
    if !table_exists(&conn, "a001_order").await? {
        tracing::info!("Creating a001_order table");
        let create_order_table_sql = r#"
            CREATE TABLE a001_order (
                id TEXT PRIMARY KEY NOT NULL,
                customer_name TEXT NOT NULL,
                customer_id TEXT,
                items TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'preparing',
                created_at TEXT NOT NULL,
                completed_at TEXT,
                total_price INTEGER NOT NULL DEFAULT 0,
                payment_method TEXT NOT NULL DEFAULT 'card',
                estimated_prep_seconds INTEGER NOT NULL DEFAULT 0
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_order_table_sql.to_string(),
        ))
        .await?;
        // Tracker and dashboard both filter on status/created_at
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "CREATE INDEX idx_a001_order_status_created ON a001_order (status, created_at);"
                .to_string(),
        ))
        .await?;
    }

    // a002_customer: directory keyed by normalized phone number
    if !table_exists(&conn, "a002_customer").await? {
        tracing::info!("Creating a002_customer table");
        let create_customer_table_sql = r#"
            CREATE TABLE a002_customer (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                phone_number TEXT NOT NULL,
                notes TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_customer_table_sql.to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
