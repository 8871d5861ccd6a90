use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement,
};

/// Open the store connection pool.
///
/// Timeouts are bounded so no store operation blocks indefinitely; a timeout
/// surfaces to the caller as a database error (HTTP 500).
pub async fn connect(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(path) = sqlite_file_path(database_url) {
        if let Some(parent) = std::path::Path::new(&path).parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut options = ConnectOptions::new(database_url.to_string());
    options
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5));
    if is_sqlite_memory(database_url) {
        // An in-memory SQLite database exists per connection; a larger pool
        // would see a different empty database on every checkout.
        options.max_connections(1);
    }

    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Minimal schema bootstrap.
///
/// The UNIQUE (wallet_address, event_name) constraint carries the
/// one-registration-per-pair invariant.
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='registration';
    "#;
    let existing = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_table.to_string(),
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating registration table");
        let create_registration_table_sql = r#"
            CREATE TABLE registration (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                wallet_address TEXT NOT NULL,
                event_name TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (wallet_address, event_name)
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_registration_table_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

fn is_sqlite_memory(url: &str) -> bool {
    url.starts_with("sqlite") && sqlite_file_path(url).is_none()
}

/// File path of a SQLite URL, if it points at a file.
fn sqlite_file_path(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://target/db/eventpass.db?mode=rwc").as_deref(),
            Some("target/db/eventpass.db")
        );
        assert_eq!(
            sqlite_file_path("sqlite:/var/data/app.db").as_deref(),
            Some("/var/data/app.db")
        );
    }

    #[test]
    fn memory_urls_have_no_file_path() {
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert!(is_sqlite_memory("sqlite::memory:"));
        assert!(!is_sqlite_memory("sqlite://target/db/eventpass.db?mode=rwc"));
    }

    #[test]
    fn non_sqlite_urls_are_ignored() {
        assert_eq!(sqlite_file_path("postgres://localhost/eventpass"), None);
        assert!(!is_sqlite_memory("postgres://localhost/eventpass"));
    }
}
