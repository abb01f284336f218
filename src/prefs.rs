use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Preference keys shared by the pipeline and the pager.
pub const SORT_COLUMN: &str = "sort_column";
pub const SORT_DIRECTION: &str = "sort_direction";
pub const SHOW_ARCHIVED: &str = "show_archived";
pub const PAGE_SIZE: &str = "page_size";

/// Entries written without an explicit TTL expire after two weeks.
pub const DEFAULT_TTL_DAYS: i64 = 14;

/// Key/value preference store scoped by a caller-supplied prefix, so
/// independent grids sharing one database don't collide.
pub struct PrefStore {
    conn: Connection,
    scope: String,
}

impl PrefStore {
    pub fn open(scope: &str) -> Result<Self> {
        let data_dir = Self::get_data_dir();
        std::fs::create_dir_all(&data_dir)?;
        Self::open_at(&data_dir.join("prefs.db"), scope)
    }

    pub fn open_at(path: &Path, scope: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = PrefStore {
            conn,
            scope: scope.to_string(),
        };
        store.init_schema()?;
        store.remove_expired()?;
        Ok(store)
    }

    pub fn new_in_memory(scope: &str) -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = PrefStore {
            conn,
            scope: scope.to_string(),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn get_data_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join("gridtui")
        } else {
            // Fallback to /tmp if no data dir available
            std::env::temp_dir().join("gridtui")
        }
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS prefs (
                scope TEXT NOT NULL,
                key TEXT NOT NULL,
                value TEXT NOT NULL,
                expires_at INTEGER NOT NULL,
                PRIMARY KEY (scope, key)
            ) WITHOUT ROWID;
            ",
        )?;
        Ok(())
    }

    /// Read a preference. Expired entries read as absent.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value, expires_at FROM prefs WHERE scope = ?1 AND key = ?2")?;

        let result = stmt.query_row(params![self.scope, key], |row| {
            let value: String = row.get(0)?;
            let expires_at: i64 = row.get(1)?;
            Ok((value, expires_at))
        });

        match result {
            Ok((value, expires_at)) if expires_at > Utc::now().timestamp() => Ok(Some(value)),
            Ok(_) => Ok(None),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a preference with the default TTL.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_with_ttl(key, value, DEFAULT_TTL_DAYS)
    }

    pub fn set_with_ttl(&self, key: &str, value: &str, ttl_days: i64) -> Result<()> {
        let expires_at = Utc::now().timestamp() + ttl_days * 86_400;
        self.conn.execute(
            "INSERT OR REPLACE INTO prefs (scope, key, value, expires_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![self.scope, key, value, expires_at],
        )?;
        Ok(())
    }

    /// Drop expired entries across all scopes. Returns how many went away.
    pub fn remove_expired(&self) -> Result<usize> {
        let removed = self.conn.execute(
            "DELETE FROM prefs WHERE expires_at <= ?1",
            params![Utc::now().timestamp()],
        )?;
        Ok(removed)
    }
}
