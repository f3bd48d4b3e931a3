//! `drop_data` access using rusqlite (synchronous, read-only).

use super::AssociationSource;
use crate::error::{DropfillError, Result};
use crate::types::{Association, ItemIdRange};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

/// Default database location
pub const DEFAULT_DB_PATH: &str = "share/drop_data.db";

const ASSOCIATIONS_QUERY: &str =
    "SELECT dropperid, itemid FROM drop_data WHERE itemid >= ?1 AND itemid < ?2";

/// SQLite-backed `drop_data` table
pub struct SqliteDropStore {
    conn: Connection,
}

impl SqliteDropStore {
    /// Open an existing database read-only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| {
            DropfillError::SourceQuery(format!("cannot open {}: {}", path.display(), e))
        })
        .inspect_err(|e| tracing::error!("{}", e))?;
        Ok(Self { conn })
    }

    /// Wrap an already open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

fn row_to_association(row: &rusqlite::Row<'_>) -> rusqlite::Result<Association> {
    Ok(Association {
        monster_id: row.get(0)?,
        item_id: row.get(1)?,
    })
}

impl AssociationSource for SqliteDropStore {
    fn associations(&self, range: ItemIdRange) -> Result<Vec<Association>> {
        let mut stmt = self.conn.prepare(ASSOCIATIONS_QUERY)?;
        let rows = stmt
            .query_map(params![range.low, range.high], row_to_association)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("drop_data returned {} associations in {}", rows.len(), range);

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store(rows: &[(i32, i32)]) -> SqliteDropStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE drop_data (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                dropperid INTEGER NOT NULL,
                itemid INTEGER NOT NULL DEFAULT 0,
                minimum_quantity INTEGER NOT NULL DEFAULT 1,
                maximum_quantity INTEGER NOT NULL DEFAULT 1,
                questid INTEGER NOT NULL DEFAULT 0,
                chance INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )
        .unwrap();
        for (mob, item) in rows {
            conn.execute(
                "INSERT INTO drop_data (dropperid, itemid) VALUES (?1, ?2)",
                params![mob, item],
            )
            .unwrap();
        }
        SqliteDropStore::from_connection(conn)
    }

    #[test]
    fn test_query_filters_range() {
        let store = setup_store(&[
            (100, 2_000_000),
            (100, 2_280_000),
            (100, 2_290_126),
            (200, 2_299_999),
            (200, 2_300_000),
            (300, 4_000_000),
        ]);

        let mut found = store.associations(ItemIdRange::SKILLBOOKS).unwrap();
        found.sort_by_key(Association::key);
        assert_eq!(
            found,
            vec![
                Association::new(100, 2_280_000),
                Association::new(100, 2_290_126),
                Association::new(200, 2_299_999),
            ]
        );
    }

    #[test]
    fn test_query_empty_table() {
        let store = setup_store(&[]);
        assert!(store
            .associations(ItemIdRange::SKILLBOOKS)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_missing_table_is_source_error() {
        let store = SqliteDropStore::from_connection(Connection::open_in_memory().unwrap());
        let result = store.associations(ItemIdRange::SKILLBOOKS);
        assert!(matches!(result, Err(DropfillError::SourceQuery(_))));
    }

    #[test]
    fn test_open_missing_database_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = SqliteDropStore::open(dir.path().join("missing.db"));
        assert!(matches!(result, Err(DropfillError::SourceQuery(_))));
    }
}
