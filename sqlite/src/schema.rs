//! SQL schema for the snippets table.
//!
//! The whole store is a single table mapping unique keywords to messages.
//! Uniqueness is enforced by the primary-key constraint at the storage
//! layer, not in application logic; `put` relies on the resulting conflict
//! error to pick its insert-or-update path.

use rusqlite::Connection;

use crate::error::Result;

/// Generates the `CREATE TABLE` statement for the snippets table.
///
/// Uses `CREATE TABLE IF NOT EXISTS` so it is safe to execute on every
/// store open.
pub fn create_sql() -> &'static str {
    r#"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT NOT NULL PRIMARY KEY,
    message TEXT NOT NULL
) WITHOUT ROWID;
"#
}

/// Generates the `DROP TABLE` statement for the snippets table.
///
/// Uses `DROP TABLE IF EXISTS` so it is safe to execute when the table
/// does not exist.
pub fn drop_sql() -> &'static str {
    "DROP TABLE IF EXISTS snippets;"
}

/// Checks whether the snippets table exists in the database.
pub fn table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='snippets'")?;
    let count: i64 = stmt.query_row([], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sql_targets_snippets_table() {
        let sql = create_sql();
        assert!(sql.contains("CREATE TABLE IF NOT EXISTS snippets"));
        assert!(sql.contains("keyword TEXT NOT NULL PRIMARY KEY"));
        assert!(sql.contains("message TEXT NOT NULL"));
    }

    #[test]
    fn test_table_exists_before_and_after_create() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn).unwrap());

        conn.execute_batch(create_sql()).unwrap();
        assert!(table_exists(&conn).unwrap());
    }

    #[test]
    fn test_create_sql_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_sql()).unwrap();
        conn.execute_batch(create_sql()).unwrap();
        assert!(table_exists(&conn).unwrap());
    }

    #[test]
    fn test_drop_sql_removes_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_sql()).unwrap();
        conn.execute_batch(drop_sql()).unwrap();
        assert!(!table_exists(&conn).unwrap());
    }

    #[test]
    fn test_drop_sql_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(drop_sql()).unwrap();
    }

    #[test]
    fn test_keyword_uniqueness_is_enforced_by_schema() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_sql()).unwrap();

        conn.execute(
            "INSERT INTO snippets (keyword, message) VALUES ('k', 'first')",
            [],
        )
        .unwrap();
        assert!(
            conn.execute(
                "INSERT INTO snippets (keyword, message) VALUES ('k', 'second')",
                [],
            )
            .is_err()
        );
    }
}
