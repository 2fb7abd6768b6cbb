//! Runtime snippet access via SQLite queries.
//!
//! Provides [`SnippetStore`], the façade over the `snippets` table. The
//! store owns one connection for its whole lifetime, and each operation
//! wraps its database work in a transaction: committed on success, rolled
//! back when the transaction guard drops on an error path.
//!
//! # Example
//!
//! ```no_run
//! use snippet_sqlite::SnippetStore;
//!
//! let mut store = SnippetStore::open("snippets.db").unwrap();
//!
//! store.put("greeting", "hello world").unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello world"));
//!
//! store.delete("greeting").unwrap();
//! assert!(store.get("greeting").unwrap().is_none());
//! ```

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, ffi, params};
use snippet_core::Snippet;
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::schema;

/// SQLite-backed store for named text snippets.
///
/// Wraps a connection to a database holding the single `snippets` table
/// and provides the six operations of the snippet model: `put`, `get`,
/// `post`, `delete`, `catalog`, and `search`. The schema is ensured when
/// the store is opened, so a fresh database file is usable immediately.
///
/// Lookups that find nothing return `None` (or an empty `Vec` for the
/// listing operations); only genuine persistence faults surface as
/// [`StoreError`].
///
/// # Examples
///
/// ```no_run
/// use snippet_sqlite::SnippetStore;
///
/// let mut store = SnippetStore::open("snippets.db").unwrap();
///
/// // Upsert: the second put replaces the first message.
/// store.put("k", "v1").unwrap();
/// store.put("k", "v2").unwrap();
/// assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
///
/// // Update-only: post never creates a row.
/// assert!(store.post("missing", "v").unwrap().is_none());
/// ```
pub struct SnippetStore {
    conn: Connection,
}

impl SnippetStore {
    /// Opens a store backed by a database file, creating it if needed.
    ///
    /// The snippets table is created when it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// Opens a store backed by an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::create_sql())?;
        Ok(Self { conn })
    }

    /// Closes the store, flushing and releasing the underlying connection.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, err)| StoreError::DatabaseError(err))
    }

    /// Stores a snippet under a keyword, replacing any existing message.
    ///
    /// Insert-first upsert: the INSERT is attempted without a prior
    /// existence check, and only a uniqueness violation on the keyword
    /// falls back to an UPDATE of the existing row inside the same
    /// transaction. Every other failure propagates after rollback.
    ///
    /// Returns the stored pair, identical for both paths.
    pub fn put(&mut self, keyword: &str, message: &str) -> Result<Snippet> {
        let tx = self.conn.transaction()?;

        let insert = tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)",
            params![keyword, message],
        );
        match insert {
            Ok(_) => {
                tx.commit()?;
                debug!(keyword, "put stored new snippet");
            }
            Err(err) if is_keyword_conflict(&err) => {
                tx.execute(
                    "UPDATE snippets SET message = ?2 WHERE keyword = ?1",
                    params![keyword, message],
                )?;
                tx.commit()?;
                debug!(keyword, "put replaced existing snippet");
            }
            Err(err) => return Err(err.into()),
        }

        Ok(Snippet::new(keyword, message))
    }

    /// Retrieves the message stored under a keyword.
    ///
    /// Returns `None` when no snippet with that keyword exists.
    pub fn get(&mut self, keyword: &str) -> Result<Option<String>> {
        let tx = self.conn.transaction()?;
        let message: Option<String> = tx
            .query_row(
                "SELECT message FROM snippets WHERE keyword = ?1",
                [keyword],
                |row| row.get(0),
            )
            .optional()?;
        tx.commit()?;

        debug!(keyword, found = message.is_some(), "get snippet");
        Ok(message)
    }

    /// Updates the message of an existing snippet.
    ///
    /// Existence-check-before-mutate: when the keyword is absent, returns
    /// `None` and leaves the table unchanged. Unlike [`put`](Self::put),
    /// `post` never creates a row.
    pub fn post(&mut self, keyword: &str, message: &str) -> Result<Option<Snippet>> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM snippets WHERE keyword = ?1",
                [keyword],
                |_row| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            debug!(keyword, "post found no snippet to update");
            return Ok(None);
        }

        tx.execute(
            "UPDATE snippets SET message = ?2 WHERE keyword = ?1",
            params![keyword, message],
        )?;
        tx.commit()?;

        debug!(keyword, "post updated snippet");
        Ok(Some(Snippet::new(keyword, message)))
    }

    /// Deletes the snippet stored under a keyword.
    ///
    /// Existence-check-before-mutate: when the keyword is absent, returns
    /// `None`. Deletion is permanent and immediate; on success the deleted
    /// keyword is returned.
    pub fn delete(&mut self, keyword: &str) -> Result<Option<String>> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row(
                "SELECT 1 FROM snippets WHERE keyword = ?1",
                [keyword],
                |_row| Ok(()),
            )
            .optional()?
            .is_some();
        if !exists {
            debug!(keyword, "delete found no snippet");
            return Ok(None);
        }

        tx.execute("DELETE FROM snippets WHERE keyword = ?1", [keyword])?;
        tx.commit()?;

        debug!(keyword, "deleted snippet");
        Ok(Some(keyword.to_string()))
    }

    /// Lists all stored keywords in lexicographic order.
    ///
    /// Returns an empty vector when the table holds no snippets.
    pub fn catalog(&mut self) -> Result<Vec<String>> {
        let tx = self.conn.transaction()?;
        let keywords = {
            let mut stmt = tx.prepare("SELECT keyword FROM snippets ORDER BY keyword")?;
            let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };
        tx.commit()?;

        debug!(count = keywords.len(), "catalog listed keywords");
        Ok(keywords)
    }

    /// Finds all snippets whose message contains `term` as a literal
    /// substring.
    ///
    /// The term is bound as a statement parameter and matched with
    /// `instr`, so the comparison is case-sensitive and `%`/`_` carry no
    /// wildcard meaning. Returns an empty vector when nothing matches.
    pub fn search(&mut self, term: &str) -> Result<Vec<Snippet>> {
        let tx = self.conn.transaction()?;
        let matches = {
            let mut stmt = tx
                .prepare("SELECT keyword, message FROM snippets WHERE instr(message, ?1) > 0")?;
            let rows = stmt.query_map([term], |row| {
                Ok(Snippet {
                    keyword: row.get(0)?,
                    message: row.get(1)?,
                })
            })?;
            rows.collect::<std::result::Result<Vec<_>, _>>()?
        };
        tx.commit()?;

        debug!(term, count = matches.len(), "search scanned messages");
        Ok(matches)
    }

    /// Counts the stored snippets.
    pub fn count(&mut self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Whether an insert failed specifically on the keyword uniqueness
/// constraint, as opposed to any other persistence fault.
fn is_keyword_conflict(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(cause, _) => {
            cause.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                || cause.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
