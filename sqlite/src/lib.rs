//! SQLite storage backend for named text snippets.
//!
//! This crate provides [`SnippetStore`], a façade over a single `snippets`
//! table mapping unique keywords to text messages. The store owns its
//! database connection for its whole lifetime, and every operation runs
//! inside a transaction that commits on success and rolls back on error.
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - **`schema`** — SQL generation for the `snippets` table
//! - **`store`** — the connection-owning store with the six operations
//!   (`put`, `get`, `post`, `delete`, `catalog`, `search`)
//! - **`error`** — the unified [`StoreError`] type
//!
//! # Quick start
//!
//! ```no_run
//! use snippet_sqlite::SnippetStore;
//!
//! let mut store = SnippetStore::open("snippets.db").unwrap();
//!
//! store.put("greeting", "hello world").unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello world"));
//!
//! for keyword in store.catalog().unwrap() {
//!     println!("{keyword}");
//! }
//! ```
//!
//! # Absence is a value
//!
//! Lookups return `Option` and listings return `Vec`; a missing keyword is
//! never an error. Only genuine persistence faults (connection failure,
//! malformed statement, unexpected constraint violations) surface as
//! [`StoreError`].

mod error;
mod schema;
mod store;

pub use error::{Result, StoreError};
pub use schema::{create_sql, drop_sql, table_exists};
pub use store::SnippetStore;
