//! Core types for the snippet store.
//!
//! This crate defines the foundational types shared by the storage backend
//! and the CLI:
//!
//! - [`Snippet`] — a named unit of stored text (`keyword` + `message`).
//! - [`SNIPPET_NOT_FOUND`] / [`NO_SNIPPETS_FOUND`] — the sentinel strings
//!   printed when a lookup or listing comes back empty.
//!
//! Absence is never communicated *through* these strings inside the store
//! API itself; storage operations return tagged results (`Option`, empty
//! `Vec`) and only the rendering layer maps emptiness to the sentinel text.
//! A stored message whose body happens to equal a sentinel therefore cannot
//! be mistaken for a miss.
//!
//! # Example
//!
//! ```
//! use snippet_core::Snippet;
//!
//! let snippet = Snippet::new("greeting", "hello world");
//! assert_eq!(snippet.keyword, "greeting");
//! assert_eq!(snippet.message, "hello world");
//! ```

mod types;

pub use types::{NO_SNIPPETS_FOUND, SNIPPET_NOT_FOUND, Snippet};
