//! Data shapes and store contracts of the reporting core.
//!
//! The application keeps its data in a document store with MongoDB-style
//! query semantics. This crate never talks to that store directly: each
//! module here defines the document shape (serde structs with the
//! collection's camelCase field names) and the narrow trait the core needs
//! from the storage layer. Small in-memory adapters back the traits in
//! tests and demo setups.
//!
//! - [`projects`]: project documents, the typed visibility selector, and
//!   the project lookup trait
//! - [`users`]: user records and the identity lookup trait
//! - [`time_entries`]: logged work units with validation and batch merging
//! - [`transactions`]: audit records and the insert-only sink trait

pub mod projects;
pub mod time_entries;
pub mod transactions;
pub mod users;
