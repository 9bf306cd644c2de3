//! In-memory authoritative contact collection.

/// Authoritative contact book and CRUD operations.
pub mod book;
