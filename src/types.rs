//! Shared primitive identifiers.

/// Stable contact identifier, assigned as `max(existing ids) + 1` on create.
pub type ContactId = u64;
