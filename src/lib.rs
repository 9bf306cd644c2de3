//! Single-user contact book core: an in-memory collection with CRUD
//! operations, a surname-sorted lookup, and a flat JSON file store.
//!
//! # Examples
//!
//! In-memory usage with [`core::book::ContactBook`]:
//! ```
//! use rolodex::{
//!     contact::{ContactDraft, ContactRecord},
//!     core::book::ContactBook,
//! };
//!
//! let seed = ContactRecord {
//!     id: 1,
//!     forename: "Kate".to_string(),
//!     surname: "Beckett".to_string(),
//!     email_address: "kb@precinct12.example".to_string(),
//!     mobile_number: "00000000001".to_string(),
//! };
//! let mut book = ContactBook::from_records(vec![seed]).expect("seed");
//! let id = book.create(ContactDraft {
//!     forename: "Richard".to_string(),
//!     surname: "Castle".to_string(),
//!     email_address: "rc@books.example".to_string(),
//!     mobile_number: "00000000002".to_string(),
//! }).expect("create");
//! assert_eq!(id, 2);
//! assert_eq!(book.list_by_surname()[0].1, "Kate Beckett");
//! ```
//!
//! File-backed usage with [`persist::json_file::JsonFileStore`]:
//! ```no_run
//! use rolodex::{
//!     core::book::ContactBook,
//!     persist::{json_file::JsonFileStore, ContactStore},
//! };
//!
//! let mut store = JsonFileStore::new("contacts.json");
//! let book = store.load().expect("load");
//! // ... mutate the book through ContactBook operations ...
//! store.save(&book).expect("save");
//! let book = store.load().expect("reload");
//! # let _ = book;
//! ```
#![deny(missing_docs)]

/// Contact domain records and drafts.
pub mod contact;
/// In-memory contact book and CRUD operations.
pub mod core;
/// Persistence abstraction and JSON file store.
pub mod persist;
/// Sorted-surname binary search and membership check.
pub mod search;
/// Shared primitive types.
pub mod types;
