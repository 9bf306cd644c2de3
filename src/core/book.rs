//! Authoritative in-memory contact collection.
//!
//! Records live in a `Vec` in insertion order with an id-to-position map kept
//! in lockstep, so id lookups are O(1) and removal preserves the relative
//! order of the remaining records.

use std::fmt;

use hashbrown::HashMap;

use crate::{
    contact::{ContactDraft, ContactRecord},
    types::ContactId,
};

/// Errors produced by [`ContactBook`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record with the given id exists.
    MissingContact(ContactId),
    /// Two records carry the same id.
    DuplicateId(ContactId),
    /// The book holds no records, so `max(existing ids) + 1` is undefined.
    Empty,
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContact(id) => write!(f, "no contact with id {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate contact id {id}"),
            Self::Empty => write!(f, "contact book is empty, cannot assign a new id"),
        }
    }
}

impl std::error::Error for BookError {}

/// The full in-memory set of contacts.
///
/// Invariant: `pos[rec.id] == i` for every record at index `i`, and ids are
/// unique. Every mutating operation either upholds this or leaves the book
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    records: Vec<ContactRecord>,
    pos: HashMap<ContactId, usize>,
}

impl ContactBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from records, rejecting duplicate ids.
    pub fn from_records(records: Vec<ContactRecord>) -> Result<Self, BookError> {
        let mut pos = HashMap::with_capacity(records.len());
        for (idx, rec) in records.iter().enumerate() {
            if pos.insert(rec.id, idx).is_some() {
                return Err(BookError::DuplicateId(rec.id));
            }
        }
        Ok(Self { records, pos })
    }

    /// Appends a new contact, assigning id `max(existing ids) + 1`.
    ///
    /// Fails with [`BookError::Empty`] on an empty book; the id scheme has no
    /// defined starting point there and callers seed the first record
    /// explicitly via [`ContactBook::from_records`].
    pub fn create(&mut self, draft: ContactDraft) -> Result<ContactId, BookError> {
        let max_id = self
            .records
            .iter()
            .map(|rec| rec.id)
            .max()
            .ok_or(BookError::Empty)?;
        let id = max_id + 1;

        self.pos.insert(id, self.records.len());
        self.records.push(draft.into_record(id));
        Ok(id)
    }

    /// Overwrites the four mutable fields of the record with the given id.
    ///
    /// The id itself is immutable.
    pub fn update(&mut self, id: ContactId, draft: ContactDraft) -> Result<(), BookError> {
        let idx = *self.pos.get(&id).ok_or(BookError::MissingContact(id))?;
        let rec = &mut self.records[idx];
        rec.forename = draft.forename;
        rec.surname = draft.surname;
        rec.email_address = draft.email_address;
        rec.mobile_number = draft.mobile_number;
        Ok(())
    }

    /// Removes the record with the given id, preserving the relative order of
    /// the remaining records, and returns it.
    pub fn remove(&mut self, id: ContactId) -> Result<ContactRecord, BookError> {
        let idx = self
            .pos
            .remove(&id)
            .ok_or(BookError::MissingContact(id))?;
        let rec = self.records.remove(idx);
        for (offset, later) in self.records[idx..].iter().enumerate() {
            self.pos.insert(later.id, idx + offset);
        }
        Ok(rec)
    }

    /// Returns the record with the given id, if any.
    pub fn get(&self, id: ContactId) -> Option<&ContactRecord> {
        self.pos.get(&id).map(|idx| &self.records[*idx])
    }

    /// Cloning convenience over [`ContactBook::get`].
    pub fn get_cloned(&self, id: ContactId) -> Option<ContactRecord> {
        self.get(id).cloned()
    }

    /// Number of contacts held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ContactRecord] {
        &self.records
    }

    /// Ids in insertion order.
    pub fn ordered_ids(&self) -> Vec<ContactId> {
        self.records.iter().map(|rec| rec.id).collect()
    }

    /// `(id, "forename surname")` pairs, stable-sorted ascending by surname.
    ///
    /// Ordering is case-sensitive `str` ordering. Records sharing a surname
    /// keep their insertion order. Non-mutating; the returned list is an
    /// independent snapshot.
    pub fn list_by_surname(&self) -> Vec<(ContactId, String)> {
        let mut order: Vec<&ContactRecord> = self.records.iter().collect();
        order.sort_by(|a, b| a.surname.cmp(&b.surname));
        order
            .into_iter()
            .map(|rec| (rec.id, rec.display_name()))
            .collect()
    }

    /// The surname column, sorted ascending, for the search routines.
    pub fn surnames_sorted(&self) -> Vec<String> {
        let mut surnames: Vec<String> =
            self.records.iter().map(|rec| rec.surname.clone()).collect();
        surnames.sort();
        surnames
    }
}
