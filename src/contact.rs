//! Contact domain record and draft types.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// Fully materialized, authoritative contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Stable contact identifier.
    pub id: ContactId,
    /// Given name, may be empty.
    pub forename: String,
    /// Family name, may be empty. Sort and search key.
    pub surname: String,
    /// Email address, stored as entered, unvalidated.
    pub email_address: String,
    /// Mobile number, stored as text so leading zeros survive.
    pub mobile_number: String,
}

impl ContactRecord {
    /// Display label in `"forename surname"` form.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

/// The four mutable fields of a contact.
///
/// Used both to create a new [`ContactRecord`] (the id is assigned by the
/// book) and to overwrite an existing record's fields on update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    /// Given name, may be empty.
    pub forename: String,
    /// Family name, may be empty.
    pub surname: String,
    /// Email address, unvalidated.
    pub email_address: String,
    /// Mobile number as raw text.
    pub mobile_number: String,
}

impl ContactDraft {
    /// Materializes this draft into a record with the given id.
    pub fn into_record(self, id: ContactId) -> ContactRecord {
        ContactRecord {
            id,
            forename: self.forename,
            surname: self.surname,
            email_address: self.email_address,
            mobile_number: self.mobile_number,
        }
    }
}
