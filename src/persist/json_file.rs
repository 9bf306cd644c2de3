//! Flat JSON file store using the parallel-array wire format.
//!
//! On disk the collection is one JSON object with five equal-length arrays:
//!
//! ```json
//! {"id":[13,14],"forename":["Richard","Wolfgang"],"surname":["Feynman","Pauli"],
//!  "email_address":["a@x.com","b@y.com"],"mobile_number":["00000000021","00000000022"]}
//! ```
//!
//! The alignment invariant is validated on load and holds by construction on
//! save; in memory the collection is a record list, never parallel arrays.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    contact::ContactRecord,
    core::book::ContactBook,
    types::ContactId,
};

use super::{ContactStore, PersistError, PersistResult};

/// Parallel-array wire representation of the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsDocV1 {
    /// Contact ids, positionally aligned with the other arrays.
    pub id: Vec<ContactId>,
    /// Forename column.
    pub forename: Vec<String>,
    /// Surname column.
    pub surname: Vec<String>,
    /// Email address column.
    pub email_address: Vec<String>,
    /// Mobile number column, strings so leading zeros survive.
    pub mobile_number: Vec<String>,
}

impl ContactsDocV1 {
    fn from_book(book: &ContactBook) -> Self {
        let records = book.records();
        let mut doc = Self {
            id: Vec::with_capacity(records.len()),
            forename: Vec::with_capacity(records.len()),
            surname: Vec::with_capacity(records.len()),
            email_address: Vec::with_capacity(records.len()),
            mobile_number: Vec::with_capacity(records.len()),
        };
        for rec in records {
            doc.id.push(rec.id);
            doc.forename.push(rec.forename.clone());
            doc.surname.push(rec.surname.clone());
            doc.email_address.push(rec.email_address.clone());
            doc.mobile_number.push(rec.mobile_number.clone());
        }
        doc
    }

    fn into_book(self) -> PersistResult<ContactBook> {
        let len = self.id.len();
        let aligned = [
            self.forename.len(),
            self.surname.len(),
            self.email_address.len(),
            self.mobile_number.len(),
        ]
        .iter()
        .all(|l| *l == len);
        if !aligned {
            return Err(PersistError::Schema(format!(
                "misaligned columns: id={}, forename={}, surname={}, email_address={}, mobile_number={}",
                len,
                self.forename.len(),
                self.surname.len(),
                self.email_address.len(),
                self.mobile_number.len(),
            )));
        }

        let records = self
            .id
            .into_iter()
            .zip(self.forename)
            .zip(self.surname)
            .zip(self.email_address)
            .zip(self.mobile_number)
            .map(
                |((((id, forename), surname), email_address), mobile_number)| ContactRecord {
                    id,
                    forename,
                    surname,
                    email_address,
                    mobile_number,
                },
            )
            .collect();

        Ok(ContactBook::from_records(records)?)
    }
}

/// Decodes a raw JSON document into a book.
pub fn decode_book(bytes: &[u8]) -> PersistResult<ContactBook> {
    let doc: ContactsDocV1 = serde_json::from_slice(bytes)?;
    doc.into_book()
}

/// Encodes a book into the parallel-array JSON document.
pub fn encode_book(book: &ContactBook) -> PersistResult<Vec<u8>> {
    Ok(serde_json::to_vec(&ContactsDocV1::from_book(book))?)
}

/// File-backed [`ContactStore`] writing one JSON document.
///
/// The path is explicit construction-time configuration; there is no ambient
/// default location.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> PersistResult<ContactBook> {
        log::debug!("loading contacts from {}", self.path.display());
        let bytes = fs::read(&self.path)?;
        decode_book(&bytes)
    }

    fn save(&mut self, book: &ContactBook) -> PersistResult<()> {
        let bytes = encode_book(book)?;

        // Write to a sibling temp file, then rename over the destination, so
        // a crash mid-write never truncates the previous document.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes).map_err(map_write_err)?;
        fs::rename(&tmp, &self.path).map_err(map_write_err)?;

        log::debug!(
            "saved {} contacts to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}

// Write-path failures are always Io, even for a missing parent directory.
fn map_write_err(err: std::io::Error) -> PersistError {
    PersistError::Io(err)
}
