//! # Storage Layer
//!
//! Saved address books are opaque documents addressed by a user-chosen
//! filename. The [`BookStore`] trait hides where those documents live:
//!
//! - [`fs::FileStore`]: one pretty-printed JSON file per book inside the
//!   books directory (`AddressBooks/` by default), written atomically.
//! - [`memory::InMemoryStore`]: serialized books kept in a map, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! AddressBooks/
//! ├── friends.json        # {"John": {"name": "John", "phones": [...], "birthday": null}}
//! └── work                # any filename the user picks
//! ```
//!
//! The document is a JSON object keyed by contact name, in insertion order.
//! Every field is validated again while decoding, and each key must match the
//! record it points at, so a decoded book always satisfies the same
//! invariants as one built through commands.

use crate::error::{BookError, Result};
use crate::model::Record;
use indexmap::IndexMap;
use std::io;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Contact name to record, in insertion order.
pub type Contacts = IndexMap<String, Record>;

pub trait BookStore {
    /// Read and decode the book saved under `filename`.
    fn read_book(&self, filename: &str) -> Result<Contacts>;

    /// Encode and persist `contacts` under `filename`, replacing any previous book.
    /// MUST NOT leave a partially written book behind on failure.
    fn write_book(&mut self, filename: &str, contacts: &Contacts) -> Result<()>;

    /// Where the book for `filename` lives (a virtual path for non-file stores).
    fn book_path(&self, filename: &str) -> Result<PathBuf>;
}

/// Book filenames are single path components.
pub fn check_filename(filename: &str) -> Result<()> {
    let invalid = filename.is_empty()
        || filename == "."
        || filename == ".."
        || filename.contains(['/', '\\']);
    if invalid {
        return Err(BookError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid address book filename: {:?}", filename),
        )));
    }
    Ok(())
}

pub fn encode_book(contacts: &Contacts) -> Result<String> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

pub fn decode_book(text: &str) -> Result<Contacts> {
    let contacts: Contacts = serde_json::from_str(text)?;
    if let Some((key, record)) = contacts
        .iter()
        .find(|(key, record)| key.as_str() != record.name().as_str())
    {
        return Err(BookError::CorruptBook(format!(
            "entry {:?} holds the record for {:?}",
            key,
            record.name().as_str()
        )));
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Name;

    #[test]
    fn rejects_path_like_filenames() {
        assert!(check_filename("friends").is_ok());
        assert!(check_filename("friends.json").is_ok());
        for bad in ["", ".", "..", "../etc", "a/b", "a\\b"] {
            assert!(check_filename(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn encode_keeps_insertion_order() {
        let mut contacts = Contacts::new();
        for name in ["Zed", "Amy", "Kim"] {
            contacts.insert(name.into(), Record::new(Name::parse(name).unwrap()));
        }
        let decoded = decode_book(&encode_book(&contacts).unwrap()).unwrap();
        let names: Vec<_> = decoded.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Zed", "Amy", "Kim"]);
    }

    #[test]
    fn decode_rejects_mismatched_keys() {
        let text = r#"{"Bob": {"name": "Ann", "phones": [], "birthday": null}}"#;
        let err = decode_book(text).unwrap_err();
        assert!(matches!(err, BookError::CorruptBook(_)));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_book("not json").unwrap_err(),
            BookError::Serialization(_)
        ));
    }
}
