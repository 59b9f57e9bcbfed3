//! The in-memory address book.
//!
//! [`AddressBook`] owns every [`Record`], keyed by contact name and kept in
//! insertion order. Names are unique: adding a second record under an existing
//! name is an error, never a merge.
//!
//! Persistence goes through a [`BookStore`] but never fails loudly: `save` and
//! `load` report their outcome as a message, and a failed load leaves the
//! current contacts untouched.

use crate::error::{BookError, Result};
use crate::model::Record;
use crate::store::{BookStore, Contacts};
use indexmap::IndexMap;

pub const DEFAULT_PAGE_SIZE: usize = 2;

pub const SAVE_OK: &str = "Address book saved successfully.";
pub const SAVE_FAILED: &str = "Error: Failed to save the address book.";
pub const LOAD_OK: &str = "Address book loaded successfully.";
pub const LOAD_FAILED: &str = "Error: Failed to load the address book.";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddressBook {
    records: Contacts,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&mut self, record: Record) -> Result<()> {
        let name = record.name().as_str();
        if self.records.contains_key(name) {
            return Err(BookError::DuplicateName(name.to_string()));
        }
        self.records.insert(name.to_string(), record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes `name` if present; absent names are ignored.
    pub fn delete(&mut self, name: &str) {
        self.records.shift_remove(name);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Successive windows of up to `page_size` contacts, in insertion order.
    /// A `page_size` of zero is treated as one.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            inner: self.records.iter(),
            size: page_size.max(1),
        }
    }

    /// Contacts whose name contains `query` ignoring case, or whose phones
    /// contain it verbatim.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record
                        .phones()
                        .iter()
                        .any(|phone| phone.as_str().contains(query))
            })
            .collect()
    }

    pub fn save<S: BookStore>(&self, store: &mut S, filename: &str) -> String {
        match store.write_book(filename, &self.records) {
            Ok(()) => {
                tracing::info!(filename, records = self.records.len(), "address book saved");
                SAVE_OK.to_string()
            }
            Err(e) => {
                tracing::debug!(filename, error = %e, "address book save failed");
                SAVE_FAILED.to_string()
            }
        }
    }

    /// Replaces every contact with the book saved under `filename`.
    pub fn load<S: BookStore>(
        &mut self,
        store: &S,
        filename: &str,
    ) -> (Option<&Contacts>, String) {
        match store.read_book(filename) {
            Ok(contacts) => {
                tracing::info!(filename, records = contacts.len(), "address book loaded");
                self.records = contacts;
                (Some(&self.records), LOAD_OK.to_string())
            }
            Err(e) => {
                tracing::debug!(filename, error = %e, "address book load failed");
                (None, LOAD_FAILED.to_string())
            }
        }
    }
}

/// Iterator over fixed-size windows of an [`AddressBook`].
pub struct Pages<'a> {
    inner: indexmap::map::Iter<'a, String, Record>,
    size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = IndexMap<&'a str, &'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: IndexMap<&'a str, &'a Record> = self
            .inner
            .by_ref()
            .take(self.size)
            .map(|(name, record)| (name.as_str(), record))
            .collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
