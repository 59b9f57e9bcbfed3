use super::{check_filename, decode_book, encode_book, BookStore, Contacts};
use crate::error::{BookError, Result};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing.
/// Books are kept encoded, so reads exercise the same decoding as files do.
#[derive(Default)]
pub struct InMemoryStore {
    books: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant raw document text under `filename`, bypassing encoding.
    pub fn insert_raw(&mut self, filename: &str, text: &str) {
        self.books.insert(filename.to_string(), text.to_string());
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.books.contains_key(filename)
    }
}

impl BookStore for InMemoryStore {
    fn read_book(&self, filename: &str) -> Result<Contacts> {
        check_filename(filename)?;
        let text = self.books.get(filename).ok_or_else(|| {
            BookError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no address book named {:?}", filename),
            ))
        })?;
        decode_book(text)
    }

    fn write_book(&mut self, filename: &str, contacts: &Contacts) -> Result<()> {
        check_filename(filename)?;
        let text = encode_book(contacts)?;
        self.books.insert(filename.to_string(), text);
        Ok(())
    }

    fn book_path(&self, filename: &str) -> Result<PathBuf> {
        check_filename(filename)?;
        Ok(PathBuf::from("memory").join(filename))
    }
}
