use super::{check_filename, decode_book, encode_book, BookStore, Contacts};
use crate::error::{BookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Keeps each book as a JSON file inside a single books directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BookError::Io)?;
        }
        Ok(())
    }
}

impl BookStore for FileStore {
    fn read_book(&self, filename: &str) -> Result<Contacts> {
        let path = self.book_path(filename)?;
        let content = fs::read_to_string(&path).map_err(BookError::Io)?;
        decode_book(&content)
    }

    fn write_book(&mut self, filename: &str, contacts: &Contacts) -> Result<()> {
        let path = self.book_path(filename)?;
        let content = encode_book(contacts)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", filename, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BookError::Io(e));
        }

        tracing::debug!(path = %path.display(), records = contacts.len(), "book written");
        Ok(())
    }

    fn book_path(&self, filename: &str) -> Result<PathBuf> {
        check_filename(filename)?;
        Ok(self.root.join(filename))
    }
}
