use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Record with name {0} already exists in the address book")]
    DuplicateName(String),

    #[error("Phone number {phone} not found in record {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Contact {0} not found")]
    UnknownContact(String),

    #[error("Birthday already exists for {0}")]
    BirthdayAlreadySet(String),

    #[error("No birthday set for {0}")]
    NoBirthday(String),

    #[error("Expected at least {expected} argument(s), got {given}")]
    InsufficientArguments { expected: usize, given: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt address book: {0}")]
    CorruptBook(String),

    #[error("No page {0} in the address book")]
    InvalidPage(String),
}

pub type Result<T> = std::result::Result<T, BookError>;

/// The three user-facing buckets every error collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Key,
    Value,
    Format,
}

impl ErrorCategory {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCategory::Key => "Enter user name",
            ErrorCategory::Value => "Give me name and phone please",
            ErrorCategory::Format => "Invalid command format",
        }
    }
}

impl BookError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BookError::UnknownContact(_) => ErrorCategory::Key,
            BookError::InsufficientArguments { .. } => ErrorCategory::Format,
            BookError::Validation(_)
            | BookError::DuplicateName(_)
            | BookError::PhoneNotFound { .. }
            | BookError::BirthdayAlreadySet(_)
            | BookError::NoBirthday(_)
            | BookError::Io(_)
            | BookError::Serialization(_)
            | BookError::CorruptBook(_)
            | BookError::InvalidPage(_) => ErrorCategory::Value,
        }
    }
}
