//! # Command Layer
//!
//! One module per verb family. Every handler validates its raw argument
//! tokens, applies them to the [`AddressBook`](crate::book::AddressBook) and
//! returns `Result<CmdMessage>`. Handlers never print and never translate
//! errors into display text; the API facade does that in one place.

use crate::error::{BookError, Result};
use crate::model::{Name, Phone};

pub mod add;
pub mod birthday;
pub mod change;
pub mod greet;
pub mod persist;
pub mod phone;
pub mod search;
pub mod show;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

pub(crate) fn require_args(args: &[&str], expected: usize) -> Result<()> {
    if args.len() < expected {
        return Err(BookError::InsufficientArguments {
            expected,
            given: args.len(),
        });
    }
    Ok(())
}

/// Validates a name followed by at least one phone.
pub(crate) fn name_and_phones(args: &[&str]) -> Result<(Name, Vec<Phone>)> {
    require_args(args, 2)?;
    let name = Name::parse(args[0])?;
    let phones = args[1..]
        .iter()
        .map(|raw| Phone::parse(raw))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((name, phones))
}

pub(crate) fn join_phones(phones: &[Phone]) -> String {
    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn not_found(name: &Name) -> CmdMessage {
    CmdMessage::warning(format!("Contact {} not found", name))
}
