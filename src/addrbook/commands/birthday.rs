use crate::book::AddressBook;
use crate::commands::{require_args, CmdMessage};
use crate::error::{BookError, Result};
use crate::model::{Birthday, Name};

/// `birthday <name> <DD-MM-YYYY>`: sets a birthday once; an existing one is
/// never overwritten.
pub fn run(book: &mut AddressBook, args: &[&str]) -> Result<CmdMessage> {
    require_args(args, 2)?;
    let name = Name::parse(args[0])?;
    let birthday = Birthday::parse(args[1])?;

    let record = book
        .find_mut(name.as_str())
        .ok_or_else(|| BookError::UnknownContact(name.to_string()))?;
    record.add_birthday(args[1])?;

    Ok(CmdMessage::success(format!(
        "Birthday for {} set to {}",
        name, birthday
    )))
}
