use crate::book::AddressBook;
use crate::commands::{not_found, require_args, CmdMessage};
use crate::error::Result;
use crate::model::Name;

/// `phone <name>`: renders one contact.
pub fn run(book: &AddressBook, args: &[&str]) -> Result<CmdMessage> {
    require_args(args, 1)?;
    let name = Name::parse(args[0])?;

    Ok(match book.find(name.as_str()) {
        Some(record) => CmdMessage::info(record.to_string()),
        None => not_found(&name),
    })
}
