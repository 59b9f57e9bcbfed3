use crate::book::AddressBook;
use crate::commands::{join_phones, name_and_phones, not_found, CmdMessage};
use crate::error::Result;

/// `change <name> <phone...>`: appends phones to an existing contact. Old
/// numbers are kept.
pub fn run(book: &mut AddressBook, args: &[&str]) -> Result<CmdMessage> {
    let (name, phones) = name_and_phones(args)?;

    let Some(record) = book.find_mut(name.as_str()) else {
        return Ok(not_found(&name));
    };

    let listed = join_phones(&phones);
    for phone in phones {
        record.push_phone(phone);
    }

    Ok(CmdMessage::success(format!(
        "Contact {} updated with phone numbers: {}",
        name, listed
    )))
}
