use crate::book::AddressBook;
use crate::commands::{join_phones, name_and_phones, CmdMessage};
use crate::error::Result;
use crate::model::Record;

/// `add <name> <phone...>`: every argument is validated before the record is
/// built, so a bad phone or a taken name leaves the book untouched.
pub fn run(book: &mut AddressBook, args: &[&str]) -> Result<CmdMessage> {
    let (name, phones) = name_and_phones(args)?;
    let listed = join_phones(&phones);

    let mut record = Record::new(name.clone());
    for phone in phones {
        record.push_phone(phone);
    }
    book.add_record(record)?;

    Ok(CmdMessage::success(format!(
        "Contact {} added with phone numbers: {}",
        name, listed
    )))
}
