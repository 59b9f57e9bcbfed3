use crate::book::{AddressBook, LOAD_OK, SAVE_OK};
use crate::commands::CmdMessage;
use crate::store::BookStore;

pub const FILENAME_PROMPT: &str = "Enter file name";

/// `save <filename>`
pub fn save<S: BookStore>(book: &AddressBook, store: &mut S, args: &[&str]) -> CmdMessage {
    let Some(filename) = args.first() else {
        return CmdMessage::warning(FILENAME_PROMPT);
    };
    let message = book.save(store, filename);
    if message == SAVE_OK {
        CmdMessage::success(message)
    } else {
        CmdMessage::error(message)
    }
}

/// `load <filename>`: replaces the current contacts only if the book decodes.
pub fn load<S: BookStore>(book: &mut AddressBook, store: &S, args: &[&str]) -> CmdMessage {
    let Some(filename) = args.first() else {
        return CmdMessage::warning(FILENAME_PROMPT);
    };
    let (_, message) = book.load(store, filename);
    if message == LOAD_OK {
        CmdMessage::success(format!("Address book loaded from {}", filename))
    } else {
        CmdMessage::error(message)
    }
}
