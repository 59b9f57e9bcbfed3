use crate::book::AddressBook;
use crate::commands::CmdMessage;
use crate::error::{BookError, Result};
use crate::model::Record;
use chrono::NaiveDate;

pub const EMPTY: &str = "No contacts found";

/// `show all`: every contact, one per line, in insertion order.
pub fn all(book: &AddressBook, today: NaiveDate) -> CmdMessage {
    if book.is_empty() {
        return CmdMessage::info(EMPTY);
    }
    let lines: Vec<String> = book.records().map(|r| render(r, today)).collect();
    CmdMessage::info(lines.join("\n"))
}

/// `show page [n]`: the n-th window (1-based) of `page_size` contacts.
pub fn page(
    book: &AddressBook,
    args: &[&str],
    page_size: usize,
    today: NaiveDate,
) -> Result<CmdMessage> {
    if book.is_empty() {
        return Ok(CmdMessage::info(EMPTY));
    }

    let requested = args.first().copied().unwrap_or("1");
    let number: usize = requested
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| BookError::InvalidPage(requested.to_string()))?;

    let size = page_size.max(1);
    let total = book.len().div_ceil(size);
    let window = book
        .pages(size)
        .nth(number - 1)
        .ok_or_else(|| BookError::InvalidPage(requested.to_string()))?;

    let mut lines: Vec<String> = window.values().map(|r| render(r, today)).collect();
    lines.push(format!("Page {} of {}", number, total));
    Ok(CmdMessage::info(lines.join("\n")))
}

fn render(record: &Record, today: NaiveDate) -> String {
    match record.days_to_birthday(today) {
        Ok(days) => format!("{}, Days to birthday: {}", record, days),
        Err(_) => record.to_string(),
    }
}
