use crate::book::AddressBook;
use crate::commands::{require_args, CmdMessage};
use crate::error::Result;

/// `search <text...>`: the remaining tokens, rejoined with single spaces, are
/// matched against names (ignoring case) and phones (verbatim).
pub fn run(book: &AddressBook, args: &[&str]) -> Result<CmdMessage> {
    require_args(args, 1)?;
    let query = args.join(" ");

    let hits = book.search(&query);
    if hits.is_empty() {
        return Ok(CmdMessage::warning(format!(
            "No contacts matching '{}'",
            query
        )));
    }

    let lines: Vec<String> = hits.iter().map(|r| r.to_string()).collect();
    Ok(CmdMessage::info(lines.join("\n")))
}
