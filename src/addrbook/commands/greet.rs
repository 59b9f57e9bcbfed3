use crate::commands::CmdMessage;
use crate::router::COMMANDS;

pub const GREETING: &str = "How can I help you?";

/// The driver stops its loop on exactly this text.
pub const FAREWELL: &str = "Good bye!";

pub const INVALID: &str = "Invalid command format";

pub fn hello() -> CmdMessage {
    CmdMessage::info(GREETING)
}

pub fn farewell() -> CmdMessage {
    CmdMessage::info(FAREWELL)
}

pub fn invalid() -> CmdMessage {
    CmdMessage::error(INVALID)
}

/// One line per verb; aliases share the first entry's line.
pub fn help() -> CmdMessage {
    let mut seen = Vec::new();
    let specs: Vec<_> = COMMANDS
        .iter()
        .filter(|spec| {
            if seen.contains(&spec.verb) {
                return false;
            }
            seen.push(spec.verb);
            true
        })
        .collect();
    let width = specs.iter().map(|spec| spec.usage.len()).max().unwrap_or(0);
    let lines: Vec<String> = specs
        .iter()
        .map(|spec| format!("{:<width$}  {}", spec.usage, spec.summary, width = width))
        .collect();
    CmdMessage::info(lines.join("\n"))
}
