use addrbook::api::{CmdMessage, MessageLevel};
use colored::{ColoredString, Colorize};

pub(super) fn styled(message: &CmdMessage) -> ColoredString {
    match message.level {
        MessageLevel::Info => message.content.normal(),
        MessageLevel::Success => message.content.green(),
        MessageLevel::Warning => message.content.yellow(),
        MessageLevel::Error => message.content.red(),
    }
}
