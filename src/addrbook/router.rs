//! # Command Router
//!
//! Turns a raw input line into a [`Verb`] plus its argument tokens.
//!
//! Resolution order:
//! 1. the lowercased first token against the one-word table
//! 2. only if that misses and a second token exists, the lowercased first two
//!    tokens joined by one space against the two-word table
//! 3. otherwise [`Verb::Invalid`] with no arguments
//!
//! A one-word command is never shadowed by a two-word parse: `add John ...`
//! is always `add`. Arguments keep their original case.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Hello,
    Farewell,
    Help,
    Add,
    Change,
    Phone,
    Birthday,
    ShowAll,
    ShowPage,
    Search,
    Save,
    Load,
    Invalid,
}

/// One entry of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub keyword: &'static str,
    pub verb: Verb,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        keyword: "hello",
        verb: Verb::Hello,
        usage: "hello",
        summary: "Greet the assistant",
    },
    CommandSpec {
        keyword: "add",
        verb: Verb::Add,
        usage: "add <name> <phone> [phone...]",
        summary: "Create a contact with one or more phones",
    },
    CommandSpec {
        keyword: "change",
        verb: Verb::Change,
        usage: "change <name> <phone> [phone...]",
        summary: "Add phones to an existing contact",
    },
    CommandSpec {
        keyword: "phone",
        verb: Verb::Phone,
        usage: "phone <name>",
        summary: "Show one contact",
    },
    CommandSpec {
        keyword: "birthday",
        verb: Verb::Birthday,
        usage: "birthday <name> <DD-MM-YYYY>",
        summary: "Set a contact's birthday (once)",
    },
    CommandSpec {
        keyword: "show all",
        verb: Verb::ShowAll,
        usage: "show all",
        summary: "List every contact",
    },
    CommandSpec {
        keyword: "show page",
        verb: Verb::ShowPage,
        usage: "show page [n]",
        summary: "List one page of contacts",
    },
    CommandSpec {
        keyword: "search",
        verb: Verb::Search,
        usage: "search <text...>",
        summary: "Find contacts by name or phone fragment",
    },
    CommandSpec {
        keyword: "save",
        verb: Verb::Save,
        usage: "save <filename>",
        summary: "Save the address book",
    },
    CommandSpec {
        keyword: "load",
        verb: Verb::Load,
        usage: "load <filename>",
        summary: "Replace the address book with a saved one",
    },
    CommandSpec {
        keyword: "help",
        verb: Verb::Help,
        usage: "help",
        summary: "List commands",
    },
    CommandSpec {
        keyword: "good bye",
        verb: Verb::Farewell,
        usage: "good bye | close | exit",
        summary: "Leave the assistant",
    },
    CommandSpec {
        keyword: "close",
        verb: Verb::Farewell,
        usage: "close",
        summary: "Leave the assistant",
    },
    CommandSpec {
        keyword: "exit",
        verb: Verb::Farewell,
        usage: "exit",
        summary: "Leave the assistant",
    },
];

static ONE_WORD: Lazy<HashMap<&'static str, Verb>> = Lazy::new(|| table(false));
static TWO_WORD: Lazy<HashMap<&'static str, Verb>> = Lazy::new(|| table(true));

fn table(two_words: bool) -> HashMap<&'static str, Verb> {
    COMMANDS
        .iter()
        .filter(|spec| spec.keyword.contains(' ') == two_words)
        .map(|spec| (spec.keyword, spec.verb))
        .collect()
}

/// A line resolved to its verb and argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub verb: Verb,
    pub args: Vec<&'a str>,
}

impl<'a> Resolved<'a> {
    fn invalid() -> Self {
        Self {
            verb: Verb::Invalid,
            args: Vec::new(),
        }
    }
}

pub fn resolve(line: &str) -> Resolved<'_> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return Resolved::invalid();
    };

    if let Some(verb) = ONE_WORD.get(first.to_lowercase().as_str()) {
        return Resolved {
            verb: *verb,
            args: tokens[1..].to_vec(),
        };
    }

    if tokens.len() > 1 {
        let keyword = format!("{} {}", first, tokens[1]).to_lowercase();
        if let Some(verb) = TWO_WORD.get(keyword.as_str()) {
            return Resolved {
                verb: *verb,
                args: tokens[2..].to_vec(),
            };
        }
    }

    Resolved::invalid()
}
