//! # API Facade
//!
//! The single entry point for UI clients. [`AddrBookApi`] owns the session
//! state (the address book, a [`BookStore`] and the paging setting), and
//! [`AddrBookApi::handle`] is the whole contract: one raw line in, one
//! [`CmdMessage`] out.
//!
//! ## Error Translation
//!
//! Handlers return `Result<CmdMessage>`. This is the only place an error
//! becomes display text: it is logged in full, and the user sees the fixed
//! string of its [`ErrorCategory`](crate::error::ErrorCategory). Nothing
//! escapes to the caller.
//!
//! ## Generic Over BookStore
//!
//! - Production: `AddrBookApi<FileStore>`
//! - Testing: `AddrBookApi<InMemoryStore>`

pub use crate::commands::{CmdMessage, MessageLevel};

use crate::book::AddressBook;
use crate::commands::{self, greet};
use crate::config::BookConfig;
use crate::error::Result;
use crate::router::{self, Verb};
use crate::store::BookStore;
use chrono::{Local, NaiveDate};

pub struct AddrBookApi<S: BookStore> {
    book: AddressBook,
    store: S,
    page_size: usize,
    today: Option<NaiveDate>,
}

impl<S: BookStore> AddrBookApi<S> {
    pub fn new(store: S, config: &BookConfig) -> Self {
        Self {
            book: AddressBook::new(),
            store,
            page_size: config.page_size.max(1),
            today: None,
        }
    }

    /// Pin the calendar date used for birthday countdowns.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Resolve and run one input line. Never fails.
    pub fn handle(&mut self, line: &str) -> CmdMessage {
        let resolved = router::resolve(line);
        tracing::debug!(verb = ?resolved.verb, args = resolved.args.len(), "resolved command");

        match self.execute(resolved.verb, &resolved.args) {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(verb = ?resolved.verb, error = %e, "command failed");
                CmdMessage::error(e.category().message())
            }
        }
    }

    fn execute(&mut self, verb: Verb, args: &[&str]) -> Result<CmdMessage> {
        let today = self.today();
        match verb {
            Verb::Hello => Ok(greet::hello()),
            Verb::Farewell => Ok(greet::farewell()),
            Verb::Help => Ok(greet::help()),
            Verb::Invalid => Ok(greet::invalid()),
            Verb::Add => commands::add::run(&mut self.book, args),
            Verb::Change => commands::change::run(&mut self.book, args),
            Verb::Phone => commands::phone::run(&self.book, args),
            Verb::Birthday => commands::birthday::run(&mut self.book, args),
            Verb::ShowAll => Ok(commands::show::all(&self.book, today)),
            Verb::ShowPage => commands::show::page(&self.book, args, self.page_size, today),
            Verb::Search => commands::search::run(&self.book, args),
            Verb::Save => Ok(commands::persist::save(&self.book, &mut self.store, args)),
            Verb::Load => Ok(commands::persist::load(&mut self.book, &self.store, args)),
        }
    }
}

/// Whether `message` is the farewell that ends a session.
pub fn is_farewell(message: &CmdMessage) -> bool {
    message.content == greet::FAREWELL
}
