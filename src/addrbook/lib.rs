//! # addrbook Architecture
//!
//! addrbook is a **UI-agnostic address book library** with a line-oriented
//! assistant as its first client. The binary reads a line, hands it to the
//! library and prints whatever comes back; every rule about contacts lives here.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (binary: main.rs + cli/)                         │
//! │  - Prompt, read line, print reply, stop on farewell         │
//! │  - The ONLY place that knows about stdin/stdout/stderr      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Router (router.rs)                    │
//! │  - Resolves a raw line to a verb and argument tokens        │
//! │  - Runs the verb, turns any error into fixed display text   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per verb, returns Result<CmdMessage>         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Storage (book.rs, store/)                           │
//! │  - AddressBook: unique names, search, paging, save/load     │
//! │  - BookStore: FileStore (production), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (model.rs, validation.rs)                            │
//! │  - Name, Phone, Birthday value objects and Record           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Objects
//!
//! `Name`, `Phone` and `Birthday` can only be built by parsing, which runs the
//! matching validator. Changing a field means building a new value and
//! swapping it in; there are no setters to bypass.
//!
//! ## Testing Strategy
//!
//! 1. **Model and commands**: unit tests next to the code, against
//!    `InMemoryStore`.
//! 2. **API**: scenario tests feeding raw lines into `AddrBookApi::handle`.
//! 3. **Binary**: `tests/` drives the compiled assistant over stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for every line
//! - [`router`]: Command tables and line resolution
//! - [`commands`]: Per-verb handlers
//! - [`book`]: The in-memory address book
//! - [`store`]: Persistence backends
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`validation`]: Field validators
//! - [`config`]: Configuration management
//! - [`error`]: Error types and display categories

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod router;
pub mod store;
pub mod validation;
