//! # addrbook binary
//!
//! The binary is intentionally thin: the interactive loop lives in `cli/`,
//! and this file only invokes `cli::run()` and handles process termination.
//! Everything from `api.rs` inward is UI agnostic; the CLI owns stdin,
//! stdout, stderr, colors and logging setup.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
