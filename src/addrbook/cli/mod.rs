//! # CLI Layer
//!
//! This is **one possible UI client** for the address book. It is the only
//! place that knows about terminal I/O.
//!
//! ## The Session Loop
//!
//! Print the prompt, read one line, hand it to
//! [`AddrBookApi::handle`](addrbook::api::AddrBookApi::handle) unmodified, print
//! the reply, repeat. The loop ends when the reply is the farewell text or when
//! stdin reaches end of input.
//!
//! ## Structure
//!
//! - `setup.rs`: logging, config discovery and `AppContext` wiring
//! - `print.rs`: colors replies by message level

mod print;
mod setup;

use addrbook::api::{is_farewell, AddrBookApi};
use addrbook::error::Result;
use addrbook::store::BookStore;
use std::io::{self, BufRead, Write};

pub fn run() -> Result<()> {
    setup::init_logging();
    let mut ctx = setup::init_context();

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(&mut ctx.api, stdin.lock(), stdout.lock(), &ctx.prompt)?;
    Ok(())
}

fn session<S, R, W>(
    api: &mut AddrBookApi<S>,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()>
where
    S: BookStore,
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            tracing::debug!("end of input");
            return Ok(());
        }

        // Bytes that are not UTF-8 become U+FFFD and fail validation like any typo.
        let line = String::from_utf8_lossy(&buf);
        let message = api.handle(line.trim_end_matches(['\r', '\n']));
        writeln!(output, "{}", print::styled(&message))?;

        if is_farewell(&message) {
            return Ok(());
        }
    }
}
