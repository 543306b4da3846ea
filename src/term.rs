use std::env;
use std::io::{self, IsTerminal};

use terminal_size::{Height, Width, terminal_size};

use crate::errors::{Error, Result};

/// `TERM` value that advertises no styling capability at all.
const DUMB_TERM: &str = "dumb";

/// True iff stdout is attached to an interactive terminal.
pub fn is_interactive() -> bool {
    io::stdout().is_terminal()
}

/// True iff the terminal type is not the "dumb" sentinel and stdout is
/// interactive. An unset `TERM` counts as capable.
pub fn supports_color() -> bool {
    env::var("TERM").map(|t| t != DUMB_TERM).unwrap_or(true) && is_interactive()
}

/// Whether style functions should emit color codes at all. Evaluated at
/// call time, never cached: output can be re-piped between calls.
pub fn color_enabled() -> bool {
    supports_color() && is_interactive()
}

/// Current terminal size as (width, height) in cells.
pub fn size() -> Result<(u16, u16)> {
    match terminal_size() {
        Some((Width(w), Height(h))) => Ok((w, h)),
        None => Err(Error::size_query("output is not attached to a terminal")),
    }
}
