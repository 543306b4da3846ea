//! Direct drawing primitives: stateless cursor and screen control over
//! any sink, bypassing all `Printer` gates.
//!
//! Every call flushes before returning so output ordering stays
//! predictable when these are interleaved with other writers of the
//! same sink. Write and flush failures are best-effort and ignored.

use std::io::Write;

use crate::ansi::{CLEAR_SCREEN, CURSOR_HOME, RESET_LINE, STYLE_RESET};

/// Clear the screen and home the cursor.
pub fn clear_screen(out: &mut impl Write) {
    let _ = write!(out, "{CLEAR_SCREEN}{CURSOR_HOME}");
    let _ = out.flush();
}

/// Reset terminal styling to defaults.
pub fn reset_style(out: &mut impl Write) {
    let _ = write!(out, "{STYLE_RESET}");
    let _ = out.flush();
}

/// Move the cursor to the absolute position (`col`, `row`), 1-based.
pub fn cursor_to(out: &mut impl Write, col: u16, row: u16) {
    let _ = write!(out, "\x1B[{row};{col}H");
    let _ = out.flush();
}

/// Move the cursor up `count` lines.
pub fn cursor_up(out: &mut impl Write, count: u16) {
    let _ = write!(out, "\x1B[{count}A");
    let _ = out.flush();
}

/// Move the cursor down `count` lines.
pub fn cursor_down(out: &mut impl Write, count: u16) {
    let _ = write!(out, "\x1B[{count}B");
    let _ = out.flush();
}

/// Move the cursor right `count` columns.
pub fn cursor_right(out: &mut impl Write, count: u16) {
    let _ = write!(out, "\x1B[{count}C");
    let _ = out.flush();
}

/// Move the cursor left `count` columns.
pub fn cursor_left(out: &mut impl Write, count: u16) {
    let _ = write!(out, "\x1B[{count}D");
    let _ = out.flush();
}

/// Return to the start of the current line and erase it.
pub fn line_start(out: &mut impl Write) {
    let _ = write!(out, "{RESET_LINE}");
    let _ = out.flush();
}
