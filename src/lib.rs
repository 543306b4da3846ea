//! Terminal presentation helpers: ANSI control sequences, glyph sets with
//! an ASCII fallback, styled text, and a flag-gated [`Printer`] for
//! readable CLI output.

pub mod ansi;
pub mod errors;
pub mod glyphs;
pub mod printer;
pub mod profile;
pub mod screen;
pub mod style;
pub mod term;
pub mod width;

#[cfg(test)]
mod tests;

pub use errors::{Error, Result};
pub use glyphs::GlyphSet;
pub use printer::Printer;
pub use profile::Profile;
pub use style::Style;
