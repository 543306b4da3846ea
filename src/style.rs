use strum_macros::{AsRefStr, Display, EnumIter};

use crate::ansi::STYLE_RESET;

/// Text attributes plus the eight base and eight bright foreground
/// colors, each carrying its SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, AsRefStr)]
pub enum Style {
    Bold,
    Faint,
    Italic,
    Underline,
    Strike,
    Blink,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Style {
    /// SGR parameter for this style.
    pub fn code(self) -> &'static str {
        match self {
            Style::Bold => "1",
            Style::Faint => "2",
            Style::Italic => "3",
            Style::Underline => "4",
            Style::Blink => "5",
            Style::Strike => "9",
            Style::Black => "30",
            Style::Red => "31",
            Style::Green => "32",
            Style::Yellow => "33",
            Style::Blue => "34",
            Style::Magenta => "35",
            Style::Cyan => "36",
            Style::White => "37",
            Style::BrightBlack => "90",
            Style::BrightRed => "91",
            Style::BrightGreen => "92",
            Style::BrightYellow => "93",
            Style::BrightBlue => "94",
            Style::BrightMagenta => "95",
            Style::BrightCyan => "96",
            Style::BrightWhite => "97",
        }
    }

    /// Wrap `text` in this style's control codes unconditionally.
    /// Callers wanting the no-color fallback go through
    /// [`Profile::paint`](crate::Profile::paint) instead.
    pub fn wrap(self, text: &str) -> String {
        format!("\x1B[{}m{}{}", self.code(), text, STYLE_RESET)
    }
}
