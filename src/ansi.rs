// Shared ANSI/VT100 control sequences used across the crate.

/// ESC (escape) control character.
pub const ESC: char = '\x1B';

#[macro_export]
macro_rules! csi {
    ($suffix:literal) => {
        concat!("\x1B[", $suffix)
    };
}

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = crate::csi!("H");
/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = crate::csi!("2J");
/// Erase the current line.
pub const ERASE_LINE: &str = crate::csi!("K");
/// Erase from the cursor to the end of the line.
pub const ERASE_TO_EOL: &str = crate::csi!("0K");
/// Erase from the start of the line to the cursor.
pub const ERASE_TO_SOL: &str = crate::csi!("1K");
/// Reset terminal styling to defaults.
pub const STYLE_RESET: &str = crate::csi!("0m");
/// Return to column one and erase the whole line.
pub const RESET_LINE: &str = concat!("\r", "\x1B[2K");
