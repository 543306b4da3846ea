use crate::glyphs::GlyphSet;
use crate::style::Style;
use crate::term;

/// The rendering profile: the active glyph set plus the color switch.
///
/// Decided once at startup and handed to every [`Printer`](crate::Printer)
/// and drawing call. Switching to ASCII is one-way; no operation
/// restores the Unicode set within a profile's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    glyphs: GlyphSet,
    color: bool,
}

impl Profile {
    /// Unicode glyphs with color on. The starting point before any
    /// environment probing.
    pub fn new() -> Self {
        Self {
            glyphs: GlyphSet::unicode(),
            color: true,
        }
    }

    /// Probe the environment: ASCII glyphs on the Windows console
    /// family, color only when stdout is an interactive terminal whose
    /// type is not "dumb".
    pub fn detect() -> Self {
        let mut profile = Self::for_os(std::env::consts::OS);
        if !term::color_enabled() {
            profile.color = false;
        }
        profile
    }

    /// The platform half of [`Profile::detect`], split out so tests can
    /// pin the OS identifier.
    pub fn for_os(os: &str) -> Self {
        let mut profile = Self::new();
        if os == "windows" {
            profile.use_ascii();
        }
        profile
    }

    /// Replace every glyph with its ASCII-safe form and turn color off.
    /// Idempotent, and irreversible within this profile.
    pub fn use_ascii(&mut self) {
        self.glyphs = GlyphSet::ascii();
        self.color = false;
    }

    /// Drop color while keeping the current glyph set, for callers that
    /// know output is being piped.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Apply `style` when color is on; pass `text` through unchanged
    /// otherwise. The switch is consulted on every call.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if self.color {
            style.wrap(text)
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(Style::Bold, text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint(Style::Red, text)
    }

    pub fn green(&self, text: &str) -> String {
        self.paint(Style::Green, text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint(Style::Yellow, text)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new()
    }
}
