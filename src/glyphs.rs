use crate::errors::Result;
use crate::term;

/// Short display strings for every drawing character the crate emits.
///
/// Exactly one variant is active per [`Profile`](crate::Profile):
/// [`GlyphSet::unicode`] for capable terminals, [`GlyphSet::ascii`] for
/// Windows consoles and other terminals without reliable Unicode
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    pub thin_hline: &'static str,
    pub frame_hline: &'static str,
    pub frame_vline: &'static str,
    pub frame_open_l: &'static str,
    pub frame_open_r: &'static str,
    pub frame_tee_l: &'static str,
    pub frame_tee_r: &'static str,
    pub frame_close_l: &'static str,
    pub frame_close_r: &'static str,
    pub oframe_hline: &'static str,
    pub oframe_vline: &'static str,
    pub oframe_open_l: &'static str,
    pub oframe_open_r: &'static str,
    pub oframe_tee_l: &'static str,
    pub oframe_tee_r: &'static str,
    pub oframe_close_l: &'static str,
    pub oframe_close_r: &'static str,
    pub harrow: &'static str,
    pub rarrow: &'static str,
    pub larrow: &'static str,
    pub bullet: &'static str,
    pub mark: &'static str,
    pub cont: &'static str,
    pub prompt: &'static str,
}

impl GlyphSet {
    /// Box-drawing characters for terminals with working Unicode output.
    pub fn unicode() -> Self {
        Self {
            thin_hline: "─",
            frame_hline: "━",
            frame_vline: "┃",
            frame_open_l: "┏",
            frame_open_r: "┓",
            frame_tee_l: "┣",
            frame_tee_r: "┫",
            frame_close_l: "┗",
            frame_close_r: "┛",
            oframe_hline: "═",
            oframe_vline: "║",
            oframe_open_l: "╔",
            oframe_open_r: "╗",
            oframe_tee_l: "╠",
            oframe_tee_r: "╣",
            oframe_close_l: "╚",
            oframe_close_r: "╝",
            harrow: "⋙",
            rarrow: "⋙",
            larrow: "⋘",
            bullet: "•",
            mark: "★",
            cont: "…",
            prompt: "❯",
        }
    }

    /// Plain 7-bit replacements for every glyph.
    pub fn ascii() -> Self {
        Self {
            thin_hline: "-",
            frame_hline: "-",
            frame_vline: "|",
            frame_open_l: "+",
            frame_open_r: "+",
            frame_tee_l: "+",
            frame_tee_r: "+",
            frame_close_l: "+",
            frame_close_r: "+",
            oframe_hline: "=",
            oframe_vline: "|",
            oframe_open_l: "+",
            oframe_open_r: "+",
            oframe_tee_l: "+",
            oframe_tee_r: "+",
            oframe_close_l: "+",
            oframe_close_r: "+",
            harrow: ">>>",
            rarrow: ">>>",
            larrow: "<<<",
            bullet: "*",
            mark: "*",
            cont: "...",
            prompt: ">",
        }
    }
}

/// `len` repetitions of `glyph`. A `len` of zero means "span the
/// terminal"; the current width is queried and a failed query degrades
/// to an empty string rather than an error.
pub fn hline(glyph: &str, len: usize) -> String {
    glyph.repeat(resolve_len(len, term::size()))
}

pub(crate) fn resolve_len(len: usize, size: Result<(u16, u16)>) -> usize {
    if len != 0 {
        return len;
    }
    size.map(|(w, _)| w as usize).unwrap_or(0)
}
