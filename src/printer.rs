use std::fmt::Display;
use std::io::{self, BufWriter, Stdout, Write};

use crate::glyphs;
use crate::profile::Profile;
use crate::width::visible_width;

const DEBUG_MARK: &str = "*** DEB: ";
const WARNING_MARK: &str = "*** WARN: ";
const ERROR_MARK: &str = "*** ERR: ";

/// Width of the rule printed above sub-page module headings.
const HEADING_RULE_WIDTH: usize = 80;

/// Leveled, flag-gated output on top of a rendering profile.
///
/// The three gates are independent; all eight combinations are valid.
/// `silent` mutes only the [`Printer::write_out`] path (plain output
/// and banners) — verbose and debug output, warnings, and errors are
/// never suppressed by it. Every emission flushes the sink.
#[derive(Debug)]
pub struct Printer<W: Write> {
    profile: Profile,
    out: W,
    verbose: bool,
    debug: bool,
    silent: bool,
}

impl Printer<BufWriter<Stdout>> {
    /// Printer over buffered stdout with an environment-detected
    /// profile (ASCII glyphs on Windows, color per capability probe).
    pub fn new() -> Self {
        Self::with_sink(Profile::detect(), BufWriter::new(io::stdout()))
    }
}

impl Default for Printer<BufWriter<Stdout>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Printer<W> {
    /// Printer with an explicit profile and sink. Tests pass a
    /// `Vec<u8>` here to capture output.
    pub fn with_sink(profile: Profile, out: W) -> Self {
        Self {
            profile,
            out,
            verbose: false,
            debug: false,
            silent: false,
        }
    }

    pub fn set_verbose(&mut self, on: bool) {
        self.verbose = on;
    }

    pub fn set_debug(&mut self, on: bool) {
        self.debug = on;
    }

    pub fn set_silent(&mut self, on: bool) {
        self.silent = on;
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// The underlying sink, for interleaving the `screen` primitives
    /// with gated output.
    pub fn sink(&mut self) -> &mut W {
        &mut self.out
    }

    fn emit(&mut self, text: &str) {
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
    }

    /// Write `text` unless `silent` is set.
    pub fn write_out(&mut self, text: impl Display) {
        if !self.silent {
            self.emit(&text.to_string());
        }
    }

    /// Write `text` unconditionally, bypassing the silent gate.
    /// Reserved for output that must always appear.
    pub fn write_any(&mut self, text: impl Display) {
        self.emit(&text.to_string());
    }

    /// Single-line frame around `text`: three lines, rules sized to the
    /// visible width of `text` plus two spaces of padding.
    pub fn frame(&self, text: &str) -> String {
        let g = self.profile.glyphs();
        let w = visible_width(text) + 2;
        format!(
            "{}{}{}\n{} {} {}\n{}{}{}\n",
            g.frame_open_l,
            g.frame_hline.repeat(w),
            g.frame_open_r,
            g.frame_vline,
            text,
            g.frame_vline,
            g.frame_close_l,
            g.frame_hline.repeat(w),
            g.frame_close_r,
        )
    }

    /// Double-line frame around `text`, preceded by a blank line.
    pub fn oframe(&self, text: &str) -> String {
        let g = self.profile.glyphs();
        let w = visible_width(text) + 2;
        format!(
            "\n{}{}{}\n{} {} {}\n{}{}{}\n",
            g.oframe_open_l,
            g.oframe_hline.repeat(w),
            g.oframe_open_r,
            g.oframe_vline,
            text,
            g.oframe_vline,
            g.oframe_close_l,
            g.oframe_hline.repeat(w),
            g.oframe_close_r,
        )
    }

    /// Per-cell rules matching each cell's visible width, for
    /// underlining table header rows.
    pub fn underlines(&self, row: &[String]) -> Vec<String> {
        let hline = self.profile.glyphs().frame_hline;
        row.iter()
            .map(|cell| hline.repeat(visible_width(cell)))
            .collect()
    }

    /// `text` in a bold-green single-line frame, through the
    /// silent-respecting gate.
    pub fn banner(&mut self, text: impl Display) {
        let framed = self.frame(&text.to_string());
        let styled = self.profile.bold(&self.profile.green(&framed));
        self.write_out(styled);
    }

    /// `text` in a bold-green double-line frame, through the
    /// silent-respecting gate.
    pub fn obanner(&mut self, text: impl Display) {
        let framed = self.oframe(&text.to_string());
        let styled = self.profile.bold(&self.profile.green(&framed));
        self.write_out(styled);
    }

    /// Yellow heading through the unconditional writer: an 80-column
    /// rule plus `Module <name>: <text>` on sub-pages, a plain
    /// `Usage: <text>` heading otherwise.
    pub fn module_heading(&mut self, sub_page: bool, module: &str, text: impl Display) {
        let heading = if sub_page {
            let rule = glyphs::hline(self.profile.glyphs().thin_hline, HEADING_RULE_WIDTH);
            self.write_any(format!("\n{rule}\n"));
            format!("\nModule {:<10}   {}\n", format!("{module}:"), text)
        } else {
            format!("\nUsage:   {text}\n")
        };
        let styled = self.profile.yellow(&heading);
        self.write_any(styled);
    }

    /// Emit only when `verbose` is set. Independent of `silent`.
    pub fn verbose(&mut self, text: impl Display) {
        if self.verbose {
            self.write_any(text);
        }
    }

    pub fn verboseln(&mut self, text: impl Display) {
        self.verbose(format!("{text}\n"));
    }

    /// Like [`Printer::verbose`], green-styled.
    pub fn verbose_info(&mut self, text: impl Display) {
        if self.verbose {
            let styled = self.profile.green(&text.to_string());
            self.write_any(styled);
        }
    }

    pub fn verbose_infoln(&mut self, text: impl Display) {
        self.verbose_info(format!("{text}\n"));
    }

    /// Like [`Printer::verbose`], bold-styled.
    pub fn verbose_bold(&mut self, text: impl Display) {
        if self.verbose {
            let styled = self.profile.bold(&text.to_string());
            self.write_any(styled);
        }
    }

    pub fn verbose_boldln(&mut self, text: impl Display) {
        self.verbose_bold(format!("{text}\n"));
    }

    /// Emit only when `debug` is set: red, with the debug marker.
    /// Independent of `silent` and `verbose`.
    pub fn debug(&mut self, text: impl Display) {
        if self.debug {
            let styled = self.profile.red(&format!("{DEBUG_MARK}{text}"));
            self.write_any(styled);
        }
    }

    pub fn debugln(&mut self, text: impl Display) {
        self.debug(format!("{text}\n"));
    }

    /// Always emitted: yellow, with the warning marker. No flag
    /// suppresses warnings.
    pub fn warning(&mut self, text: impl Display) {
        let styled = self.profile.yellow(&format!("{WARNING_MARK}{text}"));
        self.write_any(styled);
    }

    pub fn warningln(&mut self, text: impl Display) {
        self.warning(format!("{text}\n"));
    }

    /// Always emitted: red, with the error marker. No flag suppresses
    /// errors.
    pub fn error(&mut self, text: impl Display) {
        let styled = self.profile.red(&format!("{ERROR_MARK}{text}"));
        self.write_any(styled);
    }

    pub fn errorln(&mut self, text: impl Display) {
        self.error(format!("{text}\n"));
    }
}
