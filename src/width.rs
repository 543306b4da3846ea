use crate::ansi::ESC;

/// Display width of `s`: characters counted after stripping CSI
/// sequences, so styled text measures the same as its plain form.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESC && chars.peek() == Some(&'[') {
            chars.next(); // skip '['
            for nc in chars.by_ref() {
                if nc.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
