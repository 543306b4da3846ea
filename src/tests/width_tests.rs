use crate::style::Style;
use crate::width::{strip_ansi, visible_width};

#[test]
fn visible_width_strips_style_codes() {
    let styled = Style::Red.wrap("Red");
    assert_eq!(visible_width(&styled), 3);
}

#[test]
fn strip_ansi_removes_csi_sequences() {
    let styled = Style::Blue.wrap("Blue");
    assert_eq!(strip_ansi(&styled), "Blue");
}

#[test]
fn visible_width_counts_plain_text_chars() {
    assert_eq!(visible_width("hello"), 5);
    assert_eq!(visible_width(""), 0);
    assert_eq!(visible_width("━━━"), 3);
}

#[test]
fn strip_ansi_leaves_bare_escape_alone() {
    // ESC not followed by '[' is not a CSI sequence.
    assert_eq!(strip_ansi("a\x1Bb"), "a\x1Bb");
}

#[test]
fn visible_width_handles_nested_styles() {
    let both = Style::Bold.wrap(&Style::Green.wrap("go"));
    assert_eq!(visible_width(&both), 2);
}
