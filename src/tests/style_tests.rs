use strum::IntoEnumIterator;

use crate::profile::Profile;
use crate::style::Style;

#[test]
fn paint_with_color_disabled_is_identity_for_every_style() {
    let profile = Profile::new().without_color();
    for style in Style::iter() {
        assert_eq!(profile.paint(style, "sample"), "sample");
        assert_eq!(profile.paint(style, ""), "");
    }
}

#[test]
fn paint_with_color_enabled_wraps_for_every_style() {
    let profile = Profile::new();
    for style in Style::iter() {
        let painted = profile.paint(style, "sample");
        assert!(painted.len() > "sample".len());
        assert!(painted.contains("sample"));
        assert!(painted.ends_with("\x1B[0m"));
    }
}

#[test]
fn wrap_emits_expected_sgr_codes() {
    assert_eq!(Style::Bold.wrap("x"), "\x1B[1mx\x1B[0m");
    assert_eq!(Style::Red.wrap("x"), "\x1B[31mx\x1B[0m");
    assert_eq!(Style::Green.wrap("x"), "\x1B[32mx\x1B[0m");
    assert_eq!(Style::Yellow.wrap("x"), "\x1B[33mx\x1B[0m");
    assert_eq!(Style::BrightWhite.wrap("x"), "\x1B[97mx\x1B[0m");
}

#[test]
fn nested_wraps_keep_inner_text() {
    let both = Style::Bold.wrap(&Style::Green.wrap("go"));
    assert!(both.starts_with("\x1B[1m\x1B[32m"));
    assert!(both.contains("go"));
}
