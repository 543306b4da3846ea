use termbrush::{Printer, Profile, Style, glyphs, screen, width};

/// A short session through the public API: banner, gated chatter, a
/// cursor reposition, and a final error that must survive silencing.
#[test]
fn session_output_matches_gating_policy() {
    let mut profile = Profile::new();
    profile.use_ascii();
    let mut printer = Printer::with_sink(profile, Vec::<u8>::new());

    printer.banner("demo");
    printer.verboseln("loading widgets");
    printer.set_verbose(true);
    printer.verboseln("still loading");
    printer.set_silent(true);
    printer.write_out("progress 50%");
    screen::line_start(printer.sink());
    printer.errorln("widget exploded");

    let got = String::from_utf8(printer.sink().clone()).unwrap();
    assert_eq!(
        got,
        "+------+\n| demo |\n+------+\nstill loading\n\r\x1B[2K*** ERR: widget exploded\n"
    );
}

#[test]
fn styled_text_measures_and_frames_consistently() {
    let profile = Profile::new();
    let styled = profile.paint(Style::Underline, "target");
    assert_eq!(width::visible_width(&styled), 6);

    let printer = Printer::with_sink(profile, Vec::<u8>::new());
    let top = printer.frame(&styled).lines().next().unwrap().to_string();
    assert_eq!(width::visible_width(&top), 6 + 2 + 2);
}

#[test]
fn rules_and_glyphs_compose() {
    let profile = Profile::for_os("windows");
    let rule = glyphs::hline(profile.glyphs().thin_hline, 10);
    assert_eq!(rule, "----------");
    assert_eq!(profile.glyphs().prompt, ">");
}
