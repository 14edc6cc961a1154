use arrowmap::style::{parse_color, Color, Style};

#[test]
fn parse_color_rejects_malformed_input() {
    // A multi-byte character can land on a non-boundary byte index; this
    // must come back as an error, not a panic.
    assert!(parse_color("#aaa\u{e9}b").is_err());
    assert!(parse_color("#12345").is_err());
    assert!(parse_color("#1234567").is_err());
    assert!(parse_color("#gggggg").is_err());
    assert!(parse_color("mauve").is_err());
    assert!(parse_color("").is_err());
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#ff8000").unwrap(), Color { r: 255, g: 128, b: 0 });
    assert_eq!(parse_color("salmon").unwrap(), Color { r: 250, g: 128, b: 114 });
}

#[test]
fn default_style_matches_the_classic_arrow_plot() {
    let style = Style::default();
    assert_eq!(style.line_width, 1.0);
    assert_eq!(style.line_color, Color { r: 0, g: 0, b: 0 });
    assert_eq!(style.marker_sides, 3);
    assert_eq!(style.marker_radius, 4.0);
    assert_eq!(style.marker_opacity, 1.0);
}
