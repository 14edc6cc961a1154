use anyhow::{anyhow, Result};
use tini::Ini;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// How a tile gets painted: the canvas background, one stroke per segment
/// and one rotated regular-polygon marker at each segment's destination.
///
/// The defaults match the classic arrow plot: hairline black strokes and
/// filled black triangles of radius 4 with no outline.
#[derive(Clone, Debug)]
pub struct Style {
    pub canvas_color: Color,
    pub line_color: Color,
    pub line_width: f64,
    pub line_opacity: f64,
    pub marker_color: Color,
    pub marker_radius: f64,
    pub marker_sides: u32,
    pub marker_opacity: f64,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            canvas_color: Color { r: 255, g: 255, b: 255 },
            line_color: Color { r: 0, g: 0, b: 0 },
            line_width: 1.0,
            line_opacity: 1.0,
            marker_color: Color { r: 0, g: 0, b: 0 },
            marker_radius: 4.0,
            marker_sides: 3,
            marker_opacity: 1.0,
        }
    }
}

impl Style {
    /// How far outside a tile a segment may still leave pixels on it.
    pub fn query_padding(&self) -> f64 {
        self.marker_radius + self.line_width + 2.0
    }
}

/// Builds a style from the optional `[style]` section of an INI config.
/// Missing keys keep their defaults.
pub fn style_from_config(config: &Ini) -> Result<Style> {
    let section = "style";
    let mut style = Style::default();

    if let Some(value) = config.get::<String>(section, "canvas-color") {
        style.canvas_color = parse_color(&value)?;
    }
    if let Some(value) = config.get::<String>(section, "line-color") {
        style.line_color = parse_color(&value)?;
    }
    if let Some(value) = config.get(section, "line-width") {
        style.line_width = value;
    }
    if let Some(value) = config.get(section, "line-opacity") {
        style.line_opacity = value;
    }
    if let Some(value) = config.get::<String>(section, "marker-color") {
        style.marker_color = parse_color(&value)?;
    }
    if let Some(value) = config.get(section, "marker-radius") {
        style.marker_radius = value;
    }
    if let Some(value) = config.get(section, "marker-sides") {
        style.marker_sides = value;
    }
    if let Some(value) = config.get(section, "marker-opacity") {
        style.marker_opacity = value;
    }

    Ok(style)
}

/// Accepts `#rrggbb` or one of the named colors.
///
/// # Examples
/// ```
/// use arrowmap::style::{parse_color, Color};
/// assert_eq!(parse_color("black").unwrap(), Color { r: 0, g: 0, b: 0 });
/// assert_eq!(parse_color("#20ff00").unwrap(), Color { r: 32, g: 255, b: 0 });
/// assert!(parse_color("mauve").is_err());
/// ```
pub fn parse_color(name: &str) -> Result<Color> {
    if let Some(hex) = name.strip_prefix('#') {
        // The length check counts bytes, so slicing below is only safe for
        // pure-ASCII input.
        if hex.len() == 6 && hex.is_ascii() {
            let component = |idx| u8::from_str_radix(&hex[idx..idx + 2], 16);
            if let (Ok(r), Ok(g), Ok(b)) = (component(0), component(2), component(4)) {
                return Ok(Color { r, g, b });
            }
        }
        return Err(anyhow!("Invalid color: {}", name));
    }

    from_color_name(name).ok_or_else(|| anyhow!("Unknown color name: {}", name))
}

pub fn from_color_name(name: &str) -> Option<Color> {
    match name {
        "white" => Some(Color { r: 255, g: 255, b: 255 }),
        "black" => Some(Color { r: 0, g: 0, b: 0 }),
        "blue" => Some(Color { r: 0, g: 0, b: 255 }),
        "brown" => Some(Color { r: 165, g: 42, b: 42 }),
        "green" => Some(Color { r: 0, g: 255, b: 0 }),
        "grey" => Some(Color { r: 128, g: 128, b: 128 }),
        "pink" => Some(Color { r: 255, g: 192, b: 203 }),
        "purple" => Some(Color { r: 128, g: 0, b: 128 }),
        "red" => Some(Color { r: 255, g: 0, b: 0 }),
        "salmon" => Some(Color { r: 250, g: 128, b: 114 }),
        _ => None,
    }
}
