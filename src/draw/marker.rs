use crate::draw::figure::Figure;
use crate::draw::point::Point;
use crate::draw::tile_pixels::RgbaColor;
use crate::style::Color;

use std::collections::BTreeMap;

/// Draws a filled regular polygon of `sides` vertices around `center`,
/// without an outline.
///
/// `rotation` is a screen angle in degrees: 0 points right and angles grow
/// clockwise, since y grows downward. The first vertex lies on the rotation
/// angle, so passing (bearing - 90) makes a triangle point along the
/// direction of travel.
pub fn draw_marker(
    center: &Point,
    sides: u32,
    radius: f64,
    rotation: f64,
    color: &Color,
    opacity: f64,
    figure: &mut Figure,
) {
    if sides < 3 {
        return;
    }

    let vertices: Vec<(i32, i32)> = (0..sides)
        .map(|idx| {
            let theta = (rotation + f64::from(idx) * 360.0 / f64::from(sides)).to_radians();
            (
                center.x + (radius * theta.cos()).round() as i32,
                center.y + (radius * theta.sin()).round() as i32,
            )
        })
        .collect();

    let mut spans = RowSpans::new();
    for idx in 0..vertices.len() {
        trace_edge(vertices[idx], vertices[(idx + 1) % vertices.len()], &mut spans);
    }

    let bb = figure.bounding_box.clone();
    for (y, (x_min, x_max)) in spans {
        if y < bb.min_y as i64 || y > bb.max_y as i64 {
            continue;
        }
        let from_x = x_min.max(bb.min_x as i64);
        let to_x = x_max.min(bb.max_x as i64);
        for x in from_x..=to_x {
            figure.add(x as usize, y as usize, RgbaColor::from_color(color, opacity));
        }
    }
}

// The polygon is convex, so one (min_x, max_x) span per row is enough.
type RowSpans = BTreeMap<i64, (i64, i64)>;

// Stripped-down version of Bresenham which is extremely easy to implement.
// See http://members.chello.at/~easyfilter/bresenham.html
fn trace_edge(p1: (i32, i32), p2: (i32, i32), spans: &mut RowSpans) {
    let (mut x, mut y) = (i64::from(p1.0), i64::from(p1.1));
    let (x_end, y_end) = (i64::from(p2.0), i64::from(p2.1));

    let dx = (x_end - x).abs();
    let dy = -(y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        let span = spans.entry(y).or_insert((x, x));
        span.0 = span.0.min(x);
        span.1 = span.1.max(x);

        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
