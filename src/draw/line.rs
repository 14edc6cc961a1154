use crate::draw::figure::Figure;
use crate::draw::point::Point;
use crate::draw::tile_pixels::RgbaColor;
use crate::style::Color;

pub fn draw_lines<I>(points: I, width: f64, color: &Color, opacity: f64, figure: &mut Figure)
where
    I: Iterator<Item = (Point, Point)>,
{
    for (p1, p2) in points {
        draw_line(&p1, &p2, width, color, opacity, figure);
    }
}

/// Anti-aliased thick line with round caps.
///
/// Walks the major axis of the segment and feathers a short perpendicular
/// strip at every step by the pixel's true distance to the segment.
pub fn draw_line(p1: &Point, p2: &Point, width: f64, color: &Color, opacity: f64, figure: &mut Figure) {
    let profile = FeatherProfile::new(width);
    let reach = (width / 2.0 + 1.0).ceil() as i64;

    let bb = &figure.bounding_box;
    let (x1, y1) = (i64::from(p1.x), i64::from(p1.y));
    let (x2, y2) = (i64::from(p2.x), i64::from(p2.y));

    let steep = (y2 - y1).abs() > (x2 - x1).abs();
    let (mj1, mj2, mn1, mn2) = if steep { (y1, y2, x1, x2) } else { (x1, x2, y1, y2) };
    let (bb_mj_min, bb_mj_max, bb_mn_min, bb_mn_max) = if steep {
        (bb.min_y as i64, bb.max_y as i64, bb.min_x as i64, bb.max_x as i64)
    } else {
        (bb.min_x as i64, bb.max_x as i64, bb.min_y as i64, bb.max_y as i64)
    };

    let mj_from = (mj1.min(mj2) - reach).max(bb_mj_min);
    let mj_to = (mj1.max(mj2) + reach).min(bb_mj_max);
    let mj_span = mj2 - mj1;

    for mj in mj_from..=mj_to {
        let t = if mj_span == 0 {
            0.0
        } else {
            ((mj - mj1) as f64 / mj_span as f64).max(0.0).min(1.0)
        };
        let mn_center = mn1 as f64 + t * (mn2 - mn1) as f64;

        let mn_from = (mn_center.floor() as i64 - reach).max(bb_mn_min);
        let mn_to = (mn_center.ceil() as i64 + reach).min(bb_mn_max);

        for mn in mn_from..=mn_to {
            let (x, y) = if steep { (mn, mj) } else { (mj, mn) };

            let center_dist = dist_to_segment(x as f64, y as f64, p1, p2);
            let cd_opacity = profile.opacity(center_dist);

            if cd_opacity > 0.0 {
                figure.add(x as usize, y as usize, RgbaColor::from_color(color, opacity * cd_opacity));
            }
        }
    }
}

/// Distance from a point to the closest point of a segment (not its
/// supporting line), so the feather wraps around the endpoints.
fn dist_to_segment(x: f64, y: f64, p1: &Point, p2: &Point) -> f64 {
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
    let (dx, dy) = (f64::from(p2.x - p1.x), f64::from(p2.y - p1.y));

    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((x - x1) * dx + (y - y1) * dy) / len_sq).max(0.0).min(1.0)
    };

    (x - (x1 + t * dx)).hypot(y - (y1 + t * dy))
}

struct FeatherProfile {
    feather_from: f64,
    feather_to: f64,
    feather_dist: f64,
    opacity_mul: f64,
}

impl FeatherProfile {
    fn new(line_width: f64) -> Self {
        let line_half_width = line_width / 2.0;
        let feather_from = (line_half_width - 0.5).max(0.0);
        let feather_to = (line_half_width + 0.5).max(1.0);
        let feather_dist = feather_to - feather_from;
        FeatherProfile {
            feather_from,
            feather_to,
            feather_dist,
            opacity_mul: line_width.min(1.0),
        }
    }

    fn opacity(&self, center_distance: f64) -> f64 {
        if center_distance < self.feather_from {
            self.opacity_mul
        } else if center_distance < self.feather_to {
            (self.feather_to - center_distance) / self.feather_dist * self.opacity_mul
        } else {
            0.0
        }
    }
}
