use crate::draw::figure::{BoundingBox, Figure};
use crate::draw::line::draw_lines;
use crate::draw::marker::draw_marker;
use crate::draw::png_writer::rgb_triples_to_png;
use crate::draw::point::Point;
use crate::draw::tile_pixels::{dimension, RgbTriples, RgbaColor, TilePixels};
use crate::segment::Segment;
use crate::style::Style;
use crate::tile::Tile;

use anyhow::Result;

/// Renders directed segments on a tile: a stroke layer connecting the
/// endpoints, then a marker layer with a regular polygon at every
/// destination, rotated to (bearing - 90) degrees so the glyph points along
/// the direction of travel.
#[derive(Default)]
pub struct Drawer;

impl Drawer {
    pub fn new() -> Drawer {
        Drawer
    }

    pub fn draw_tile(&self, segments: &[&Segment], tile: &Tile, style: &Style) -> Result<Vec<u8>> {
        let pixels = self.draw_to_pixels(segments, tile, style);
        rgb_triples_to_png(&pixels, dimension(), dimension())
    }

    pub fn draw_to_pixels(&self, segments: &[&Segment], tile: &Tile, style: &Style) -> RgbTriples {
        let mut pixels = TilePixels::new(tile);
        pixels.fill(&RgbaColor::from_color(&style.canvas_color, 1.0));

        let mut strokes = Figure::new(BoundingBox::from_tile(tile));
        let endpoints = segments.iter().map(|segment| {
            (
                Point::from_coords(&segment.from, tile.zoom),
                Point::from_coords(&segment.to, tile.zoom),
            )
        });
        draw_lines(
            endpoints,
            style.line_width,
            &style.line_color,
            style.line_opacity,
            &mut strokes,
        );
        draw_figure(&strokes, &mut pixels);

        // Markers go into their own generation, so each one blends exactly
        // once over the strokes beneath it.
        pixels.bump_generation();

        let mut markers = Figure::new(BoundingBox::from_tile(tile));
        for segment in segments {
            draw_marker(
                &Point::from_coords(&segment.to, tile.zoom),
                style.marker_sides,
                style.marker_radius,
                segment.bearing() - 90.0,
                &style.marker_color,
                style.marker_opacity,
                &mut markers,
            );
        }
        draw_figure(&markers, &mut pixels);

        pixels.blend_unfinished_pixels();
        pixels.to_rgb_triples()
    }
}

fn draw_figure(figure: &Figure, pixels: &mut TilePixels) {
    for (y, x_to_color) in &figure.pixels {
        for (x, color) in x_to_color {
            pixels.set_pixel(*x, *y, color);
        }
    }
}
