mod common;

use arrowmap::draw::drawer::Drawer;
use arrowmap::draw::figure::{BoundingBox, Figure};
use arrowmap::draw::marker::draw_marker;
use arrowmap::draw::point::Point;
use arrowmap::segment::Segment;
use arrowmap::style::{Color, Style};
use arrowmap::tile::{Tile, TILE_SIZE};

const ZOOM: u8 = 13;

fn nyc_segment() -> Segment {
    Segment {
        from: (40.783435, -73.96625),
        to: (40.768094, -73.981865),
    }
}

fn tile_of_global_pixel(x: i32, y: i32) -> Tile {
    Tile {
        zoom: ZOOM,
        x: x as u32 / TILE_SIZE,
        y: y as u32 / TILE_SIZE,
    }
}

fn pixel_at(triples: &[(u8, u8, u8)], tile: &Tile, global_x: i32, global_y: i32) -> (u8, u8, u8) {
    let local_x = global_x as u32 - tile.x * TILE_SIZE;
    let local_y = global_y as u32 - tile.y * TILE_SIZE;
    triples[(local_y * TILE_SIZE + local_x) as usize]
}

#[test]
fn empty_tile_is_painted_with_the_canvas_color() {
    let drawer = Drawer::new();
    let tile = Tile {
        zoom: 11,
        x: 603,
        y: 769,
    };
    let triples = drawer.draw_to_pixels(&[], &tile, &Style::default());

    assert_eq!(triples.len(), (TILE_SIZE * TILE_SIZE) as usize);
    assert!(triples.iter().all(|&rgb| rgb == (255, 255, 255)));
}

#[test]
fn stroke_darkens_the_segment_midpoint() {
    let segment = nyc_segment();
    let p1 = Point::from_coords(&segment.from, ZOOM);
    let p2 = Point::from_coords(&segment.to, ZOOM);
    let (mid_x, mid_y) = ((p1.x + p2.x) / 2, (p1.y + p2.y) / 2);

    let tile = tile_of_global_pixel(mid_x, mid_y);
    let style = Style {
        line_width: 2.0,
        ..Style::default()
    };

    let triples = Drawer::new().draw_to_pixels(&[&segment], &tile, &style);
    let (r, g, b) = pixel_at(&triples, &tile, mid_x, mid_y);
    assert!(r < 128 && g < 128 && b < 128, "midpoint pixel is ({}, {}, {})", r, g, b);
}

#[test]
fn marker_covers_the_destination() {
    let segment = nyc_segment();
    let destination = Point::from_coords(&segment.to, ZOOM);

    let tile = tile_of_global_pixel(destination.x, destination.y);
    let triples = Drawer::new().draw_to_pixels(&[&segment], &tile, &Style::default());

    let (r, g, b) = pixel_at(&triples, &tile, destination.x, destination.y);
    assert!(r < 10 && g < 10 && b < 10, "destination pixel is ({}, {}, {})", r, g, b);
}

#[test]
fn marker_points_along_its_rotation() {
    let tile = Tile {
        zoom: 11,
        x: 603,
        y: 769,
    };
    let bb = BoundingBox::from_tile(&tile);
    let center = Point {
        x: (bb.min_x + 128) as i32,
        y: (bb.min_y + 128) as i32,
    };

    let mut figure = Figure::new(bb);
    let black = Color { r: 0, g: 0, b: 0 };
    // Rotation 0 means the apex points right (due east).
    draw_marker(&center, 3, 4.0, 0.0, &black, 1.0, &mut figure);

    let has_pixel = |x: i32, y: i32| {
        figure
            .pixels
            .get(&(y as usize))
            .map_or(false, |row| row.contains_key(&(x as usize)))
    };

    assert!(has_pixel(center.x + 4, center.y), "apex missing");
    assert!(has_pixel(center.x - 2, center.y), "back edge missing");
    assert!(!has_pixel(center.x - 4, center.y), "marker extends backwards");
}

#[test]
fn tiles_are_encoded_as_png() {
    let store = common::fixture_store();
    let tile = Tile {
        zoom: 11,
        x: 603,
        y: 769,
    };
    let style = Style::default();
    let segments = store.segments_in_tile(&tile, style.query_padding());
    assert_eq!(segments.len(), 5);

    let png_bytes = Drawer::new().draw_tile(&segments, &tile, &style).unwrap();
    assert_eq!(&png_bytes[..8], &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a]);
}
