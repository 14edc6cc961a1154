use crate::segment::Segment;
use crate::tile::{coords_to_tile, coords_to_xy, Tile, TileRange, TILE_SIZE};

use std::cmp::{max, min};

/// An in-memory set of directed segments, queryable by tile.
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    pub fn new(segments: Vec<Segment>) -> SegmentStore {
        SegmentStore { segments }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the segments whose rendered footprint may touch a given tile.
    ///
    /// The footprint is the pixel bounding box of the projected endpoints,
    /// padded by `padding` pixels so that markers and thick strokes bleeding
    /// over a tile edge still show up on the neighboring tile.
    pub fn segments_in_tile(&self, tile: &Tile, padding: f64) -> Vec<&Segment> {
        let tile_min_x = f64::from(tile.x * TILE_SIZE);
        let tile_min_y = f64::from(tile.y * TILE_SIZE);
        let tile_max_x = tile_min_x + f64::from(TILE_SIZE);
        let tile_max_y = tile_min_y + f64::from(TILE_SIZE);

        self.segments
            .iter()
            .filter(|segment| {
                let (x1, y1) = coords_to_xy(&segment.from, tile.zoom);
                let (x2, y2) = coords_to_xy(&segment.to, tile.zoom);

                let min_x = x1.min(x2) - padding;
                let max_x = x1.max(x2) + padding;
                let min_y = y1.min(y2) - padding;
                let max_y = y1.max(y2) + padding;

                min_x < tile_max_x && max_x >= tile_min_x && min_y < tile_max_y && max_y >= tile_min_y
            })
            .collect()
    }

    /// The smallest tile rectangle covering all segment endpoints at a given
    /// zoom level, or `None` if the store is empty.
    pub fn bounding_tile_range(&self, zoom: u8) -> Option<TileRange> {
        let mut range: Option<TileRange> = None;

        for segment in &self.segments {
            for endpoint in &[segment.from, segment.to] {
                let tile = coords_to_tile(endpoint, zoom);
                range = Some(match range {
                    None => TileRange {
                        min_x: tile.x,
                        max_x: tile.x,
                        min_y: tile.y,
                        max_y: tile.y,
                    },
                    Some(r) => TileRange {
                        min_x: min(r.min_x, tile.x),
                        max_x: max(r.max_x, tile.x),
                        min_y: min(r.min_y, tile.y),
                        max_y: max(r.max_y, tile.y),
                    },
                });
            }
        }

        range
    }
}
