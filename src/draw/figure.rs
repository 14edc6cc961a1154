use crate::draw::tile_pixels::RgbaColor;
use crate::draw::TILE_SIZE;
use crate::tile::Tile;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoundingBox {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl BoundingBox {
    /// The global pixel rectangle covered by a tile.
    pub fn from_tile(tile: &Tile) -> BoundingBox {
        let to_tile_start = |c| (c as usize) * TILE_SIZE;
        let to_tile_end = |tile_start_c| tile_start_c + TILE_SIZE - 1;
        let (tile_start_x, tile_start_y) = (to_tile_start(tile.x), to_tile_start(tile.y));
        BoundingBox {
            min_x: tile_start_x,
            max_x: to_tile_end(tile_start_x),
            min_y: tile_start_y,
            max_y: to_tile_end(tile_start_y),
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A sparse pixel layer in global Web Mercator pixel coordinates, clipped by
/// a bounding box. Within one layer the most opaque write to a pixel wins, so
/// overlapping anti-aliased shapes don't darken each other.
pub struct Figure {
    pub pixels: BTreeMap<usize, BTreeMap<usize, RgbaColor>>,
    pub bounding_box: BoundingBox,
}

impl Figure {
    pub fn new(bounding_box: BoundingBox) -> Figure {
        Figure {
            pixels: BTreeMap::new(),
            bounding_box,
        }
    }

    pub fn add(&mut self, x: usize, y: usize, color: RgbaColor) {
        if !self.bounding_box.contains(x, y) {
            return;
        }
        match self.pixels.entry(y).or_insert_with(Default::default).entry(x) {
            Entry::Occupied(o) => {
                if color.a > o.get().a {
                    *o.into_mut() = color;
                }
            }
            Entry::Vacant(v) => {
                v.insert(color);
            }
        }
    }
}
