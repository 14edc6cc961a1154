const TILE_SIZE: usize = crate::tile::TILE_SIZE as usize;

pub mod drawer;
pub mod figure;
pub mod line;
pub mod marker;
pub mod png_writer;
pub mod point;
pub mod tile_pixels;
