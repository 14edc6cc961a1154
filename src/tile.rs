use crate::coords::Coords;

use std::f64::consts::PI;

pub const MAX_ZOOM: u8 = 18;
pub const TILE_SIZE: u32 = 256;

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Tile {
    pub zoom: u8,
    pub x: u32,
    pub y: u32,
}

#[derive(Eq, PartialEq, Debug)]
pub struct TileRange {
    pub min_x: u32,
    pub max_x: u32,
    pub min_y: u32,
    pub max_y: u32,
}

/// Returns the tile containing a given geopoint at a given zoom level.
/// # Examples
/// ```
/// use arrowmap::tile::{coords_to_tile,Tile};
/// assert_eq!(coords_to_tile(&(55.747764f64, 37.437745f64), 18), Tile { zoom: 18, x: 158333, y: 81957 });
/// assert_eq!(coords_to_tile(&(40.783435f64, -73.96625f64), 11), Tile { zoom: 11, x: 603, y: 769 });
/// assert_eq!(coords_to_tile(&(-35.306536f64, 149.126545f64), 18), Tile { zoom: 18, x: 239662, y: 158582 });
/// ```
pub fn coords_to_tile<C: Coords>(coords: &C, zoom: u8) -> Tile {
    let (x, y) = coords_to_xy(coords, zoom);
    let tile_index = |t| (t as u32) / TILE_SIZE;
    Tile {
        zoom,
        x: tile_index(x),
        y: tile_index(y),
    }
}

/// Projects a given geopoint to Web Mercator coordinates for a given zoom level.
/// # Examples
/// ```
/// use arrowmap::tile::coords_to_xy;
/// fn assert_floor_eq((x_actual, y_actual): (f64, f64), (x_expected, y_expected): (u32, u32)) {
///     assert_eq!(x_actual as u32, x_expected as u32);
///     assert_eq!(y_actual as u32, y_expected as u32);
/// }
/// assert_floor_eq(coords_to_xy(&(55.747764f64, 37.437745f64), 5), (4947, 2561));
/// assert_floor_eq(coords_to_xy(&(55.747764f64, 37.437745f64), 18), (40533333, 20981065));
/// assert_floor_eq(coords_to_xy(&(40.1222f64, 20.6852f64), 0), (142, 96));
/// assert_floor_eq(coords_to_xy(&(-35.306536f64, 149.126545f64), 10), (239662, 158582));
/// ```
pub fn coords_to_xy<C: Coords>(coords: &C, zoom: u8) -> (f64, f64) {
    let (lat_rad, lon_rad) = (coords.lat().to_radians(), coords.lon().to_radians());

    let x = lon_rad + PI;
    let y = PI - ((PI / 4f64) + (lat_rad / 2f64)).tan().ln();

    let rescale = |x: f64| {
        let factor = x / (2f64 * PI);
        let dimension_in_pixels = f64::from(TILE_SIZE * (1 << zoom));
        factor * dimension_in_pixels
    };

    (rescale(x), rescale(y))
}
