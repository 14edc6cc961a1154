use crate::coords::Coords;
use crate::tile::coords_to_xy;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn from_coords<C: Coords>(coords: &C, zoom: u8) -> Point {
        let (x, y) = coords_to_xy(coords, zoom);
        Point {
            x: x as i32,
            y: y as i32,
        }
    }
}
