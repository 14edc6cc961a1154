use crate::draw::figure::BoundingBox;
use crate::draw::TILE_SIZE;
use crate::style::Color;
use crate::tile::Tile;

#[derive(Clone)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl RgbaColor {
    pub fn from_color(color: &Color, opacity: f64) -> RgbaColor {
        let premultiply = |c| opacity * component_to_opacity(c);

        RgbaColor {
            r: premultiply(color.r),
            g: premultiply(color.g),
            b: premultiply(color.b),
            a: opacity,
        }
    }
}

pub type RgbTriples = Vec<(u8, u8, u8)>;

pub fn dimension() -> usize {
    TILE_SIZE
}

/// The RGBA accumulation buffer for one tile.
///
/// Pixels are written in generations, one generation per draw layer. Within
/// a generation the most opaque write to a pixel wins; the winner is blended
/// over the buffer when a newer generation touches the pixel, or in the final
/// `blend_unfinished_pixels` pass.
pub struct TilePixels {
    pixels: Vec<RgbaColor>,
    next_pixels: Vec<Option<NextPixel>>,
    bb: BoundingBox,
    generation: usize,
}

#[derive(Clone)]
struct NextPixel {
    color: RgbaColor,
    generation: usize,
}

impl TilePixels {
    pub fn new(tile: &Tile) -> TilePixels {
        let pixel_count = TILE_SIZE * TILE_SIZE;
        TilePixels {
            pixels: vec![
                RgbaColor {
                    r: 1.0,
                    g: 1.0,
                    b: 1.0,
                    a: 1.0,
                };
                pixel_count
            ],
            next_pixels: vec![None; pixel_count],
            bb: BoundingBox::from_tile(tile),
            generation: 0,
        }
    }

    pub fn fill(&mut self, color: &RgbaColor) {
        for pixel in &mut self.pixels {
            *pixel = color.clone();
        }
    }

    /// `x` and `y` are global pixel coordinates; writes outside the tile are
    /// dropped.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: &RgbaColor) {
        let idx = match self.global_coords_to_idx(x, y) {
            Some(idx) => idx,
            _ => return,
        };
        let mut from_same_generation = false;
        if let Some(next_pixel) = &mut self.next_pixels[idx] {
            if next_pixel.generation == self.generation {
                if color.a > next_pixel.color.a {
                    next_pixel.color = color.clone();
                }
                from_same_generation = true;
            }
        }
        if !from_same_generation {
            self.blend_pixel(idx);
            self.next_pixels[idx] = Some(NextPixel {
                color: color.clone(),
                generation: self.generation,
            });
        }
    }

    pub fn bump_generation(&mut self) {
        self.generation += 1;
    }

    pub fn blend_unfinished_pixels(&mut self) {
        for idx in 0..self.next_pixels.len() {
            self.blend_pixel(idx);
        }
    }

    pub fn to_rgb_triples(&self) -> RgbTriples {
        let mut result = Vec::with_capacity(self.pixels.len());

        for p in &self.pixels {
            let postdivide = |val| {
                let mul = if p.a == 0.0 { 0.0 } else { val / p.a };
                (f64::from(u8::max_value()) * mul) as u8
            };
            result.push((postdivide(p.r), postdivide(p.g), postdivide(p.b)));
        }

        result
    }

    fn blend_pixel(&mut self, idx: usize) {
        let next_pixel_ref = &mut self.next_pixels[idx];
        if let Some(next_pixel) = next_pixel_ref {
            let old_pixel = &mut self.pixels[idx];
            let blend = |new_value, old_value| new_value + (1.0 - next_pixel.color.a) * old_value;
            *old_pixel = RgbaColor {
                r: blend(next_pixel.color.r, old_pixel.r),
                g: blend(next_pixel.color.g, old_pixel.g),
                b: blend(next_pixel.color.b, old_pixel.b),
                a: blend(next_pixel.color.a, old_pixel.a),
            };
        }
        next_pixel_ref.take();
    }

    fn global_coords_to_idx(&self, x: usize, y: usize) -> Option<usize> {
        if !self.bb.contains(x, y) {
            return None;
        }
        Some((y - self.bb.min_y) * TILE_SIZE + (x - self.bb.min_x))
    }
}

fn component_to_opacity(comp: u8) -> f64 {
    f64::from(comp) / f64::from(u8::max_value())
}
