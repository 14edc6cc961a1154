use anyhow::{Context, Result};
use png::{BitDepth, ColorType, Encoder};

pub fn rgb_triples_to_png(triples: &[(u8, u8, u8)], width: usize, height: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut png_encoder = Encoder::new(&mut buf, width as u32, height as u32);
        png_encoder.set_color(ColorType::Rgb);
        png_encoder.set_depth(BitDepth::Eight);
        let mut png_writer = png_encoder.write_header().context("Failed to write PNG header")?;

        let mut image_bytes = Vec::with_capacity(triples.len() * 3);
        for &(r, g, b) in triples {
            image_bytes.extend_from_slice(&[r, g, b]);
        }

        png_writer
            .write_image_data(image_bytes.as_slice())
            .context("Failed to write PNG data")?;
    }
    Ok(buf)
}
