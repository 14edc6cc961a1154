use anyhow::{anyhow, bail, Context, Result};
use arrowmap::draw::drawer::Drawer;
use arrowmap::draw::png_writer::rgb_triples_to_png;
use arrowmap::segment::reader::read_segments;
use arrowmap::style::style_from_config;
use arrowmap::tile::{Tile, MAX_ZOOM, TILE_SIZE};
use log::info;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tini::Ini;

// A zoom that covers the data with more tiles than this is almost certainly
// a mistake, and the stitched image wouldn't fit in memory anyway.
const MAX_TILE_COUNT: usize = 4096;

fn export(config_path: &str, zoom: u8, tmp_output: &Path, output: &Path) -> Result<()> {
    let config = Ini::from_file(config_path)
        .map_err(|e| anyhow!("Failed to parse config from {}: {}", config_path, e))?;
    let segments_file: String = config
        .get("segments", "file")
        .context("Property file is missing in section [segments]")?;
    let style = style_from_config(&config)?;

    let store = read_segments(Path::new(&segments_file))?;
    let range = store
        .bounding_tile_range(zoom)
        .context("The segments file contains no segments")?;

    let columns = (range.max_x - range.min_x + 1) as usize;
    let rows = (range.max_y - range.min_y + 1) as usize;
    if columns * rows > MAX_TILE_COUNT {
        bail!(
            "Zoom {} needs {} tiles to cover the segments; pick a smaller zoom",
            zoom,
            columns * rows
        );
    }
    info!("Rendering {}x{} tiles at zoom {}", columns, rows, zoom);

    let tile_size = TILE_SIZE as usize;
    let (width, height) = (columns * tile_size, rows * tile_size);
    let mut triples = vec![(0u8, 0u8, 0u8); width * height];

    let drawer = Drawer::new();
    for tile_y in range.min_y..=range.max_y {
        for tile_x in range.min_x..=range.max_x {
            let tile = Tile {
                zoom,
                x: tile_x,
                y: tile_y,
            };
            let segments = store.segments_in_tile(&tile, style.query_padding());
            let tile_triples = drawer.draw_to_pixels(&segments, &tile, &style);

            let offset_x = (tile_x - range.min_x) as usize * tile_size;
            let offset_y = (tile_y - range.min_y) as usize * tile_size;
            for row in 0..tile_size {
                let src_from = row * tile_size;
                let dst_from = (offset_y + row) * width + offset_x;
                triples[dst_from..dst_from + tile_size]
                    .copy_from_slice(&tile_triples[src_from..src_from + tile_size]);
            }
        }
    }

    let png_bytes = rgb_triples_to_png(&triples, width, height)?;
    fs::write(tmp_output, &png_bytes)
        .with_context(|| format!("Failed to write {}", tmp_output.display()))?;
    fs::rename(tmp_output, output)?;

    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<_> = env::args().collect();

    if args.len() != 4 {
        let bin_name = args.first().map(String::as_str).unwrap_or("export");
        eprintln!("Usage: {} CONFIG ZOOM OUTPUT", bin_name);
        std::process::exit(1);
    }

    let config_path = &args[1];
    let zoom: u8 = match args[2].parse() {
        Ok(zoom) if zoom <= MAX_ZOOM => zoom,
        _ => {
            eprintln!("Invalid zoom level: {} (expected 0..={})", args[2], MAX_ZOOM);
            std::process::exit(1);
        }
    };
    let output = PathBuf::from(&args[3]);

    let mut tmp_output = output.clone();
    tmp_output.set_extension("tmp");

    match export(config_path, zoom, &tmp_output, &output) {
        Ok(_) => println!("Exported the arrow plot to {}", output.to_string_lossy()),
        Err(err) => {
            // Make a best-effort attempt to remove the unfinished mess
            // we may have potentially left behind, deliberately ignoring
            // the error.
            let _ = fs::remove_file(tmp_output);

            for cause in err.chain() {
                eprintln!("{}", cause);
            }
            std::process::exit(1);
        }
    }
}
