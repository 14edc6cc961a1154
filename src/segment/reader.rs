use crate::segment::store::SegmentStore;
use crate::segment::Segment;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
struct SegmentRecord {
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
}

/// Reads directed segments from a CSV file with a
/// `from_lat,from_lon,to_lat,to_lon` header.
pub fn read_segments(path: &Path) -> Result<SegmentStore> {
    let mut csv_reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open the segments file {}", path.display()))?;

    let mut segments = Vec::new();
    for (line_idx, record) in csv_reader.deserialize().enumerate() {
        let record: SegmentRecord =
            record.with_context(|| format!("Malformed segment record #{}", line_idx + 1))?;
        segments.push(Segment {
            from: (record.from_lat, record.from_lon),
            to: (record.to_lat, record.to_lon),
        });
    }

    Ok(SegmentStore::new(segments))
}
