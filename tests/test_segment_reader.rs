mod common;

use arrowmap::segment::reader::read_segments;
use arrowmap::style::Style;
use arrowmap::tile::{Tile, TileRange};

use std::path::Path;

#[test]
fn reads_the_fixture_file() {
    let store = common::fixture_store();
    assert_eq!(store.len(), 5);
    assert!(!store.is_empty());

    let first = &store.segments()[0];
    assert_eq!(first.from, (40.783435, -73.96625));
    assert_eq!(first.to, (40.768094, -73.981865));
}

#[test]
fn rejects_missing_files() {
    assert!(read_segments(Path::new("no/such/file.csv")).is_err());
}

#[test]
fn all_fixture_segments_share_one_tile_at_low_zoom() {
    let store = common::fixture_store();
    let padding = Style::default().query_padding();

    let manhattan = Tile {
        zoom: 11,
        x: 603,
        y: 769,
    };
    assert_eq!(store.segments_in_tile(&manhattan, padding).len(), 5);

    let atlantic = Tile {
        zoom: 11,
        x: 0,
        y: 0,
    };
    assert!(store.segments_in_tile(&atlantic, padding).is_empty());
}

#[test]
fn bounding_tile_range_covers_all_endpoints() {
    let store = common::fixture_store();

    assert_eq!(
        store.bounding_tile_range(11),
        Some(TileRange {
            min_x: 603,
            max_x: 603,
            min_y: 769,
            max_y: 769,
        })
    );

    // At a deeper zoom the endpoints spread over several tiles.
    let range = store.bounding_tile_range(14).unwrap();
    assert!(range.min_x < range.max_x);
    assert!(range.min_y < range.max_y);

    let empty = arrowmap::segment::store::SegmentStore::new(Vec::new());
    assert_eq!(empty.bounding_tile_range(11), None);
}
