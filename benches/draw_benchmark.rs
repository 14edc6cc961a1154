use arrowmap::coords::initial_bearing;
use arrowmap::draw::drawer::Drawer;
use arrowmap::segment::Segment;
use arrowmap::style::Style;
use arrowmap::tile::coords_to_tile;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bearing_benchmark(c: &mut Criterion) {
    c.bench_function("initial bearing", |b| {
        b.iter(|| {
            initial_bearing(
                black_box(&(40.7484, -73.9857)),
                black_box(&(51.5007, -0.1246)),
            )
        })
    });
}

fn draw_tile_benchmark(c: &mut Criterion) {
    let center = (40.783435, -73.96625);
    let segments: Vec<Segment> = (0..64)
        .map(|idx| {
            let angle = f64::from(idx) * std::f64::consts::PI / 32.0;
            Segment {
                from: center,
                to: (center.0 + 0.01 * angle.sin(), center.1 + 0.01 * angle.cos()),
            }
        })
        .collect();
    let segment_refs: Vec<&Segment> = segments.iter().collect();

    let tile = coords_to_tile(&center, 13);
    let style = Style::default();
    let drawer = Drawer::new();

    c.bench_function("draw tile with 64 segments", |b| {
        b.iter(|| drawer.draw_to_pixels(black_box(&segment_refs), &tile, &style))
    });
}

criterion_group!(draw_benches, bearing_benchmark, draw_tile_benchmark);
criterion_main!(draw_benches);
