//! Range query SVG visualizer
//! Generates an SVG showing a small labeled point set, a query region and its hits

use std::fs::File;
use std::io::Write;

use rangetree::{Point, RangeIndex, Rect, SvgStyle, render_svg};

fn main() {
    let coords = [
        (7, 8), (1, 5), (3, 3), (4, 6), (5, 9), (5, 0),
        (6, 2), (7, 5), (9, 4), (10, 1), (11, 8),
    ];
    let index = RangeIndex::new(coords.map(Point::from));
    let rect = Rect::new(2, 1, 8, 7);
    let found = index.query(&rect);

    let style = SvgStyle {
        width: 1280.0,
        height: 640.0,
        ..SvgStyle::default()
    };
    let points: Vec<_> = index.buckets().points().cloned().collect();
    let svg = render_svg(&points, &found, &rect, &style);

    let mut file = File::create("range_query.svg").expect("Failed to create file");
    file.write_all(svg.as_bytes())
        .expect("Failed to write to file");

    println!("✓ Generated: range_query.svg");
    println!("  - Points: {}", points.len());
    println!("  - Hits: {}", found.len());
}
