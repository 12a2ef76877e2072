//! Query a point file with a rectangular region.
//!
//! ```bash
//! cargo run --example range_query -- --points demos/data/points.txt --region demos/data/region.txt --svg region.svg
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rangetree::{RangeIndex, ReadOptions, SvgStyle, read_points_from_path, read_region, render_svg};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "range_query", about = "Report the points inside a rectangle")]
struct Cli {
    /// Point file, one `x,y` row per point.
    #[arg(long)]
    points: PathBuf,
    /// Region file holding two opposite corners as `x,y` rows.
    #[arg(long)]
    region: PathBuf,
    /// Field delimiter of both files.
    #[arg(long, default_value_t = ',')]
    delimiter: char,
    /// Apply the y-range even when the x-range selects a single bucket.
    #[arg(long)]
    strict: bool,
    /// Write an SVG picture of the points and the region here.
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = ReadOptions {
        delimiter: cli.delimiter,
        ..ReadOptions::default()
    };

    let points = read_points_from_path(&cli.points, &options)
        .with_context(|| format!("failed to read points from {}", cli.points.display()))?;
    let region_file = fs::read(&cli.region)
        .with_context(|| format!("failed to open region file {}", cli.region.display()))?;
    let rect = read_region(region_file.as_slice(), &options)
        .with_context(|| format!("failed to read region from {}", cli.region.display()))?;

    let index = RangeIndex::new(points);
    let found = if cli.strict {
        index.query_strict(&rect)
    } else {
        index.query(&rect)
    };

    if index.buckets().locate(rect.min_x, rect.max_x).is_none() {
        println!("Interval too small or out of range");
    } else {
        let mut sorted: Vec<_> = found.iter().collect();
        sorted.sort();
        let labels: Vec<&str> = sorted.iter().filter_map(|p| p.label()).collect();
        println!("Points:\t{}", labels.join(" "));
    }

    if let Some(path) = cli.svg {
        let all: Vec<_> = index.buckets().points().cloned().collect();
        let svg = render_svg(&all, &found, &rect, &SvgStyle::default());
        fs::write(&path, svg).with_context(|| format!("failed to write {}", path.display()))?;
        println!("Generated: {}", path.display());
    }

    Ok(())
}
