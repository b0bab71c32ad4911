//! Command-line shapefile to PNG map renderer.
//!
//! Reads an ESRI shapefile, projects its vertices with one of the
//! cylindrical projections, fits the extent into the requested size, and
//! writes an outline map as a PNG file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use map_common::GeometrySource;
use projection::Cylindrical;
use renderer::{render, PngCanvas, RenderOptions, RenderStyle};
use shp_parser::ShpReader;

#[derive(Parser, Debug)]
#[command(name = "shapemap")]
#[command(about = "Render an ESRI shapefile to a PNG outline map")]
struct Args {
    /// Input shapefile (.shp is appended when no extension is given)
    shapefile: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = "map.png")]
    output: PathBuf,

    /// Requested drawing width in pixels, before margins
    #[arg(long, default_value = "700")]
    width: u32,

    /// Requested drawing height in pixels, before margins
    #[arg(long, default_value = "700")]
    height: u32,

    /// Projection method: equidistant, mercator, or miller
    #[arg(short, long, default_value = "miller")]
    projection: Cylindrical,

    /// Blank border around the map area in pixels
    #[arg(long, default_value = "10")]
    margin: u32,

    /// JSON style file (colors and stroke width)
    #[arg(long, env = "SHAPEMAP_STYLE")]
    style: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "SHAPEMAP_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let style = match &args.style {
        Some(path) => RenderStyle::from_file(path)
            .with_context(|| format!("Failed to load style from {}", path.display()))?,
        None => RenderStyle::default(),
    };

    let reader = ShpReader::open(&args.shapefile)
        .with_context(|| format!("Failed to read shapefile {}", args.shapefile.display()))?;
    info!(
        shapes = reader.shapes().len(),
        shape_type = ?reader.header().shape_type,
        "Loaded shapefile"
    );

    let options = RenderOptions {
        width: args.width,
        height: args.height,
        projection: args.projection,
        margin: args.margin,
        style: style.clone(),
    };
    let mut canvas = PngCanvas::new(&args.output).with_stroke_width(style.stroke_width);
    render(&reader, &mut canvas, &options).context("Render failed")?;

    info!(output = %args.output.display(), "Map written");
    Ok(())
}
