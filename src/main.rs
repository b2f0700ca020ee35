//! Map pin clustering tool
//!
//! Reads pins from a JSON or CSV file, clusters them at the configured map
//! view and writes one CSV row per cluster.

use clap::Parser;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use rust_pin_cluster::cluster::{
    ClusterHooks, ClusterSet, GeoPoint, Marker, Pass, PinRecord, Viewport, pan_to_centroid,
};
use rust_pin_cluster::config::MapConfig;
use rust_pin_cluster::pins::{Payload, load_pins};


#[derive(Parser)]
#[command(name = "rust_pin_cluster_map")]
#[command(about = "Map pin clustering tool", long_about = None)]
struct Args {
    /// JSON config file, merged over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pin file (.json or .csv), overrides paths.pins from the config
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output CSV file with clusters (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Map center latitude
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Map center longitude
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lng: Option<f64>,

    /// Map zoom level
    #[arg(short, long)]
    zoom: Option<f64>,

    /// Viewport width in pixels
    #[arg(long)]
    width: Option<f64>,

    /// Viewport height in pixels
    #[arg(long)]
    height: Option<f64>,

    /// Grid size (cluster half-width) in pixels
    #[arg(short, long)]
    grid_size: Option<f64>,

    /// Click cluster N of the first pass: pan to it and cluster again
    #[arg(long)]
    click: Option<usize>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error setting up logging: {}", e);
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error in config: {}", e);
            std::process::exit(1);
        }
    };

    let pins = match load_pins(&config.paths.pins) {
        Ok(pins) => pins,
        Err(e) => {
            eprintln!("Error reading pins: {}", e);
            std::process::exit(1);
        }
    };
    info!("read {} pins from {:?}", pins.len(), config.paths.pins);

    let (pass, viewport) = match run(&pins, &config, args.click) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error clustering: {}", e);
            std::process::exit(1);
        }
    };

    let markers = match pass.markers(&viewport) {
        Ok(markers) => markers,
        Err(e) => {
            eprintln!("Error placing markers: {}", e);
            std::process::exit(1);
        }
    };

    let written = match args.output {
        None => write_clusters(std::io::stdout(), &pass, &markers),
        Some(ref output_file) => File::create(output_file)
            .map_err(Into::into)
            .and_then(|file| write_clusters(file, &pass, &markers)),
    };
    if let Err(e) = written {
        eprintln!("Error writing clusters: {}", e);
        std::process::exit(1);
    }
    if let Some(output_file) = args.output {
        debug!("clusters written to {:?}", output_file);
    }
}

/// Loads the config file (if any) and applies command line overrides
fn build_config(args: &Args) -> Result<MapConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => MapConfig::load(path)?,
        None => MapConfig::default(),
    };

    if let Some(input) = &args.input {
        config.paths.pins = input.clone();
    }
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        config.map_options.center = GeoPoint::new(lat, lng);
    }
    if let Some(zoom) = args.zoom {
        config.map_options.zoom = zoom;
    }
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    if let Some(grid_size) = args.grid_size {
        config.grid_size = grid_size;
    }

    config.validate()?;
    Ok(config)
}

/// Clusters the pins at the configured view
///
/// With `click` set, cluster `click` of the first pass is clicked, which
/// pans the view to its centroid, and the pins are clustered again.
///
/// # Returns
///
/// The final pass and the viewport it was computed at
fn run(
    pins: &[PinRecord<Payload>],
    config: &MapConfig,
    click: Option<usize>,
) -> Result<(Pass, Viewport), Box<dyn std::error::Error>> {
    let mut viewport = config.viewport();
    let mut set = ClusterSet::new(config.grid_size);

    let pass = set.recompute(pins, &viewport)?;
    debug!(
        "{} clusters at zoom {}, {} pins skipped",
        pass.clusters().len(),
        viewport.zoom,
        pass.skipped_count()
    );

    let Some(n) = click else {
        return Ok((pass.clone(), viewport));
    };

    let clicked = pass
        .clusters()
        .get(n)
        .ok_or_else(|| format!("no cluster {} (found {})", n, pass.clusters().len()))?
        .clone();

    let mut hooks: ClusterHooks<'_, Payload> = ClusterHooks::new();
    hooks.on_click(|cluster, _| pan_to_centroid(&mut viewport, cluster));
    hooks.click(&clicked, pins);
    drop(hooks);

    info!(
        "clicked cluster {} ({} pins), panned to ({}, {})",
        n,
        clicked.len(),
        viewport.center.lat,
        viewport.center.lng
    );

    let pass = set.recompute(pins, &viewport)?;
    debug!("{} clusters after pan", pass.clusters().len());
    Ok((pass.clone(), viewport))
}

/// Writes one CSV row per cluster
///
/// Columns: `cluster,lat,lng,size,x,y,members` where `x,y` is the marker's
/// pixel position and `members` the `;`-joined input indices
fn write_clusters<W: Write>(
    out: W,
    pass: &Pass,
    markers: &[Marker],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(["cluster", "lat", "lng", "size", "x", "y", "members"])?;

    for (cluster, marker) in pass.clusters().iter().zip(markers) {
        let centroid = cluster.centroid();
        let members = cluster
            .members()
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(";");
        writer.write_record([
            marker.cluster.to_string(),
            centroid.lat.to_string(),
            centroid.lng.to_string(),
            cluster.len().to_string(),
            format!("{:.1}", marker.position.x),
            format!("{:.1}", marker.position.y),
            members,
        ])?;
    }

    writer.flush()?;
    Ok(())
}
