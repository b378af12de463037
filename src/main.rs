//! Grid square fetcher.
//!
//! Queries the grid endpoint for a bounding box and prints the starting
//! coordinate of every grid square in the response. One fetch, one parse,
//! one print pass; nothing is retried or persisted.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use grid_client::bbox::BoundingBox;
use grid_client::fetch::{Fetcher, DEFAULT_ENDPOINT};
use grid_client::grid;

#[derive(Parser, Debug)]
#[command(name = "grid-client")]
#[command(about = "Print the grid squares covering a bounding box")]
struct Args {
    /// Bounding box: sw_lat,sw_lng,ne_lat,ne_lng
    bbox: String,

    /// API key for the grid endpoint
    api_key: String,

    /// Grid endpoint URL
    #[arg(long, env = "GRID_API_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    // Usage goes to stdout even on bad invocations; only the exit status
    // distinguishes them.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            print!("{}", e.render());
            std::process::exit(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr; stdout carries only the square lines.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Reject a malformed bbox before any network traffic. The raw
    // argument string is still what goes into the URL.
    BoundingBox::from_bbox_string(&args.bbox)
        .with_context(|| format!("Invalid bbox argument: {}", args.bbox))?;

    let fetcher = Fetcher::new(&args.endpoint).context("Failed to create HTTP client")?;

    let body = fetcher
        .fetch_grid(&args.bbox, &args.api_key)
        .await
        .context("Grid request failed")?;

    let squares = grid::parse_grid(&body).context("Could not decode grid response")?;

    info!(count = squares.len(), "Decoded grid squares");

    for square in &squares {
        println!("Square: lat={}, long={}", square.lat, square.lng);
    }

    Ok(())
}
