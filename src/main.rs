//! `daylight` command-line front end.
//!
//! ```text
//! daylight [LATITUDE] [--config PATH]
//! ```
//!
//! Prints the map line, yearly curve and event markers for one latitude,
//! as JSON or as a short table depending on `output.format`.
//! `RUST_LOG` overrides `logging.level`; logs go to stderr.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use daylight::{daylight_hours_on, latitude_view, summary, to_json, DaylightConfig, Latitude};

struct Args {
    latitude: Option<f64>,
    config_path: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut latitude = None;
    let mut config_path = None;
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a path")?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("usage: daylight [LATITUDE] [--config PATH]");
                std::process::exit(0);
            }
            value if latitude.is_none() => {
                let parsed: f64 = value
                    .parse()
                    .with_context(|| format!("latitude '{value}' is not a number"))?;
                latitude = Some(parsed);
            }
            other => bail!("unexpected argument '{other}'"),
        }
    }

    Ok(Args {
        latitude,
        config_path,
    })
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    let config = match args.config_path.as_deref() {
        Some(path) => DaylightConfig::load_from_path(Some(path)),
        None => DaylightConfig::load(),
    }
    .context("failed to load configuration")?;
    init_logging(&config.logging.level);

    let requested = args.latitude.unwrap_or(config.slider.default);
    let snapped = config.slider.snap(requested);
    if snapped != requested {
        warn!(requested, snapped, "latitude snapped to slider grid");
    }
    let latitude = Latitude::new(snapped)?;
    info!(latitude = snapped, "computing daylight view");

    let view = latitude_view(latitude);

    match config.output.format.as_str() {
        "json" => println!("{}", to_json(&view, config.output.pretty)?),
        _ => {
            print!("{}", summary(&view));
            let today = Utc::now().date_naive();
            println!();
            println!(
                "Today ({today}): {:.2} h",
                daylight_hours_on(latitude.degrees(), &today)
            );
        }
    }

    Ok(())
}
