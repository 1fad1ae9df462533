//! make-plc-tags - CLI tool to convert an SPS-Liste into a PLC tag table.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use plc_tags::config::{DEFAULT_DEST_PATH, DEFAULT_SOURCE_PATH};
use plc_tags::{run, ConverterConfig};

/// Convert an SPS-Liste spreadsheet into a PLC tag table XML.
#[derive(Parser, Debug)]
#[command(name = "make-plc-tags")]
#[command(about, long_about = None)]
struct Args {
    /// Source spreadsheet path
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    spath: PathBuf,

    /// Destination XML path
    #[arg(long, default_value = DEFAULT_DEST_PATH)]
    dpath: PathBuf,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConverterConfig::new(args.spath, args.dpath);

    let log = run(&config);

    log.append_to(&config.log_path)
        .map_err(|err| {
            error!("{}: {}", err.code().name(), err);
            err
        })
        .with_context(|| format!("Failed to append to {}", config.log_path.display()))?;

    if log.succeeded() {
        info!("Done");
    } else {
        error!("Conversion failed, see {}", config.log_path.display());
    }

    Ok(log.exit_code())
}
