//! sound-fetcher: downloads the breakout game's sounds into ./audio.

use sound_fetcher::cli::Cli;
use sound_fetcher::error::Result;
use sound_fetcher::logging::init_logging;
use sound_fetcher::{default_catalog, fetch_default_sounds, FetcherConfig, FetcherError, ErrorCode};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e.code.description());
        eprintln!("  {}", e);
        if e.code.is_fatal() {
            eprintln!("No sounds were downloaded.");
        }
        eprintln!("Recovery: {}", e.code.recovery_hint());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    if cli.list {
        return list_sounds();
    }

    let config = cli.apply_to(FetcherConfig::from_env());
    if let Some(reason) = config.validate() {
        return Err(FetcherError::new(
            ErrorCode::ClientInitFailed,
            format!("Invalid configuration: {}", reason),
        ));
    }

    let report = fetch_default_sounds(&config)?;
    if !report.all_succeeded() {
        tracing::warn!(
            failed = report.failed(),
            "some sounds could not be downloaded; rerun to retry them"
        );
    }

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::warn!(error = %e, "failed to serialize run report"),
        }
    }

    Ok(())
}

/// Prints the built-in catalog as `name<TAB>url` lines.
fn list_sounds() -> Result<()> {
    for entry in &default_catalog()? {
        println!("{}\t{}", entry.name, entry.url);
    }
    Ok(())
}
