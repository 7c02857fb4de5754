use std::fs;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;

use udn_feed::cli::Cli;
use udn_feed::config::Config;
use udn_feed::services::{GenerateService, RunOutcome};
use udn_feed::sources::UdnSource;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load configuration
    let config = Config::from_env()?.with_output(cli.output);

    let service = GenerateService::new(UdnSource::new());

    println!("Fetching {}...", service.source_url());

    let feed = service
        .generate(Utc::now())
        .context("Failed to build feed")?;

    match feed.outcome {
        RunOutcome::Extracted => {}
        RunOutcome::NothingExtracted => println!("No news found, using placeholder item"),
        RunOutcome::FetchFailed => println!("Fetch failed, using placeholder item"),
    }
    println!("Found {} news items", feed.document.items.len());

    if cli.dry_run {
        print!("{}", feed.xml);
        return Ok(());
    }

    fs::write(&config.output_path, &feed.xml)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    println!("RSS feed written to {}", config.output_path.display());
    log::debug!("First line: {}", feed.xml.lines().next().unwrap_or_default());

    Ok(())
}
