use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "udn-feed")]
#[command(about = "Generate an RSS 2.0 feed from UDN breaking news")]
#[command(version)]
pub struct Cli {
    /// Output file path (defaults to $UDN_FEED_OUTPUT, then feed.xml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dry run - print the feed to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
