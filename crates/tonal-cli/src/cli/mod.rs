use std::path::PathBuf;

use clap::Parser;
use tonal_core::handle::Handle;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `tonal` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tonal",
    version,
    about = "Tonal - sentiment of the accounts a Twitter user follows"
)]
pub struct Cli {
    /// Twitter handle to inspect, with or without the leading '@'
    pub handle: Handle,

    /// Output format: text, json, raw
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress bar)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Followed accounts to request (1-1000, overrides twitter.following_page_size)
    #[arg(long, value_name = "N")]
    pub following_limit: Option<u32>,

    /// Recent tweets to request per account (5-100, overrides twitter.timeline_page_size)
    #[arg(long, value_name = "N")]
    pub tweet_limit: Option<u32>,

    /// Project root holding `.env` and `.tonal/config.toml` (defaults to the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// Config file to use instead of the project-level `.tonal/config.toml`
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for the run.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            following_limit: self.following_limit,
            tweet_limit: self.tweet_limit,
            project: self.project.clone(),
            config: self.config.clone(),
        }
    }
}
