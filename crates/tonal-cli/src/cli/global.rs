use std::path::PathBuf;

use clap::ValueEnum;

/// Report output mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented human report.
    Text,
    /// Pretty-printed JSON.
    Json,
    /// Compact single-line JSON.
    Raw,
}

/// Flags shared by the bootstrap, pipeline and renderer.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub following_limit: Option<u32>,
    pub tweet_limit: Option<u32>,
    pub project: Option<PathBuf>,
    pub config: Option<PathBuf>,
}
