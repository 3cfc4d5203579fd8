use anyhow::Context;
use clap::Parser;
use tonal_sentiment::PatternScorer;
use tonal_twitter::TwitterClient;

mod bootstrap;
mod cli;
mod output;
mod pipeline;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tonal error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config(&flags)?;
    let token = config.twitter.require_token()?;
    let client =
        TwitterClient::new(&config.twitter, token).context("failed to build Twitter client")?;

    let scorer = PatternScorer::new();
    if flags.format == cli::OutputFormat::Text {
        let mut sink = output::TextSink::new(std::io::stdout().lock());
        pipeline::run_report(&client, &scorer, &cli.handle, &mut sink).await?;
        return Ok(());
    }

    let report = pipeline::run_report(&client, &scorer, &cli.handle, &mut output::Deferred).await?;
    output::output(&report, flags.format)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TONAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
