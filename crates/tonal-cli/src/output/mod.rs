use std::io::Write;

use tonal_core::entities::AccountReport;
use tonal_core::responses::FollowingReport;

use crate::cli::OutputFormat;

/// Receives report pieces as soon as the pipeline produces them.
pub trait ReportSink {
    /// The target handle was resolved.
    fn user_resolved(&mut self, user_id: &str) -> anyhow::Result<()>;

    /// The following list was fetched.
    fn following_listed(&mut self, count: usize) -> anyhow::Result<()>;

    /// One followed account was scored.
    fn account_scored(&mut self, entry: &AccountReport) -> anyhow::Result<()>;
}

/// Writes text-format lines as they arrive, flushing after each piece.
pub struct TextSink<W> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_lines(&mut self, lines: &[String]) -> anyhow::Result<()> {
        for line in lines {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn user_resolved(&mut self, user_id: &str) -> anyhow::Result<()> {
        self.write_lines(&[user_line(user_id)])
    }

    fn following_listed(&mut self, count: usize) -> anyhow::Result<()> {
        self.write_lines(&[following_line(count)])
    }

    fn account_scored(&mut self, entry: &AccountReport) -> anyhow::Result<()> {
        self.write_lines(&account_lines(entry))
    }
}

/// Ignores progressive output; the finished report is printed with [`output`].
pub struct Deferred;

impl ReportSink for Deferred {
    fn user_resolved(&mut self, _user_id: &str) -> anyhow::Result<()> {
        Ok(())
    }

    fn following_listed(&mut self, _count: usize) -> anyhow::Result<()> {
        Ok(())
    }

    fn account_scored(&mut self, _entry: &AccountReport) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Render a report in the requested format.
pub fn render(report: &FollowingReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Raw => Ok(serde_json::to_string(report)?),
    }
}

/// Print a report to stdout in the requested format.
pub fn output(report: &FollowingReport, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(report, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_text(report: &FollowingReport) -> String {
    let mut lines = Vec::with_capacity(2 + report.accounts.len() * 2);
    lines.push(user_line(&report.user_id));
    lines.push(following_line(report.following_count));
    for entry in &report.accounts {
        lines.extend(account_lines(entry));
    }
    lines.join("\n")
}

fn user_line(user_id: &str) -> String {
    format!("User ID: {user_id}")
}

fn following_line(count: usize) -> String {
    format!("This user is following {count} accounts.")
}

fn account_lines(entry: &AccountReport) -> [String; 2] {
    [
        format!(
            "@{}: {} (User ID: {})",
            entry.account.handle, entry.account.display_name, entry.account.id
        ),
        sentiment_line(entry),
    ]
}

fn sentiment_line(entry: &AccountReport) -> String {
    match entry.sentiment {
        Some(mean) => format!(
            "  Sentiment score: {}% positive, {}% subjective over the last {} tweets.",
            mean.polarity_percent(),
            mean.subjectivity_percent(),
            entry.post_count
        ),
        None => String::from("  Sentiment score: no data (no tweets returned)."),
    }
}
