//! The `run` command: one full pipeline pass.

use std::path::PathBuf;

use chrono::Utc;
use parlwatch_core::{AppConfig, Channel};
use parlwatch_sentiment::{run_pipeline, PipelineConfig, PipelineReport, SyntheticSource};

/// Per-invocation overrides taken from CLI flags.
#[derive(Debug, Default)]
pub(crate) struct RunOptions {
    pub data_dir: Option<PathBuf>,
    pub posts_per_outlet: Option<usize>,
    pub seed: Option<u64>,
    pub dry_run: bool,
}

/// CLI flag first, then the configured data directory.
pub(crate) fn resolve_data_dir(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.data_dir.clone())
}

/// Run the monitoring pipeline with synthetic records and print a summary.
///
/// # Errors
///
/// Returns an error if the watchlist cannot be loaded or any document
/// cannot be written.
pub(crate) fn run_monitor(config: &AppConfig, options: RunOptions) -> anyhow::Result<()> {
    let watchlist = parlwatch_core::load_watchlist(&config.watchlist_path)?;
    tracing::info!(
        env = %config.env,
        entities = watchlist.entities.len(),
        topics = watchlist.topics.len(),
        "starting monitoring run"
    );

    let pipeline_config = PipelineConfig {
        watchlist,
        data_dir: resolve_data_dir(options.data_dir, config),
        dry_run: options.dry_run,
    };
    let mut source = SyntheticSource::new(
        options.posts_per_outlet.unwrap_or(config.posts_per_outlet),
        options.seed.or(config.seed),
    );

    let report = run_pipeline(&pipeline_config, &mut source, Utc::now())?;
    print!("{}", render_run_summary(&report));
    Ok(())
}

pub(crate) fn render_run_summary(report: &PipelineReport) -> String {
    use std::fmt::Write;

    let out = &report.output;
    let mut s = String::new();

    let _ = writeln!(s, "run {} ({} baseline)", report.run_id, report.baseline);
    let _ = writeln!(s, "{} records collected", out.records.len());
    for channel in Channel::ALL {
        if let Some(c) = out.summary.channels.iter().find(|c| c.channel == channel) {
            let _ = writeln!(
                s,
                "  {:<10}{:>6} posts {:>8} replies  sentiment {:.2}",
                channel.to_string(),
                c.posts,
                c.replies,
                c.sentiment
            );
        }
    }
    let _ = writeln!(s, "overall sentiment {:.2}", out.summary.overall);
    let _ = writeln!(s, "{} alerts generated", out.alerts.len());

    if report.written.is_empty() {
        let _ = writeln!(s, "dry-run: no documents written");
    } else {
        for path in &report.written {
            let _ = writeln!(s, "wrote {}", path.display());
        }
    }
    s
}
