//! Monitoring pipeline orchestration.

use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use parlwatch_core::WatchlistFile;
use serde::Serialize;
use uuid::Uuid;

use crate::alerts::generate_alerts;
use crate::baseline::{HistoryBaseline, SentimentBaseline, SyntheticBaseline};
use crate::error::SentimentError;
use crate::output::{
    group_by_channel, write_document, ALERTS_FILE, ENTITY_ROLLUPS_FILE, MENTIONS_FILE,
    TOPIC_ROLLUPS_FILE, TRENDS_FILE,
};
use crate::rollup::{entity_rollups, topic_rollups};
use crate::sources::{collect_mentions, MentionSource};
use crate::summary::summarize_channels;
use crate::trend::{synthesize_trend, DecayOscillation, TrendStrategy};
use crate::types::{Alert, Mention, RollupDocument, SentimentSummary, TrendPoint};

/// Inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub watchlist: WatchlistFile,
    pub data_dir: PathBuf,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

/// Which prior-period baseline drove drop detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaselineKind {
    /// Entity rollups written by the previous run.
    History,
    /// Placeholder derived from current sentiment.
    Synthetic,
}

impl std::fmt::Display for BaselineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BaselineKind::History => write!(f, "history"),
            BaselineKind::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Everything one run computed.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub records: Vec<Mention>,
    pub summary: SentimentSummary,
    pub entity_rollups: RollupDocument,
    pub topic_rollups: RollupDocument,
    pub alerts: Vec<Alert>,
    pub trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: Uuid,
    pub baseline: BaselineKind,
    pub output: PipelineOutput,
    /// Paths of the documents written, empty for a dry run.
    pub written: Vec<PathBuf>,
}

fn select_baseline(config: &PipelineConfig) -> (Box<dyn SentimentBaseline>, BaselineKind) {
    let path = config.data_dir.join(ENTITY_ROLLUPS_FILE);
    match HistoryBaseline::load(&path) {
        Ok(Some(history)) => {
            tracing::info!(path = %path.display(), "using previous run as sentiment baseline");
            (Box::new(history), BaselineKind::History)
        }
        Ok(None) => {
            tracing::info!("no previous run found; using synthetic sentiment baseline");
            (Box::new(SyntheticBaseline), BaselineKind::Synthetic)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "previous run unreadable; using synthetic sentiment baseline"
            );
            (Box::new(SyntheticBaseline), BaselineKind::Synthetic)
        }
    }
}

/// Run the full monitoring pipeline once with the default
/// [`DecayOscillation`] trend strategy.
///
/// # Errors
///
/// See [`run_pipeline_with`].
pub fn run_pipeline(
    config: &PipelineConfig,
    source: &mut dyn MentionSource,
    now: DateTime<Utc>,
) -> Result<PipelineReport, SentimentError> {
    run_pipeline_with(config, source, &DecayOscillation, now)
}

/// Run the full monitoring pipeline once.
///
/// 1. Collect records from `source`.
/// 2. Summarize sentiment per channel.
/// 3. Roll up by entity (with reply attribution) and by topic.
/// 4. Generate alerts against the prior-period baseline.
/// 5. Synthesize the trend series with `trend`.
/// 6. Write the five documents to `config.data_dir` unless `dry_run`.
///
/// The baseline is read before anything is written, so it always reflects
/// the previous run.
///
/// # Errors
///
/// Returns [`SentimentError`] if the source fails or any document cannot be
/// written. Nothing is retried.
pub fn run_pipeline_with(
    config: &PipelineConfig,
    source: &mut dyn MentionSource,
    trend: &dyn TrendStrategy,
    now: DateTime<Utc>,
) -> Result<PipelineReport, SentimentError> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("pipeline", %run_id);
    let _guard = span.enter();

    let watchlist = &config.watchlist;
    let records = collect_mentions(source, watchlist)?;

    let summary = summarize_channels(&records);
    tracing::info!(overall = summary.overall, "channel sentiment summarized");

    let entities = entity_rollups(&records, &watchlist.entities);
    let topics = topic_rollups(&records, &watchlist.topics);
    tracing::info!(
        entities = entities.len(),
        topics = topics.len(),
        "rollups computed"
    );

    let (baseline, baseline_kind) = select_baseline(config);
    let alerts = generate_alerts(
        &watchlist.entities,
        &entities,
        &records,
        &watchlist.alerts,
        baseline.as_ref(),
        now,
    );

    let today = now.with_timezone(&Local).date_naive();
    let series = synthesize_trend(&summary, &topics, &watchlist.trend, today, trend);

    let output = PipelineOutput {
        records,
        summary,
        entity_rollups: entities,
        topic_rollups: topics,
        alerts,
        trend: series,
    };

    let written = if config.dry_run {
        tracing::info!("dry run; no documents written");
        Vec::new()
    } else {
        write_outputs(config, &output)?
    };

    Ok(PipelineReport {
        run_id,
        baseline: baseline_kind,
        output,
        written,
    })
}

fn write_outputs(
    config: &PipelineConfig,
    output: &PipelineOutput,
) -> Result<Vec<PathBuf>, SentimentError> {
    let dir = &config.data_dir;
    let written = vec![
        write_document(dir, MENTIONS_FILE, &group_by_channel(&output.records))?,
        write_document(dir, ENTITY_ROLLUPS_FILE, &output.entity_rollups)?,
        write_document(dir, TOPIC_ROLLUPS_FILE, &output.topic_rollups)?,
        write_document(dir, ALERTS_FILE, &output.alerts)?,
        write_document(dir, TRENDS_FILE, &output.trend)?,
    ];
    tracing::info!(dir = %dir.display(), documents = written.len(), "documents written");
    Ok(written)
}
