//! Prior-period sentiment baselines for drop detection.

use std::path::Path;

use crate::error::SentimentError;
use crate::types::RollupDocument;

/// Supplies an entity's sentiment for the previous period.
pub trait SentimentBaseline {
    /// Prior sentiment for `entity`, or `None` when no baseline is known.
    fn prior(&self, entity: &str, current: f64) -> Option<f64>;
}

/// Placeholder baseline derived from the current value.
///
/// Shifts the current sentiment 0.1 toward the opposite side of 0.5 and
/// clamps to `[0, 1]`. The shift is smaller than the default drop margin, so
/// this baseline alone never produces a drop alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticBaseline;

impl SentimentBaseline for SyntheticBaseline {
    fn prior(&self, _entity: &str, current: f64) -> Option<f64> {
        let shift = if current < 0.5 { 0.1 } else { -0.1 };
        Some((current + shift).clamp(0.0, 1.0))
    }
}

/// Baseline read from the entity rollups written by the previous run.
#[derive(Debug, Clone, Default)]
pub struct HistoryBaseline {
    previous: RollupDocument,
}

impl HistoryBaseline {
    #[must_use]
    pub fn new(previous: RollupDocument) -> Self {
        Self { previous }
    }

    /// Load the previous run's entity rollup document.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError`] if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>, SentimentError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read(path).map_err(|e| SentimentError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let previous: RollupDocument =
            serde_json::from_slice(&raw).map_err(|e| SentimentError::Json {
                path: path.display().to_string(),
                source: e,
            })?;
        Ok(Some(Self::new(previous)))
    }
}

impl SentimentBaseline for HistoryBaseline {
    fn prior(&self, entity: &str, _current: f64) -> Option<f64> {
        self.previous
            .get(entity)
            .filter(|r| r.total > 0)
            .map(|r| r.sentiment.overall)
    }
}
