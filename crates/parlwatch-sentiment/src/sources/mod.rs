//! Mention source abstractions.
//!
//! A [`MentionSource`] produces the raw records for one run. Only the
//! synthetic generator exists today; a real collector plugs in behind the
//! same trait.

mod synthetic;

pub use synthetic::{ChannelProfile, SyntheticSource};

use std::collections::HashSet;

use parlwatch_core::WatchlistFile;

use crate::error::SentimentError;
use crate::types::Mention;

pub trait MentionSource {
    /// Produce this run's records for the entities and topics in `watchlist`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Source`] if the source cannot produce records.
    fn collect(&mut self, watchlist: &WatchlistFile) -> Result<Vec<Mention>, SentimentError>;
}

fn valid_sentiment(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Collect from `source`, dropping records whose id was already seen.
///
/// Sentiment must lie in `[0, 1]`. A record outside that range (NaN
/// included) is dropped; so is a single reply outside it, while its parent
/// record is kept.
///
/// # Errors
///
/// Propagates any error from the source.
pub fn collect_mentions(
    source: &mut dyn MentionSource,
    watchlist: &WatchlistFile,
) -> Result<Vec<Mention>, SentimentError> {
    let records = source.collect(watchlist)?;
    let collected = records.len();

    let mut seen_ids: HashSet<String> = HashSet::new();
    let unique: Vec<Mention> = records
        .into_iter()
        .filter(|m| seen_ids.insert(m.id.clone()))
        .collect();

    if unique.len() != collected {
        tracing::warn!(
            collected,
            kept = unique.len(),
            "source returned duplicate record ids; duplicates dropped"
        );
    }

    let before = unique.len();
    let mut dropped_replies = 0_usize;
    let valid: Vec<Mention> = unique
        .into_iter()
        .filter(|m| valid_sentiment(m.sentiment))
        .map(|mut m| {
            let replies = m.replies.len();
            m.replies.retain(|r| valid_sentiment(r.sentiment));
            dropped_replies += replies - m.replies.len();
            m
        })
        .collect();

    if valid.len() != before || dropped_replies > 0 {
        tracing::warn!(
            dropped_records = before - valid.len(),
            dropped_replies,
            "source returned sentiment outside [0, 1]; values dropped"
        );
    }
    tracing::info!(records = valid.len(), "mentions collected");

    Ok(valid)
}

#[cfg(test)]
mod tests {
    use parlwatch_core::{AlertThresholds, Channel, TrendSettings};

    use super::*;
    use crate::testing::{mention, names, reply};

    struct Fixed(Vec<Mention>);

    impl MentionSource for Fixed {
        fn collect(&mut self, _: &WatchlistFile) -> Result<Vec<Mention>, SentimentError> {
            Ok(self.0.clone())
        }
    }

    struct Broken;

    impl MentionSource for Broken {
        fn collect(&mut self, _: &WatchlistFile) -> Result<Vec<Mention>, SentimentError> {
            Err(SentimentError::Source("collector offline".to_string()))
        }
    }

    fn watchlist() -> WatchlistFile {
        WatchlistFile {
            entities: names(&["A"]),
            topics: names(&["T"]),
            alerts: AlertThresholds::default(),
            trend: TrendSettings::default(),
        }
    }

    #[test]
    fn duplicate_ids_are_dropped() {
        let a = mention(Channel::News, "A", "T", 0.5);
        let b = mention(Channel::News, "A", "T", 0.6);
        let mut source = Fixed(vec![a.clone(), a, b]);
        let records = collect_mentions(&mut source, &watchlist()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn out_of_range_record_sentiment_is_dropped() {
        let mut source = Fixed(vec![
            mention(Channel::News, "A", "T", f64::NAN),
            mention(Channel::News, "A", "T", 1.7),
            mention(Channel::News, "A", "T", -0.1),
            mention(Channel::News, "A", "T", 1.0),
        ]);
        let records = collect_mentions(&mut source, &watchlist()).unwrap();
        assert_eq!(records.len(), 1);
        assert!((records[0].sentiment - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_reply_sentiment_is_dropped() {
        let mut post = mention(Channel::Facebook, "A", "T", 0.4);
        post.replies = vec![reply("nan", f64::NAN), reply("high", 1.7), reply("ok", 0.0)];
        let records = collect_mentions(&mut Fixed(vec![post]), &watchlist()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].replies.len(), 1);
        assert_eq!(records[0].replies[0].content, "ok");
    }

    #[test]
    fn source_errors_propagate() {
        let result = collect_mentions(&mut Broken, &watchlist());
        assert!(matches!(result, Err(SentimentError::Source(ref m)) if m == "collector offline"));
    }
}
