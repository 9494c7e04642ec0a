//! Per-entity and per-topic rollups of mention counts and sentiment.

use std::collections::BTreeMap;

use parlwatch_core::Channel;

use crate::types::{Mention, Rollup, RollupDocument, RollupSentiment};

/// Count-weighted mean of per-channel means: `Σ(cᵢ·mᵢ) / Σcᵢ`.
///
/// Returns `0.0` when every count is zero. Extra entries in the longer slice
/// are ignored.
#[must_use]
pub fn weighted_overall(counts: &[u64], means: &[f64]) -> f64 {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let weighted: f64 = counts
        .iter()
        .zip(means)
        .map(|(&count, &mean)| count as f64 * mean)
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let denom = total as f64;
    weighted / denom
}

#[derive(Debug, Default)]
struct Accumulator {
    counts: [u64; 3],
    sums: [f64; 3],
}

impl Accumulator {
    fn add(&mut self, channel: Channel, sentiment: f64) {
        let i = channel.index();
        self.counts[i] += 1;
        self.sums[i] += sentiment;
    }

    fn finish(&self) -> Rollup {
        let mut means = [0.0_f64; 3];
        for (i, mean) in means.iter_mut().enumerate() {
            if self.counts[i] > 0 {
                #[allow(clippy::cast_precision_loss)]
                let denom = self.counts[i] as f64;
                *mean = self.sums[i] / denom;
            }
        }

        let [news, facebook, twitter] = self.counts;
        Rollup {
            total: news + facebook + twitter,
            news,
            facebook,
            twitter,
            sentiment: RollupSentiment {
                overall: weighted_overall(&self.counts, &means),
                news: means[Channel::News.index()],
                facebook: means[Channel::Facebook.index()],
                twitter: means[Channel::Twitter.index()],
            },
        }
    }
}

/// Roll up records under the key returned by `key_of`.
///
/// Every configured key appears in the result, zero-count keys included.
/// When `attribute_replies` is set, each reply whose text contains a
/// configured key (case-sensitive substring) also counts toward that key,
/// in the channel of its parent record.
fn build_rollups<F>(
    records: &[Mention],
    keys: &[String],
    key_of: F,
    attribute_replies: bool,
) -> RollupDocument
where
    F: Fn(&Mention) -> &str,
{
    let mut acc: BTreeMap<&str, Accumulator> = keys
        .iter()
        .map(|k| (k.as_str(), Accumulator::default()))
        .collect();

    for record in records {
        let key = key_of(record);
        match acc.get_mut(key) {
            Some(bucket) => bucket.add(record.channel, record.sentiment),
            None => {
                tracing::warn!(
                    record = %record.id,
                    key,
                    "record references an unconfigured key; skipping"
                );
            }
        }

        if !attribute_replies {
            continue;
        }
        for reply in &record.replies {
            for known in keys {
                if reply.content.contains(known.as_str()) {
                    if let Some(bucket) = acc.get_mut(known.as_str()) {
                        bucket.add(record.channel, reply.sentiment);
                    }
                }
            }
        }
    }

    acc.into_iter()
        .map(|(key, bucket)| (key.to_string(), bucket.finish()))
        .collect()
}

/// Roll up records by entity, attributing replies that name a known entity.
#[must_use]
pub fn entity_rollups(records: &[Mention], entities: &[String]) -> RollupDocument {
    build_rollups(records, entities, |m| m.entity.as_str(), true)
}

/// Roll up top-level records by topic. Replies are not attributed to topics.
#[must_use]
pub fn topic_rollups(records: &[Mention], topics: &[String]) -> RollupDocument {
    build_rollups(records, topics, |m| m.topic.as_str(), false)
}
