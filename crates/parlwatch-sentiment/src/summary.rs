//! Channel-level sentiment summary.

use parlwatch_core::Channel;

use crate::rollup::weighted_overall;
use crate::types::{ChannelSentiment, Mention, SentimentSummary};

fn mean<I: Iterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0_u64), |(sum, n), v| (sum + v, n + 1));
    #[allow(clippy::cast_precision_loss)]
    (n > 0).then(|| sum / n as f64)
}

fn summarize_channel(channel: Channel, records: &[Mention]) -> ChannelSentiment {
    let posts: Vec<&Mention> = records.iter().filter(|m| m.channel == channel).collect();
    let post_sentiment = mean(posts.iter().map(|m| m.sentiment)).unwrap_or(0.0);
    let replies = posts.iter().map(|m| m.replies.len()).sum();
    let reply_sentiment = mean(
        posts
            .iter()
            .flat_map(|m| m.replies.iter().map(|r| r.sentiment)),
    );

    // Posts and replies weigh equally regardless of how many replies there are.
    let sentiment = match reply_sentiment {
        Some(r) => (post_sentiment + r) / 2.0,
        None => post_sentiment,
    };

    ChannelSentiment {
        channel,
        posts: posts.len(),
        replies,
        post_sentiment,
        reply_sentiment,
        sentiment,
    }
}

/// Summarize sentiment per channel and across all channels.
///
/// The cross-channel figure weights each channel by its post count. Channels
/// without records report `0.0`.
#[must_use]
pub fn summarize_channels(records: &[Mention]) -> SentimentSummary {
    let channels: Vec<ChannelSentiment> = Channel::ALL
        .iter()
        .map(|&c| summarize_channel(c, records))
        .collect();

    let counts: Vec<u64> = channels
        .iter()
        .map(|c| u64::try_from(c.posts).unwrap_or(u64::MAX))
        .collect();
    let means: Vec<f64> = channels.iter().map(|c| c.sentiment).collect();

    for c in &channels {
        tracing::debug!(
            channel = %c.channel,
            posts = c.posts,
            replies = c.replies,
            sentiment = c.sentiment,
            "channel sentiment"
        );
    }

    SentimentSummary {
        overall: weighted_overall(&counts, &means),
        channels,
    }
}
