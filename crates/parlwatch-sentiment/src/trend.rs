//! Synthetic sentiment trend series.
//!
//! No historical series is collected yet, so every trend point is
//! extrapolated backwards from the current run's values by a
//! [`TrendStrategy`]. Swap the strategy for one backed by stored snapshots
//! once real history exists.

use chrono::{Days, NaiveDate};
use parlwatch_core::{Channel, TrendSettings};

use crate::types::{Rollup, RollupDocument, SentimentSummary, TopicSnapshot, TrendPoint};

/// Projects a current value back to an earlier day.
///
/// `days_ago` is 0 for today and counts up to `lookback_days - 1`.
pub trait TrendStrategy {
    fn channel_sentiment(
        &self,
        channel: Channel,
        current: f64,
        days_ago: u32,
        lookback_days: u32,
    ) -> f64;

    fn topic_sentiment(&self, current: f64, days_ago: u32, lookback_days: u32) -> f64;

    fn topic_count(&self, total: u64, days_ago: u32, lookback_days: u32) -> u64;
}

/// Linear decay toward the past with a three-day oscillation.
///
/// For day `i`, values drop by `(lookback - i) * 0.01` and wobble by a
/// phase-shifted `±0.02` per channel (`±0.03` for topics).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayOscillation;

impl DecayOscillation {
    fn variation(days_ago: u32, lookback_days: u32) -> f64 {
        f64::from(lookback_days.saturating_sub(days_ago)) * 0.01
    }

    fn wobble(step: u32) -> f64 {
        f64::from(step % 3) - 1.0
    }
}

impl TrendStrategy for DecayOscillation {
    fn channel_sentiment(
        &self,
        channel: Channel,
        current: f64,
        days_ago: u32,
        lookback_days: u32,
    ) -> f64 {
        let phase = match channel {
            Channel::News => 0,
            Channel::Facebook => 1,
            Channel::Twitter => 2,
        };
        current - Self::variation(days_ago, lookback_days) + 0.02 * Self::wobble(days_ago + phase)
    }

    fn topic_sentiment(&self, current: f64, days_ago: u32, lookback_days: u32) -> f64 {
        current - Self::variation(days_ago, lookback_days) + 0.03 * Self::wobble(days_ago)
    }

    fn topic_count(&self, total: u64, days_ago: u32, lookback_days: u32) -> u64 {
        let per_day = i64::try_from(total / u64::from(lookback_days.max(1))).unwrap_or(i64::MAX);
        let count = per_day - 2 * i64::from(days_ago) + i64::from(days_ago % 3);
        u64::try_from(count.max(1)).unwrap_or(1)
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Build `settings.lookback_days` trend points, most recent first.
///
/// Every sentiment value is clamped to `[0, 1]` whatever the strategy
/// returns. Each point lists the `settings.top_topics` topics with the most
/// mentions overall (ties broken by name). The series stops early if a date
/// would fall before the earliest representable day.
#[must_use]
pub fn synthesize_trend(
    summary: &SentimentSummary,
    topics: &RollupDocument,
    settings: &TrendSettings,
    today: NaiveDate,
    strategy: &dyn TrendStrategy,
) -> Vec<TrendPoint> {
    let lookback = settings.lookback_days;

    let mut ranked: Vec<(&String, &Rollup)> = topics.iter().collect();
    // Stable sort keeps the map's name order among equal totals.
    ranked.sort_by(|a, b| b.1.total.cmp(&a.1.total));
    ranked.truncate(settings.top_topics);

    (0..lookback)
        .map_while(|i| {
            let date = today.checked_sub_days(Days::new(u64::from(i)))?;
            let [news, facebook, twitter] = Channel::ALL.map(|c| {
                clamp_unit(strategy.channel_sentiment(c, summary.sentiment(c), i, lookback))
            });

            let top_topics = ranked
                .iter()
                .map(|(topic, rollup)| TopicSnapshot {
                    topic: (*topic).clone(),
                    count: strategy.topic_count(rollup.total, i, lookback),
                    sentiment: clamp_unit(strategy.topic_sentiment(
                        rollup.sentiment.overall,
                        i,
                        lookback,
                    )),
                })
                .collect();

            Some(TrendPoint {
                date,
                overall: (news + facebook + twitter) / 3.0,
                news,
                facebook,
                twitter,
                top_topics,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChannelSentiment, RollupSentiment};

    fn summary(news: f64, facebook: f64, twitter: f64) -> SentimentSummary {
        let channel = |channel, sentiment| ChannelSentiment {
            channel,
            posts: 1,
            replies: 0,
            post_sentiment: sentiment,
            reply_sentiment: None,
            sentiment,
        };
        SentimentSummary {
            channels: vec![
                channel(Channel::News, news),
                channel(Channel::Facebook, facebook),
                channel(Channel::Twitter, twitter),
            ],
            overall: (news + facebook + twitter) / 3.0,
        }
    }

    fn topic(total: u64, overall: f64) -> Rollup {
        Rollup {
            total,
            news: total,
            sentiment: RollupSentiment {
                overall,
                news: overall,
                ..RollupSentiment::default()
            },
            ..Rollup::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn topics(n: u64) -> RollupDocument {
        (0..n)
            .map(|i| (format!("topic-{i}"), topic(10 * (i + 1), 0.5)))
            .collect()
    }

    #[test]
    fn default_settings_yield_seven_points_most_recent_first() {
        let points = synthesize_trend(
            &summary(0.5, 0.5, 0.5),
            &topics(8),
            &TrendSettings::default(),
            today(),
            &DecayOscillation,
        );
        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, today());
        assert_eq!(points[6].date, NaiveDate::from_ymd_opt(2026, 10, 13).unwrap());
        for pair in points.windows(2) {
            assert!(pair[0].date > pair[1].date);
        }
    }

    #[test]
    fn values_are_clamped_at_extremes() {
        for level in [0.0, 1.0] {
            let points = synthesize_trend(
                &summary(level, level, level),
                &topics(3),
                &TrendSettings::default(),
                today(),
                &DecayOscillation,
            );
            for p in &points {
                for v in [p.overall, p.news, p.facebook, p.twitter] {
                    assert!((0.0..=1.0).contains(&v), "value {v} out of range");
                }
                for t in &p.top_topics {
                    assert!((0.0..=1.0).contains(&t.sentiment));
                    assert!(t.count >= 1);
                }
            }
        }
    }

    #[test]
    fn today_matches_decay_formula() {
        let points = synthesize_trend(
            &summary(0.6, 0.6, 0.6),
            &RollupDocument::new(),
            &TrendSettings::default(),
            today(),
            &DecayOscillation,
        );
        // Day 0: variation 0.07; phases 0,1,2 give -0.02, 0, +0.02.
        let p = &points[0];
        assert!((p.news - 0.51).abs() < 1e-9);
        assert!((p.facebook - 0.53).abs() < 1e-9);
        assert!((p.twitter - 0.55).abs() < 1e-9);
        assert!((p.overall - 0.53).abs() < 1e-9);
        assert!(p.top_topics.is_empty());
    }

    #[test]
    fn series_stops_at_earliest_representable_date() {
        let settings = TrendSettings {
            lookback_days: 10,
            top_topics: 5,
        };
        let start = NaiveDate::MIN + Days::new(3);
        let points = synthesize_trend(
            &summary(0.5, 0.5, 0.5),
            &RollupDocument::new(),
            &settings,
            start,
            &DecayOscillation,
        );
        assert_eq!(points.len(), 4);
        assert_eq!(points[3].date, NaiveDate::MIN);
    }

    #[test]
    fn top_topics_ranked_by_total_and_truncated() {
        let points = synthesize_trend(
            &summary(0.5, 0.5, 0.5),
            &topics(8),
            &TrendSettings::default(),
            today(),
            &DecayOscillation,
        );
        let names: Vec<&str> = points[0]
            .top_topics
            .iter()
            .map(|t| t.topic.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["topic-7", "topic-6", "topic-5", "topic-4", "topic-3"]
        );
    }

    #[test]
    fn topic_count_never_drops_below_one() {
        let s = DecayOscillation;
        assert_eq!(s.topic_count(70, 0, 7), 10);
        assert_eq!(s.topic_count(70, 1, 7), 9);
        assert_eq!(s.topic_count(70, 6, 7), 1);
        assert_eq!(s.topic_count(0, 3, 7), 1);
    }

    #[test]
    fn custom_strategy_is_clamped_too() {
        struct Wild;
        impl TrendStrategy for Wild {
            fn channel_sentiment(&self, _: Channel, _: f64, days_ago: u32, _: u32) -> f64 {
                if days_ago % 2 == 0 {
                    5.0
                } else {
                    f64::NAN
                }
            }
            fn topic_sentiment(&self, _: f64, _: u32, _: u32) -> f64 {
                -3.0
            }
            fn topic_count(&self, total: u64, _: u32, _: u32) -> u64 {
                total
            }
        }

        let settings = TrendSettings {
            lookback_days: 4,
            top_topics: 2,
        };
        let points = synthesize_trend(
            &summary(0.5, 0.5, 0.5),
            &topics(3),
            &settings,
            today(),
            &Wild,
        );
        assert_eq!(points.len(), 4);
        assert_eq!(points[0].news, 1.0);
        assert_eq!(points[1].news, 0.0);
        assert_eq!(points[0].top_topics.len(), 2);
        assert_eq!(points[0].top_topics[0].sentiment, 0.0);
        assert_eq!(points[0].top_topics[0].count, 30);
    }
}
