//! Threshold-based alert generation.

use chrono::{DateTime, Local, Utc};
use parlwatch_core::{AlertThresholds, Channel, Priority};

use crate::baseline::SentimentBaseline;
use crate::types::{Alert, AlertSource, Mention, Polarity, RollupDocument};

/// Collects alerts and hands out sequential ids starting at 1.
struct AlertLog {
    alerts: Vec<Alert>,
    next_id: u64,
    now: DateTime<Utc>,
}

impl AlertLog {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            alerts: Vec::new(),
            next_id: 1,
            now,
        }
    }

    fn push(
        &mut self,
        title: String,
        description: String,
        priority: Priority,
        source: AlertSource,
        sentiment: Polarity,
        member: &str,
    ) {
        let local = self.now.with_timezone(&Local);
        self.alerts.push(Alert {
            id: self.next_id,
            title,
            description,
            date: local.date_naive(),
            time: local.format("%H:%M").to_string(),
            priority,
            source,
            sentiment,
            members: vec![member.to_string()],
            read: false,
        });
        self.next_id += 1;
    }
}

fn post_noun(channel: Channel) -> &'static str {
    match channel {
        Channel::News => "news article",
        Channel::Facebook => "Facebook post",
        Channel::Twitter => "tweet",
    }
}

fn reply_noun(channel: Channel) -> &'static str {
    match channel {
        Channel::Twitter => "replies",
        Channel::News | Channel::Facebook => "comments",
    }
}

/// Derive the alerts for one pipeline run.
///
/// Sentiment alerts come first, entity by entity in `entities` order, each
/// entity checked for negative, drop and positive conditions in that order.
/// Engagement alerts follow, one pass over `records` per engagement rule.
/// Every qualifying condition yields exactly one alert; nothing is deduplicated.
#[must_use]
pub fn generate_alerts(
    entities: &[String],
    rollups: &RollupDocument,
    records: &[Mention],
    thresholds: &AlertThresholds,
    baseline: &dyn SentimentBaseline,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut log = AlertLog::new(now);

    for entity in entities {
        let Some(rollup) = rollups.get(entity) else {
            continue;
        };
        let current = rollup.sentiment.overall;
        let total = rollup.total;

        if current < thresholds.negative_below && total > thresholds.negative_min_mentions {
            log.push(
                format!("Negative sentiment for {entity}"),
                format!(
                    "Overall sentiment for {entity} is negative ({current:.2}) across {total} mentions."
                ),
                Priority::High,
                AlertSource::All,
                Polarity::Negative,
                entity,
            );
        }

        if let Some(prior) = baseline.prior(entity, current) {
            if current < prior - thresholds.drop_margin && total > thresholds.drop_min_mentions {
                log.push(
                    format!("Sentiment drop for {entity}"),
                    format!("Sentiment for {entity} has dropped from {prior:.2} to {current:.2}."),
                    Priority::Medium,
                    AlertSource::All,
                    Polarity::Negative,
                    entity,
                );
            }
        }

        if current > thresholds.positive_above && total > thresholds.positive_min_mentions {
            log.push(
                format!("Positive sentiment for {entity}"),
                format!(
                    "Overall sentiment for {entity} is very positive ({current:.2}) across {total} mentions."
                ),
                Priority::Medium,
                AlertSource::All,
                Polarity::Positive,
                entity,
            );
        }
    }

    for rule in &thresholds.engagement {
        for record in records.iter().filter(|m| m.channel == rule.channel) {
            let n = record.replies.len();
            if n <= rule.min_replies {
                continue;
            }
            log.push(
                format!(
                    "High engagement {} about {}",
                    post_noun(rule.channel),
                    record.entity
                ),
                format!(
                    "A {} about {} and {} has received {n} {}.",
                    post_noun(rule.channel),
                    record.entity,
                    record.topic,
                    reply_noun(rule.channel)
                ),
                rule.priority,
                rule.channel.into(),
                Polarity::Neutral,
                &record.entity,
            );
        }
    }

    tracing::info!(alerts = log.alerts.len(), "alerts generated");
    log.alerts
}
