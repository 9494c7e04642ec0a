use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use parlwatch_core::{Channel, Priority};
use serde::{Deserialize, Serialize};

/// A reply or comment attached to a [`Mention`]. Replies have no children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
    /// Sentiment in `[0.0, 1.0]`.
    pub sentiment: f64,
    pub likes: u32,
}

/// One article, post or tweet referencing an entity and a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub id: String,
    pub channel: Channel,
    /// Site, page or account the record was collected from.
    pub outlet: String,
    pub entity: String,
    pub topic: String,
    pub title: Option<String>,
    pub content: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// Sentiment in `[0.0, 1.0]`.
    pub sentiment: f64,
    pub likes: u32,
    pub shares: u32,
    pub replies: Vec<Reply>,
}

/// Per-channel mean sentiment of a rollup, plus the count-weighted overall mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupSentiment {
    pub overall: f64,
    pub news: f64,
    pub facebook: f64,
    pub twitter: f64,
}

/// Aggregated mention counts and sentiment for one entity or topic.
///
/// Field names are consumed by the dashboard and must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub total: u64,
    pub news: u64,
    pub facebook: u64,
    pub twitter: u64,
    pub sentiment: RollupSentiment,
}

impl Rollup {
    #[must_use]
    pub fn count(&self, channel: Channel) -> u64 {
        match channel {
            Channel::News => self.news,
            Channel::Facebook => self.facebook,
            Channel::Twitter => self.twitter,
        }
    }

    #[must_use]
    pub fn mean(&self, channel: Channel) -> f64 {
        match channel {
            Channel::News => self.sentiment.news,
            Channel::Facebook => self.sentiment.facebook,
            Channel::Twitter => self.sentiment.twitter,
        }
    }
}

/// Where an alert's evidence came from: one channel or every channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSource {
    All,
    News,
    Facebook,
    Twitter,
}

impl std::fmt::Display for AlertSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertSource::All => write!(f, "all"),
            AlertSource::News => write!(f, "news"),
            AlertSource::Facebook => write!(f, "facebook"),
            AlertSource::Twitter => write!(f, "twitter"),
        }
    }
}

impl From<Channel> for AlertSource {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::News => AlertSource::News,
            Channel::Facebook => AlertSource::Facebook,
            Channel::Twitter => AlertSource::Twitter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => write!(f, "positive"),
            Polarity::Negative => write!(f, "negative"),
            Polarity::Neutral => write!(f, "neutral"),
        }
    }
}

/// A derived fact produced once per pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Local wall-clock time of generation, `HH:MM`.
    pub time: String,
    pub priority: Priority,
    pub source: AlertSource,
    pub sentiment: Polarity,
    pub members: Vec<String>,
    /// `false` until a reader acknowledges the alert.
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSnapshot {
    pub topic: String,
    pub count: u64,
    pub sentiment: f64,
}

/// One day of the trend series. Values are extrapolated, not measured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub overall: f64,
    pub news: f64,
    pub facebook: f64,
    pub twitter: f64,
    #[serde(rename = "topTopics")]
    pub top_topics: Vec<TopicSnapshot>,
}

/// Sentiment of one channel across all of its records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSentiment {
    pub channel: Channel,
    pub posts: usize,
    pub replies: usize,
    pub post_sentiment: f64,
    /// `None` when the channel carried no replies at all.
    pub reply_sentiment: Option<f64>,
    pub sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub channels: Vec<ChannelSentiment>,
    /// Channel sentiments weighted by each channel's post count.
    pub overall: f64,
}

impl SentimentSummary {
    /// Sentiment of `channel`, or `0.0` if it was not summarized.
    #[must_use]
    pub fn sentiment(&self, channel: Channel) -> f64 {
        self.channels
            .iter()
            .find(|c| c.channel == channel)
            .map_or(0.0, |c| c.sentiment)
    }
}

/// Raw records grouped by channel, as written to `mentions.json`.
pub type MentionsDocument = BTreeMap<Channel, Vec<Mention>>;

/// Rollups keyed by entity or topic name.
pub type RollupDocument = BTreeMap<String, Rollup>;
