//! Randomized placeholder records for exercising the pipeline.

use std::ops::Range;

use chrono::{DateTime, Duration, Utc};
use parlwatch_core::{Channel, WatchlistFile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::MentionSource;
use crate::error::SentimentError;
use crate::types::{Mention, Reply};

/// Volume and engagement shape of one synthetic channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelProfile {
    pub channel: Channel,
    pub outlets: usize,
    /// Replies per record are drawn uniformly from this range.
    pub replies: Range<usize>,
    pub max_likes: u32,
    pub max_shares: u32,
}

impl ChannelProfile {
    /// 30 news sites, 130 Facebook pages and 10 Twitter accounts.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                channel: Channel::News,
                outlets: 30,
                replies: 0..0,
                max_likes: 0,
                max_shares: 0,
            },
            Self {
                channel: Channel::Facebook,
                outlets: 130,
                replies: 90..110,
                max_likes: 500,
                max_shares: 100,
            },
            Self {
                channel: Channel::Twitter,
                outlets: 10,
                replies: 15..25,
                max_likes: 200,
                max_shares: 50,
            },
        ]
    }
}

/// Generates records with uniformly random entity, topic and sentiment.
///
/// Reply text always names the parent record's entity, so reply attribution
/// in the entity rollup sees realistic input.
pub struct SyntheticSource {
    rng: StdRng,
    posts_per_outlet: usize,
    profiles: Vec<ChannelProfile>,
    now: DateTime<Utc>,
    seq: u64,
}

impl SyntheticSource {
    /// Build a generator. `seed` makes output reproducible; `None` seeds from the OS.
    #[must_use]
    pub fn new(posts_per_outlet: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            posts_per_outlet,
            profiles: ChannelProfile::defaults(),
            now: Utc::now(),
            seq: 0,
        }
    }

    #[must_use]
    pub fn with_profiles(mut self, profiles: Vec<ChannelProfile>) -> Self {
        self.profiles = profiles;
        self
    }

    /// Timestamps are generated relative to `now`.
    #[must_use]
    pub fn anchored_at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Sentiment in `[0, 1]` with two decimals.
    fn sentiment(&mut self) -> f64 {
        f64::from(self.rng.random_range(0..=100_u32)) / 100.0
    }

    fn below(&mut self, max: u32) -> u32 {
        if max == 0 {
            0
        } else {
            self.rng.random_range(0..max)
        }
    }

    fn pick<'a>(&mut self, names: &'a [String]) -> &'a str {
        &names[self.rng.random_range(0..names.len())]
    }

    fn outlet_name(channel: Channel, i: usize) -> String {
        match channel {
            Channel::News => format!("News_Site_{i}"),
            Channel::Facebook => format!("Mongolia_Page_{i}"),
            Channel::Twitter => format!("Mongolia_Account_{i}"),
        }
    }

    fn url(channel: Channel, outlet: &str, seq: u64) -> String {
        match channel {
            Channel::News => format!("https://{}.mn/news/{seq}", outlet.to_lowercase()),
            Channel::Facebook => format!("https://facebook.com/{outlet}/posts/{seq}"),
            Channel::Twitter => format!("https://twitter.com/{outlet}/status/{seq}"),
        }
    }

    /// Second word of the entity name, or the whole name if it has one word.
    fn surname(entity: &str) -> &str {
        entity.split(' ').nth(1).unwrap_or(entity)
    }

    fn content(channel: Channel, entity: &str, topic: &str, sentiment: f64) -> String {
        match channel {
            Channel::News => format!(
                "The Parliament member {entity} discussed {topic} during the session."
            ),
            Channel::Facebook => format!(
                "Discussion about {topic} in Parliament. {entity} made some interesting points today."
            ),
            Channel::Twitter => {
                let tone = if sentiment > 0.5 {
                    "productive"
                } else {
                    "concerning"
                };
                format!(
                    "#{} #{} Parliament discussion today was {tone}. #Mongolia #Parliament",
                    topic.replace(' ', ""),
                    Self::surname(entity)
                )
            }
        }
    }

    fn reply_content(channel: Channel, entity: &str, topic: &str, sentiment: f64) -> String {
        match channel {
            Channel::Twitter => {
                let stance = if sentiment > 0.5 {
                    "I support"
                } else {
                    "I question"
                };
                format!("{stance} {entity}'s stance on {topic}.")
            }
            Channel::News | Channel::Facebook => {
                let stance = if sentiment > 0.5 { "agree" } else { "disagree" };
                format!("I {stance} with {entity}'s position on {topic}.")
            }
        }
    }

    fn build_replies(&mut self, profile: &ChannelProfile, parent: &Mention) -> Vec<Reply> {
        let n = if profile.replies.is_empty() {
            0
        } else {
            self.rng.random_range(profile.replies.clone())
        };

        (0..n)
            .map(|j| {
                let sentiment = self.sentiment();
                let age = Duration::hours(i64::from(self.below(12)))
                    + Duration::minutes(i64::from(self.below(60)));
                Reply {
                    id: format!("{}_{j}", parent.id),
                    content: Self::reply_content(
                        profile.channel,
                        &parent.entity,
                        &parent.topic,
                        sentiment,
                    ),
                    published_at: self.now - age,
                    sentiment,
                    likes: self.below(50),
                }
            })
            .collect()
    }

    fn build_record(
        &mut self,
        profile: &ChannelProfile,
        outlet: &str,
        watchlist: &WatchlistFile,
    ) -> Mention {
        self.seq += 1;
        let seq = self.seq;
        let entity = self.pick(&watchlist.entities).to_string();
        let topic = self.pick(&watchlist.topics).to_string();
        let sentiment = self.sentiment();
        let age = Duration::hours(i64::from(self.below(24)));
        let channel = profile.channel;

        let mut record = Mention {
            id: format!("{outlet}_{seq}"),
            channel,
            outlet: outlet.to_string(),
            title: (channel == Channel::News).then(|| format!("{topic} discussion in Parliament")),
            content: Self::content(channel, &entity, &topic, sentiment),
            url: Self::url(channel, outlet, seq),
            published_at: self.now - age,
            sentiment,
            likes: self.below(profile.max_likes),
            shares: self.below(profile.max_shares),
            replies: Vec::new(),
            entity,
            topic,
        };
        record.replies = self.build_replies(profile, &record);
        record
    }
}

impl MentionSource for SyntheticSource {
    fn collect(&mut self, watchlist: &WatchlistFile) -> Result<Vec<Mention>, SentimentError> {
        if watchlist.entities.is_empty() || watchlist.topics.is_empty() {
            return Ok(Vec::new());
        }

        let profiles = self.profiles.clone();
        let mut records = Vec::new();
        for profile in &profiles {
            let before = records.len();
            for i in 1..=profile.outlets {
                let outlet = Self::outlet_name(profile.channel, i);
                for _ in 0..self.posts_per_outlet {
                    records.push(self.build_record(profile, &outlet, watchlist));
                }
            }
            tracing::debug!(
                channel = %profile.channel,
                outlets = profile.outlets,
                records = records.len() - before,
                "generated synthetic records"
            );
        }
        Ok(records)
    }
}
