//! Record builders shared by unit tests.

use chrono::{TimeZone, Utc};
use parlwatch_core::Channel;

use crate::types::{Mention, Reply};

pub(crate) fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

pub(crate) fn mention(channel: Channel, entity: &str, topic: &str, sentiment: f64) -> Mention {
    Mention {
        id: format!("{channel}-{entity}-{topic}-{sentiment}"),
        channel,
        outlet: format!("{channel}_outlet"),
        entity: entity.to_string(),
        topic: topic.to_string(),
        title: None,
        content: format!("{entity} on {topic}"),
        url: format!("https://example.test/{channel}"),
        published_at: Utc.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap(),
        sentiment,
        likes: 0,
        shares: 0,
        replies: Vec::new(),
    }
}

pub(crate) fn reply(content: &str, sentiment: f64) -> Reply {
    Reply {
        id: format!("reply-{sentiment}"),
        content: content.to_string(),
        published_at: Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap(),
        sentiment,
        likes: 0,
    }
}

/// A record carrying `count` replies that name no entity.
pub(crate) fn busy_mention(channel: Channel, entity: &str, count: usize) -> Mention {
    let mut m = mention(channel, entity, "T", 0.5);
    m.replies = (0..count).map(|_| reply("+1", 0.5)).collect();
    m
}
