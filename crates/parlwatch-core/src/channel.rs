use serde::{Deserialize, Serialize};

/// A distinct data source that mentions are collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    News,
    Facebook,
    Twitter,
}

impl Channel {
    /// Every channel, in the order rollups and trend points list them.
    pub const ALL: [Channel; 3] = [Channel::News, Channel::Facebook, Channel::Twitter];

    /// Stable position of the channel inside [`Channel::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Channel::News => 0,
            Channel::Facebook => 1,
            Channel::Twitter => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::News => write!(f, "news"),
            Channel::Facebook => write!(f, "facebook"),
            Channel::Twitter => write!(f, "twitter"),
        }
    }
}

/// Alert priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}
