//! Sentiment monitoring pipeline for parlwatch.
//!
//! Collects mention records for the watched entities and topics, rolls them
//! up per entity and per topic with count-weighted sentiment, derives
//! threshold alerts and a synthetic trend series, and writes the results as
//! JSON documents.

pub mod alerts;
pub mod baseline;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod rollup;
pub mod sources;
pub mod summary;
pub mod trend;
pub mod types;

#[cfg(test)]
mod testing;

pub use baseline::{HistoryBaseline, SentimentBaseline, SyntheticBaseline};
pub use error::SentimentError;
pub use pipeline::{
    run_pipeline, run_pipeline_with, BaselineKind, PipelineConfig, PipelineOutput, PipelineReport,
};
pub use sources::{ChannelProfile, MentionSource, SyntheticSource};
pub use trend::{DecayOscillation, TrendStrategy};
pub use types::{
    Alert, AlertSource, Mention, MentionsDocument, Polarity, Reply, Rollup, RollupDocument,
    RollupSentiment, SentimentSummary, TopicSnapshot, TrendPoint,
};
