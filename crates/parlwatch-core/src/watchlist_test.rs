use std::path::Path;

use super::*;

fn watchlist(entities: &[&str], topics: &[&str]) -> WatchlistFile {
    WatchlistFile {
        entities: entities.iter().map(ToString::to_string).collect(),
        topics: topics.iter().map(ToString::to_string).collect(),
        alerts: AlertThresholds::default(),
        trend: TrendSettings::default(),
    }
}

#[test]
fn validate_accepts_valid_watchlist() {
    let file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate"]);
    assert!(validate_watchlist(&file).is_ok());
}

#[test]
fn validate_rejects_empty_entity_list() {
    let file = watchlist(&[], &["Budget Debate"]);
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("at least one entity"));
}

#[test]
fn validate_rejects_empty_topic_list() {
    let file = watchlist(&["Jadamba BAT-ERDENE"], &[]);
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("at least one topic"));
}

#[test]
fn validate_rejects_blank_name() {
    let file = watchlist(&["  "], &["Budget Debate"]);
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_topic() {
    let file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate", "Budget Debate"]);
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate topic name"));
}

#[test]
fn validate_allows_names_differing_only_in_case() {
    let file = watchlist(&["NOROV ALTANKHUYAG", "Norov Altankhuyag"], &["Budget Debate"]);
    assert!(validate_watchlist(&file).is_ok());
}

#[test]
fn validate_rejects_out_of_range_threshold() {
    let mut file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate"]);
    file.alerts.positive_above = 1.5;
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("alerts.positive_above"));
}

#[test]
fn validate_rejects_duplicate_engagement_channel() {
    let mut file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate"]);
    file.alerts.engagement.push(EngagementRule {
        channel: Channel::Twitter,
        min_replies: 5,
        priority: Priority::High,
    });
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("duplicate engagement rule"));
}

#[test]
fn validate_rejects_zero_lookback() {
    let mut file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate"]);
    file.trend.lookback_days = 0;
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("lookback_days"));
}

#[test]
fn validate_caps_lookback() {
    let mut file = watchlist(&["Jadamba BAT-ERDENE"], &["Budget Debate"]);
    file.trend.lookback_days = MAX_LOOKBACK_DAYS;
    assert!(validate_watchlist(&file).is_ok());

    file.trend.lookback_days = u32::MAX;
    let err = validate_watchlist(&file).unwrap_err();
    assert!(err.to_string().contains("lookback_days"));
}

#[test]
fn parse_watchlist_rejects_huge_lookback() {
    let yaml = "entities: [A]\ntopics: [T]\ntrend:\n  lookback_days: 4000000000\n";
    assert!(matches!(
        parse_watchlist(yaml),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn parse_watchlist_applies_defaults_for_omitted_sections() {
    let yaml = r"
entities:
  - TELUKHAN AUBAKIR
topics:
  - Foreign Relations
";
    let file = parse_watchlist(yaml).expect("parse");
    assert_eq!(file.alerts, AlertThresholds::default());
    assert_eq!(file.trend.lookback_days, 7);
    assert_eq!(file.trend.top_topics, 5);
}

#[test]
fn parse_watchlist_merges_partial_alert_overrides() {
    let yaml = r"
entities: [TELUKHAN AUBAKIR]
topics: [Foreign Relations]
alerts:
  negative_below: 0.3
  engagement:
    - channel: twitter
      min_replies: 10
      priority: high
";
    let file = parse_watchlist(yaml).expect("parse");
    assert!((file.alerts.negative_below - 0.3).abs() < f64::EPSILON);
    assert_eq!(file.alerts.negative_min_mentions, 10);
    assert_eq!(file.alerts.engagement.len(), 1);
    assert_eq!(file.alerts.engagement[0].priority, Priority::High);
}

#[test]
fn parse_watchlist_rejects_unknown_channel() {
    let yaml = r"
entities: [TELUKHAN AUBAKIR]
topics: [Foreign Relations]
alerts:
  engagement:
    - channel: myspace
      min_replies: 10
      priority: low
";
    let result = parse_watchlist(yaml);
    assert!(
        matches!(result, Err(ConfigError::WatchlistFileParse(_))),
        "expected parse error, got: {result:?}"
    );
}

#[test]
fn load_watchlist_missing_file_is_io_error() {
    let result = load_watchlist(Path::new("/nonexistent/watchlist.yaml"));
    assert!(matches!(result, Err(ConfigError::WatchlistFileIo { .. })));
}

#[test]
fn load_watchlist_from_real_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("config")
        .join("watchlist.yaml");
    assert!(
        path.exists(),
        "watchlist.yaml missing at {path:?}; required for this test"
    );
    let file = load_watchlist(&path).expect("failed to load watchlist.yaml");
    assert_eq!(file.entities.len(), 8);
    assert_eq!(file.topics.len(), 8);
    assert_eq!(file.alerts, AlertThresholds::default());
}
