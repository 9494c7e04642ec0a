//! Read-only handlers over the documents written by the last run.

use std::fmt::Write;
use std::path::Path;

use chrono::Local;
use parlwatch_sentiment::output::{read_document, ALERTS_FILE, ENTITY_ROLLUPS_FILE, TRENDS_FILE};
use parlwatch_sentiment::{Alert, RollupDocument, TrendPoint};

fn missing(data_dir: &Path, name: &str) -> bool {
    !data_dir.join(name).exists()
}

/// Show entity rollups from the last run, busiest entity first.
///
/// # Errors
///
/// Returns an error if the rollup document exists but cannot be parsed.
pub(crate) fn run_status(data_dir: &Path) -> anyhow::Result<()> {
    if missing(data_dir, ENTITY_ROLLUPS_FILE) {
        println!(
            "no entity rollups found in {}; run `parlwatch-cli run` first",
            data_dir.display()
        );
        return Ok(());
    }

    let rollups: RollupDocument = read_document(data_dir, ENTITY_ROLLUPS_FILE)?;
    print!("{}", render_status(&rollups));
    Ok(())
}

pub(crate) fn render_status(rollups: &RollupDocument) -> String {
    let mut rows: Vec<_> = rollups.iter().collect();
    rows.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));

    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:<30}{:>7}{:>7}{:>9}{:>8}  SENTIMENT",
        "ENTITY", "TOTAL", "NEWS", "FACEBOOK", "TWITTER"
    );
    for (name, rollup) in rows {
        let _ = writeln!(
            s,
            "{:<30}{:>7}{:>7}{:>9}{:>8}  {:.2}",
            name,
            rollup.total,
            rollup.news,
            rollup.facebook,
            rollup.twitter,
            rollup.sentiment.overall
        );
    }
    s
}

/// Print a markdown report of the last run's alerts and trend series.
///
/// # Errors
///
/// Returns an error if either document exists but cannot be parsed.
pub(crate) fn run_report(data_dir: &Path) -> anyhow::Result<()> {
    if missing(data_dir, ALERTS_FILE) || missing(data_dir, TRENDS_FILE) {
        println!("no run output to report; run `parlwatch-cli run` first");
        return Ok(());
    }

    let alerts: Vec<Alert> = read_document(data_dir, ALERTS_FILE)?;
    let trend: Vec<TrendPoint> = read_document(data_dir, TRENDS_FILE)?;
    let generated = Local::now().format("%Y-%m-%d %H:%M").to_string();
    print!("{}", render_report(&alerts, &trend, &generated));
    Ok(())
}

pub(crate) fn render_report(alerts: &[Alert], trend: &[TrendPoint], generated: &str) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "# Sentiment Report");
    let _ = writeln!(s);
    let _ = writeln!(s, "**Generated**: {generated}");
    let _ = writeln!(s, "**Alerts**: {}", alerts.len());
    let _ = writeln!(s);
    let _ = writeln!(s, "## Alerts");
    let _ = writeln!(s);

    if alerts.is_empty() {
        let _ = writeln!(s, "No alerts.");
    } else {
        let _ = writeln!(s, "| # | Date | Priority | Source | Title |");
        let _ = writeln!(s, "|---|------|----------|--------|-------|");
        for alert in alerts {
            let _ = writeln!(
                s,
                "| {} | {} {} | {} | {} | {} |",
                alert.id, alert.date, alert.time, alert.priority, alert.source, alert.title
            );
        }
    }

    let _ = writeln!(s);
    let _ = writeln!(s, "## Trend");
    let _ = writeln!(s);
    let _ = writeln!(s, "| Date | Overall | News | Facebook | Twitter | Top topic |");
    let _ = writeln!(s, "|------|---------|------|----------|---------|-----------|");
    for point in trend {
        let top = point
            .top_topics
            .first()
            .map_or_else(|| "-".to_string(), |t| format!("{} ({})", t.topic, t.count));
        let _ = writeln!(
            s,
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {} |",
            point.date, point.overall, point.news, point.facebook, point.twitter, top
        );
    }
    s
}
