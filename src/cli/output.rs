//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the reviewlens CLI

use crate::diagnostics::ReportBundle;
use crate::engine::AnalysisSnapshot;
use crate::rules::RuleSet;
use crate::AppConfig;

/// Print the post-analysis summary
pub fn print_analysis_summary(
    snapshot: &AnalysisSnapshot,
    bundle: &ReportBundle,
    snapshot_path: &str,
    report_path: &str,
) {
    println!("✅ Analysis complete");
    println!("  - Reviews analyzed: {}", snapshot.len());
    println!("  - Features tracked: {}", snapshot.ruleset.len());
    println!("  - Average rating: {}", bundle.overview.avg_rating);
    println!("  - Positive rate: {}", bundle.overview.positive_rate);
    println!("  - Reporting periods: {}", bundle.periods.len());
    for period in &bundle.periods {
        println!(
            "      {} | {} feature reports, {} segment reports",
            period.label,
            period.feature_reports.len(),
            period.segment_reports.len()
        );
    }
    println!("  - Snapshot CSV: {snapshot_path}");
    println!("  - Report bundle: {report_path}");
}

/// Print the available profile names
pub fn print_profile_list<'a>(names: impl Iterator<Item = &'a str>) {
    println!("📋 Available profiles:");
    for name in names {
        println!("  - {name}");
    }
    println!("(any other name falls back to the base rules)");
}

/// Print the effective taxonomy for a profile
pub fn print_feature_list(profile: &str, ruleset: &RuleSet) {
    println!("📋 Effective taxonomy for profile '{profile}':");
    for feature in &ruleset.features {
        let keyword_count: usize = feature
            .sub_topics
            .iter()
            .map(|sub_topic| sub_topic.keywords.len())
            .sum();
        println!(
            "  - {} | {} sub-topics, {} keywords",
            feature.name,
            feature.sub_topics.len(),
            keyword_count
        );
        for sub_topic in &feature.sub_topics {
            println!(
                "      {} ({} keywords)",
                sub_topic.name,
                sub_topic.keywords.len()
            );
        }
    }
}

/// Print the current configuration as TOML
pub fn print_config(config: &AppConfig) {
    println!("⚙️  Current configuration:");
    match toml::to_string_pretty(config) {
        Ok(rendered) => println!("{rendered}"),
        Err(error) => println!("Failed to render config: {error}"),
    }
}
