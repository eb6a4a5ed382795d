//! CLI command handlers
//!
//! This module contains all the command handlers for the reviewlens CLI

use tracing::info;

use crate::cli::output::*;
use crate::corpus;
use crate::diagnostics;
use crate::engine::AnalysisEngine;
use crate::rules::profiles::default_profiles;
use crate::AppConfig;
use crate::Result;

/// Handle the analyze command: load, derive, report, export.
pub fn handle_analyze_command(
    config: &AppConfig,
    input: &str,
    profile: Option<String>,
    snapshot_path: Option<String>,
    report_path: Option<String>,
) -> Result<()> {
    let mut config = config.clone();
    if let Some(profile) = profile {
        config.analysis.profile = profile;
    }
    let snapshot_path = snapshot_path.unwrap_or_else(|| config.snapshot_path().to_string());
    let report_path = report_path.unwrap_or_else(|| config.report_path().to_string());

    println!("🔍 Analyzing reviews from {input}");
    info!("Using profile '{}'", config.profile());

    let records = corpus::load_reviews(input, &config.corpus)?;
    let engine = AnalysisEngine::from_config(&config)?;
    let snapshot = engine.run(records)?;

    let bundle = diagnostics::build_report_bundle(&snapshot, config.diagnostic_dimensions());

    corpus::export_snapshot(&snapshot, &snapshot_path, &config.corpus)?;
    let report_file = std::fs::File::create(&report_path)?;
    serde_json::to_writer_pretty(report_file, &bundle)?;

    print_analysis_summary(&snapshot, &bundle, &snapshot_path, &report_path);
    Ok(())
}

/// Handle the profiles command
pub fn handle_profiles_command() -> Result<()> {
    let profiles = default_profiles();
    print_profile_list(profiles.names());
    Ok(())
}

/// Handle the features command
pub fn handle_features_command(config: &AppConfig, profile: Option<String>) -> Result<()> {
    let profile = profile.unwrap_or_else(|| config.profile().to_string());
    let ruleset = crate::rules::build_ruleset(
        &crate::rules::taxonomy::base_ruleset(),
        &default_profiles(),
        &profile,
    );
    print_feature_list(&profile, &ruleset);
    Ok(())
}

/// Handle the config command
pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
