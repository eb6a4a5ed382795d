//! Tabular corpus ingestion and snapshot export
//!
//! The loader reads a CSV with configurable column names and drops rows
//! with missing content or an unparseable rating — data shape gaps degrade
//! to skipped rows, never to a failed batch. The exporter writes the
//! row-level snapshot with every derived column flattened next to the
//! original fields.

use std::path::Path;

use chrono::NaiveDate;
use tracing::info;
use tracing::warn;

use crate::config::CorpusConfig;
use crate::engine::AnalysisSnapshot;
use crate::models::ReviewRecord;
use crate::models::SentimentLabel;
use crate::Result;
use crate::ReviewLensError;

/// Date layouts accepted by the loader, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Load and clean a review corpus from a CSV file.
pub fn load_reviews<P: AsRef<Path>>(path: P, config: &CorpusConfig) -> Result<Vec<ReviewRecord>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let headers = reader.headers()?.clone();

    let find = |name: &str| headers.iter().position(|h| h == name);

    let content_idx = find(&config.content_column).ok_or_else(|| {
        ReviewLensError::ConfigError(format!(
            "Content column '{}' not found in input file",
            config.content_column
        ))
    })?;
    let rating_idx = find(&config.rating_column).ok_or_else(|| {
        ReviewLensError::ConfigError(format!(
            "Rating column '{}' not found in input file",
            config.rating_column
        ))
    })?;
    let product_idx = find(&config.product_column);
    let date_idx = find(&config.date_column);

    if product_idx.is_none() {
        warn!(
            "Product column '{}' not found; product categories will all default",
            config.product_column
        );
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in reader.records() {
        let row = row?;

        let content = row.get(content_idx).unwrap_or("").trim();
        if content.is_empty() {
            skipped += 1;
            continue;
        }
        let Some(rating) = row.get(rating_idx).and_then(|raw| raw.trim().parse::<f64>().ok())
        else {
            skipped += 1;
            continue;
        };

        let product_id = product_idx
            .and_then(|idx| row.get(idx))
            .unwrap_or("")
            .trim()
            .to_string();
        let date = date_idx
            .and_then(|idx| row.get(idx))
            .and_then(|raw| parse_date(raw.trim()));

        records.push(ReviewRecord {
            content: content.to_string(),
            rating,
            product_id,
            date,
        });
    }

    info!(
        "Loaded {} reviews ({} rows skipped for missing content/rating)",
        records.len(),
        skipped
    );
    Ok(records)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    // Timestamps like "2024-08-07 13:22:01" reduce to their date part
    let date_part = raw.split_whitespace().next().unwrap_or(raw);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Write the row-level snapshot CSV: original fields plus every derived
/// column, one review per row.
pub fn export_snapshot<P: AsRef<Path>>(
    snapshot: &AnalysisSnapshot,
    path: P,
    config: &CorpusConfig,
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    let mut header = vec![
        config.content_column.clone(),
        config.rating_column.clone(),
        config.product_column.clone(),
        config.date_column.clone(),
        "Processed_Text".to_string(),
        "Sentiment".to_string(),
        "Sentiment_Category".to_string(),
    ];
    for feature in snapshot.ruleset.feature_names() {
        header.push(format!("feature_{feature}"));
        header.push(format!("sentiment_score_{feature}"));
        header.push(format!("sentiment_{feature}"));
    }
    header.extend(
        [
            "User_Role",
            "Gender",
            "Age_Group",
            "Usage",
            "Motivation",
            "Product_Category",
        ]
        .map(ToString::to_string),
    );
    writer.write_record(&header)?;

    for review in &snapshot.reviews {
        let mut row = vec![
            review.record.content.clone(),
            format_number(review.record.rating),
            review.record.product_id.clone(),
            review
                .record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            review.normalized_text.clone(),
            format_number(review.overall_polarity),
            sentiment_category(review.overall_sentiment).to_string(),
        ];
        for feature_index in 0..snapshot.ruleset.len() {
            row.push(if review.mentions[feature_index] { "1" } else { "0" }.to_string());
            row.push(format_number(review.scores[feature_index]));
            row.push(review.labels[feature_index].as_i8().to_string());
        }
        row.push(review.dimensions.user_role.clone());
        row.push(review.dimensions.gender.clone());
        row.push(review.dimensions.age_group.clone());
        row.push(review.dimensions.usage.clone());
        row.push(review.dimensions.motivation.clone());
        row.push(review.dimensions.product_category.clone());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    info!(
        "Snapshot with {} rows written to {}",
        snapshot.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn sentiment_category(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "Positive",
        SentimentLabel::Negative => "Negative",
        SentimentLabel::Neutral => "Neutral",
    }
}

/// Trim trailing float noise: whole numbers render bare.
fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
