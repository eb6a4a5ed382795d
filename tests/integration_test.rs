use std::io::Write;

use reviewlens::config::AppConfig;
use reviewlens::corpus;
use reviewlens::diagnostics;
use reviewlens::engine::AnalysisEngine;
use reviewlens::models::SentimentLabel;
use reviewlens::Result;

fn write_corpus_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "Content,Rating,Asin,Date\n\
         \"Writes so smooth, love these pens.\",5,B01,2024-01-10\n\
         \"Smooth ink flow and nice saturation.\",5,B01,2024-01-11\n\
         \"Very smooth marker for journaling.\",4,B02,2024-02-01\n\
         \"The tip went dry after a week.\",2,B02,2024-02-15\n\
         \"Arrived dry right out of the box.\",1,B03,2024-03-05\n\
         \"Great customer service replaced my set.\",4,B03,2024-03-20\n\
         \"My daughter uses them for school notes.\",5,B01,2024-04-02\n\
         \"Colors are dull and washed out.\",2,B02,2024-04-18\n\
         \"Decent pens for the price.\",4,B03,2024-05-07\n\
         \"Too expensive for what you get.\",2,B01,2024-05-21\n\
         ,4,B01,2024-06-01\n\
         Missing rating row,,B02,2024-06-02\n"
    )
    .unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_full_pipeline_from_csv_to_reports() -> Result<()> {
    let input = write_corpus_csv();
    let config = AppConfig::default();

    // Load and clean: two defective rows must be dropped, not fatal
    let records = corpus::load_reviews(input.path(), &config.corpus)?;
    assert_eq!(records.len(), 10);

    // Derive all columns and seal the snapshot
    let engine = AnalysisEngine::from_config(&config)?;
    let snapshot = engine.run(records)?;
    assert_eq!(snapshot.len(), 10);

    // Fluency: three smooth reviews positive, two dry reviews negative
    let fluency = snapshot.ruleset.feature_index("流畅性").unwrap();
    let positive = snapshot
        .reviews
        .iter()
        .filter(|review| review.labels[fluency] == SentimentLabel::Positive)
        .count();
    let negative = snapshot
        .reviews
        .iter()
        .filter(|review| review.labels[fluency] == SentimentLabel::Negative)
        .count();
    assert_eq!(positive, 3);
    assert_eq!(negative, 2);

    // Mention implies eligibility only
    for review in &snapshot.reviews {
        for feature_index in 0..snapshot.ruleset.len() {
            if !review.mentions[feature_index] {
                assert!(review.scores[feature_index].abs() < f64::EPSILON);
                assert_eq!(review.labels[feature_index], SentimentLabel::Neutral);
            }
        }
    }

    // Reports build from the sealed snapshot
    let bundle = diagnostics::build_report_bundle(&snapshot, config.diagnostic_dimensions());
    assert_eq!(bundle.overview.total_reviews, 10);
    assert!(!bundle.periods.is_empty());
    assert_eq!(bundle.periods[0].key, "_ALL_");

    // The bundle serializes to JSON for the rendering layer
    let rendered = serde_json::to_string(&bundle)?;
    assert!(rendered.contains("feature_drill_down"));

    // Row-level snapshot CSV exports with all derived columns
    let output = tempfile::NamedTempFile::new().unwrap();
    corpus::export_snapshot(&snapshot, output.path(), &config.corpus)?;
    let mut reader = csv::Reader::from_path(output.path()).unwrap();
    assert_eq!(reader.records().count(), 10);

    Ok(())
}

#[test]
fn test_profile_selection_is_total() -> Result<()> {
    let input = write_corpus_csv();
    let mut config = AppConfig::default();
    config.analysis.profile = "画像不存在".to_string();

    // An unknown profile falls back to the base rules instead of failing
    let records = corpus::load_reviews(input.path(), &config.corpus)?;
    let engine = AnalysisEngine::from_config(&config)?;
    let snapshot = engine.run(records)?;
    assert!(snapshot.ruleset.feature("流畅性").is_some());
    Ok(())
}
