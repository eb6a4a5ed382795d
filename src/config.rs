use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Column holding the free-text review body
    pub content_column: String,
    /// Column holding the numeric star rating
    pub rating_column: String,
    /// Column holding the product identifier (e.g. an ASIN)
    pub product_column: String,
    /// Column holding the review date, if present
    pub date_column: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub backtrace: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Taxonomy profile applied on top of the base rules
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Dimensions that receive per-segment drill-down reports
    #[serde(default = "default_diagnostic_dimensions")]
    pub diagnostic_dimensions: Vec<String>,
    /// Product id → category series mapping used for product classification
    #[serde(default)]
    pub category_mapping: Vec<CategoryMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryMapping {
    pub product_id: String,
    pub category: String,
}

fn default_profile() -> String {
    "standard".to_string()
}

fn default_diagnostic_dimensions() -> Vec<String> {
    vec![
        "User_Role".to_string(),
        "Gender".to_string(),
        "Age_Group".to_string(),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Row-level snapshot CSV destination
    pub snapshot_path: String,
    /// Structured report bundle (JSON) destination
    pub report_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub corpus: CorpusConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            diagnostic_dimensions: default_diagnostic_dimensions(),
            category_mapping: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(crate::ReviewLensError::Io)?;

        let config: AppConfig =
            toml::from_str(&content).map_err(crate::ReviewLensError::TomlParsing)?;

        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            println!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::ReviewLensError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Get the content column name
    pub fn content_column(&self) -> &str {
        &self.corpus.content_column
    }

    /// Get the rating column name
    pub fn rating_column(&self) -> &str {
        &self.corpus.rating_column
    }

    /// Get the product id column name
    pub fn product_column(&self) -> &str {
        &self.corpus.product_column
    }

    /// Get the date column name
    pub fn date_column(&self) -> &str {
        &self.corpus.date_column
    }

    /// Get the selected taxonomy profile
    pub fn profile(&self) -> &str {
        &self.analysis.profile
    }

    /// Get the dimensions configured for segment drill-downs
    pub fn diagnostic_dimensions(&self) -> &[String] {
        &self.analysis.diagnostic_dimensions
    }

    /// Get the snapshot CSV output path
    pub fn snapshot_path(&self) -> &str {
        &self.output.snapshot_path
    }

    /// Get the report bundle output path
    pub fn report_path(&self) -> &str {
        &self.output.report_path
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus: CorpusConfig {
                content_column: "Content".to_string(),
                rating_column: "Rating".to_string(),
                product_column: "Asin".to_string(),
                date_column: "Date".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                backtrace: true,
            },
            analysis: AnalysisConfig::default(),
            output: OutputConfig {
                snapshot_path: "processed_data.csv".to_string(),
                report_path: "reports.json".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_profile() {
        let config = AppConfig::default();
        assert_eq!(config.profile(), "standard");
        assert_eq!(config.content_column(), "Content");
        assert_eq!(config.rating_column(), "Rating");
    }

    #[test]
    fn test_default_diagnostic_dimensions() {
        let config = AppConfig::default();
        assert_eq!(
            config.diagnostic_dimensions(),
            &["User_Role", "Gender", "Age_Group"]
        );
    }

    // ====== TOML Parsing Tests ======

    #[test]
    fn test_parse_minimal_toml() {
        let toml_str = r#"
            [corpus]
            content_column = "Body"
            rating_column = "Stars"
            product_column = "Sku"
            date_column = "PostedAt"

            [logging]
            level = "debug"
            backtrace = false

            [output]
            snapshot_path = "out.csv"
            report_path = "out.json"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.content_column(), "Body");
        assert_eq!(config.logging.level, "debug");
        // the analysis section is optional and falls back to defaults
        assert_eq!(config.profile(), "standard");
        assert!(config.analysis.category_mapping.is_empty());
    }

    #[test]
    fn test_parse_category_mapping() {
        let toml_str = r#"
            [corpus]
            content_column = "Content"
            rating_column = "Rating"
            product_column = "Asin"
            date_column = "Date"

            [logging]
            level = "info"
            backtrace = true

            [analysis]
            profile = "霓虹笔专属画像"
            diagnostic_dimensions = ["User_Role"]

            [[analysis.category_mapping]]
            product_id = "B07C1BRS5N"
            category = "柔色系列"

            [output]
            snapshot_path = "snapshot.csv"
            report_path = "reports.json"
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.profile(), "霓虹笔专属画像");
        assert_eq!(config.analysis.category_mapping.len(), 1);
        assert_eq!(config.analysis.category_mapping[0].category, "柔色系列");
    }

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.content_column(), config.content_column());
        assert_eq!(parsed.snapshot_path(), config.snapshot_path());
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let result = AppConfig::from_file("/nonexistent/config.toml");
        assert!(result.is_err());
    }
}
