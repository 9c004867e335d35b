//! Parser for ILR submission and reference data documents.
//!
//! Loads submissions and reference packs from YAML, JSON or TOML into the
//! strongly-typed `ilr_core` structures. Dates are ISO `YYYY-MM-DD` strings
//! in every format.
//!
//! # Example
//!
//! ```rust
//! use ilr_parser::parse_submission_yaml;
//!
//! let yaml = r#"
//! ukprn: 10003074
//! learners:
//!   - learn_ref_number: A10001
//!     date_of_birth: "1994-02-11"
//!     prior_attain: 3
//!     learning_deliveries:
//!       - learn_aim_ref: "60142861"
//!         aim_type: 3
//!         aim_seq_number: 1
//!         fund_model: 35
//!         learn_start_date: "2021-09-06"
//!         fams:
//!           - fam_type: SOF
//!             fam_code: "105"
//!     employment_statuses: []
//! "#;
//!
//! let submission = parse_submission_yaml(yaml).expect("parse submission");
//! assert_eq!(submission.ukprn, 10003074);
//! assert_eq!(submission.learners[0].learning_deliveries[0].fund_model, 35);
//! ```

use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use ilr_core::{ReferenceData, Submission};

/// Errors that can occur while loading a document.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// JSON format (.json)
    Json,
    /// TOML format (.toml)
    Toml,
}

/// Detect the document format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → [`DocumentFormat::Yaml`]
/// * `.json` → [`DocumentFormat::Json`]
/// * `.toml` → [`DocumentFormat::Toml`]
///
/// # Errors
///
/// Returns [`ParserError::InvalidExtension`] if the file has no extension,
/// or [`ParserError::UnsupportedFormat`] if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<DocumentFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DocumentFormat::Yaml),
        "json" => Ok(DocumentFormat::Json),
        "toml" => Ok(DocumentFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

fn parse_str<T: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<T> {
    match format {
        DocumentFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        DocumentFormat::Json => Ok(serde_json::from_str(content)?),
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))
        }
    }
}

fn parse_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;
    parse_str(&content, format)
}

/// Parse a submission from a YAML string.
pub fn parse_submission_yaml(content: &str) -> Result<Submission> {
    parse_str(content, DocumentFormat::Yaml)
}

/// Parse a submission from a JSON string.
pub fn parse_submission_json(content: &str) -> Result<Submission> {
    parse_str(content, DocumentFormat::Json)
}

/// Parse a submission from a TOML string.
pub fn parse_submission_toml(content: &str) -> Result<Submission> {
    parse_str(content, DocumentFormat::Toml)
}

/// Parse a submission from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use ilr_parser::parse_submission_file;
/// use std::path::Path;
///
/// let submission = parse_submission_file(Path::new("returns/r06.yml")).unwrap();
/// println!("Loaded {} learners", submission.learners.len());
/// ```
pub fn parse_submission_file(path: &Path) -> Result<Submission> {
    parse_document(path)
}

/// Parse a reference pack from a YAML string.
pub fn parse_reference_yaml(content: &str) -> Result<ReferenceData> {
    parse_str(content, DocumentFormat::Yaml)
}

/// Parse a reference pack from a JSON string.
pub fn parse_reference_json(content: &str) -> Result<ReferenceData> {
    parse_str(content, DocumentFormat::Json)
}

/// Parse a reference pack from a file with automatic format detection.
pub fn parse_reference_file(path: &Path) -> Result<ReferenceData> {
    parse_document(path)
}
