//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, TillscanError};

/// Main configuration for the tillscan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TillscanConfig {
    /// Receipt parsing configuration.
    pub extraction: ExtractionConfig,

    /// Branch identity verification configuration.
    pub matching: MatchingConfig,
}

impl Default for TillscanConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            matching: MatchingConfig::default(),
        }
    }
}

/// Receipt parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Parse the category/item breakdown sections.
    pub parse_categories: bool,

    /// Extractions below this confidence are flagged for manual review.
    pub low_confidence_threshold: f32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            parse_categories: true,
            low_confidence_threshold: 0.4,
        }
    }
}

/// Branch identity verification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Run identity verification when a canonical branch name is supplied.
    pub verify_branch: bool,

    /// A receipt with no readable branch name passes verification.
    /// Verification failure warns and never blocks, so this only controls
    /// whether the missing-name case is surfaced as a mismatch.
    pub pass_on_missing_candidate: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            verify_branch: true,
            pass_on_missing_candidate: true,
        }
    }
}

impl TillscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| TillscanError::Config(format!("{}: {e}", path.display())))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| TillscanError::Config(e.to_string()))?;
        Ok(std::fs::write(path, content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TillscanConfig::default();
        assert!(config.extraction.parse_categories);
        assert!(config.matching.verify_branch);
        assert!(config.matching.pass_on_missing_candidate);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: TillscanConfig =
            serde_json::from_str(r#"{"matching": {"verify_branch": false}}"#).unwrap();
        assert!(!config.matching.verify_branch);
        assert!(config.matching.pass_on_missing_candidate);
        assert!(config.extraction.parse_categories);
    }
}
