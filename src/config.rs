//! Run configuration.
//!
//! Every knob of a run is a named field here; a JSON config file fills
//! some of them and CLI flags fill or override the rest. Validation
//! runs on the merged result, not at load time, so a partial file plus
//! flags is a perfectly good configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ReviewError};

/// Everything one review run needs to know.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewConfig {
    /// Primary set code
    #[serde(default)]
    pub set_code: String,
    /// Bonus sheet set code, reviewed at the end of day two
    #[serde(default)]
    pub bonus_set_code: Option<String>,
    /// Raw Scryfall queries that fill the card pool
    #[serde(default)]
    pub scryfall_queries: Vec<String>,
    /// Whole expansions fetched into the pool
    #[serde(default)]
    pub expansions: Vec<String>,
    /// Reviewer names; the grade sheet gets one column each
    #[serde(default)]
    pub reviewers: Vec<String>,
    /// Where the documents land
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ReviewConfig {
    /// Read a config file. The result may still be incomplete since
    /// flags can fill the gaps; call [`validate`](Self::validate) on the
    /// merged configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Check that the merged configuration can actually run.
    pub fn validate(&self) -> Result<()> {
        if self.set_code.trim().is_empty() {
            return Err(ReviewError::Config(
                "a primary set code is required".to_string(),
            ));
        }
        if self.scryfall_queries.is_empty() && self.expansions.is_empty() {
            return Err(ReviewError::Config(
                "at least one Scryfall query or expansion is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Pool queries to use when the file and flags name none: every card
    /// of the primary set, plus every card of the bonus sheet.
    pub fn default_queries(&self) -> Vec<String> {
        let mut queries = vec![format!("set:{} unique:cards", self.set_code.to_lowercase())];
        if let Some(bonus) = &self.bonus_set_code {
            queries.push(format!("set:{} unique:cards", bonus.to_lowercase()));
        }
        queries
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("Generated Documents"))
    }
}
