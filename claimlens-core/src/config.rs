//! Configuration system for Claimlens.
//!
//! Uses `figment` for layered configuration: defaults -> user config -> workspace config ->
//! explicit file -> environment. Every heuristic constant of the verification pipeline
//! lives here so it can be tuned per deployment and regression-tested on its own.

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Top-level configuration for claim verification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub support: SupportConfig,
}

/// How summary prose is broken into claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Fragments with fewer words than this are merged into a neighbouring claim.
    #[serde(default = "default_min_claim_words")]
    pub min_claim_words: usize,
    /// Merged claims without a number need at least this many words to survive.
    #[serde(default = "default_min_standalone_words")]
    pub min_standalone_words: usize,
    /// Maximum number of claims kept per block of text.
    #[serde(default = "default_max_claims")]
    pub max_claims: usize,
    /// Leading words that mark a fragment as continuing the previous claim.
    #[serde(default = "default_continuation_words")]
    pub continuation_words: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            min_claim_words: default_min_claim_words(),
            min_standalone_words: default_min_standalone_words(),
            max_claims: default_max_claims(),
            continuation_words: default_continuation_words(),
        }
    }
}

fn default_min_claim_words() -> usize {
    5
}

fn default_min_standalone_words() -> usize {
    3
}

fn default_max_claims() -> usize {
    6
}

fn default_continuation_words() -> Vec<String> {
    ["and", "or", "but", "also", "with"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

/// Weights for the claim/quote similarity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the claim-centric overlap.
    #[serde(default = "default_overlap_weight")]
    pub overlap_weight: f64,
    /// Weight of the symmetric Jaccard similarity.
    #[serde(default = "default_jaccard_weight")]
    pub jaccard_weight: f64,
    /// Added when the claim and quote share a verbatim number.
    #[serde(default = "default_number_bonus")]
    pub number_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            overlap_weight: default_overlap_weight(),
            jaccard_weight: default_jaccard_weight(),
            number_bonus: default_number_bonus(),
        }
    }
}

fn default_overlap_weight() -> f64 {
    0.6
}

fn default_jaccard_weight() -> f64 {
    0.4
}

fn default_number_bonus() -> f64 {
    0.1
}

/// Decision rule for marking a claim as supported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportConfig {
    /// Minimum score for a supported claim. Deployment default, callers of the
    /// annotator pass their own.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Claims with at most this many content tokens count as short.
    #[serde(default = "default_short_claim_max_tokens")]
    pub short_claim_max_tokens: usize,
    /// Required overlap for short claims.
    #[serde(default = "default_short_claim_min_overlap")]
    pub short_claim_min_overlap: f64,
    /// Required overlap for longer claims.
    #[serde(default = "default_long_claim_min_overlap")]
    pub long_claim_min_overlap: f64,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            short_claim_max_tokens: default_short_claim_max_tokens(),
            short_claim_min_overlap: default_short_claim_min_overlap(),
            long_claim_min_overlap: default_long_claim_min_overlap(),
        }
    }
}

impl SupportConfig {
    /// Overlap a claim with `token_count` content tokens must reach.
    pub fn min_overlap_for(&self, token_count: usize) -> f64 {
        if token_count <= self.short_claim_max_tokens {
            self.short_claim_min_overlap
        } else {
            self.long_claim_min_overlap
        }
    }
}

fn default_threshold() -> f64 {
    0.3
}

fn default_short_claim_max_tokens() -> usize {
    4
}

fn default_short_claim_min_overlap() -> f64 {
    0.6
}

fn default_long_claim_min_overlap() -> f64 {
    0.35
}

impl VerifierConfig {
    /// Check that every setting is within its meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.splitter.max_claims == 0 {
            return Err(ConfigError::invalid(
                "splitter.max_claims",
                "must be at least 1",
            ));
        }
        if self.splitter.min_standalone_words == 0 {
            return Err(ConfigError::invalid(
                "splitter.min_standalone_words",
                "must be at least 1",
            ));
        }

        let unit_fields = [
            ("scoring.overlap_weight", self.scoring.overlap_weight),
            ("scoring.jaccard_weight", self.scoring.jaccard_weight),
            ("scoring.number_bonus", self.scoring.number_bonus),
            ("support.threshold", self.support.threshold),
            (
                "support.short_claim_min_overlap",
                self.support.short_claim_min_overlap,
            ),
            (
                "support.long_claim_min_overlap",
                self.support.long_claim_min_overlap,
            ),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be within [0, 1], got {}", value),
                ));
            }
        }
        Ok(())
    }
}

/// Load configuration from layered sources.
///
/// Priority (highest to lowest):
/// 1. Environment variables (`CLAIMLENS_SCORING__NUMBER_BONUS`, ...)
/// 2. Explicit config file (must exist when given)
/// 3. Workspace-local config (`.claimlens/config.toml`)
/// 4. User config (`~/.config/claimlens/config.toml`)
/// 5. Built-in defaults
pub fn load_config(
    workspace: Option<&Path>,
    explicit: Option<&Path>,
) -> Result<VerifierConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(VerifierConfig::default()));

    if let Some(dirs) = directories::ProjectDirs::from("dev", "claimlens", "claimlens") {
        let user_config = dirs.config_dir().join("config.toml");
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }
    }

    if let Some(ws) = workspace {
        let ws_config = ws.join(".claimlens").join("config.toml");
        if ws_config.exists() {
            figment = figment.merge(Toml::file(&ws_config));
        }
    }

    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("CLAIMLENS_").split("__"));

    let config: VerifierConfig = figment.extract().map_err(Box::new)?;
    config.validate()?;
    tracing::debug!(
        threshold = config.support.threshold,
        max_claims = config.splitter.max_claims,
        "Loaded verifier configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VerifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.splitter.max_claims, 6);
        assert_eq!(config.splitter.min_claim_words, 5);
        assert_eq!(config.scoring.overlap_weight, 0.6);
        assert_eq!(config.scoring.jaccard_weight, 0.4);
        assert_eq!(config.scoring.number_bonus, 0.1);
        assert_eq!(config.support.short_claim_min_overlap, 0.6);
        assert_eq!(config.support.long_claim_min_overlap, 0.35);
    }

    #[test]
    fn test_min_overlap_for_short_and_long_claims() {
        let support = SupportConfig::default();
        assert_eq!(support.min_overlap_for(0), 0.6);
        assert_eq!(support.min_overlap_for(4), 0.6);
        assert_eq!(support.min_overlap_for(5), 0.35);
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let mut config = VerifierConfig::default();
        config.support.threshold = 1.5;
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "support.threshold"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_claim_cap() {
        let mut config = VerifierConfig::default();
        config.splitter.max_claims = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: VerifierConfig = toml::from_str(
            r#"
            [scoring]
            number_bonus = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.scoring.number_bonus, 0.2);
        assert_eq!(config.scoring.overlap_weight, 0.6);
        assert_eq!(config.splitter, SplitterConfig::default());
    }

    #[test]
    fn test_load_workspace_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".claimlens");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[splitter]\nmax_claims = 3\n",
        )
        .unwrap();

        let config = load_config(Some(dir.path()), None).unwrap();
        assert_eq!(config.splitter.max_claims, 3);
        assert_eq!(config.splitter.min_standalone_words, 3);
    }

    #[test]
    fn test_explicit_file_overrides_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".claimlens");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), "[support]\nthreshold = 0.4\n").unwrap();
        let explicit = dir.path().join("tuned.toml");
        std::fs::write(&explicit, "[support]\nthreshold = 0.55\n").unwrap();

        let config = load_config(Some(dir.path()), Some(&explicit)).unwrap();
        assert_eq!(config.support.threshold, 0.55);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = load_config(None, Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_file_value_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("bad.toml");
        std::fs::write(&explicit, "[scoring]\njaccard_weight = -0.5\n").unwrap();
        let err = load_config(None, Some(&explicit)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
