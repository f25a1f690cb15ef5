//! Run configuration, loaded from YAML and overridden by the CLI
use crate::error::{Result, SolidError};
use crate::example::{Principle, Variant};
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Seed for coin-flip examples; unseeded runs use OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Principles to run (empty means all)
    #[serde(default)]
    pub principles: Vec<Principle>,

    /// Example ids to run (empty means all of the selected principles)
    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_variants() -> Vec<Variant> {
    Variant::BOTH.to_vec()
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            principles: Vec::new(),
            examples: Vec::new(),
            variants: default_variants(),
            format: OutputFormat::default(),
        }
    }
}

impl RunConfig {
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SolidError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&raw)?;
        tracing::debug!(path = %path.display(), ?config, "loaded run config");
        Ok(config)
    }

    pub fn includes(&self, principle: Principle) -> bool {
        self.principles.is_empty() || self.principles.contains(&principle)
    }

    /// Variants in run order, legacy before refactored, without duplicates.
    pub fn ordered_variants(&self) -> Vec<Variant> {
        let mut variants = if self.variants.is_empty() {
            default_variants()
        } else {
            self.variants.clone()
        };
        variants.sort();
        variants.dedup();
        variants
    }
}
