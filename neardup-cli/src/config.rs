//! Configuration loaded from a TOML file.
//!
//! ```toml
//! [features]
//! seed = 42
//! lowercase = false
//!
//! [normalize]
//! regions = ["head", "script", "style", "ad_banner", "header", "footer"]
//!
//! [output]
//! directory = "output"
//! timestamped = true
//!
//! [logging]
//! level = "info"
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use neardup::{Fingerprinter, Region};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub features: FeaturesConfig,
    pub normalize: NormalizeConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FeaturesConfig {
    pub seed: Option<u64>,
    pub lowercase: bool,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub regions: Vec<Region>,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            regions: Region::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory persisting the normalized text. Nothing is written if `None`.
    pub directory: Option<PathBuf>,
    /// Nests a directory named after the current time.
    pub timestamped: bool,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl Config {
    pub fn load<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn fingerprinter(&self) -> Fingerprinter {
        Fingerprinter::new(self.features.seed)
            .lowercase(self.features.lowercase)
            .regions(self.normalize.regions.iter().copied())
    }
}
