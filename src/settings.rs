// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub output: String,
    pub ignore: Vec<String>,
    pub case_sensitive: bool,
    pub concurrency: Option<usize>,
    pub hash_limit: String,
}

impl Settings {
    /// Loads embedded defaults overridden by the given configuration file, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));
        if let Some(path) = path {
            log::debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}

#[cfg(test)]
mod tests;
