// SPDX-License-Identifier: PMPL-1.0-or-later

//! Formatter configuration and optional config-file loading.

use crate::errors::{FormatError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_ROOT: &str = "output";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Parent of the per-locale directories holding inputs and outputs.
    pub output_root: PathBuf,
    /// Suppress progress notices.
    pub quiet: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            quiet: false,
        }
    }
}

impl FormatterConfig {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            ..Self::default()
        }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Directory for one locale code under the output root.
    pub fn locale_dir(&self, code: &str) -> PathBuf {
        self.output_root.join(code)
    }
}

/// On-disk settings; every field is optional and falls back to the defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub output_root: Option<PathBuf>,
    #[serde(default)]
    pub quiet: Option<bool>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default, rename = "type")]
    pub record_type: Option<String>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FormatError::from_io(path, e))?;
        // Extension-based dispatch keeps JSON and YAML parsing unambiguous.
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| FormatError::malformed(path, e))
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|e| FormatError::malformed(path, e))
            }
            _ => Err(FormatError::Configuration(format!(
                "unsupported config file extension for {}",
                path.display()
            ))),
        }
    }

    /// Settings from this file layered over the defaults.
    pub fn into_config(self) -> FormatterConfig {
        let defaults = FormatterConfig::default();
        FormatterConfig {
            output_root: self.output_root.unwrap_or(defaults.output_root),
            quiet: self.quiet.unwrap_or(defaults.quiet),
        }
    }
}
