use crate::encoder::DEFAULT_MAX_LENGTH;
use crate::error::{Result, XssError};
use crate::fixed_point::DEFAULT_MAX_PASSES;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of strip rounds before the truncation fallback runs.
pub const DEFAULT_MAX_ROUNDS: usize = 32;

/// Environment variable prefix read by [`SanitizerConfig::from_env`].
pub const ENV_PREFIX: &str = "INPUTGUARD";

/// Sanitizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Maximum output length in UTF-16 code units
    pub max_length: usize,

    /// Passes allowed for each scheme and for the greedy handler stage
    pub max_passes: usize,

    /// Full strip rounds allowed before cutting at the first remaining threat
    pub max_rounds: usize,
}

impl SanitizerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_passes: DEFAULT_MAX_PASSES,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Set the maximum output length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the per-pattern pass limit
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Set the round limit
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Reject limits that would make stripping a no-op.
    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(XssError::Config("max_passes must be at least 1".to_string()));
        }
        if self.max_rounds == 0 {
            return Err(XssError::Config("max_rounds must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Parse from a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| XssError::Parse(format!("TOML parse error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from a JSON document; missing keys keep their defaults.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file, chosen by extension.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| XssError::Config("No file extension found".to_string()))?;

        let content = std::fs::read_to_string(path)?;
        match ext.as_str() {
            "toml" => Self::from_toml_str(&content),
            "json" => Self::from_json_str(&content),
            other => Err(XssError::Config(format!("Unsupported format: {}", other))),
        }
    }

    /// Read `INPUTGUARD_MAX_LENGTH`, `INPUTGUARD_MAX_PASSES` and
    /// `INPUTGUARD_MAX_ROUNDS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Same as [`from_env`](Self::from_env) over an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::new();

        for (key, value) in vars {
            let Some(name) = key
                .as_ref()
                .strip_prefix(ENV_PREFIX)
                .and_then(|rest| rest.strip_prefix('_'))
            else {
                continue;
            };

            let slot = match name {
                "MAX_LENGTH" => &mut config.max_length,
                "MAX_PASSES" => &mut config.max_passes,
                "MAX_ROUNDS" => &mut config.max_rounds,
                _ => continue,
            };
            *slot = value.as_ref().trim().parse().map_err(|_| {
                XssError::Parse(format!(
                    "{}_{} must be a non-negative integer, got {:?}",
                    ENV_PREFIX,
                    name,
                    value.as_ref()
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self::new()
    }
}
