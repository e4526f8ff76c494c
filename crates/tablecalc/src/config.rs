//! Runtime configuration: lookup policy and result formatting.
//!
//! Values come from an optional TOML file; command-line flags override them.
//!
//! ```toml
//! policy = "lenient"
//! precision = 6
//! format = "json"
//! ```

use std::path::Path;

use serde::Deserialize;

/// How out-of-range numeric queries and unknown text keys are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Range errors and text-key errors abort the evaluation.
    #[default]
    Strict,
    /// Numeric queries clamp to the table boundary; unknown text keys pass through.
    Lenient,
}

impl Policy {
    /// Lowercase policy name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How results are written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `r = …`, `k = …`, `Variant(r, k) = …` lines.
    #[default]
    Text,
    /// One JSON object per evaluation.
    Json,
}

/// Default number of decimals in text output.
pub const DEFAULT_PRECISION: u8 = 4;

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Lookup policy.
    pub policy: Policy,
    /// Fixed-point decimals for text output. At most 255.
    pub precision: u8,
    /// Output format.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: Policy::default(),
            precision: DEFAULT_PRECISION,
            format: OutputFormat::default(),
        }
    }
}

/// Failure loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file is not valid configuration TOML.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys or
    /// unknown enum values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.policy, Policy::Strict);
        assert_eq!(config.precision, 4);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").ok(), Some(Config::default()));
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            "policy = \"lenient\"\nprecision = 6\nformat = \"json\"\n",
        );
        assert_eq!(
            config.ok(),
            Some(Config {
                policy: Policy::Lenient,
                precision: 6,
                format: OutputFormat::Json,
            })
        );
    }

    #[test]
    fn test_rejects_unknown_policy_and_keys() {
        assert!(Config::from_toml_str("policy = \"loose\"").is_err());
        assert!(Config::from_toml_str("strict = true").is_err());
    }

    #[test]
    fn test_rejects_out_of_range_precision() {
        assert!(matches!(
            Config::from_toml_str("precision = 70000"),
            Err(ConfigError::Parse(_))
        ));
        assert!(Config::from_toml_str("precision = -1").is_err());
        assert_eq!(
            Config::from_toml_str("precision = 255").map(|c| c.precision).ok(),
            Some(255)
        );
    }

    #[test]
    fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!(
            "tablecalc-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "policy = \"lenient\"\nprecision = 2\n")?;
        let loaded = Config::load(&path);
        std::fs::remove_file(&path)?;

        let config = loaded?;
        assert_eq!(config.policy, Policy::Lenient);
        assert_eq!(config.precision, 2);
        assert_eq!(config.format, OutputFormat::Text);
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/tablecalc.toml"));
        assert!(matches!(err, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Strict.to_string(), "strict");
        assert_eq!(Policy::Lenient.as_str(), "lenient");
    }
}
