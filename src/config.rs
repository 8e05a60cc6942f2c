use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, DEFAULT_MAX_RESOLVE_DEPTH, DEFAULT_MIN_SUBSTRING_LEN,
    DEFAULT_SYNTHETIC_ID_OFFSET,
};
use crate::error::{NormalizerError, Result};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NormalizerConfig {
    pub resolver: ResolverConfig,
    pub ids: IdConfig,
    pub logging: LoggingConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Deepest nested object level searched (root = 0)
    pub max_depth: usize,
    /// Shortest string allowed on the contained side of a substring match
    pub min_substring_len: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_RESOLVE_DEPTH,
            min_substring_len: DEFAULT_MIN_SUBSTRING_LEN,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdConfig {
    pub synthetic_offset: i64,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            synthetic_offset: DEFAULT_SYNTHETIC_ID_OFFSET,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_prefix: "ward_normalizer.log".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Prometheus listener address; metrics stay in-process when unset
    pub listen_addr: Option<String>,
}

impl NormalizerConfig {
    /// Load configuration from an explicit path, the `WARD_NORMALIZER_CONFIG`
    /// variable, or `ward_normalizer.toml` in the working directory.
    ///
    /// An explicitly named file must exist. When nothing is named and the
    /// default file is missing, built-in defaults are returned.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        match named {
            Some(path) => Self::from_file(&path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::from_file(fallback)
                } else {
                    debug!("No configuration file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: NormalizerConfig = toml::from_str(content)?;
        if config.ids.synthetic_offset < 0 {
            return Err(NormalizerError::Config(
                "ids.synthetic_offset must not be negative".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = NormalizerConfig::from_toml("").unwrap();
        assert_eq!(config, NormalizerConfig::default());
        assert_eq!(config.resolver.max_depth, 3);
        assert_eq!(config.ids.synthetic_offset, 1_000_000);
        assert!(config.metrics.listen_addr.is_none());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = NormalizerConfig::from_toml(
            r#"
            [resolver]
            max_depth = 5

            [metrics]
            listen_addr = "127.0.0.1:9899"
            "#,
        )
        .unwrap();

        assert_eq!(config.resolver.max_depth, 5);
        assert_eq!(config.resolver.min_substring_len, 3);
        assert_eq!(config.metrics.listen_addr.as_deref(), Some("127.0.0.1:9899"));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_negative_offset_is_rejected() {
        let result = NormalizerConfig::from_toml("[ids]\nsynthetic_offset = -5\n");
        assert!(matches!(result, Err(NormalizerError::Config(_))));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[ids]\nsynthetic_offset = 5000").unwrap();

        let config = NormalizerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.ids.synthetic_offset, 5000);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = NormalizerConfig::load(Some(&missing));
        assert!(matches!(result, Err(NormalizerError::Config(_))));
    }
}
