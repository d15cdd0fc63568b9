//! Tool configuration
//!
//! Read from a YAML file (`lufa-tokens.yaml` by default):
//!
//! ```yaml
//! css_files:
//!   - dist/tokens.css
//! token_dirs:
//!   - tokens
//! themable_types: [color, shadow, gradient]
//! log_level: info
//! max_failures_per_category: 5
//! strict: false
//! ```
//!
//! Relative paths are resolved against the directory holding the file.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{IoContext, TokensError, TokensResult};
use crate::tokens::themable::ThemableRules;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "lufa-tokens.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokensConfig {
    /// Generated stylesheets to validate
    pub css_files: Vec<PathBuf>,
    /// Directories of JSON token files
    pub token_dirs: Vec<PathBuf>,
    /// Token types expected to be themable
    pub themable_types: Vec<String>,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Findings listed per category in the summary
    pub max_failures_per_category: usize,
    /// Treat warnings as failures
    pub strict: bool,
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            css_files: Vec::new(),
            token_dirs: Vec::new(),
            themable_types: ThemableRules::default().themable_types,
            log_level: "info".to_string(),
            max_failures_per_category: 5,
            strict: false,
        }
    }
}

impl TokensConfig {
    /// Parse YAML content; relative paths are joined onto `base_dir`.
    pub fn from_yaml(content: &str, source: &Path, base_dir: &Path) -> TokensResult<Self> {
        let mut config: TokensConfig = serde_yaml::from_str(content).map_err(|e| TokensError::Yaml {
            file: source.to_path_buf(),
            source: e,
        })?;
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub async fn load(path: &Path) -> TokensResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_io_context(&format!("Failed to read config file {}", path.display()))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_yaml(&content, path, base_dir)
    }

    /// Load `path` if given, otherwise the default file in the current
    /// directory if it exists, otherwise defaults.
    pub async fn load_or_default(path: Option<&Path>) -> TokensResult<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if tokio::fs::try_exists(default_path).await.unwrap_or(false) {
                    Self::load(default_path).await
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn themable_rules(&self) -> ThemableRules {
        ThemableRules::new(self.themable_types.clone())
    }

    pub fn log_level_filter(&self) -> TokensResult<LevelFilter> {
        self.log_level.parse::<LevelFilter>().map_err(|_| TokensError::Config {
            message: format!("unknown log level '{}'", self.log_level),
        })
    }

    fn resolve_paths(&mut self, base_dir: &Path) {
        for path in self.css_files.iter_mut().chain(self.token_dirs.iter_mut()) {
            if path.is_relative() {
                *path = base_dir.join(&*path);
            }
        }
    }

    fn validate(&self) -> TokensResult<()> {
        self.log_level_filter()?;
        if self.max_failures_per_category == 0 {
            return Err(TokensError::Config {
                message: "max_failures_per_category must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_file() {
        let config = TokensConfig::from_yaml("{}", Path::new("c.yaml"), Path::new("/repo")).unwrap();
        assert_eq!(config, TokensConfig::default());
        assert_eq!(config.themable_types, vec!["color", "shadow", "gradient"]);
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_paths_resolve_against_base_dir() {
        let yaml = "css_files:\n  - dist/tokens.css\n  - /abs/other.css\ntoken_dirs:\n  - tokens\nstrict: true\n";
        let config = TokensConfig::from_yaml(yaml, Path::new("c.yaml"), Path::new("/repo")).unwrap();
        assert_eq!(
            config.css_files,
            vec![PathBuf::from("/repo/dist/tokens.css"), PathBuf::from("/abs/other.css")]
        );
        assert_eq!(config.token_dirs, vec![PathBuf::from("/repo/tokens")]);
        assert!(config.strict);
    }

    #[test]
    fn test_unknown_field_is_yaml_error() {
        let result = TokensConfig::from_yaml("css_file: x.css\n", Path::new("c.yaml"), Path::new("."));
        assert!(matches!(result, Err(TokensError::Yaml { .. })));
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let result = TokensConfig::from_yaml("log_level: loud\n", Path::new("c.yaml"), Path::new("."));
        assert!(matches!(result, Err(TokensError::Config { .. })));

        let result = TokensConfig::from_yaml("max_failures_per_category: 0\n", Path::new("c.yaml"), Path::new("."));
        assert!(matches!(result, Err(TokensError::Config { .. })));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "token_dirs: [tokens]\nlog_level: debug\n").unwrap();

        let config = TokensConfig::load(&path).await.unwrap();
        assert_eq!(config.token_dirs, vec![dir.path().join("tokens")]);
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }
}
