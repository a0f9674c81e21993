use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::audit::pipeline::AuditOptions;
use crate::version::matcher::{PrereleasePolicy, ResolutionPolicy};
use crate::version::registries::deps_dev::DEFAULT_BASE_URL;

// =============================================================================
// Registry-related constants
// =============================================================================

/// Timeout for each registry request in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Default number of manifest entries resolved at the same time
pub const DEFAULT_CONCURRENCY: usize = 8;

/// User agent sent with every registry request
pub const USER_AGENT: &str = "deps-audit";

/// Audit configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditConfig {
    pub registry: RegistryConfig,
    pub resolution: ResolutionConfig,
}

/// Remote metadata service configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: FETCH_TIMEOUT_MS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Version selection configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolutionConfig {
    pub concurrency: usize,
    pub policy: ResolutionPolicy,
    pub include_prerelease: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            policy: ResolutionPolicy::Lowest,
            include_prerelease: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AuditConfig {
    /// Load configuration from `path`, or from the default location if it exists.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.registry.timeout_ms)
    }

    pub fn audit_options(&self) -> AuditOptions {
        AuditOptions {
            concurrency: self.resolution.concurrency.max(1),
            resolution: self.resolution.policy,
            prerelease: if self.resolution.include_prerelease {
                PrereleasePolicy::Include
            } else {
                PrereleasePolicy::Exclude
            },
        }
    }
}

/// Returns the path to the config directory for deps-audit.
/// Uses $XDG_CONFIG_HOME/deps-audit if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/deps-audit,
/// or ./deps-audit if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("deps-audit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn audit_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<AuditConfig>(json!({
            "registry": {
                "timeoutMs": 1000
            }
        }))
        .unwrap();

        assert_eq!(result.registry.timeout_ms, 1000);
        assert_eq!(result.registry.base_url, DEFAULT_BASE_URL);
        assert_eq!(result.resolution, ResolutionConfig::default());
    }

    #[test]
    fn audit_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<AuditConfig>(json!({
            "registry": {
                "baseUrl": "http://localhost:8080",
                "timeoutMs": 5000,
                "userAgent": "ci"
            },
            "resolution": {
                "concurrency": 2,
                "policy": "highest",
                "includePrerelease": false
            }
        }))
        .unwrap();

        assert_eq!(
            result,
            AuditConfig {
                registry: RegistryConfig {
                    base_url: "http://localhost:8080".to_string(),
                    timeout_ms: 5000,
                    user_agent: "ci".to_string(),
                },
                resolution: ResolutionConfig {
                    concurrency: 2,
                    policy: ResolutionPolicy::Highest,
                    include_prerelease: false,
                },
            }
        );
    }

    #[test]
    fn audit_options_clamp_concurrency_and_map_prerelease_flag() {
        let config = AuditConfig {
            resolution: ResolutionConfig {
                concurrency: 0,
                policy: ResolutionPolicy::Lowest,
                include_prerelease: false,
            },
            ..AuditConfig::default()
        };

        let options = config.audit_options();

        assert_eq!(options.concurrency, 1);
        assert_eq!(options.prerelease, PrereleasePolicy::Exclude);
        assert_eq!(options.resolution, ResolutionPolicy::Lowest);
    }

    #[test]
    fn load_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"resolution": {{"concurrency": 3}}}}"#).unwrap();

        let config = AuditConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.resolution.concurrency, 3);
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let result = AuditConfig::load(Some(Path::new("/nonexistent/config.json")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_fails_for_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = AuditConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Json { .. })));
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/deps-audit"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/deps-audit"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./deps-audit"));
    }
}
