use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Identifier of the storage domain both processes open by default
pub const DEFAULT_DOMAIN: &str = "group.io.github.asciiboard";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Name of the shared domain (the app group identifier)
    pub domain: String,
    /// Directory both processes can reach; unset means "not entitled"
    pub shared_dir: Option<String>,
    /// Root for process-local fallback storage
    pub local_dir: Option<String>,
    /// Name of this process, used to keep local fallbacks apart
    pub process: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            shared_dir: None,
            local_dir: None,
            process: "host".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl StorageConfig {
    /// Expanded shared directory, if one is configured
    pub fn shared_path(&self) -> Option<PathBuf> {
        self.shared_dir.as_deref().map(expand)
    }

    /// Expanded root for process-local storage
    pub fn local_path(&self) -> Option<PathBuf> {
        match self.local_dir.as_deref() {
            Some(dir) => Some(expand(dir)),
            None => dirs::data_dir().map(|d| d.join("asciiboard")),
        }
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("asciiboard")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or return defaults if unreadable
    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to read config");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Replace empty values with their defaults
    fn validate(&mut self) {
        let defaults = StorageConfig::default();

        if self.storage.domain.trim().is_empty() {
            self.storage.domain = defaults.domain;
        }
        if self.storage.process.trim().is_empty() {
            self.storage.process = defaults.process;
        }
        // An empty shared_dir is the same as none at all
        if self.storage.shared_dir.as_deref().is_some_and(|d| d.trim().is_empty()) {
            self.storage.shared_dir = None;
        }
        if self.logging.filter.trim().is_empty() {
            self.logging.filter = LoggingConfig::default().filter;
        }
    }

    /// Save config to the default path
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content).map_err(|e| format!("Failed to write config: {}", e))?;

        Ok(())
    }
}
