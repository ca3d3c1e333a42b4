//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::catalog::{DEFAULT_PAGE_SIZE, SEARCH_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog search endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Items requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Base delay between requests in milliseconds
    #[serde(default)]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default)]
    pub delay_jitter_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Drop rows whose component code was already written
    #[serde(default = "default_true")]
    pub dedupe: bool,

    /// Filter: minimum stock count
    #[serde(default)]
    pub min_stock: u64,

    /// Show a progress bar on stderr
    #[serde(default = "default_true")]
    pub progress: bool,
}

fn default_api_url() -> String {
    SEARCH_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            proxy: None,
            page_size: default_page_size(),
            delay_ms: 0,
            delay_jitter_ms: 0,
            timeout_secs: default_timeout_secs(),
            dedupe: true,
            min_stock: 0,
            progress: true,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if config.page_size == 0 {
            anyhow::bail!("Invalid page_size 0 in config file: {}", path.display());
        }

        Ok(config)
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("jlc-parts.toml");
        if local_config.exists() {
            debug!("Found jlc-parts.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("jlc-parts").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("JLC_API_URL") {
            self.api_url = url;
        }

        if let Ok(proxy) = std::env::var("JLC_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("JLC_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        if let Ok(size) = std::env::var("JLC_PAGE_SIZE") {
            match size.parse() {
                Ok(n) if n > 0 => self.page_size = n,
                _ => debug!("Ignoring invalid JLC_PAGE_SIZE: {}", size),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, SEARCH_URL);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.delay_jitter_ms, 0);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.min_stock, 0);
        assert!(config.proxy.is_none());
        assert!(config.dedupe);
        assert!(config.progress);
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            page_size = 100
            delay_ms = 500
            dedupe = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.delay_ms, 500);
        assert!(!config.dedupe);
        // Unset fields keep their defaults
        assert_eq!(config.api_url, SEARCH_URL);
        assert!(config.progress);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            api_url = "http://localhost:8080/search"
            proxy = "socks5://localhost:1080"
            page_size = 50
            delay_ms = 1000
            delay_jitter_ms = 250
            timeout_secs = 5
            dedupe = false
            min_stock = 10
            progress = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/search");
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.page_size, 50);
        assert_eq!(config.delay_ms, 1000);
        assert_eq!(config.delay_jitter_ms, 250);
        assert_eq!(config.timeout_secs, 5);
        assert!(!config.dedupe);
        assert_eq!(config.min_stock, 10);
        assert!(!config.progress);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            page_size = 40
            min_stock = 5
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size, 40);
        assert_eq!(config.min_stock, 5);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_from_file_rejects_zero_page_size() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page_size = 0").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Invalid page_size 0"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 90").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.timeout_secs, 90);
    }

    #[test]
    fn test_config_with_env() {
        let orig_url = std::env::var("JLC_API_URL").ok();
        let orig_delay = std::env::var("JLC_DELAY").ok();
        let orig_size = std::env::var("JLC_PAGE_SIZE").ok();

        std::env::set_var("JLC_API_URL", "http://mirror/search");
        std::env::set_var("JLC_DELAY", "750");
        std::env::set_var("JLC_PAGE_SIZE", "0");

        let config = Config::new().with_env();
        assert_eq!(config.api_url, "http://mirror/search");
        assert_eq!(config.delay_ms, 750);
        // Zero page size is rejected
        assert_eq!(config.page_size, 25);

        for (key, orig) in [
            ("JLC_API_URL", orig_url),
            ("JLC_DELAY", orig_delay),
            ("JLC_PAGE_SIZE", orig_size),
        ] {
            match orig {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}
