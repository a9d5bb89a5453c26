//! Configuration management for docmend.
//!
//! Parses `docmend.toml` configuration files with serde and provides
//! auto-discovery in parent directories. All values default to the
//! conventional docs-site layout, so tools run without any config file:
//!
//! ```toml
//! [docs]
//! roots = ["sysdesign-website/docs", "sysdesign-website/docs-en"]
//!
//! [images]
//! roots = ["sysdesign-website/static/img"]
//! diagrams_dir = "sysdesign-website/static/img/diagrams"
//!
//! [diagrams]
//! locale = "ru"
//! ```
//!
//! Relative paths are resolved against the config file's directory, or the
//! current working directory when running on defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docmend.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Document tree configuration.
    pub docs: DocsConfig,
    /// Image asset tree configuration.
    pub images: ImagesConfig,
    /// Diagram naming configuration.
    pub diagrams: DiagramsConfig,
}

/// Document tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocsConfig {
    /// Root directories scanned recursively for Markdown files.
    pub roots: Vec<PathBuf>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            roots: vec![
                PathBuf::from("sysdesign-website/docs"),
                PathBuf::from("sysdesign-website/docs-en"),
            ],
        }
    }
}

/// Image asset tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// Root directories scanned recursively for image files. Resolved image
    /// references are site-rooted at `/img/` relative to these roots.
    pub roots: Vec<PathBuf>,
    /// Directory holding pre-rendered diagram images.
    pub diagrams_dir: PathBuf,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("sysdesign-website/static/img")],
            diagrams_dir: PathBuf::from("sysdesign-website/static/img/diagrams"),
        }
    }
}

/// Diagram naming configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramsConfig {
    /// Locale tag in candidate image filenames
    /// (`<base>_<locale>_diagram_<N>.svg`).
    pub locale: String,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            locale: "ru".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `docmend.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.validate()?;

        Ok(config)
    }

    /// Search for the config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve relative paths against the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        for root in &mut self.docs.roots {
            resolve_against(base, root);
        }
        for root in &mut self.images.roots {
            resolve_against(base, root);
        }
        resolve_against(base, &mut self.images.diagrams_dir);
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.docs.roots.is_empty() {
            return Err(ConfigError::Validation(
                "docs.roots cannot be empty".to_owned(),
            ));
        }
        if self.images.roots.is_empty() {
            return Err(ConfigError::Validation(
                "images.roots cannot be empty".to_owned(),
            ));
        }
        if self.diagrams.locale.is_empty() {
            return Err(ConfigError::Validation(
                "diagrams.locale cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

fn resolve_against(base: &Path, path: &mut PathBuf) {
    if path.is_relative() {
        *path = base.join(&*path);
    }
}
