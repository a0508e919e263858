//! Configuration for the navigation map.
//!
//! Parses `sitenav.toml` with serde and provides auto-discovery of the
//! config file in parent directories:
//!
//! ```toml
//! [sitemap]
//! file = "sitemap.xml"
//! attributes_to_ignore = ["visibility"]
//! ```
//!
//! The sitemap path is resolved relative to the config file's directory
//! (or the working directory when no file was found).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use sitenav_source::FsDocumentSource;

use crate::attributes::AttributeClassifier;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sitenav.toml";

/// Default sitemap document filename.
const DEFAULT_SITEMAP_FILE: &str = "sitemap.xml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Explicitly requested file not found.
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

/// Raw sitemap section as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SitemapConfigRaw {
    file: Option<String>,
    attributes_to_ignore: Option<Vec<String>>,
}

/// Resolved sitemap configuration with an absolute-ish path.
#[derive(Clone, Debug, Default)]
pub struct SitemapConfig {
    /// Sitemap XML document path.
    pub file: PathBuf,
    /// Attribute names excluded from routing parameters.
    pub attributes_to_ignore: Vec<String>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteNavConfig {
    /// Sitemap configuration (paths are relative strings from TOML).
    sitemap: SitemapConfigRaw,

    /// Resolved sitemap configuration (set after loading).
    #[serde(skip)]
    pub sitemap_resolved: SitemapConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl SiteNavConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sitenav.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or
    /// reading, parsing, or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        if let Some(discovered) = discover_config() {
            return Self::load_from_file(&discovered);
        }
        Ok(Self::default_with_base(Path::new(".")))
    }

    /// Load and resolve configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;
        if config.sitemap.file.as_deref() == Some("") {
            return Err(ConfigError::Validation(
                "sitemap.file cannot be empty".to_owned(),
            ));
        }
        let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        config.resolve(&base);
        config.config_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Defaults resolved against a base directory.
    #[must_use]
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.resolve(base);
        config
    }

    /// Resolve raw values into `sitemap_resolved`.
    fn resolve(&mut self, base: &Path) {
        let file = PathBuf::from(
            self.sitemap
                .file
                .clone()
                .unwrap_or_else(|| DEFAULT_SITEMAP_FILE.to_owned()),
        );
        self.sitemap_resolved = SitemapConfig {
            file: if file.is_absolute() {
                file
            } else {
                base.join(file)
            },
            attributes_to_ignore: self.sitemap.attributes_to_ignore.clone().unwrap_or_default(),
        };
    }

    /// Attribute classifier configured with the ignore list.
    #[must_use]
    pub fn classifier(&self) -> AttributeClassifier {
        AttributeClassifier::new(self.sitemap_resolved.attributes_to_ignore.iter().cloned())
    }

    /// Filesystem document source for the configured sitemap file.
    #[must_use]
    pub fn document_source(&self) -> FsDocumentSource {
        FsDocumentSource::new(self.sitemap_resolved.file.clone())
    }
}

/// Search for `sitenav.toml` in the current directory and its parents.
fn discover_config() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .and_then(|dir| discover_from(&dir))
}

fn discover_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_load_explicit_path_not_found() {
        let dir = tempfile::tempdir().unwrap();

        let err = SiteNavConfig::load(Some(&dir.path().join("missing.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_resolves_relative_sitemap_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[sitemap]\nfile = \"nav/sitemap.xml\"\n").unwrap();

        let config = SiteNavConfig::load(Some(&path)).unwrap();

        assert_eq!(
            config.sitemap_resolved.file,
            dir.path().join("nav/sitemap.xml")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_defaults_when_section_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "").unwrap();

        let config = SiteNavConfig::load(Some(&path)).unwrap();

        assert_eq!(
            config.sitemap_resolved.file,
            dir.path().join(DEFAULT_SITEMAP_FILE)
        );
        assert!(config.sitemap_resolved.attributes_to_ignore.is_empty());
    }

    #[test]
    fn test_load_rejects_empty_sitemap_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[sitemap]\nfile = \"\"\n").unwrap();

        let err = SiteNavConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[sitemap\n").unwrap();

        let err = SiteNavConfig::load(Some(&path)).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_discover_from_walks_parents() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        let config_path = dir.path().join(CONFIG_FILENAME);
        fs::write(&config_path, "").unwrap();

        assert_eq!(discover_from(&nested), Some(config_path));
    }

    #[test]
    fn test_discover_from_none_without_config() {
        let dir = tempfile::tempdir().unwrap();

        // No sitenav.toml anywhere under the temp root; the walk may still
        // find one above it, so scope the assertion to the temp tree.
        let found = discover_from(dir.path());
        if let Some(found) = found {
            assert!(!found.starts_with(dir.path()));
        }
    }

    #[test]
    fn test_document_source_uses_resolved_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "[sitemap]\nfile = \"nav.xml\"\n").unwrap();

        let config = SiteNavConfig::load(Some(&path)).unwrap();

        assert_eq!(config.document_source().path(), dir.path().join("nav.xml"));
    }

    #[test]
    fn test_classifier_uses_ignore_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(
            &path,
            "[sitemap]\nattributes_to_ignore = [\"tracking\"]\n",
        )
        .unwrap();

        let config = SiteNavConfig::load(Some(&path)).unwrap();

        assert!(!config.classifier().is_route("tracking"));
        assert!(config.classifier().is_route("id"));
    }
}
