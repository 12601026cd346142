//! Configuration of the blogpipe content pipeline.
//!
//! The config is read from a TOML file, every section and key is optional:
//!
//! ```toml
//! [assets]
//! base-url = "https://blog.example.com"
//!
//! [anchor]
//! link-class = "heading-anchor"
//!
//! [toc]
//! heading-tag = "h2"
//! ```

use dirs::Dirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<ConfigInner> = OnceLock::new();

#[derive(Debug)]
struct ConfigInner {
    config: Config,
    file_path: Option<PathBuf>,
}

/// Errors that can occur while reading the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Result of reading the config file.
///
/// The config always falls back to the defaults, `maybe_error` records why
/// the file could not be used if it existed.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub file_path: Option<PathBuf>,
    pub maybe_error: Option<ConfigError>,
}

/// Reads the config from `specified_config_file`, or from the default location.
///
/// A missing file at the default location is not an error, a missing file that
/// was explicitly specified is.
pub fn load_config(specified_config_file: Option<PathBuf>) -> LoadedConfig {
    let (config_file, explicit) = match specified_config_file {
        Some(path) => (path, true),
        // Linux: ~/.config/blogpipe/config.toml
        // macOS: ~/Library/Application Support/com.blogpipe.blogpipe/config.toml
        None => match Dirs::config_file() {
            Some(path) => (path, false),
            None => {
                return LoadedConfig {
                    config: Config::default(),
                    file_path: None,
                    maybe_error: None,
                }
            }
        },
    };

    if !explicit && !config_file.exists() {
        return LoadedConfig {
            config: Config::default(),
            file_path: None,
            maybe_error: None,
        };
    }

    let result = std::fs::read_to_string(&config_file)
        .map_err(|source| ConfigError::Io {
            path: config_file.clone(),
            source,
        })
        .and_then(|contents| {
            toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Toml {
                path: config_file.clone(),
                source,
            })
        });

    match result {
        Ok(config) => LoadedConfig {
            config,
            file_path: Some(config_file),
            maybe_error: None,
        },
        Err(err) => LoadedConfig {
            config: Config::default(),
            file_path: Some(config_file),
            maybe_error: Some(err),
        },
    }
}

/// Initializes the global [`Config`] once, from the CLI entry point.
///
/// Subsequent calls return the config that was loaded first. The error, if any,
/// is handed back so the caller can report it once logging is set up.
pub fn load_config_on_startup(
    specified_config_file: Option<PathBuf>,
) -> (&'static Config, Option<ConfigError>) {
    let mut maybe_error = None;

    let inner = CONFIG.get_or_init(|| {
        let LoadedConfig {
            config,
            file_path,
            maybe_error: err,
        } = load_config(specified_config_file);
        maybe_error = err;
        ConfigInner { config, file_path }
    });

    (&inner.config, maybe_error)
}

/// Path of the config file in use, `None` if running on the defaults.
pub fn config_file() -> Option<&'static Path> {
    CONFIG.get().and_then(|inner| inner.file_path.as_deref())
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct LogConfig {
    /// Specify the log file path.
    ///
    /// Logs are written to stderr if neither this nor `--log` is set.
    pub log_file: Option<String>,

    /// Specify the max log level.
    pub max_level: String,

    /// Specify the log target to enable more detailed logging.
    ///
    /// ```toml
    /// [log]
    /// log-target = "content_pipeline=trace,cli=debug"
    /// ```
    pub log_target: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            max_level: "info".into(),
            log_target: "".into(),
        }
    }
}

/// Where stored images live and how they are exposed publicly.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Public base URL every resolved asset path is appended to.
    pub base_url: String,

    /// Marker of storage-relative paths, stripped before resolution.
    pub storage_prefix: String,

    /// Marker of paths already inside the public asset namespace.
    pub asset_prefix: String,

    /// Directory of the featured images, stored as `<size>_<filename>`.
    pub featured_dir: String,

    /// Directory of the gallery images.
    pub gallery_dir: String,

    /// Directory bare inline content image filenames are relative to.
    pub content_dir: String,

    /// Whether `<img src>` in post bodies are rewritten to public URLs when rendering.
    pub rewrite_content_images: bool,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".into(),
            storage_prefix: "storage/".into(),
            asset_prefix: "assets/".into(),
            featured_dir: "assets/images/featured".into(),
            gallery_dir: "assets/images/gallery".into(),
            content_dir: "assets/images/uploads".into(),
            rewrite_content_images: true,
        }
    }
}

/// Anchor links injected next to second-level headings.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct AnchorConfig {
    /// Class of the injected `<a>` element.
    pub link_class: String,

    /// Inner markup of the injected `<a>` element, empty for an icon drawn by CSS.
    ///
    /// ```toml
    /// [anchor]
    /// link-label = '<i class="fas fa-link"></i>'
    /// ```
    pub link_label: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            link_class: "heading-anchor".into(),
            link_label: "".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct TocConfig {
    /// Selector of the headings listed in the table of contents.
    pub heading_tag: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            heading_tag: "h2".into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Log configuration.
    pub log: LogConfig,

    /// Asset URL resolution.
    pub assets: AssetsConfig,

    /// Heading anchor injection.
    pub anchor: AnchorConfig,

    /// Table of contents extraction.
    pub toc: TocConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        let toml_content = r#"
          [log]
          max-level = "trace"
          log-file = "/tmp/blogpipe.log"

          [assets]
          base-url = "https://blog.example.com"
          content-dir = "assets/img/posts"

          [anchor]
          link-label = '<i class="fas fa-link"></i>'
"#;
        let user_config: Config =
            toml::from_str(toml_content).expect("Failed to deserialize config");

        assert_eq!(
            user_config,
            Config {
                log: LogConfig {
                    log_file: Some("/tmp/blogpipe.log".to_string()),
                    max_level: "trace".to_string(),
                    ..Default::default()
                },
                assets: AssetsConfig {
                    base_url: "https://blog.example.com".to_string(),
                    content_dir: "assets/img/posts".to_string(),
                    ..Default::default()
                },
                anchor: AnchorConfig {
                    link_label: r#"<i class="fas fa-link"></i>"#.to_string(),
                    ..Default::default()
                },
                toc: TocConfig::default(),
            }
        );
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        toml::to_string_pretty(&config).expect("Serialize config is okay");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = toml::from_str::<Config>("[assets]\nbase-uri = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = std::env::temp_dir().join(format!("blog-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let valid = dir.join("valid.toml");
        std::fs::write(&valid, "[toc]\nheading-tag = \"h3\"\n").unwrap();
        let loaded = load_config(Some(valid.clone()));
        assert!(loaded.maybe_error.is_none());
        assert_eq!(loaded.config.toc.heading_tag, "h3");
        assert_eq!(loaded.file_path, Some(valid));

        let invalid = dir.join("invalid.toml");
        std::fs::write(&invalid, "[toc\n").unwrap();
        let loaded = load_config(Some(invalid));
        assert!(matches!(loaded.maybe_error, Some(ConfigError::Toml { .. })));
        assert_eq!(loaded.config, Config::default());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = std::env::temp_dir().join("blog-config-missing/config.toml");
        let loaded = load_config(Some(missing));
        assert!(matches!(loaded.maybe_error, Some(ConfigError::Io { .. })));
        assert_eq!(loaded.config, Config::default());
    }

    #[test]
    fn test_load_config_on_startup() {
        let dir = std::env::temp_dir().join(format!("blog-config-startup-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[anchor]\nlink-class = \"anchor\"\n").unwrap();

        let (config, maybe_error) = load_config_on_startup(Some(path.clone()));
        assert!(maybe_error.is_none());
        assert_eq!(config.anchor.link_class, "anchor");
        assert_eq!(config_file(), Some(path.as_path()));

        // Loaded once, later calls get the first config.
        let (again, _) = load_config_on_startup(None);
        assert_eq!(again, config);

        std::fs::remove_dir_all(&dir).ok();
    }
}
