//! `config.toml`: site identity, contact details, navigation, theme and build paths.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Outbound contact details shown in the social link panel.
    #[serde(default)]
    pub contact_info: ContactInfo,

    /// Primary navigation links, in display order.
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavLinkConfig>,

    /// Theme settings.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title, also used as the brand mark label.
    pub title: String,

    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Site author name.
    #[serde(default)]
    pub author: Option<String>,
}

/// Contact details. Every field is optional; absent ones are simply not linked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Plain email address (turned into a mail-to target when rendered).
    #[serde(default)]
    pub email: Option<String>,

    /// GitHub profile URL.
    #[serde(default)]
    pub github: Option<String>,

    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl ContactInfo {
    /// Names of contact fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("github", &self.github),
            ("linkedin", &self.linkedin),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

/// A primary navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLinkConfig {
    /// Display label.
    pub label: String,

    /// Route path, compared verbatim against the current route.
    pub path: String,
}

impl NavLinkConfig {
    /// Create a new navigation link.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Start in dark mode when no preference has been persisted.
    #[serde(default)]
    pub dark_by_default: bool,

    /// Accent colour used for links, active navigation and the dark-mode border.
    #[serde(default = "default_accent_colour")]
    pub accent_colour: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding markdown posts.
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Output directory for the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Whether to generate drafts.
    #[serde(default)]
    pub drafts: bool,

    /// ES module bootstrapping the browser client, e.g. `/pkg/folio_frontend.js`.
    #[serde(default)]
    pub client_script: Option<String>,
}

fn default_navigation() -> Vec<NavLinkConfig> {
    vec![
        NavLinkConfig::new("about", "/"),
        NavLinkConfig::new("work", "/work"),
        NavLinkConfig::new("blog", "/blog"),
    ]
}

fn default_accent_colour() -> String {
    "#f07167".to_string()
}

fn default_content_dir() -> String {
    "content".to_string()
}

fn default_output_dir() -> String {
    "public".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark_by_default: false,
            accent_colour: default_accent_colour(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            drafts: false,
            client_script: None,
        }
    }
}

impl Config {
    /// Read and validate `config.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config_with_source(format!("cannot read {}", path.display()), e)
        })?;
        let config: Config = toml::from_str(&source).map_err(|e| {
            CoreError::config_with_source(format!("{} is not valid TOML", path.display()), e)
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `FOLIO_*` environment overrides layered on top.
    ///
    /// Nested keys use `__`, e.g. `FOLIO_SITE__TITLE` or `FOLIO_THEME__DARK_BY_DEFAULT`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        let mut seen = HashSet::new();
        for link in &self.navigation {
            if !link.path.starts_with('/') {
                return Err(CoreError::config(format!(
                    "navigation path for '{}' must start with '/': {}",
                    link.label, link.path
                )));
            }
            if !seen.insert(link.path.as_str()) {
                tracing::warn!(path = %link.path, "duplicate navigation path, only the first link can be highlighted");
            }
        }

        Ok(())
    }

    /// Absolute URL of a site route.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}
