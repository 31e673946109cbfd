//! Post metadata blocks (`---` YAML or `+++` TOML).

use std::{collections::HashMap, path::Path};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Frontmatter metadata for a post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Post title (required for publishing).
    #[serde(default)]
    pub title: String,

    /// Publication date.
    #[serde(default)]
    pub date: Option<NaiveDate>,

    /// Tags for the post.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether this is a draft.
    #[serde(default)]
    pub draft: bool,

    /// Description for meta tags; overrides the generated excerpt.
    #[serde(default)]
    pub description: Option<String>,

    /// Unknown fields, kept so nothing authored is silently lost.
    #[serde(default, flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    /// Validate required fields.
    pub fn validate(&self, path: &Path) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::frontmatter(path, "title is required"));
        }
        Ok(())
    }

    /// Publication date as `MMMM Do YYYY`, e.g. "January 14th 2024".
    pub fn display_date(&self) -> Option<String> {
        self.date.map(format_long_date)
    }
}

/// Format a date as `MMMM Do YYYY`.
pub fn format_long_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {day}{suffix} {}", date.format("%B"), date.year())
}

/// Fence style of a metadata block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// `---` fenced YAML.
    Yaml,
    /// `+++` fenced TOML.
    Toml,
}

impl FrontmatterFormat {
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Separate a leading metadata block from the post body.
///
/// Both fences must sit on their own line. Returns `None` when the post has
/// no block or the block is never closed.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start_matches('\u{feff}').trim_start();
    let format = [FrontmatterFormat::Yaml, FrontmatterFormat::Toml]
        .into_iter()
        .find(|format| content.starts_with(format.delimiter()))?;
    let fence = format.delimiter();

    let after_fence = &content[fence.len()..];
    let block = after_fence
        .strip_prefix("\r\n")
        .or_else(|| after_fence.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in block.split_inclusive('\n') {
        if line.trim_end() == fence {
            let meta = block[..offset].trim();
            let body = block[offset + line.len()..].trim_start();
            return Some((format, meta, body));
        }
        offset += line.len();
    }
    None
}

/// Read the metadata block of `content`, returning it with the body.
///
/// A post without a block gets default metadata and keeps its whole text.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String)> {
    let Some((format, meta, body)) = split_frontmatter(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };
    if meta.is_empty() {
        return Ok((Frontmatter::default(), body.to_string()));
    }

    let frontmatter = match format {
        FrontmatterFormat::Yaml => serde_yaml::from_str::<Frontmatter>(meta)
            .map_err(|e| CoreError::frontmatter(path, e.to_string())),
        FrontmatterFormat::Toml => {
            toml::from_str::<Frontmatter>(meta).map_err(|e| CoreError::frontmatter(path, e.to_string()))
        }
    }?;

    Ok((frontmatter, body.to_string()))
}
