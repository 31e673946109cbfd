//! Folio Parser Library
//!
//! Turns markdown posts (with YAML or TOML frontmatter) into [`Document`]s:
//! rendered HTML body, nested table of contents, slug, excerpt and reading
//! time.

pub mod markdown;
pub mod slug;

use std::path::PathBuf;

pub use folio_core::Document;
pub use markdown::{MarkdownParser, RenderedMarkdown};
pub use slug::{AnchorRegistry, slugify};
use thiserror::Error;

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParserError {
    /// Frontmatter could not be parsed.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] folio_core::CoreError),

    /// No slug can be derived from the file path.
    #[error("cannot derive a slug from {0}")]
    InvalidPath(PathBuf),
}

/// Result type for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;
