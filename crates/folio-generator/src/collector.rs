//! Content collection.
//!
//! Walks the content directory and parses every markdown post.

use std::{
    cmp::Ordering,
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use folio_core::{Config, Document};
use folio_parser::MarkdownParser;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Content collection errors.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parser error.
    #[error("parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Result type for collector operations.
pub type Result<T> = std::result::Result<T, CollectorError>;

/// Collected site content.
#[derive(Debug, Default)]
pub struct SiteContent {
    /// Published posts, newest first.
    pub posts: Vec<Document>,

    /// Number of drafts left out.
    pub drafts_skipped: usize,

    /// Files that failed to parse.
    pub failed: usize,
}

/// Content collector that walks directories and parses files.
#[derive(Debug)]
pub struct ContentCollector {
    include_drafts: bool,
    parser: MarkdownParser,
    content_dir: PathBuf,
}

impl ContentCollector {
    /// Create a new content collector.
    #[must_use]
    pub fn new(config: &Config, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            include_drafts: config.build.drafts,
            parser: MarkdownParser::new(),
            content_dir: content_dir.into(),
        }
    }

    /// Override the draft setting from configuration.
    #[must_use]
    pub fn with_drafts(mut self, include: bool) -> Self {
        self.include_drafts = include;
        self
    }

    /// Collect all posts from the content directory.
    pub fn collect(&self) -> Result<SiteContent> {
        info!(dir = %self.content_dir.display(), "collecting content");

        let files = self.find_content_files()?;
        info!(count = files.len(), "found content files");

        let parsed: Vec<_> = files
            .par_iter()
            .map(|path| (path, self.parse_file(path)))
            .collect();

        let mut content = SiteContent::default();
        let mut slugs = HashSet::new();
        for (path, result) in parsed {
            let document = match result {
                Ok(document) => document,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse file");
                    content.failed += 1;
                    continue;
                }
            };

            if document.frontmatter.draft && !self.include_drafts {
                debug!(slug = %document.slug, "skipping draft");
                content.drafts_skipped += 1;
                continue;
            }
            if !slugs.insert(document.slug.clone()) {
                warn!(path = %path.display(), slug = %document.slug, "duplicate slug, keeping the first post");
                continue;
            }
            content.posts.push(document);
        }

        sort_newest_first(&mut content.posts);

        info!(
            posts = content.posts.len(),
            drafts_skipped = content.drafts_skipped,
            failed = content.failed,
            "content collection complete"
        );

        Ok(content)
    }

    /// Find all markdown files, sorted by path.
    fn find_content_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        walk_dir(&self.content_dir, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Parse a single content file.
    fn parse_file(&self, path: &Path) -> Result<Document> {
        debug!(path = %path.display(), "parsing file");

        let source = fs::read_to_string(path)?;
        let relative = path.strip_prefix(&self.content_dir).unwrap_or(path);
        self.parser
            .parse(&source, relative)
            .map_err(|e| CollectorError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }
}

/// Recursively collect `*.md` files, skipping hidden directories.
fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if path
                .file_name()
                .is_some_and(|n| n.to_string_lossy().starts_with('.'))
            {
                continue;
            }
            walk_dir(&path, files)?;
        } else if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }

    Ok(())
}

/// Sort posts newest first; undated posts go last, ordered by title.
pub fn sort_newest_first(posts: &mut [Document]) {
    posts.sort_by(|a, b| match (&b.frontmatter.date, &a.frontmatter.date) {
        (Some(b_date), Some(a_date)) => b_date
            .cmp(a_date)
            .then_with(|| a.frontmatter.title.cmp(&b.frontmatter.title)),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.frontmatter.title.cmp(&b.frontmatter.title),
    });
}
