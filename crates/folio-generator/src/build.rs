//! Build orchestration.
//!
//! Coordinates the full site build process.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use folio_core::theme::MemoryPreferenceStore;
use folio_core::{Config, ThemeAccess, ThemeHolder, ThemeMode};
use folio_ui::{SiteChrome, stylesheet};
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    collector::{CollectorError, ContentCollector, SiteContent},
    html::{HtmlError, HtmlGenerator},
};

/// Generator errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Collector error.
    #[error("collector error: {0}")]
    Collector(#[from] CollectorError),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of post pages generated.
    pub pages: usize,

    /// Number of drafts left out.
    pub drafts_skipped: usize,

    /// Number of posts that failed to parse or render.
    pub failed: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// Site builder that orchestrates the build process.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    content_dir: PathBuf,
    output_dir: PathBuf,
    include_drafts: bool,
    theme_override: Option<ThemeMode>,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(
        config: Config,
        content_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            include_drafts: config.build.drafts,
            config,
            content_dir: content_dir.into(),
            output_dir: output_dir.into(),
            theme_override: None,
        }
    }

    /// Include draft posts regardless of configuration.
    #[must_use]
    pub fn with_drafts(mut self, include: bool) -> Self {
        self.include_drafts = include;
        self
    }

    /// Paint pages in `mode` instead of `theme.dark_by_default`.
    #[must_use]
    pub fn with_theme(mut self, mode: Option<ThemeMode>) -> Self {
        self.theme_override = mode;
        self
    }

    /// Execute the full build process.
    pub fn build(&self) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            content = %self.content_dir.display(),
            output = %self.output_dir.display(),
            "starting build"
        );

        self.check_output_dir()?;

        // 1. Clean output directory
        self.clean_output()?;

        // 2. Collect content
        let collector =
            ContentCollector::new(&self.config, &self.content_dir).with_drafts(self.include_drafts);
        let content = collector.collect()?;
        stats.drafts_skipped = content.drafts_skipped;
        stats.failed = content.failed;

        // 3. Generate post pages
        // A forced mode acts like a saved reader preference over the site default.
        let theme = ThemeHolder::with_store(
            MemoryPreferenceStore::new(self.theme_override),
            SiteChrome::from_config(&self.config).default_theme(),
        );
        let generator = HtmlGenerator::new(self.config.clone()).with_theme(theme.theme());
        let (pages, failed) = self.generate_posts(&generator, &content)?;
        stats.pages = pages;
        stats.failed += failed;

        // 4. Generate the blog listing
        self.generate_blog_index(&generator, &content)?;

        // 5. Write the stylesheet
        self.write_stylesheet(&generator)?;

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            drafts_skipped = stats.drafts_skipped,
            failed = stats.failed,
            duration_ms = stats.duration_ms,
            "build complete"
        );

        Ok(stats)
    }

    /// Refuse an output directory that is, or contains, the content directory:
    /// cleaning it would delete the posts.
    fn check_output_dir(&self) -> Result<()> {
        let content = resolve(&self.content_dir)?;
        let output = resolve(&self.output_dir)?;
        if content.starts_with(&output) {
            return Err(GeneratorError::Config(format!(
                "output directory {} would overwrite the content directory {}",
                self.output_dir.display(),
                self.content_dir.display()
            )));
        }
        Ok(())
    }

    /// Clean the output directory.
    fn clean_output(&self) -> Result<()> {
        if self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "cleaning output directory");
            fs::remove_dir_all(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Generate one page per post, in parallel. Returns `(written, failed)`.
    fn generate_posts(
        &self,
        generator: &HtmlGenerator,
        content: &SiteContent,
    ) -> Result<(usize, usize)> {
        info!(count = content.posts.len(), "generating post pages");

        let results: Vec<_> = content
            .posts
            .par_iter()
            .map(|document| {
                let html = generator.generate_post(document)?;
                let output_path = generator.output_path(document, &self.output_dir);
                write_file(&output_path, &html)?;

                debug!(path = %output_path.display(), "wrote page");
                Ok::<_, GeneratorError>(())
            })
            .collect();

        let mut written = 0;
        let mut failed = 0;
        for result in results {
            match result {
                Ok(()) => written += 1,
                Err(e) => {
                    warn!(error = %e, "failed to generate page");
                    failed += 1;
                }
            }
        }

        Ok((written, failed))
    }

    fn generate_blog_index(&self, generator: &HtmlGenerator, content: &SiteContent) -> Result<()> {
        let posts: Vec<_> = content.posts.iter().collect();
        let html = generator.generate_blog_index(&posts)?;
        let output_path = self.output_dir.join("blog").join("index.html");
        write_file(&output_path, &html)?;

        info!(path = %output_path.display(), posts = posts.len(), "generated blog index");
        Ok(())
    }

    fn write_stylesheet(&self, generator: &HtmlGenerator) -> Result<()> {
        let css = stylesheet(generator.theme(), &self.config.theme.accent_colour);
        write_file(&self.output_dir.join("style.css"), &css)
    }
}

/// Canonical form of `path`, or its absolute form when it does not exist yet.
fn resolve(path: &Path) -> std::io::Result<PathBuf> {
    fs::canonicalize(path).or_else(|_| std::path::absolute(path))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
