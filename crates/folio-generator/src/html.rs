//! HTML generation.
//!
//! Paints the `folio-ui` view models as static markup. Class names match the
//! Leptos components so the same stylesheet serves both.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Utc};
use folio_core::{Config, Document, ThemeState};
use folio_ui::{
    ArticleView, NavBarView, PAGE_DATA_ID, PageInput, PageView, SiteChrome, SocialPanelView,
    TocView, icons,
};
use thiserror::Error;
use tracing::debug;

use crate::template::{TemplateContext, TemplateError, TemplateRegistry};

/// Route of the post listing.
pub const BLOG_ROUTE: &str = "/blog";

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Page data could not be serialized.
    #[error("page data error: {0}")]
    PageData(#[from] serde_json::Error),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// HTML page generator.
#[derive(Debug)]
pub struct HtmlGenerator {
    templates: TemplateRegistry,
    config: Config,
    chrome: SiteChrome,
    theme: ThemeState,
}

impl HtmlGenerator {
    /// Create a new HTML generator with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let chrome = SiteChrome::from_config(&config);
        Self {
            templates: TemplateRegistry::new(),
            theme: chrome.default_theme(),
            chrome,
            config,
        }
    }

    /// Paint pages in `theme`. The client starts from the same theme when the
    /// reader has no saved preference.
    #[must_use]
    pub fn with_theme(mut self, theme: ThemeState) -> Self {
        self.theme = theme;
        self.chrome.dark_by_default = theme.is_dark_mode_enabled;
        self
    }

    /// Theme static pages are painted in.
    #[must_use]
    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    /// Generate the page for one post.
    pub fn generate_post(&self, document: &Document) -> Result<String> {
        let route = document.route();
        debug!(route = %route, "generating HTML for post");

        let page = PageView::build(document, self.theme(), &route, &self.chrome);
        let input = PageInput {
            chrome: self.chrome.clone(),
            document: document.clone(),
        };
        let page_data = format!(
            r#"<script id="{PAGE_DATA_ID}" type="application/json">{}</script>"#,
            input.to_script_json()?
        );

        let body = self.render_page(&page, &article_html(&page.article))?;
        let ctx = self
            .base_context(&page.article.title, &route, &body)
            .with_var("description", escape_html(&document.excerpt))
            .with_var("page_data", page_data)
            .with_opt("client_script", self.client_script());
        Ok(self.templates.render("base", &ctx)?)
    }

    /// Generate the blog listing. `documents` are expected newest first.
    pub fn generate_blog_index(&self, documents: &[&Document]) -> Result<String> {
        let items: String = documents.iter().map(|doc| list_item_html(doc)).collect();
        let list = self.templates.render(
            "list",
            &TemplateContext::new()
                .with_var("title", "Blog")
                .with_var("items", items),
        )?;

        let page = PageView::build(&Document::default(), self.theme(), BLOG_ROUTE, &self.chrome);
        let body = self.render_page(&page, &list)?;
        let ctx = self
            .base_context("Blog", BLOG_ROUTE, &body)
            .with_opt(
                "description",
                self.config.site.description.as_deref().map(escape_html),
            );
        Ok(self.templates.render("base", &ctx)?)
    }

    /// Output path of a post page.
    #[must_use]
    pub fn output_path(&self, document: &Document, output_dir: &Path) -> PathBuf {
        output_dir.join("blog").join(&document.slug).join("index.html")
    }

    fn render_page(&self, page: &PageView, main: &str) -> Result<String> {
        let ctx = TemplateContext::new()
            .with_var("header", header_html(&page.header, &page.accent))
            .with_var("social", social_html(&page.social, &page.accent))
            .with_var("main", main);
        Ok(self.templates.render("page", &ctx)?)
    }

    fn base_context(&self, title: &str, route: &str, body: &str) -> TemplateContext {
        TemplateContext::new()
            .with_var("theme", self.theme().mode().as_str())
            .with_var("title", escape_html(title))
            .with_var(
                "site_title_suffix",
                format!(" | {}", escape_html(&self.config.site.title)),
            )
            .with_var("canonical_url", self.config.url_for(route))
            .with_var("body", body)
            .with_var("site_title", escape_html(&self.config.site.title))
            .with_var("year", Utc::now().year().to_string())
            .with_opt("author", self.config.site.author.as_deref().map(escape_html))
    }

    fn client_script(&self) -> Option<String> {
        self.config.build.client_script.as_deref().map(|src| {
            format!(
                r#"<script type="module">import init from "{}"; init();</script>"#,
                escape_html(src)
            )
        })
    }
}

/// Header markup.
pub fn header_html(nav: &NavBarView, accent: &str) -> String {
    let links: String = nav
        .links
        .iter()
        .map(|link| {
            let (class, current) = if link.is_active {
                ("folio-nav-link active", r#" aria-current="page""#)
            } else {
                ("folio-nav-link", "")
            };
            format!(
                r#"<a href="{}" class="{class}"{current}>{}</a>"#,
                escape_html(&link.path),
                escape_html(&link.label)
            )
        })
        .collect();

    let toggle_label = if nav.is_dark_mode_enabled {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    format!(
        r#"<header class="folio-header"><a href="/" class="folio-brand">{brand}</a><nav class="folio-nav" aria-label="Main navigation">{links}<button type="button" class="folio-theme-toggle" aria-label="{toggle_label}" aria-pressed="{pressed}">{icon}</button></nav></header>"#,
        brand = escape_html(&nav.brand),
        pressed = nav.is_dark_mode_enabled,
        icon = icons::theme_toggle_icon(nav.is_dark_mode_enabled, accent),
    )
}

/// Social panel markup.
pub fn social_html(panel: &SocialPanelView, accent: &str) -> String {
    let links: String = panel
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="folio-social-link" aria-label="{}">{}</a>"#,
                escape_html(&link.target_url),
                link.kind.label(),
                icons::contact_icon(link.kind, accent)
            )
        })
        .collect();
    format!(r#"<div class="folio-social-links">{links}</div>"#)
}

/// Article markup, including the contents column when present.
pub fn article_html(article: &ArticleView) -> String {
    let mut meta = String::new();
    if let Some(date) = &article.date {
        meta.push_str(&format!(
            r#"<time class="folio-article-date">{}</time>"#,
            escape_html(date)
        ));
    }
    meta.push_str(&format!(
        r#"<span class="folio-article-reading-time">{} min read</span>"#,
        article.time_to_read
    ));
    for tag in &article.tags {
        meta.push_str(&format!(r#"<span class="folio-tag">{}</span>"#, escape_html(tag)));
    }

    format!(
        r#"<div class="folio-article-wrapper"><article class="folio-markdown-container"><h1 class="folio-article-title">{title}</h1><div class="folio-article-meta">{meta}</div><div class="markdown-body">{body}</div></article>{toc}</div>"#,
        title = escape_html(&article.title),
        body = article.body_html,
        toc = article.toc.as_ref().map(toc_html).unwrap_or_default(),
    )
}

/// Contents column markup.
pub fn toc_html(toc: &TocView) -> String {
    let items: String = toc
        .entries
        .iter()
        .map(|entry| {
            let href = entry
                .href
                .as_deref()
                .map(|href| format!(r#" href="{}""#, escape_html(href)))
                .unwrap_or_default();
            format!(
                r#"<li class="folio-toc-depth-{}"><a class="folio-toc-link"{href}>{}</a></li>"#,
                entry.depth,
                escape_html(&entry.title)
            )
        })
        .collect();
    format!(
        r#"<nav class="folio-toc" aria-label="Table of contents"><h2 class="folio-toc-title">{}</h2><ul class="folio-toc-list">{items}</ul></nav>"#,
        escape_html(&toc.title)
    )
}

/// One row of the post listing.
pub fn list_item_html(document: &Document) -> String {
    let date = document
        .frontmatter
        .display_date()
        .map(|d| format!(r#" <time>{}</time>"#, escape_html(&d)))
        .unwrap_or_default();
    format!(
        "        <li><a href=\"{}\">{}</a>{date}</li>\n",
        escape_html(&document.route()),
        escape_html(&document.frontmatter.title)
    )
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use folio_core::config::{BuildConfig, SiteConfig, ThemeConfig};
    use folio_core::{ContactInfo, Frontmatter, NavLinkConfig, TableOfContents, TocItem};
    use folio_ui::build_toc;

    use super::*;

    fn test_config() -> Config {
        Config {
            site: SiteConfig {
                title: "Shabaz".to_string(),
                base_url: "https://example.com".to_string(),
                description: Some("Notes & work".to_string()),
                author: None,
            },
            contact_info: ContactInfo {
                email: Some("a@b.com".to_string()),
                github: Some("https://github.com/x".to_string()),
                linkedin: None,
            },
            navigation: vec![
                NavLinkConfig::new("about", "/"),
                NavLinkConfig::new("work", "/work"),
                NavLinkConfig::new("blog", "/blog"),
            ],
            theme: ThemeConfig::default(),
            build: BuildConfig::default(),
        }
    }

    fn test_document() -> Document {
        Document {
            frontmatter: Frontmatter {
                title: "Hello <World>".to_string(),
                ..Frontmatter::default()
            },
            body: "<h2 id=\"intro\">Intro</h2><p>Body</p>".to_string(),
            table_of_contents: TableOfContents {
                items: vec![TocItem::new("#intro", "Intro")],
            },
            slug: "hello".to_string(),
            excerpt: "Intro Body".to_string(),
            time_to_read: 1,
        }
    }

    #[test]
    fn test_generate_post() {
        let generator = HtmlGenerator::new(test_config());
        let html = generator.generate_post(&test_document()).unwrap();

        assert!(html.contains(r#"data-theme="light""#));
        assert!(html.contains("<title>Hello &lt;World&gt; | Shabaz</title>"));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/blog/hello">"#));
        assert!(html.contains(r#"<div class="markdown-body"><h2 id="intro">Intro</h2>"#));
        assert!(html.contains(r##"<a class="folio-toc-link" href="#intro">Intro</a>"##));
        assert!(html.contains(r#"<script id="folio-page-data" type="application/json">"#));
        assert!(html.contains("mailto:a@b.comSubject=Hey%20Shabaz"));
        // A post route matches no navigation link exactly.
        assert!(!html.contains("folio-nav-link active"));
        assert!(!html.contains(r#"<script type="module">"#));
    }

    #[test]
    fn test_generate_post_dark_default() {
        let mut config = test_config();
        config.theme.dark_by_default = true;
        let generator = HtmlGenerator::new(config);
        let html = generator.generate_post(&test_document()).unwrap();
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#"aria-pressed="true""#));
    }

    #[test]
    fn test_with_theme_repaints_and_seeds_client() {
        let generator = HtmlGenerator::new(test_config()).with_theme(ThemeState::DARK);
        let html = generator.generate_post(&test_document()).unwrap();
        assert!(html.contains(r#"data-theme="dark""#));
        assert!(html.contains(r#""dark_by_default":true"#));
    }

    #[test]
    fn test_generate_post_with_client_script() {
        let mut config = test_config();
        config.build.client_script = Some("/pkg/folio_frontend.js".to_string());
        let html = HtmlGenerator::new(config).generate_post(&test_document()).unwrap();
        assert!(html.contains(r#"import init from "/pkg/folio_frontend.js""#));
    }

    #[test]
    fn test_generate_blog_index() {
        let generator = HtmlGenerator::new(test_config());
        let doc = test_document();
        let html = generator.generate_blog_index(&[&doc]).unwrap();

        assert!(html.contains(r#"<a href="/blog" class="folio-nav-link active" aria-current="page">blog</a>"#));
        assert!(html.contains(r#"<li><a href="/blog/hello">Hello &lt;World&gt;</a></li>"#));
        assert!(html.contains(r#"content="Notes &amp; work""#));
        assert!(!html.contains("folio-page-data"));
    }

    #[test]
    fn test_article_without_toc() {
        let article = ArticleView::new("Plain", "<p>x</p>", build_toc(&[]), ThemeState::LIGHT);
        let html = article_html(&article);
        assert!(!html.contains("folio-toc"));
    }

    #[test]
    fn test_toc_entry_without_anchor_has_no_href() {
        let toc = TocView {
            title: "Table of Contents".to_string(),
            entries: vec![folio_ui::TocEntry {
                title: "Loose".to_string(),
                href: None,
                depth: 1,
            }],
        };
        assert!(toc_html(&toc).contains(r#"<a class="folio-toc-link">Loose</a>"#));
    }

    #[test]
    fn test_output_path() {
        let generator = HtmlGenerator::new(test_config());
        let path = generator.output_path(&test_document(), Path::new("public"));
        assert_eq!(path, Path::new("public/blog/hello/index.html"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    }
}
