//! Blog post layout: title, metadata, rendered body and contents column.

use folio_core::{Document, ThemeState};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::toc::{TableOfContents, TocView, build_toc};

/// Everything a post page renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleView {
    /// Post title.
    pub title: String,

    /// Pre-rendered HTML body.
    pub body_html: String,

    /// Human-readable publication date.
    #[serde(default)]
    pub date: Option<String>,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub time_to_read: u32,

    /// Post tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Contents section; absent when the post has no headings.
    #[serde(default)]
    pub toc: Option<TocView>,

    /// Theme captured when the view was built.
    #[serde(default)]
    pub theme: ThemeState,
}

impl ArticleView {
    /// Build from the parts a post template needs.
    pub fn new(
        title: impl Into<String>,
        body_html: impl Into<String>,
        toc: Option<TocView>,
        theme: ThemeState,
    ) -> Self {
        Self {
            title: title.into(),
            body_html: body_html.into(),
            toc,
            theme,
            ..Self::default()
        }
    }

    /// Build from a parsed document.
    pub fn from_document(document: &Document, theme: ThemeState) -> Self {
        Self {
            date: document.frontmatter.display_date(),
            time_to_read: document.time_to_read,
            tags: document.frontmatter.tags.clone(),
            ..Self::new(
                document.frontmatter.title.clone(),
                document.body.clone(),
                build_toc(&document.headings()),
                theme,
            )
        }
    }
}

/// Post page body.
#[component]
pub fn PostTemplate(
    /// Post to render.
    #[prop(into)]
    article: Signal<ArticleView>,
) -> impl IntoView {
    let title = Memo::new(move |_| article.get().title);
    let body = Memo::new(move |_| article.get().body_html);
    let toc = Memo::new(move |_| article.get().toc);

    view! {
      <div class="folio-article-wrapper">
        <article class="folio-markdown-container">
          <h1 class="folio-article-title">{move || title.get()}</h1>
          <ArticleMeta article=article />
          <div class="markdown-body" inner_html=move || body.get()></div>
        </article>
        {move || toc.get().map(|toc| view! { <TableOfContents toc=toc /> })}
      </div>
    }
}

/// Date, reading time and tags.
#[component]
pub fn ArticleMeta(
    /// Post the metadata belongs to.
    article: Signal<ArticleView>,
) -> impl IntoView {
    view! {
      <div class="folio-article-meta">
        {move || article.get().date.map(|date| view! { <time class="folio-article-date">{date}</time> })}
        <span class="folio-article-reading-time">
          {move || article.get().time_to_read} " min read"
        </span>
        <For
          each=move || article.get().tags
          key=|tag| tag.clone()
          children=move |tag| view! { <span class="folio-tag">{tag}</span> }
        />

      </div>
    }
}
