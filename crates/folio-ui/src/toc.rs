//! Article table of contents.

use folio_core::HeadingNode;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Title rendered above the contents list.
pub const TOC_TITLE: &str = "Table of Contents";

/// One clickable contents entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading text.
    pub title: String,

    /// In-page link; `None` when the heading has no anchor.
    pub href: Option<String>,

    /// Nesting depth, 1 for top-level entries.
    pub depth: u8,
}

/// Rendered contents section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TocView {
    /// Section title.
    pub title: String,

    /// Entries in document order.
    pub entries: Vec<TocEntry>,
}

/// Build the contents section for a flat heading list.
///
/// Entries keep the order and count of `headings`. An empty list yields
/// `None` so callers render no section at all.
pub fn build_toc(headings: &[HeadingNode]) -> Option<TocView> {
    if headings.is_empty() {
        return None;
    }
    let entries = headings
        .iter()
        .map(|heading| TocEntry {
            title: heading.title.clone(),
            href: (!heading.anchor_url.is_empty()).then(|| heading.anchor_url.clone()),
            depth: heading.depth,
        })
        .collect();
    Some(TocView {
        title: TOC_TITLE.to_string(),
        entries,
    })
}

/// Element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scroll to the element `href` names and record it in history.
///
/// Returns `false` without side effects when the target does not exist.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = anchor_target(href) else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        log::debug!("no element for anchor {href}");
        return false;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(history) = window.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(href));
    }
    true
}

/// Contents column next to the article.
#[component]
pub fn TableOfContents(
    /// Section to render.
    toc: TocView,
) -> impl IntoView {
    view! {
      <nav class="folio-toc" aria-label="Table of contents">
        <h2 class="folio-toc-title">{toc.title}</h2>
        <ul class="folio-toc-list">
          {toc.entries.into_iter().map(|entry| view! { <TocLink entry=entry /> }).collect_view()}
        </ul>
      </nav>
    }
}

#[component]
fn TocLink(entry: TocEntry) -> impl IntoView {
    let depth_class = format!("folio-toc-depth-{}", entry.depth);
    let target = entry.href.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if let Some(href) = target.as_deref() {
            scroll_to_anchor(href);
        }
    };

    view! {
      <li class=depth_class>
        <a href=entry.href class="folio-toc-link" on:click=on_click>
          {entry.title}
        </a>
      </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_headings_render_nothing() {
        assert_eq!(build_toc(&[]), None);
    }

    #[test]
    fn test_entries_preserve_order_and_count() {
        let headings = vec![
            HeadingNode::new("Intro", "#intro", 1),
            HeadingNode::new("Details", "#details", 2),
            HeadingNode::new("Outro", "#outro", 1),
        ];
        let toc = build_toc(&headings).unwrap();
        assert_eq!(toc.title, "Table of Contents");
        assert_eq!(toc.entries.len(), 3);
        let titles: Vec<_> = toc.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Intro", "Details", "Outro"]);
        assert_eq!(toc.entries[1].depth, 2);
        assert_eq!(toc.entries[2].href.as_deref(), Some("#outro"));
    }

    #[test]
    fn test_missing_anchor_has_no_href() {
        let toc = build_toc(&[HeadingNode::new("Loose", "", 1)]).unwrap();
        assert_eq!(toc.entries[0].href, None);
    }

    #[test]
    fn test_empty_title_stays_clickable() {
        let toc = build_toc(&[HeadingNode::new("", "#untitled", 1)]).unwrap();
        assert_eq!(toc.entries.len(), 1);
        assert_eq!(toc.entries[0].title, "");
        assert_eq!(toc.entries[0].href.as_deref(), Some("#untitled"));
    }

    #[test]
    fn test_sibling_subheadings_keep_depth() {
        let headings = vec![
            HeadingNode::new("Setup", "#setup", 1),
            HeadingNode::new("Install", "#install", 2),
            HeadingNode::new("Configure", "#configure", 2),
        ];
        let toc = build_toc(&headings).unwrap();
        let depths: Vec<_> = toc.entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, [1, 2, 2]);
        let hrefs: Vec<_> = toc.entries.iter().map(|e| e.href.as_deref()).collect();
        assert_eq!(hrefs, [Some("#setup"), Some("#install"), Some("#configure")]);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#intro"), Some("intro"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("intro"), None);
    }
}
