//! Content types: parsed documents and their heading hierarchy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::frontmatter::Frontmatter;

/// One node of a document's table of contents, as produced by the content
/// system. Children hold the headings nested under this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocItem {
    /// In-page anchor, e.g. `#getting-started`. May be missing upstream.
    #[serde(default)]
    pub url: Option<String>,

    /// Heading text.
    #[serde(default)]
    pub title: String,

    /// Nested headings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<TocItem>,
}

impl TocItem {
    /// Create a leaf item.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Attach nested items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<TocItem>) -> Self {
        self.items = items;
        self
    }
}

/// Nested table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    /// Top-level headings.
    #[serde(default)]
    pub items: Vec<TocItem>,
}

impl TableOfContents {
    /// Build the nested tree from flat `(depth, anchor, title)` headings.
    ///
    /// Nesting follows depth transitions: a heading becomes a child of the
    /// closest preceding heading with a smaller depth. Skipped levels
    /// (`#` followed by `###`) nest directly, without placeholder nodes.
    pub fn from_flat<I, S, T>(headings: I) -> Self
    where
        I: IntoIterator<Item = (u8, S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        // Stack of open items with their depth; closed items fold into their parent.
        let mut stack: Vec<(u8, TocItem)> = Vec::new();
        let mut roots = Vec::new();

        for (depth, anchor, title) in headings {
            while stack.last().is_some_and(|(open, _)| *open >= depth) {
                if let Some((_, done)) = stack.pop() {
                    attach(&mut stack, &mut roots, done);
                }
            }
            stack.push((depth, TocItem::new(anchor, title)));
        }

        while let Some((_, done)) = stack.pop() {
            attach(&mut stack, &mut roots, done);
        }

        Self { items: roots }
    }

    /// Flatten into heading nodes in document order (pre-order).
    ///
    /// Depth starts at 1 for top-level items. An item without a url yields
    /// a heading with an empty anchor.
    pub fn headings(&self) -> Vec<HeadingNode> {
        let mut out = Vec::new();
        flatten_into(&self.items, 1, &mut out);
        out
    }

    /// Whether there are no headings at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn attach(stack: &mut [(u8, TocItem)], roots: &mut Vec<TocItem>, item: TocItem) {
    match stack.last_mut() {
        Some((_, parent)) => parent.items.push(item),
        None => roots.push(item),
    }
}

fn flatten_into(items: &[TocItem], depth: u8, out: &mut Vec<HeadingNode>) {
    for item in items {
        out.push(HeadingNode {
            title: item.title.clone(),
            anchor_url: item.url.clone().unwrap_or_default(),
            depth,
        });
        flatten_into(&item.items, depth.saturating_add(1), out);
    }
}

/// A heading in document order. Depth implies nesting; there is no parent link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadingNode {
    /// Heading text.
    pub title: String,

    /// In-page anchor (`#id`). Empty when the source had none.
    pub anchor_url: String,

    /// Nesting depth, starting at 1.
    pub depth: u8,
}

impl HeadingNode {
    /// Create a heading node.
    pub fn new(title: impl Into<String>, anchor_url: impl Into<String>, depth: u8) -> Self {
        Self {
            title: title.into(),
            anchor_url: anchor_url.into(),
            depth: depth.max(1),
        }
    }
}

/// A parsed post, as supplied to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Parsed frontmatter.
    pub frontmatter: Frontmatter,

    /// Rendered HTML body.
    pub body: String,

    /// Heading hierarchy.
    #[serde(default)]
    pub table_of_contents: TableOfContents,

    /// URL slug, unique per site.
    pub slug: String,

    /// Plain-text summary for listings and meta tags.
    #[serde(default)]
    pub excerpt: String,

    /// Estimated reading time in minutes.
    #[serde(default)]
    pub time_to_read: u32,
}

impl Document {
    /// Flattened headings in document order.
    pub fn headings(&self) -> Vec<HeadingNode> {
        self.table_of_contents.headings()
    }

    /// Route path of this post.
    pub fn route(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Words per minute assumed for reading time.
const WORDS_PER_MINUTE: usize = 200;

/// Reading time in whole minutes, never less than one.
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    (words / WORDS_PER_MINUTE).max(1) as u32
}

/// Derive a post slug from its path relative to the content directory.
///
/// `posts/hello.md` → `hello`, `hello/index.md` → `hello`.
pub fn slug_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let name = if stem == "index" {
        path.parent()?.file_name()?.to_str()?
    } else {
        stem
    };
    let slug = name.trim().to_lowercase().replace(' ', "-");
    (!slug.is_empty()).then_some(slug)
}

/// Strip HTML tags from content.
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate text at word boundary, respecting UTF-8 character boundaries.
pub fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }

    let truncate_byte_idx = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());

    let truncated = &text[..truncate_byte_idx];

    if let Some(last_space_byte) = truncated.rfind(' ') {
        format!("{}...", &truncated[..last_space_byte])
    } else {
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_nests_by_depth() {
        let toc = TableOfContents::from_flat([
            (1, "#intro", "Intro"),
            (2, "#setup", "Setup"),
            (2, "#usage", "Usage"),
            (3, "#flags", "Flags"),
            (1, "#outro", "Outro"),
        ]);

        assert_eq!(
            toc.items,
            vec![
                TocItem::new("#intro", "Intro").with_items(vec![
                    TocItem::new("#setup", "Setup"),
                    TocItem::new("#usage", "Usage")
                        .with_items(vec![TocItem::new("#flags", "Flags")]),
                ]),
                TocItem::new("#outro", "Outro"),
            ]
        );
    }

    #[test]
    fn test_from_flat_starting_deep() {
        // Posts often start at h2; the first heading still becomes a root.
        let toc = TableOfContents::from_flat([(2, "#a", "A"), (3, "#b", "B"), (2, "#c", "C")]);
        assert_eq!(toc.items.len(), 2);
        assert_eq!(toc.items[0].items, vec![TocItem::new("#b", "B")]);
    }

    #[test]
    fn test_headings_preorder_with_depth() {
        let toc = TableOfContents {
            items: vec![
                TocItem::new("#a", "A").with_items(vec![
                    TocItem::new("#b", "B"),
                    TocItem::new("#c", "C"),
                ]),
            ],
        };

        let depths: Vec<_> = toc.headings().iter().map(|h| h.depth).collect();
        let titles: Vec<_> = toc.headings().into_iter().map(|h| h.title).collect();
        assert_eq!(depths, vec![1, 2, 2]);
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_heading_without_url_has_empty_anchor() {
        let toc = TableOfContents {
            items: vec![TocItem {
                url: None,
                title: "Orphan".to_string(),
                items: vec![],
            }],
        };
        assert_eq!(toc.headings(), vec![HeadingNode::new("Orphan", "", 1)]);
    }

    #[test]
    fn test_toc_deserializes_content_contract() {
        let json = r##"{"items":[{"url":"#one","title":"One","items":[{"url":"#two","title":"Two"}]},{"title":"No link"}]}"##;
        let toc: TableOfContents = serde_json::from_str(json).expect("valid toc json");
        assert_eq!(toc.items.len(), 2);
        assert_eq!(toc.items[0].items[0].url.as_deref(), Some("#two"));
        assert_eq!(toc.items[1].url, None);
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path(Path::new("hello.md")).as_deref(), Some("hello"));
        assert_eq!(
            slug_from_path(Path::new("posts/Hello World.md")).as_deref(),
            Some("hello-world")
        );
        assert_eq!(
            slug_from_path(Path::new("posts/intro/index.md")).as_deref(),
            Some("intro")
        );
        assert_eq!(slug_from_path(Path::new("index.md")), None);
    }

    #[test]
    fn test_document_route() {
        let doc = Document {
            slug: "hello".to_string(),
            ..Default::default()
        };
        assert_eq!(doc.route(), "/blog/hello");
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(""), 1);
        assert_eq!(reading_time(&"word ".repeat(450)), 2);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Hello <strong>World</strong></p>"),
            "Hello World"
        );
        assert_eq!(strip_html("No tags here"), "No tags here");
    }

    #[test]
    fn test_truncate_at_word_boundary() {
        let text = "Hello world this is a test";
        assert_eq!(truncate_at_word_boundary(text, 100), text);
        assert_eq!(truncate_at_word_boundary(text, 11), "Hello...");
        assert_eq!(truncate_at_word_boundary(text, 12), "Hello world...");

        let emoji_text = "Hello 🌟 World 📝 Test";
        assert_eq!(truncate_at_word_boundary(emoji_text, 10), "Hello 🌟...");
    }
}
