//! Markdown parser using pulldown-cmark.

use std::path::Path;

use folio_core::{
    Document, TableOfContents,
    content::{reading_time, slug_from_path, strip_html, truncate_at_word_boundary},
    frontmatter::parse_frontmatter,
};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::{ParserError, Result, slug::AnchorRegistry};

/// Maximum excerpt length in characters.
const EXCERPT_CHARS: usize = 160;

/// HTML body plus the headings found while rendering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedMarkdown {
    /// Rendered HTML.
    pub html: String,

    /// `(depth, anchor, title)` in document order; anchors carry a leading `#`.
    pub headings: Vec<(u8, String, String)>,
}

/// Heading being rendered: where its opening tag goes and what it says.
struct OpenHeading {
    level: u8,
    explicit_id: Option<String>,
    start: usize,
    text: String,
}

/// Markdown parser.
#[derive(Debug)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownParser {
    /// Create a new markdown parser with default options.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        Self { options }
    }

    /// Parse a post. `path` is relative to the content directory and
    /// determines the slug.
    pub fn parse(&self, content: &str, path: &Path) -> Result<Document> {
        let (frontmatter, body) = parse_frontmatter(content, path)?;
        let slug =
            slug_from_path(path).ok_or_else(|| ParserError::InvalidPath(path.to_path_buf()))?;

        let rendered = self.render(&body);
        let table_of_contents = TableOfContents::from_flat(rendered.headings);

        let excerpt = frontmatter.description.clone().unwrap_or_else(|| {
            let plain = strip_html(&rendered.html);
            let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");
            truncate_at_word_boundary(&plain, EXCERPT_CHARS)
        });

        tracing::debug!(
            slug = %slug,
            headings = table_of_contents.headings().len(),
            "parsed markdown post"
        );

        Ok(Document {
            time_to_read: reading_time(&body),
            frontmatter,
            body: rendered.html,
            table_of_contents,
            slug,
            excerpt,
        })
    }

    /// Render markdown to HTML, giving every heading a unique `id`.
    pub fn render(&self, content: &str) -> RenderedMarkdown {
        let parser = Parser::new_ext(content, self.options);
        let mut anchors = AnchorRegistry::new();
        let mut out = RenderedMarkdown::default();
        let html = &mut out.html;

        let mut heading: Option<OpenHeading> = None;
        let mut image: Option<(String, String, String)> = None;
        let mut code_block: Option<(Option<String>, String)> = None;
        let mut in_table_head = false;

        for event in parser {
            // Alt text of an image is collected, not emitted.
            if let Some((_, _, alt)) = image.as_mut() {
                match event {
                    Event::Text(text) | Event::Code(text) => {
                        alt.push_str(&text);
                        continue;
                    }
                    Event::End(TagEnd::Image) => {}
                    _ => continue,
                }
            }

            match event {
                Event::Start(Tag::Heading { level, id, .. }) => {
                    heading = Some(OpenHeading {
                        level: level as u8,
                        explicit_id: id.map(|i| i.to_string()),
                        start: html.len(),
                        text: String::new(),
                    });
                }

                Event::End(TagEnd::Heading(_)) => {
                    if let Some(open) = heading.take() {
                        let anchor = match open.explicit_id {
                            Some(id) => anchors.reserve(id),
                            None => anchors.anchor_for(&open.text),
                        };
                        let level = open.level;
                        html.insert_str(
                            open.start,
                            &format!("<h{level} id=\"{}\">", html_escape(&anchor)),
                        );
                        html.push_str(&format!("</h{level}>\n"));
                        out.headings
                            .push((level, format!("#{anchor}"), open.text.trim().to_string()));
                    }
                }

                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.split_whitespace().next().unwrap_or("").to_string();
                            if lang.is_empty() { None } else { Some(lang) }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block = Some((lang, String::new()));
                }

                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, code)) = code_block.take() {
                        let class = lang
                            .map(|l| format!(" class=\"language-{}\"", html_escape(&l)))
                            .unwrap_or_default();
                        html.push_str(&format!(
                            "<pre><code{class}>{}</code></pre>\n",
                            html_escape(&code)
                        ));
                    }
                }

                Event::Text(text) if code_block.is_some() => {
                    if let Some((_, code)) = code_block.as_mut() {
                        code.push_str(&text);
                    }
                }

                Event::Text(text) => {
                    if let Some(open) = heading.as_mut() {
                        open.text.push_str(&text);
                    }
                    html.push_str(&html_escape(&text));
                }

                Event::Code(code) => {
                    if let Some(open) = heading.as_mut() {
                        open.text.push_str(&code);
                    }
                    html.push_str(&format!("<code>{}</code>", html_escape(&code)));
                }

                Event::Start(Tag::Image {
                    dest_url, title, ..
                }) => {
                    image = Some((dest_url.to_string(), title.to_string(), String::new()));
                }

                Event::End(TagEnd::Image) => {
                    if let Some((src, title, alt)) = image.take() {
                        let title_attr = if title.is_empty() {
                            String::new()
                        } else {
                            format!(" title=\"{}\"", html_escape(&title))
                        };
                        html.push_str(&format!(
                            "<img src=\"{}\" alt=\"{}\"{title_attr} />",
                            html_escape(&src),
                            html_escape(&alt)
                        ));
                    }
                }

                Event::Start(Tag::TableHead) => {
                    in_table_head = true;
                    html.push_str("<thead><tr>");
                }

                Event::End(TagEnd::TableHead) => {
                    in_table_head = false;
                    html.push_str("</tr></thead>\n<tbody>\n");
                }

                Event::Start(Tag::TableCell) => {
                    html.push_str(if in_table_head { "<th>" } else { "<td>" });
                }

                Event::End(TagEnd::TableCell) => {
                    html.push_str(if in_table_head { "</th>" } else { "</td>" });
                }

                Event::SoftBreak => html.push('\n'),

                Event::HardBreak => html.push_str("<br />\n"),

                Event::Start(tag) => html.push_str(&tag_to_html_start(&tag)),

                Event::End(tag) => html.push_str(&tag_to_html_end(&tag)),

                Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&raw),

                Event::FootnoteReference(name) => {
                    let name = html_escape(&name);
                    html.push_str(&format!(
                        "<sup class=\"footnote-ref\"><a href=\"#fn-{name}\">[{name}]</a></sup>"
                    ));
                }

                Event::Rule => html.push_str("<hr />\n"),

                Event::TaskListMarker(checked) => {
                    html.push_str(if checked {
                        "<input type=\"checkbox\" checked disabled />"
                    } else {
                        "<input type=\"checkbox\" disabled />"
                    });
                }

                Event::InlineMath(math) => {
                    html.push_str(&format!(
                        "<span class=\"math inline\">\\({}\\)</span>",
                        html_escape(&math)
                    ));
                }

                Event::DisplayMath(math) => {
                    html.push_str(&format!(
                        "<div class=\"math display\">\\[{}\\]</div>",
                        html_escape(&math)
                    ));
                }
            }
        }

        out
    }
}

/// Convert a pulldown-cmark tag to HTML opening tag.
fn tag_to_html_start(tag: &Tag) -> String {
    match tag {
        Tag::Paragraph => "<p>".to_string(),
        Tag::BlockQuote(_) => "<blockquote>".to_string(),
        Tag::List(Some(start)) => format!("<ol start=\"{start}\">"),
        Tag::List(None) => "<ul>".to_string(),
        Tag::Item => "<li>".to_string(),
        Tag::FootnoteDefinition(name) => {
            format!("<div class=\"footnote\" id=\"fn-{}\">", html_escape(name))
        }
        Tag::Table(_) => "<table>".to_string(),
        Tag::TableRow => "<tr>".to_string(),
        Tag::Emphasis => "<em>".to_string(),
        Tag::Strong => "<strong>".to_string(),
        Tag::Strikethrough => "<del>".to_string(),
        Tag::Link {
            dest_url, title, ..
        } => {
            let title_attr = if title.is_empty() {
                String::new()
            } else {
                format!(" title=\"{}\"", html_escape(title))
            };
            format!("<a href=\"{}\"{title_attr}>", html_escape(dest_url))
        }
        Tag::DefinitionList => "<dl>".to_string(),
        Tag::DefinitionListTitle => "<dt>".to_string(),
        Tag::DefinitionListDefinition => "<dd>".to_string(),
        Tag::Superscript => "<sup>".to_string(),
        Tag::Subscript => "<sub>".to_string(),
        // Rendered by dedicated arms in `render`.
        Tag::Heading { .. }
        | Tag::CodeBlock(_)
        | Tag::Image { .. }
        | Tag::TableHead
        | Tag::TableCell
        | Tag::HtmlBlock
        | Tag::MetadataBlock(_) => String::new(),
    }
}

/// Convert a pulldown-cmark tag end to HTML closing tag.
fn tag_to_html_end(tag: &TagEnd) -> String {
    match tag {
        TagEnd::Paragraph => "</p>\n".to_string(),
        TagEnd::BlockQuote(_) => "</blockquote>\n".to_string(),
        TagEnd::List(true) => "</ol>\n".to_string(),
        TagEnd::List(false) => "</ul>\n".to_string(),
        TagEnd::Item => "</li>\n".to_string(),
        TagEnd::FootnoteDefinition => "</div>\n".to_string(),
        TagEnd::Table => "</tbody>\n</table>\n".to_string(),
        TagEnd::TableRow => "</tr>\n".to_string(),
        TagEnd::Emphasis => "</em>".to_string(),
        TagEnd::Strong => "</strong>".to_string(),
        TagEnd::Strikethrough => "</del>".to_string(),
        TagEnd::Link => "</a>".to_string(),
        TagEnd::DefinitionList => "</dl>\n".to_string(),
        TagEnd::DefinitionListTitle => "</dt>\n".to_string(),
        TagEnd::DefinitionListDefinition => "</dd>\n".to_string(),
        TagEnd::Superscript => "</sup>".to_string(),
        TagEnd::Subscript => "</sub>".to_string(),
        TagEnd::Heading(_)
        | TagEnd::CodeBlock
        | TagEnd::Image
        | TagEnd::TableHead
        | TagEnd::TableCell
        | TagEnd::HtmlBlock
        | TagEnd::MetadataBlock(_) => String::new(),
    }
}

/// Escape HTML special characters.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_post() {
        let parser = MarkdownParser::new();
        let content = r#"---
title: "Test Post"
date: 2024-01-14
tags: [rust]
---

# Hello World

This is a test."#;

        let doc = parser
            .parse(content, Path::new("posts/test-post.md"))
            .unwrap();

        assert_eq!(doc.frontmatter.title, "Test Post");
        assert_eq!(doc.slug, "test-post");
        assert!(doc.body.contains("<h1 id=\"hello-world\">Hello World</h1>"));
        assert!(doc.body.contains("<p>This is a test.</p>"));
        assert_eq!(doc.excerpt, "Hello World This is a test.");
        assert_eq!(doc.time_to_read, 1);
    }

    #[test]
    fn test_description_overrides_excerpt() {
        let parser = MarkdownParser::new();
        let content = "---\ntitle: T\ndescription: Short and sweet\n---\n\nLong body text.";
        let doc = parser.parse(content, Path::new("t.md")).unwrap();
        assert_eq!(doc.excerpt, "Short and sweet");
    }

    #[test]
    fn test_headings_build_nested_toc() {
        let parser = MarkdownParser::new();
        let content = "## Intro\n\ntext\n\n### Details\n\n### More\n\n## Outro\n";
        let doc = parser.parse(content, Path::new("nested.md")).unwrap();

        let toc = &doc.table_of_contents;
        assert_eq!(toc.items.len(), 2);
        assert_eq!(toc.items[0].url.as_deref(), Some("#intro"));
        assert_eq!(toc.items[0].items.len(), 2);
        assert_eq!(toc.items[1].title, "Outro");

        let depths: Vec<_> = doc.headings().iter().map(|h| h.depth).collect();
        assert_eq!(depths, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_duplicate_headings_get_unique_anchors() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("## Setup\n\n## Setup\n");

        let anchors: Vec<_> = rendered.headings.iter().map(|(_, a, _)| a.as_str()).collect();
        assert_eq!(anchors, vec!["#setup", "#setup-1"]);
        assert!(rendered.html.contains("<h2 id=\"setup-1\">Setup</h2>"));
    }

    #[test]
    fn test_explicit_heading_id() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("## Getting started {#start}\n");
        assert_eq!(
            rendered.headings,
            vec![(2, "#start".to_string(), "Getting started".to_string())]
        );
        assert!(rendered.html.contains("id=\"start\""));
    }

    #[test]
    fn test_inline_code_in_heading_text() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("## Using `cargo`\n");
        assert_eq!(rendered.headings[0].2, "Using cargo");
        assert!(rendered.html.contains("<code>cargo</code>"));
    }

    #[test]
    fn test_code_block_is_escaped() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("```rust\nlet v: Vec<u8> = vec![];\n```\n");

        assert!(rendered.html.contains("<pre><code class=\"language-rust\">"));
        assert!(rendered.html.contains("Vec&lt;u8&gt;"));
        assert!(rendered.headings.is_empty());
    }

    #[test]
    fn test_image_alt_text() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("![a *cat*](cat.png \"Cat\")");
        assert!(
            rendered
                .html
                .contains("<img src=\"cat.png\" alt=\"a cat\" title=\"Cat\" />")
        );
    }

    #[test]
    fn test_table_rendering() {
        let parser = MarkdownParser::new();
        let rendered = parser.render(
            r#"| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |"#,
        );

        assert!(rendered.html.contains("<table>"));
        assert!(rendered.html.contains("<thead><tr><th>Header 1</th>"));
        assert!(rendered.html.contains("<td>Cell 1</td>"));
    }

    #[test]
    fn test_task_list() {
        let parser = MarkdownParser::new();
        let rendered = parser.render("- [x] Done\n- [ ] Not done");

        assert!(rendered.html.contains("checkbox"));
        assert!(rendered.html.contains("checked"));
    }

    #[test]
    fn test_no_frontmatter() {
        let parser = MarkdownParser::new();
        let doc = parser
            .parse("# Just Content\n\nNo frontmatter here.", Path::new("plain.md"))
            .unwrap();

        assert!(doc.frontmatter.title.is_empty());
        assert!(doc.body.contains("Just Content"));
    }

    #[test]
    fn test_unusable_path() {
        let parser = MarkdownParser::new();
        let result = parser.parse("# Hi", Path::new("index.md"));
        assert!(matches!(result, Err(ParserError::InvalidPath(_))));
    }
}
