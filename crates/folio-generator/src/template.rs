//! Page shells with `{{ name }}` and `{{ name? }}` placeholders.

use std::collections::HashMap;

use thiserror::Error;

/// Failure to turn a template and its variables into markup.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A `{{ name }}` placeholder had no value.
    #[error("template '{template}' needs variable '{name}'")]
    MissingVariable { template: String, name: String },

    /// No template registered under this name.
    #[error("no template named '{0}'")]
    NotFound(String),

    /// Malformed placeholder.
    #[error("template '{template}': {message}")]
    InvalidSyntax { template: String, message: String },
}

/// Result type for template operations.
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Values available to placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing an earlier value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Chainable [`insert`](Self::insert).
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Chainable insert that leaves `key` unset for `None`.
    #[must_use]
    pub fn with_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_var(key, value),
            None => self,
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }
}

/// Piece of template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Slot { name: &'a str, optional: bool },
}

/// Split `source` into literal text and placeholders.
fn segments(source: &str) -> Segments<'_> {
    Segments { rest: source }
}

struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = std::result::Result<Segment<'a>, &'static str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(open) = self.rest.find("{{") else {
            let text = std::mem::take(&mut self.rest);
            return Some(Ok(Segment::Text(text)));
        };
        if open > 0 {
            let (text, rest) = self.rest.split_at(open);
            self.rest = rest;
            return Some(Ok(Segment::Text(text)));
        }

        let Some(close) = self.rest.find("}}") else {
            self.rest = "";
            return Some(Err("unclosed {{ delimiter"));
        };
        let inner = self.rest[2..close].trim();
        self.rest = &self.rest[close + 2..];

        let (name, optional) = match inner.strip_suffix('?') {
            Some(name) => (name.trim_end(), true),
            None => (inner, false),
        };
        if name.is_empty() {
            return Some(Err("empty placeholder"));
        }
        Some(Ok(Segment::Slot { name, optional }))
    }
}

/// Named template source.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    content: String,
}

impl Template {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fill every placeholder from `context`.
    ///
    /// Values are copied verbatim; a value containing `{{` is not expanded.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::with_capacity(self.content.len());
        for segment in segments(&self.content) {
            let segment = segment.map_err(|message| TemplateError::InvalidSyntax {
                template: self.name.clone(),
                message: message.to_string(),
            })?;
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot { name, optional } => match context.get(name) {
                    Some(value) => out.push_str(value),
                    None if optional => {}
                    None => {
                        return Err(TemplateError::MissingVariable {
                            template: self.name.clone(),
                            name: name.to_string(),
                        });
                    }
                },
            }
        }
        Ok(out)
    }
}

/// Templates by name, preloaded with the page shells.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Template>,
}

impl TemplateRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::default();
        for (name, source) in [
            ("base", DEFAULT_BASE_TEMPLATE),
            ("page", DEFAULT_PAGE_TEMPLATE),
            ("list", DEFAULT_LIST_TEMPLATE),
        ] {
            registry.register(Template::new(name, source));
        }
        registry
    }

    /// Add `template`, replacing one with the same name.
    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.name.clone(), template);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        self.get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?
            .render(context)
    }
}

/// Document shell.
pub const DEFAULT_BASE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en" data-theme="{{ theme }}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}{{ site_title_suffix? }}</title>
    <meta name="description" content="{{ description? }}">
    <meta name="author" content="{{ author? }}">
    <link rel="canonical" href="{{ canonical_url }}">
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <div id="folio-root">
{{ body }}
    </div>
    <footer class="folio-footer">&copy; {{ year }} {{ site_title }}</footer>
    {{ page_data? }}
    {{ client_script? }}
</body>
</html>"#;

/// Header, social panel and main column.
pub const DEFAULT_PAGE_TEMPLATE: &str = r#"{{ header }}
{{ social }}
<main class="folio-main">
{{ main }}
</main>"#;

/// Post listing.
pub const DEFAULT_LIST_TEMPLATE: &str = r#"<section class="folio-markdown-container folio-post-list">
    <h1 class="folio-article-title">{{ title }}</h1>
    <ul>
{{ items }}
    </ul>
</section>"#;
