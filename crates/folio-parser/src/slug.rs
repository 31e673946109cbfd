//! Heading anchors.

use std::collections::{HashMap, HashSet};

/// Convert text to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Hands out anchors that are unique within one document.
///
/// A repeated slug gets `-1`, `-2`, ... appended, in order of appearance.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    next_suffix: HashMap<String, usize>,
    used: HashSet<String>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an anchor derived from heading text.
    pub fn anchor_for(&mut self, text: &str) -> String {
        let base = slugify(text);
        let base = if base.is_empty() {
            "section".to_string()
        } else {
            base
        };
        self.reserve(base)
    }

    /// Reserve an explicit anchor (e.g. `{#custom-id}`), suffixing on clash.
    pub fn reserve(&mut self, base: String) -> String {
        let mut n = self.next_suffix.get(&base).copied().unwrap_or(0);
        let mut candidate = if n == 0 {
            base.clone()
        } else {
            format!("{base}-{n}")
        };
        while self.used.contains(&candidate) {
            n += 1;
            candidate = format!("{base}-{n}");
        }
        self.next_suffix.insert(base, n + 1);
        self.used.insert(candidate.clone());
        candidate
    }
}
