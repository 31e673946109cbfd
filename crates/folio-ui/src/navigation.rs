//! Site header: brand, navigation links and the theme toggle.

use folio_core::NavLinkConfig;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::theme::{DarkModeSwitch, ThemeController};

/// A resolved navigation link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigationLink {
    /// Display label.
    pub label: String,

    /// Route the link points at.
    pub path: String,

    /// Whether this link matches the current route.
    #[serde(default)]
    pub is_active: bool,
}

impl NavigationLink {
    /// Create an inactive link.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            is_active: false,
        }
    }

    /// Set the active flag.
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}

/// Resolve configured links against the current route.
///
/// Matching is exact string equality: `/blog/my-post` does not activate
/// `/blog`. If several links share a path only the first one is active.
pub fn resolve_navigation(links: &[NavLinkConfig], route: &str) -> Vec<NavigationLink> {
    let mut matched = false;
    links
        .iter()
        .map(|link| {
            let is_active = !matched && link.path == route;
            matched |= is_active;
            NavigationLink::new(&link.label, &link.path).with_active(is_active)
        })
        .collect()
}

/// Everything the header renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavBarView {
    /// Site title shown as the home link.
    pub brand: String,

    /// Links in configured order.
    pub links: Vec<NavigationLink>,

    /// Theme the header was built for.
    pub is_dark_mode_enabled: bool,
}

impl NavBarView {
    /// Build the header for a route and theme.
    pub fn build(
        brand: impl Into<String>,
        links: &[NavLinkConfig],
        route: &str,
        is_dark_mode_enabled: bool,
    ) -> Self {
        Self {
            brand: brand.into(),
            links: resolve_navigation(links, route),
            is_dark_mode_enabled,
        }
    }

    /// The active link, if the route matches one.
    pub fn active(&self) -> Option<&NavigationLink> {
        self.links.iter().find(|link| link.is_active)
    }
}

/// Fixed site header.
#[component]
pub fn Header(
    /// Header contents.
    #[prop(into)]
    nav: Signal<NavBarView>,
    /// Theme toggled by the switch.
    theme: ThemeController,
    /// Accent colour for the toggle icon.
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    view! {
      <header class="folio-header">
        <a href="/" class="folio-brand">
          {move || nav.get().brand}
        </a>
        <nav class="folio-nav" aria-label="Main navigation">
          <For
            each=move || nav.get().links
            key=|link| (link.path.clone(), link.label.clone(), link.is_active)
            children=move |link| {
              let current = link.is_active.then_some("page");
              view! {
                <a
                  href=link.path.clone()
                  class="folio-nav-link"
                  class:active=link.is_active
                  aria-current=current
                >
                  {link.label.clone()}
                </a>
              }
            }
          />

          <DarkModeSwitch theme=theme accent=accent />
        </nav>
      </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Vec<NavLinkConfig> {
        vec![
            NavLinkConfig::new("about", "/"),
            NavLinkConfig::new("work", "/work"),
            NavLinkConfig::new("blog", "/blog"),
        ]
    }

    #[test]
    fn test_exact_match_is_active() {
        let resolved = resolve_navigation(&links(), "/blog");
        let active: Vec<_> = resolved.iter().filter(|l| l.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "blog");
    }

    #[test]
    fn test_nested_route_activates_nothing() {
        let resolved = resolve_navigation(&links(), "/blog/my-post");
        assert!(resolved.iter().all(|l| !l.is_active));
    }

    #[test]
    fn test_root_only_matches_root() {
        let resolved = resolve_navigation(&links(), "/");
        assert!(resolved[0].is_active);
        assert!(!resolved[1].is_active);
        assert!(!resolved[2].is_active);
    }

    #[test]
    fn test_order_is_preserved() {
        let resolved = resolve_navigation(&links(), "/work");
        let labels: Vec<_> = resolved.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["about", "work", "blog"]);
    }

    #[test]
    fn test_duplicate_paths_activate_first_only() {
        let mut config = links();
        config.push(NavLinkConfig::new("writing", "/blog"));
        let resolved = resolve_navigation(&config, "/blog");
        assert_eq!(resolved.iter().filter(|l| l.is_active).count(), 1);
        assert!(resolved[2].is_active);
        assert!(!resolved[3].is_active);
    }

    #[test]
    fn test_nav_bar_view() {
        let nav = NavBarView::build("Shabaz", &links(), "/work", true);
        assert_eq!(nav.brand, "Shabaz");
        assert!(nav.is_dark_mode_enabled);
        assert_eq!(nav.active().map(|l| l.path.as_str()), Some("/work"));
    }

    #[test]
    fn test_navigation_link_serialization() {
        let link = NavigationLink::new("blog", "/blog").with_active(true);
        let json = serde_json::to_string(&link).unwrap();
        assert!(json.contains("\"label\":\"blog\""));
        assert!(json.contains("\"is_active\":true"));
    }
}
