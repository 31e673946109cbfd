//! Whole-page render tree.
//!
//! [`PageView::build`] is a pure function of `(document, theme, route)` plus
//! site chrome. The static generator calls it once per page; the browser
//! client calls it again whenever the theme or route changes.

use folio_core::{Config, ContactInfo, Document, NavLinkConfig, ThemeState};
use serde::{Deserialize, Serialize};

use crate::article::ArticleView;
use crate::navigation::NavBarView;
use crate::social::SocialPanelView;
use crate::style::stylesheet;

/// Id of the `<script type="application/json">` element carrying [`PageInput`].
pub const PAGE_DATA_ID: &str = "folio-page-data";

/// Id of the element the page is rendered into.
pub const ROOT_ID: &str = "folio-root";

/// Site-wide parts of every page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteChrome {
    /// Site title.
    pub title: String,
    /// Header links.
    pub navigation: Vec<NavLinkConfig>,
    /// Social panel contacts.
    pub contact_info: ContactInfo,
    /// Accent colour.
    pub accent_colour: String,
    /// Theme used when the reader has no saved preference.
    pub dark_by_default: bool,
}

impl SiteChrome {
    /// Extract the chrome from site configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.site.title.clone(),
            navigation: config.navigation.clone(),
            contact_info: config.contact_info.clone(),
            accent_colour: config.theme.accent_colour.clone(),
            dark_by_default: config.theme.dark_by_default,
        }
    }

    /// Theme used before the reader makes a choice.
    pub fn default_theme(&self) -> ThemeState {
        if self.dark_by_default {
            ThemeState::DARK
        } else {
            ThemeState::LIGHT
        }
    }
}

/// Everything needed to rebuild a page in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageInput {
    /// Site chrome.
    pub chrome: SiteChrome,
    /// The post shown on the page.
    pub document: Document,
}

impl PageInput {
    /// Serialize for embedding in a page.
    ///
    /// `</` is escaped so the JSON cannot close its `<script>` element early.
    pub fn to_script_json(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }

    /// Parse the embedded JSON.
    pub fn from_script_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// The full render tree of a post page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageView {
    /// Theme every part was built with.
    pub theme: ThemeState,
    /// Accent colour.
    pub accent: String,
    /// Header.
    pub header: NavBarView,
    /// Social link panel.
    pub social: SocialPanelView,
    /// Article body and contents.
    pub article: ArticleView,
}

impl PageView {
    /// Build the page for one theme snapshot.
    ///
    /// The theme is read once by the caller and threaded through every
    /// part, so a single page never mixes light and dark output.
    pub fn build(document: &Document, theme: ThemeState, route: &str, chrome: &SiteChrome) -> Self {
        let dark = theme.is_dark_mode_enabled;
        Self {
            theme,
            accent: chrome.accent_colour.clone(),
            header: NavBarView::build(&chrome.title, &chrome.navigation, route, dark),
            social: SocialPanelView::build(&chrome.contact_info, dark),
            article: ArticleView::from_document(document, theme),
        }
    }

    /// Stylesheet matching this page's theme.
    pub fn stylesheet(&self) -> String {
        stylesheet(self.theme, &self.accent)
    }
}

#[cfg(test)]
mod tests {
    use folio_core::{Frontmatter, TableOfContents, TocItem};

    use super::*;
    use crate::social::ContactKind;

    fn chrome() -> SiteChrome {
        SiteChrome {
            title: "Shabaz".to_string(),
            navigation: vec![
                NavLinkConfig::new("about", "/"),
                NavLinkConfig::new("work", "/work"),
                NavLinkConfig::new("blog", "/blog"),
            ],
            contact_info: ContactInfo {
                email: Some("a@b.com".to_string()),
                github: Some("https://github.com/x".to_string()),
                linkedin: None,
            },
            accent_colour: "#f07167".to_string(),
            dark_by_default: false,
        }
    }

    fn document() -> Document {
        Document {
            frontmatter: Frontmatter {
                title: "Post </script>".to_string(),
                ..Frontmatter::default()
            },
            body: "<h2 id=\"a\">A</h2>".to_string(),
            table_of_contents: TableOfContents {
                items: vec![TocItem::new("#a", "A")],
            },
            slug: "post".to_string(),
            excerpt: String::new(),
            time_to_read: 1,
        }
    }

    #[test]
    fn test_page_is_consistent_with_theme() {
        let page = PageView::build(&document(), ThemeState::DARK, "/blog/post", &chrome());
        assert!(page.header.is_dark_mode_enabled);
        assert!(page.social.is_dark_mode_enabled);
        assert_eq!(page.article.theme, ThemeState::DARK);
        assert!(page.stylesheet().contains("#2d2d2d"));
    }

    #[test]
    fn test_post_route_activates_no_nav_link() {
        let page = PageView::build(&document(), ThemeState::LIGHT, "/blog/post", &chrome());
        assert!(page.header.active().is_none());

        let page = PageView::build(&document(), ThemeState::LIGHT, "/blog", &chrome());
        assert_eq!(page.header.active().map(|l| l.label.as_str()), Some("blog"));
    }

    #[test]
    fn test_page_social_links() {
        let page = PageView::build(&document(), ThemeState::LIGHT, "/", &chrome());
        let kinds: Vec<_> = page.social.links.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [ContactKind::Github, ContactKind::Email]);
    }

    #[test]
    fn test_script_json_is_embeddable() {
        let input = PageInput {
            chrome: chrome(),
            document: document(),
        };
        let json = input.to_script_json().unwrap();
        assert!(!json.contains("</script>"));
        assert_eq!(PageInput::from_script_json(&json).unwrap(), input);
    }

    #[test]
    fn test_default_theme() {
        let mut chrome = chrome();
        assert_eq!(chrome.default_theme(), ThemeState::LIGHT);
        chrome.dark_by_default = true;
        assert_eq!(chrome.default_theme(), ThemeState::DARK);
    }
}
