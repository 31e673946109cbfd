//! Folio UI Components
//!
//! View models, stylesheets and Leptos components shared by the static
//! generator and the browser client.
//!
//! # Components
//!
//! ## Header
//! - [`Header`] - Brand, navigation links and theme toggle
//! - [`DarkModeSwitch`] - Light/dark toggle button
//!
//! ## Social
//! - [`SocialMediaLinks`] - GitHub, LinkedIn and mail icons
//!
//! ## Article
//! - [`PostTemplate`] - Title, metadata, body and contents column
//! - [`TableOfContents`] - Contents list with smooth in-page scrolling
//!
//! # Example
//!
//! ```ignore
//! use folio_core::ThemeState;
//! use folio_ui::{PageView, SiteChrome};
//!
//! let page = PageView::build(&document, ThemeState::LIGHT, "/blog/hello", &chrome);
//! assert!(page.header.active().is_none());
//! ```

pub mod article;
pub mod icons;
pub mod navigation;
pub mod page;
pub mod social;
pub mod style;
pub mod theme;
pub mod toc;

pub use article::{ArticleMeta, ArticleView, PostTemplate};
pub use navigation::{Header, NavBarView, NavigationLink, resolve_navigation};
pub use page::{PAGE_DATA_ID, PageInput, PageView, ROOT_ID, SiteChrome};
pub use social::{ContactKind, ContactLink, SocialMediaLinks, SocialPanelView, resolve_contact_links};
pub use style::{ArticleLayout, SocialPanelLayout, stylesheet};
pub use theme::{DarkModeSwitch, ThemeController, ThemeStyles};
pub use toc::{TableOfContents, TocEntry, TocView, build_toc};
