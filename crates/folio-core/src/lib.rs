//! Folio Core Library
//!
//! Core types, configuration, theme state and error handling shared by the
//! Folio parser, UI components and static generator.

pub mod breakpoint;
pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod theme;

pub use breakpoint::Breakpoint;
pub use config::{Config, ContactInfo, NavLinkConfig};
pub use content::{Document, HeadingNode, TableOfContents, TocItem};
pub use error::{CoreError, Result};
pub use frontmatter::Frontmatter;
pub use theme::{ThemeAccess, ThemeHolder, ThemeMode, ThemeState};
