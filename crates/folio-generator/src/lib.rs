//! Folio Generator Library
//!
//! Static site generation for Folio.
//!
//! # Modules
//!
//! - [`template`] - HTML template system with variable interpolation
//! - [`html`] - Static markup for the `folio-ui` view models
//! - [`collector`] - Markdown post collection
//! - [`build`] - Build orchestration

pub mod build;
pub mod collector;
pub mod html;
pub mod template;

pub use build::{BuildStats, Builder, GeneratorError, Result};
pub use collector::{ContentCollector, SiteContent};
pub use html::HtmlGenerator;
pub use template::{Template, TemplateContext, TemplateRegistry};
