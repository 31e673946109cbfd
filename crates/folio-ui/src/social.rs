//! Social media link panel.

use folio_core::ContactInfo;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::icons;

/// Suffix appended verbatim to every mail link.
///
/// There is no `?` separator: mail clients receive the literal address
/// `{email}Subject=Hey%20Shabaz`.
pub const MAILTO_SUFFIX: &str = "Subject=Hey%20Shabaz";

/// Kind of contact channel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// GitHub profile.
    Github,
    /// LinkedIn profile.
    Linkedin,
    /// Mail link.
    Email,
}

impl ContactKind {
    /// Display order in the panel.
    pub const ORDER: [ContactKind; 3] = [Self::Github, Self::Linkedin, Self::Email];

    /// Accessible name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Linkedin => "LinkedIn",
            Self::Email => "Email",
        }
    }
}

/// A link the panel renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactLink {
    /// Channel kind.
    pub kind: ContactKind,
    /// Link target.
    pub target_url: String,
}

impl ContactLink {
    /// Build the link for a channel, or `None` when the value is blank.
    pub fn new(kind: ContactKind, value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let target_url = match kind {
            ContactKind::Github | ContactKind::Linkedin => value.to_string(),
            ContactKind::Email => format!("mailto:{value}{MAILTO_SUFFIX}"),
        };
        Some(Self { kind, target_url })
    }
}

/// Contact links in fixed order: GitHub, LinkedIn, Email.
///
/// Missing or blank entries are skipped; the rest keep their relative order.
pub fn resolve_contact_links(info: &ContactInfo) -> Vec<ContactLink> {
    ContactKind::ORDER
        .into_iter()
        .filter_map(|kind| {
            let value = match kind {
                ContactKind::Github => info.github.as_deref(),
                ContactKind::Linkedin => info.linkedin.as_deref(),
                ContactKind::Email => info.email.as_deref(),
            }?;
            ContactLink::new(kind, value)
        })
        .collect()
}

/// Everything the social panel renders.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialPanelView {
    /// Links in display order.
    pub links: Vec<ContactLink>,
    /// Theme the panel was built for.
    pub is_dark_mode_enabled: bool,
}

impl SocialPanelView {
    /// Build the panel from contact details.
    pub fn build(info: &ContactInfo, is_dark_mode_enabled: bool) -> Self {
        Self {
            links: resolve_contact_links(info),
            is_dark_mode_enabled,
        }
    }
}

/// Row or column of contact icons.
#[component]
pub fn SocialMediaLinks(
    /// Panel contents.
    #[prop(into)]
    panel: Signal<SocialPanelView>,
    /// Icon colour.
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    let accent = StoredValue::new(accent);

    view! {
      <div class="folio-social-links">
        <For
          each=move || panel.get().links
          key=|link| link.kind
          children=move |link| {
            let icon = accent.with_value(|accent| icons::contact_icon(link.kind, accent));
            view! {
              <a
                href=link.target_url.clone()
                target="_blank"
                rel="noopener noreferrer"
                class="folio-social-link"
                aria-label=link.kind.label()
                inner_html=icon
              ></a>
            }
          }
        />

      </div>
    }
}
