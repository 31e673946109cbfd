//! Folio browser client.
//!
//! Reads the page data embedded by the static generator and re-renders the
//! post with live theme switching and smooth in-page navigation.

use folio_core::ThemeAccess;
use folio_ui::{
    Header, PAGE_DATA_ID, PageInput, PageView, PostTemplate, SocialMediaLinks, ThemeController,
    ThemeStyles,
};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{components::Router, hooks::use_location};

/// Root component; `input` comes from [`load_page_input`].
#[component]
pub fn App(input: PageInput) -> impl IntoView {
    provide_meta_context();

    view! {
      <Router>
        <PostPage input=input />
      </Router>
    }
}

/// Post page driven by the embedded [`PageInput`].
#[component]
fn PostPage(input: PageInput) -> impl IntoView {
    let theme = ThemeController::with_local_storage(input.chrome.default_theme());
    let accent = input.chrome.accent_colour.clone();
    let title = format!("{} | {}", input.document.frontmatter.title, input.chrome.title);

    let location = use_location();
    let input = StoredValue::new(input);
    let page = Memo::new(move |_| {
        let route = normalize_route(&location.pathname.get());
        let theme = theme.theme();
        input.with_value(|input| PageView::build(&input.document, theme, &route, &input.chrome))
    });

    view! {
      <Title text=title />
      <ThemeStyles theme=theme accent=accent.clone() />
      <div class="folio-page" data-theme=move || theme.theme().mode().as_str()>
        <Header nav=Signal::derive(move || page.get().header) theme=theme accent=accent.clone() />
        <SocialMediaLinks panel=Signal::derive(move || page.get().social) accent=accent />
        <main class="folio-main">
          <PostTemplate article=Signal::derive(move || page.get().article) />
        </main>
      </div>
    }
}

/// Read the data island written by the generator.
pub fn load_page_input() -> Option<PageInput> {
    let json = web_sys::window()?
        .document()?
        .get_element_by_id(PAGE_DATA_ID)?
        .text_content()?;
    parse_page_data(&json)
}

/// Parse page data, logging and discarding anything malformed.
pub fn parse_page_data(json: &str) -> Option<PageInput> {
    match PageInput::from_script_json(json) {
        Ok(input) => Some(input),
        Err(e) => {
            log::error!("invalid page data: {e}");
            None
        }
    }
}

/// Strip the trailing slash static hosts add to directory URLs.
pub fn normalize_route(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
