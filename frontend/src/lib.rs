//! wasm entry point for the Folio client.

use app::App;
use folio_ui::ROOT_ID;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, prelude::wasm_bindgen};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    // Without page data the static markup stays as the generator wrote it.
    let Some(input) = app::load_page_input() else {
        log::warn!("no page data found; leaving static markup in place");
        return;
    };

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(ROOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <App input=input /> }).forget();
        }
        None => {
            log::warn!("#{ROOT_ID} not found, mounting to body");
            leptos::mount::mount_to_body(move || view! { <App input=input /> });
        }
    }
}
