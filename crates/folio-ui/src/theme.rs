//! Reactive theme state for the browser client.

use std::{fmt, rc::Rc};

use folio_core::theme::PreferenceStore;
use folio_core::{ThemeAccess, ThemeHolder, ThemeMode, ThemeState};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::icons;
use crate::style::stylesheet;

/// localStorage key holding the reader's theme choice.
pub const STORAGE_KEY: &str = "folio-dark-mode";

/// Reactive view of a [`ThemeHolder`].
///
/// The holder stays the single writer and persists the choice; a subscription
/// mirrors every toggle into a signal, so readers of [`ThemeAccess::theme`]
/// inside a reactive scope re-run when the theme flips.
#[derive(Clone, Copy)]
pub struct ThemeController {
    state: RwSignal<ThemeState>,
    holder: StoredValue<Rc<ThemeHolder>, LocalStorage>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state.get_untracked())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Controller starting at `initial`, without persistence.
    pub fn new(initial: ThemeState) -> Self {
        Self::from_holder(ThemeHolder::new(initial))
    }

    /// Controller whose choice survives in `store`.
    ///
    /// A saved preference wins over `fallback`.
    pub fn with_store(store: impl PreferenceStore + 'static, fallback: ThemeState) -> Self {
        Self::from_holder(ThemeHolder::with_store(store, fallback))
    }

    /// Controller that restores and saves the choice in `localStorage`.
    pub fn with_local_storage(fallback: ThemeState) -> Self {
        Self::with_store(LocalStoragePreference, fallback)
    }

    fn from_holder(holder: ThemeHolder) -> Self {
        let state = RwSignal::new(holder.theme());
        let subscription = holder.subscribe(move |theme| state.set(theme));
        let holder = StoredValue::new_local(Rc::new(holder));
        on_cleanup(move || {
            holder.try_with_value(|holder| holder.unsubscribe(subscription));
        });
        Self { state, holder }
    }

    /// Read-only view of the theme signal.
    pub fn signal(&self) -> Signal<ThemeState> {
        self.state.read_only().into()
    }
}

impl ThemeAccess for ThemeController {
    fn theme(&self) -> ThemeState {
        self.state.get()
    }

    fn toggle_theme(&self) {
        self.holder.with_value(|holder| holder.toggle_theme());
        log::debug!("theme switched to {}", self.state.get_untracked().mode());
    }
}

/// Preference store over `window.localStorage`.
///
/// Only meaningful in the browser; storage errors are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreference;

impl LocalStoragePreference {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStoragePreference {
    fn load(&self) -> Option<ThemeMode> {
        let value = Self::storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        ThemeMode::from_name(&value)
    }

    fn save(&self, mode: ThemeMode) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(STORAGE_KEY, mode.as_str()).is_err() {
            log::warn!("could not persist theme preference");
        }
    }
}

/// Button flipping between light and dark mode.
#[component]
pub fn DarkModeSwitch(
    /// Theme to toggle.
    theme: ThemeController,
    /// Icon colour.
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    let is_dark = move || theme.is_dark_mode_enabled();
    let label = move || {
        if is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
      <button
        type="button"
        class="folio-theme-toggle"
        aria-label=label
        aria-pressed=move || is_dark().to_string()
        on:click=move |_| theme.toggle_theme()
        inner_html=move || icons::theme_toggle_icon(is_dark(), &accent)
      ></button>
    }
}

/// `<style>` element regenerated whenever the theme changes.
#[component]
pub fn ThemeStyles(
    /// Theme to follow.
    theme: ThemeController,
    /// Accent colour.
    #[prop(into)]
    accent: String,
) -> impl IntoView {
    view! { <style id="folio-theme-styles">{move || stylesheet(theme.theme(), &accent)}</style> }
}
