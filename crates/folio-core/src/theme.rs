//! Theme state and the holder that owns it.
//!
//! [`ThemeHolder`] is the only writer of [`ThemeState`]. Components receive a
//! `&dyn ThemeAccess` (or a type implementing it) and never mutate the state
//! directly; toggling goes through [`ThemeAccess::toggle_theme`].

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

use serde::{Deserialize, Serialize};

/// Visual presentation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light mode.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl ThemeMode {
    /// Name used in `data-theme` attributes and persisted preferences.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted preference.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme value. Cheap to copy; every render captures one snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeState {
    /// Whether dark mode is active.
    pub is_dark_mode_enabled: bool,
}

impl ThemeState {
    /// Light mode state.
    pub const LIGHT: Self = Self {
        is_dark_mode_enabled: false,
    };

    /// Dark mode state.
    pub const DARK: Self = Self {
        is_dark_mode_enabled: true,
    };

    /// State for a given mode.
    pub const fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::LIGHT,
            ThemeMode::Dark => Self::DARK,
        }
    }

    /// The mode this state represents.
    pub const fn mode(self) -> ThemeMode {
        if self.is_dark_mode_enabled {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// The opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        Self {
            is_dark_mode_enabled: !self.is_dark_mode_enabled,
        }
    }
}

/// Read access to the theme plus the single permitted mutation.
pub trait ThemeAccess {
    /// Current theme snapshot.
    fn theme(&self) -> ThemeState;

    /// Flip between light and dark.
    fn toggle_theme(&self);

    /// Shorthand for `self.theme().is_dark_mode_enabled`.
    fn is_dark_mode_enabled(&self) -> bool {
        self.theme().is_dark_mode_enabled
    }
}

/// Where a theme preference survives between sessions.
pub trait PreferenceStore {
    /// Previously saved mode, if any.
    fn load(&self) -> Option<ThemeMode>;

    /// Persist the given mode.
    fn save(&self, mode: ThemeMode);
}

/// In-process preference store, mostly useful for tests and static builds.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Cell<Option<ThemeMode>>,
}

impl MemoryPreferenceStore {
    /// Create a store with an optional pre-existing preference.
    pub fn new(saved: Option<ThemeMode>) -> Self {
        Self {
            saved: Cell::new(saved),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<ThemeMode> {
        self.saved.get()
    }

    fn save(&self, mode: ThemeMode) {
        self.saved.set(Some(mode));
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn load(&self) -> Option<ThemeMode> {
        (**self).load()
    }

    fn save(&self, mode: ThemeMode) {
        (**self).save(mode);
    }
}

/// Handle returned by [`ThemeHolder::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(ThemeState)>;

/// Owner of the session's theme state.
///
/// Single-threaded by construction (`!Send`): the toggle and every read
/// happen on the UI thread, so no locking is involved.
pub struct ThemeHolder {
    state: Cell<ThemeState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
    store: Option<Box<dyn PreferenceStore>>,
}

impl fmt::Debug for ThemeHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeHolder")
            .field("state", &self.state.get())
            .field("listeners", &self.listeners.borrow().len())
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

impl Default for ThemeHolder {
    fn default() -> Self {
        Self::new(ThemeState::LIGHT)
    }
}

impl ThemeHolder {
    /// Create a holder starting from `initial`, without persistence.
    pub fn new(initial: ThemeState) -> Self {
        Self {
            state: Cell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            store: None,
        }
    }

    /// Create a holder backed by a preference store.
    ///
    /// A persisted preference wins over `fallback`.
    pub fn with_store(store: impl PreferenceStore + 'static, fallback: ThemeState) -> Self {
        let initial = store.load().map(ThemeState::from_mode).unwrap_or(fallback);
        tracing::debug!(mode = %initial.mode(), "theme state initialised");
        Self {
            store: Some(Box::new(store)),
            ..Self::new(initial)
        }
    }

    /// Register a listener called synchronously after every toggle.
    pub fn subscribe(&self, listener: impl Fn(ThemeState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, state: ThemeState) {
        // Snapshot so listeners may (un)subscribe while being notified.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

impl ThemeAccess for ThemeHolder {
    fn theme(&self) -> ThemeState {
        self.state.get()
    }

    fn toggle_theme(&self) {
        let next = self.state.get().toggled();
        self.state.set(next);
        if let Some(store) = &self.store {
            store.save(next.mode());
        }
        tracing::debug!(mode = %next.mode(), "theme toggled");
        self.notify(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let holder = ThemeHolder::default();
        assert!(!holder.is_dark_mode_enabled());
        assert_eq!(holder.theme().mode(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_parity() {
        for initial in [ThemeState::LIGHT, ThemeState::DARK] {
            for n in 0..7 {
                let holder = ThemeHolder::new(initial);
                for _ in 0..n {
                    holder.toggle_theme();
                }
                let expected = initial.is_dark_mode_enabled ^ (n % 2 == 1);
                assert_eq!(holder.is_dark_mode_enabled(), expected, "after {n} toggles");
            }
        }
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let holder = ThemeHolder::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        holder.subscribe(move |state| first.borrow_mut().push(("header", state)));
        let second = Rc::clone(&seen);
        holder.subscribe(move |state| second.borrow_mut().push(("social", state)));

        holder.toggle_theme();

        assert_eq!(
            *seen.borrow(),
            vec![("header", ThemeState::DARK), ("social", ThemeState::DARK)]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let holder = ThemeHolder::default();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let id = holder.subscribe(move |_| counter.set(counter.get() + 1));

        holder.toggle_theme();
        assert!(holder.unsubscribe(id));
        assert!(!holder.unsubscribe(id));
        holder.toggle_theme();

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_persisted_preference_wins() {
        let store = MemoryPreferenceStore::new(Some(ThemeMode::Dark));
        let holder = ThemeHolder::with_store(store, ThemeState::LIGHT);
        assert!(holder.is_dark_mode_enabled());
    }

    #[test]
    fn test_toggle_persists() {
        let store = Rc::new(MemoryPreferenceStore::default());
        let holder = ThemeHolder::with_store(Rc::clone(&store), ThemeState::LIGHT);
        assert_eq!(store.load(), None);

        holder.toggle_theme();
        assert_eq!(store.load(), Some(ThemeMode::Dark));
        holder.toggle_theme();
        assert_eq!(store.load(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ThemeMode::from_name("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name(" light "), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("sepia"), None);
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
