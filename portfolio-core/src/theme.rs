use crate::store::{KeyValueStore, StoreError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Persisted theme choice. No stored value means "follow the OS".
pub struct ThemePreferences<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ThemePreferences<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Explicit preference, ignoring unrecognised stored values.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(&self.key).and_then(|v| v.parse().ok())
    }

    #[must_use]
    pub fn effective(&self, os_prefers_dark: bool) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_os(os_prefers_dark))
    }

    /// Flip `current`, persist the result and return it.
    ///
    /// # Errors
    ///
    /// Returns the store error when the new value cannot be written.
    pub fn toggle(&self, current: Theme) -> Result<Theme, StoreError> {
        let next = current.toggled();
        self.store.set(&self.key, next.as_str())?;
        Ok(next)
    }

    /// Theme to apply after an OS scheme change, or `None` when an explicit choice wins.
    #[must_use]
    pub fn on_system_change(&self, os_prefers_dark: bool) -> Option<Theme> {
        if self.store.get(&self.key).is_some() {
            None
        } else {
            Some(Theme::from_os(os_prefers_dark))
        }
    }
}
