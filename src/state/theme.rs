//! Light/dark theme preference with an injectable persistence backend.
//!
//! DESIGN
//! ======
//! `ThemeStore` owns the current theme and a [`ThemeStorage`] side channel.
//! Every change goes through [`ThemeStore::apply`], which updates the page
//! attribute, writes the persisted key, and leaves the toggle label derivable
//! from [`ThemeStore::toggle_label`]. Browser storage lives in
//! `util::storage`; tests use [`MemoryStorage`].
//!
//! TRADE-OFFS
//! ==========
//! Persistence failures are logged and otherwise ignored; the in-memory theme
//! still changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Two-valued theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}

/// Errors from a persistence backend.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    /// No storage is reachable in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected a read.
    #[error("storage read failed for {key}: {reason}")]
    Read { key: String, reason: String },

    /// The backend rejected a write.
    #[error("storage write failed for {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key-value persistence used for the theme flag.
pub trait ThemeStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Icon and tooltip for the theme toggle control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleLabel {
    pub icon_class: &'static str,
    pub title: &'static str,
}

#[derive(Clone, Debug)]
pub struct ThemeStore<S> {
    current: Theme,
    key: String,
    storage: S,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Restore the persisted theme (light when missing or unreadable) and apply it.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let initial = match storage.read(&key) {
            Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
                log::warn!("ignoring persisted theme: {err}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference not readable: {err}");
                Theme::default()
            }
        };
        let mut store = Self { current: initial, key, storage };
        store.apply(initial);
        store
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Set the active theme, update the page attribute, and persist it.
    pub fn apply(&mut self, theme: Theme) {
        self.current = theme;
        crate::util::dark_mode::apply(theme);
        if let Err(err) = self.storage.write(&self.key, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        log::info!("theme applied: {theme}");
    }

    /// Flip light/dark and apply the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.flipped();
        self.apply(next);
        next
    }

    pub fn toggle_label(&self) -> ToggleLabel {
        match self.current {
            Theme::Dark => ToggleLabel { icon_class: "fas fa-sun", title: "Switch to Light Mode" },
            Theme::Light => ToggleLabel { icon_class: "fas fa-moon", title: "Switch to Dark Mode" },
        }
    }
}
