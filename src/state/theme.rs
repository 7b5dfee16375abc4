//! Visual theme selection and persistence.
//!
//! A theme is a fixed set of class tokens on the document root. Neon and
//! gradient are variants layered on top of the dark base.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::ACTIVE_CLASS;
use crate::util::dom::ClassTarget;
use crate::util::storage::PreferenceStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Neon,
    Gradient,
}

/// Every class token any theme may place on the root.
pub const THEME_CLASSES: &[&str] = &["light", "dark", "theme-neon", "theme-gradient"];

impl Theme {
    pub const ALL: [Self; 4] = [Self::Dark, Self::Light, Self::Neon, Self::Gradient];

    /// Name used in storage and in button `data-theme` attributes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Neon => "neon",
            Self::Gradient => "gradient",
        }
    }

    /// Root class tokens for this theme.
    #[must_use]
    pub fn class_tokens(self) -> &'static [&'static str] {
        match self {
            Self::Dark => &["dark"],
            Self::Light => &["light"],
            Self::Neon => &["dark", "theme-neon"],
            Self::Gradient => &["dark", "theme-gradient"],
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("unknown theme: {0:?}")]
    Unknown(String),
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str() == name)
            .ok_or_else(|| ThemeError::Unknown(name.to_owned()))
    }
}

/// Replace whatever theme classes `root` carries with those of `theme`.
pub fn apply_root_classes(root: &impl ClassTarget, theme: Theme) {
    for class in THEME_CLASSES {
        root.remove_class(class);
    }
    for class in theme.class_tokens() {
        root.add_class(class);
    }
}

/// Mark exactly the buttons whose declared theme is `theme` as active.
///
/// Each button is paired with its `data-theme` attribute value.
pub fn sync_buttons<B: ClassTarget>(buttons: &[(B, Option<String>)], theme: Theme) {
    for (button, declared) in buttons {
        button.set_class(ACTIVE_CLASS, declared.as_deref() == Some(theme.as_str()));
    }
}

/// Current theme plus the store it is persisted to.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Restore the persisted theme, or `fallback` when nothing usable is stored.
    pub fn load(store: S, key: &str, fallback: Theme) -> Self {
        let current = match store.load(key) {
            Some(name) => name.parse().unwrap_or_else(|err: ThemeError| {
                log::warn!("ignoring stored theme: {err}");
                fallback
            }),
            None => fallback,
        };
        Self { store, key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Select `theme` and persist it.
    pub fn select(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(&self.key, theme.as_str());
        theme
    }

    /// Select a theme by name. Unknown names leave the current theme in place.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unknown`] when `name` is not a theme.
    pub fn select_named(&mut self, name: &str) -> Result<Theme, ThemeError> {
        let theme = name.parse()?;
        Ok(self.select(theme))
    }

    /// Render the current theme onto the root and selector buttons.
    pub fn render<R: ClassTarget, B: ClassTarget>(&self, root: &R, buttons: &[(B, Option<String>)]) {
        apply_root_classes(root, self.current);
        sync_buttons(buttons, self.current);
    }

    /// Select by name, persist, and render. Unknown names change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unknown`] when `name` is not a theme.
    pub fn set_theme<R: ClassTarget, B: ClassTarget>(
        &mut self,
        name: &str,
        root: &R,
        buttons: &[(B, Option<String>)],
    ) -> Result<Theme, ThemeError> {
        let theme = self.select_named(name)?;
        self.render(root, buttons);
        Ok(theme)
    }
}
