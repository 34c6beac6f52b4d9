//! Light/dark theme handling for the Furni storefront.
//!
//! The active theme is a `data-theme` attribute on the document root
//! (and, for CSS-selector compatibility, on `body`), plus an icon
//! class on the `#theme-icon` indicator. The preference persists
//! under a fixed store key; when unset, the system color-scheme
//! signal decides, defaulting to light.

use furni_page::Document;
use furni_store::{keys, StorageBackend, Store};
use serde::{Deserialize, Serialize};

/// Attribute carrying the active theme on root and body.
pub const ATTR_THEME: &str = "data-theme";

/// Id of the toggle indicator icon element.
pub const THEME_ICON_ID: &str = "theme-icon";

const ICON_LIGHT: &str = "bi bi-sun-fill";
const ICON_DARK: &str = "bi bi-moon-stars-fill";

/// The two theme states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn icon_class(&self) -> &'static str {
        match self {
            Theme::Light => ICON_LIGHT,
            Theme::Dark => ICON_DARK,
        }
    }
}

/// Holds the active theme and applies it to the document.
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    /// Resolve the initial theme: persisted preference, then the
    /// system color-scheme signal, then light.
    pub fn init<B: StorageBackend>(store: &Store<B>, prefers_dark: Option<bool>) -> Self {
        let persisted = match store.get::<Theme>(keys::THEME) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted theme");
                None
            }
        };
        let theme = persisted.unwrap_or(match prefers_dark {
            Some(true) => Theme::Dark,
            _ => Theme::Light,
        });
        Self { theme }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark, persist, and re-apply.
    pub fn toggle<B: StorageBackend>(&mut self, store: &mut Store<B>, doc: &mut Document) {
        self.theme = self.theme.flipped();
        tracing::debug!(theme = self.theme.as_str(), "theme toggled");
        if let Err(e) = store.set(keys::THEME, &self.theme) {
            tracing::warn!(error = %e, "theme persist failed, continuing in memory");
        }
        self.apply_to(doc);
    }

    /// Set the theme marker on the root and body elements and update
    /// the indicator icon class. Idempotent.
    pub fn apply_to(&self, doc: &mut Document) {
        doc.root_mut().set_attr(ATTR_THEME, self.theme.as_str());
        if let Some(body) = doc.body_mut() {
            body.set_attr(ATTR_THEME, self.theme.as_str());
        }
        if let Some(icon) = doc.element_by_id_mut(THEME_ICON_ID) {
            icon.set_attr("class", self.theme.icon_class());
        }
    }
}
