//! Supported locales and resolution.

use serde::{Deserialize, Serialize};

/// A selectable language/string-set identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the base locale.
    #[default]
    En,
    /// Russian.
    Ru,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// Parse an exact locale code.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// Match a browser-style language hint (e.g., `"ru-RU"`) against
    /// the supported set by prefix.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let hint = hint.to_lowercase();
        if hint.starts_with("ru") {
            Some(Locale::Ru)
        } else if hint.starts_with("en") {
            Some(Locale::En)
        } else {
            None
        }
    }

    /// All supported locales.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Ru]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exact_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ru"), Some(Locale::Ru));
        assert_eq!(Locale::parse("de"), None);
        assert_eq!(Locale::parse("EN"), None, "selector values are lowercase");
    }

    #[test]
    fn hint_matches_by_prefix() {
        assert_eq!(Locale::from_hint("ru-RU"), Some(Locale::Ru));
        assert_eq!(Locale::from_hint("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_hint("fr-FR"), None);
    }
}
