//! Localization for the Furni storefront.
//!
//! Static key-to-string tables per locale, a lookup that falls back
//! to the key itself, and an apply pass that substitutes the text
//! and placeholder content of every element tagged with the
//! localization marker attributes.
//!
//! The locale preference persists under a fixed store key; changing
//! it re-applies the document and runs every hook the renderer has
//! registered, so derived text (product cards, cart lines) is
//! recomputed without an ambient global callback.

mod locale;
mod localizer;
mod table;

pub use locale::Locale;
pub use localizer::{LocaleHook, Localizer};
pub use table::StringTable;

/// Marker attribute for localized text content.
pub const ATTR_I18N: &str = "data-i18n";

/// Marker attribute for localized placeholder text.
pub const ATTR_I18N_PLACEHOLDER: &str = "data-i18n-placeholder";
