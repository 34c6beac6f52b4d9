//! Minimal document tree for the Furni storefront.
//!
//! Pages opt elements into behavior via marker attributes
//! (`data-i18n`, `data-i18n-placeholder`, `data-theme`) and fixed
//! ids (`nav-cart-count`, `lang-select`, `theme-toggle`,
//! `theme-icon`). This crate models only what those contracts need:
//! elements with a tag, attributes, text content and children, plus
//! lookup by id and a mutable walk. It is deliberately not a
//! browser DOM.

mod element;

pub use element::{Document, Element};
