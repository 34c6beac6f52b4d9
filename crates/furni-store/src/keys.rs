//! Fixed storage keys.
//!
//! Every persisted entity lives under one of these keys. The names
//! are part of the on-disk contract: changing them orphans existing
//! user state.

/// Cart line collection, JSON array.
pub const CART: &str = "furni_cart";

/// Active locale code.
pub const LANG: &str = "furni_lang";

/// Active theme code.
pub const THEME: &str = "furni_theme";

/// Transient scroll-target product id, removed on read.
pub const SCROLL_TO: &str = "furni_scroll_to";
