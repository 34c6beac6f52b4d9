//! HTML section renderers.
//!
//! Each renderer is a pure function of (catalog slice, cart, active
//! locale) producing an HTML fragment string. Re-rendering derives
//! everything from current state; there is no incremental diffing.

mod cart;
mod featured;
mod grid;

pub use cart::{render_cart_line, render_cart_page_into, update_nav_cart_count, NAV_CART_COUNT_IDS};
pub use featured::{render_featured, render_featured_into, FEATURED_COUNT};
pub use grid::{render_grid, render_grid_into, render_product_card};

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            html_escape(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }
}
