//! Static page skeletons.
//!
//! Each builder returns the fixed chrome of one page: nav, footer,
//! and the empty containers the section renderers fill in. Text
//! nodes carry localization marker attributes and hold no copy of
//! their own until a locale is applied.

use furni_commerce::catalog::Category;
use furni_i18n::{ATTR_I18N, ATTR_I18N_PLACEHOLDER};
use furni_page::{Document, Element};

use crate::app::Page;

fn i18n(tag: &str, key: &str) -> Element {
    Element::new(tag).with_attr(ATTR_I18N, key)
}

fn nav() -> Element {
    Element::new("nav")
        .with_attr("class", "navbar navbar-expand-lg")
        .with_child(i18n("a", "nav_home").with_attr("href", "index.html"))
        .with_child(i18n("a", "nav_products").with_attr("href", "products.html"))
        .with_child(
            Element::new("a")
                .with_attr("href", "cart.html")
                .with_child(i18n("span", "nav_cart"))
                .with_child(
                    Element::new("span")
                        .with_id("nav-cart-count")
                        .with_attr("class", "badge rounded-pill")
                        .with_text("0"),
                ),
        )
        .with_child(i18n("a", "nav_login").with_attr("href", "login.html"))
        .with_child(
            Element::new("select")
                .with_id("lang-select")
                .with_attr("class", "form-select form-select-sm")
                .with_child(Element::new("option").with_attr("value", "en").with_text("EN"))
                .with_child(Element::new("option").with_attr("value", "ru").with_text("RU")),
        )
        .with_child(
            Element::new("button")
                .with_id("theme-toggle")
                .with_attr("class", "btn btn-sm")
                .with_child(Element::new("i").with_id("theme-icon")),
        )
}

fn footer() -> Element {
    Element::new("footer")
        .with_attr("class", "py-4")
        .with_child(i18n("span", "rights"))
        .with_child(i18n("a", "contact"))
        .with_child(i18n("a", "privacy"))
        .with_child(i18n("a", "terms"))
}

fn page_doc(title_key: &str, main: Element) -> Document {
    let head = Element::new("head").with_child(i18n("title", title_key));
    let body = Element::new("body")
        .with_child(nav())
        .with_child(main)
        .with_child(footer());
    Document::with_root(Element::new("html").with_child(head).with_child(body))
}

fn home() -> Document {
    let hero = Element::new("section")
        .with_attr("class", "hero")
        .with_child(i18n("h1", "hero_title"))
        .with_child(i18n("p", "hero_sub"))
        .with_child(i18n("a", "hero_cta").with_attr("href", "products.html"));

    let mut carousel = Element::new("div")
        .with_id("hero-carousel")
        .with_attr("class", "carousel slide");
    for n in 1..=3 {
        carousel.push_child(
            Element::new("div")
                .with_attr("class", "carousel-item")
                .with_child(i18n("h5", &format!("carousel_{n}_title")))
                .with_child(i18n("p", &format!("carousel_{n}_sub"))),
        );
    }
    carousel.push_child(i18n("span", "prev"));
    carousel.push_child(i18n("span", "next"));

    let featured = Element::new("section")
        .with_child(i18n("h2", "featured_title"))
        .with_child(
            Element::new("div")
                .with_id("featured-row")
                .with_attr("class", "row g-4"),
        )
        .with_child(i18n("a", "view_all").with_attr("href", "products.html"));

    let main = Element::new("main")
        .with_child(hero)
        .with_child(carousel)
        .with_child(featured);
    page_doc("title_home", main)
}

fn category_select() -> Element {
    let mut select = Element::new("select")
        .with_id("category-select")
        .with_attr("class", "form-select")
        .with_child(i18n("option", "cat_all").with_attr("value", "all"));
    for category in Category::all() {
        select.push_child(
            i18n("option", category.label_key()).with_attr("value", category.as_str()),
        );
    }
    select
}

fn products() -> Document {
    let controls = Element::new("div")
        .with_attr("class", "row mb-4")
        .with_child(
            Element::new("input")
                .with_id("search-input")
                .with_attr("type", "search")
                .with_attr(ATTR_I18N_PLACEHOLDER, "search_placeholder")
                .with_attr("class", "form-control"),
        )
        .with_child(category_select());

    let main = Element::new("main")
        .with_child(i18n("h1", "products_title"))
        .with_child(controls)
        .with_child(
            Element::new("div")
                .with_id("products-grid")
                .with_attr("class", "row g-4"),
        );
    page_doc("title_products", main)
}

fn cart() -> Document {
    let empty = Element::new("div")
        .with_id("cart-empty")
        .with_attr("class", "d-none")
        .with_child(i18n("p", "cart_empty"))
        .with_child(i18n("a", "continue_shopping").with_attr("href", "products.html"));

    let summary = Element::new("div")
        .with_attr("class", "card order-summary")
        .with_child(i18n("h5", "order_summary"))
        .with_child(
            Element::new("div")
                .with_child(i18n("span", "subtotal"))
                .with_child(Element::new("span").with_id("cart-subtotal").with_text("$0.00")),
        )
        .with_child(i18n("span", "shipping_free"))
        .with_child(
            Element::new("button")
                .with_id("checkout-btn")
                .with_child(i18n("span", "proceed_checkout")),
        );

    let area = Element::new("div")
        .with_id("cart-area")
        .with_attr("class", "")
        .with_child(
            Element::new("div")
                .with_id("cart-items")
                .with_attr("class", "list-group"),
        )
        .with_child(Element::new("span").with_id("cart-items-count").with_text("0"))
        .with_child(summary)
        .with_child(i18n("button", "clear_cart").with_id("clear-cart"));

    let modal = Element::new("div")
        .with_id("checkoutModal")
        .with_attr("class", "modal fade")
        .with_child(i18n("h5", "coming_soon"))
        .with_child(i18n("p", "checkout_not_ready"))
        .with_child(i18n("button", "close"));

    let main = Element::new("main")
        .with_child(i18n("h1", "cart_title"))
        .with_child(empty)
        .with_child(area)
        .with_child(modal);
    page_doc("title_cart", main)
}

fn login() -> Document {
    let form = Element::new("form")
        .with_id("login-form")
        .with_child(i18n("label", "email_label"))
        .with_child(
            Element::new("input")
                .with_id("login-email")
                .with_attr("type", "email")
                .with_attr("class", "form-control"),
        )
        .with_child(i18n("label", "password_label"))
        .with_child(
            Element::new("input")
                .with_id("login-password")
                .with_attr("type", "password")
                .with_attr("class", "form-control"),
        )
        .with_child(i18n("button", "sign_in_btn").with_attr("type", "submit"))
        .with_child(i18n("a", "continue_as_guest").with_attr("href", "index.html"));

    let main = Element::new("main")
        .with_child(i18n("h1", "sign_in"))
        .with_child(Element::new("div").with_id("auth-message").with_attr("class", "d-none"))
        .with_child(form);
    page_doc("title_login", main)
}

/// Build the skeleton document for one page.
pub fn build(page: Page) -> Document {
    match page {
        Page::Home => home(),
        Page::Products => products(),
        Page::Cart => cart(),
        Page::Login => login(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_carries_shared_chrome() {
        for page in [Page::Home, Page::Products, Page::Cart, Page::Login] {
            let doc = build(page);
            assert!(doc.element_by_id("lang-select").is_some(), "{page:?}");
            assert!(doc.element_by_id("theme-toggle").is_some(), "{page:?}");
            assert!(doc.element_by_id("theme-icon").is_some(), "{page:?}");
            assert!(doc.element_by_id("nav-cart-count").is_some(), "{page:?}");
        }
    }

    #[test]
    fn page_containers_exist() {
        assert!(build(Page::Home).element_by_id("featured-row").is_some());
        let products = build(Page::Products);
        assert!(products.element_by_id("search-input").is_some());
        assert!(products.element_by_id("products-grid").is_some());
        let select = products.element_by_id("category-select").unwrap();
        // wildcard plus one option per category
        assert_eq!(select.children().len(), 1 + Category::all().len());
        let cart = build(Page::Cart);
        for id in ["cart-area", "cart-empty", "cart-items", "cart-items-count", "cart-subtotal"] {
            assert!(cart.element_by_id(id).is_some(), "{id}");
        }
        let login = build(Page::Login);
        assert!(login.element_by_id("login-email").is_some());
        assert!(login.element_by_id("login-password").is_some());
        assert!(login.element_by_id("auth-message").is_some());
    }

    #[test]
    fn titles_are_marked_for_localization() {
        let doc = build(Page::Cart);
        let mut title_key = None;
        doc.root().walk(&mut |el| {
            if el.tag() == "title" {
                title_key = el.attr(ATTR_I18N).map(str::to_string);
            }
        });
        assert_eq!(title_key.as_deref(), Some("title_cart"));
    }
}
