//! End-to-end flows across page loads over a shared file store.

use furni_commerce::cart::{AddOutcome, PersistStatus};
use furni_commerce::ids::ProductId;
use furni_store::FileBackend;
use furni_storefront::{App, EnvHints, Page};
use furni_theme::Theme;

fn backend(dir: &tempfile::TempDir) -> FileBackend {
    FileBackend::open(dir.path()).unwrap()
}

#[test]
fn cart_survives_page_loads() {
    let dir = tempfile::tempdir().unwrap();

    let mut home = App::open(backend(&dir), Page::Home, EnvHints::default());
    assert_eq!(
        home.add_to_cart(&ProductId::new("p1")),
        AddOutcome::Added(PersistStatus::Persisted)
    );
    home.add_to_cart(&ProductId::new("p1"));
    home.add_to_cart(&ProductId::new("p5"));
    drop(home);

    let cart_page = App::open(backend(&dir), Page::Cart, EnvHints::default());
    let doc = cart_page.document();
    assert_eq!(doc.element_by_id("cart-items-count").unwrap().text(), "3");
    assert_eq!(
        doc.element_by_id("cart-subtotal").unwrap().text(),
        "$1037.99"
    );
    let items = doc.element_by_id("cart-items").unwrap().text();
    assert!(items.contains("Modern Sofa"));
    assert!(items.contains("Lamp Modern"));
}

#[test]
fn locale_preference_survives_page_loads() {
    let dir = tempfile::tempdir().unwrap();

    let mut home = App::open(backend(&dir), Page::Home, EnvHints::default());
    assert!(home.set_locale("ru"));
    drop(home);

    let products = App::open(backend(&dir), Page::Products, EnvHints::default());
    assert_eq!(products.document().title(), "Furni — Товары");
    assert_eq!(products.document().root().attr("lang"), Some("ru"));
}

#[test]
fn persisted_preferences_beat_environment_hints() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = App::open(backend(&dir), Page::Home, EnvHints::default());
    first.set_locale("ru");
    first.toggle_theme();
    assert_eq!(first.theme(), Theme::Dark);
    drop(first);

    let hints = EnvHints {
        language: Some("en-US".into()),
        prefers_dark: Some(false),
    };
    let second = App::open(backend(&dir), Page::Home, hints);
    assert_eq!(second.document().root().attr("lang"), Some("ru"));
    assert_eq!(second.theme(), Theme::Dark);
}

#[test]
fn environment_hints_apply_on_first_visit() {
    let dir = tempfile::tempdir().unwrap();
    let hints = EnvHints {
        language: Some("ru-RU".into()),
        prefers_dark: Some(true),
    };
    let app = App::open(backend(&dir), Page::Home, hints);
    assert_eq!(app.document().root().attr("lang"), Some("ru"));
    assert_eq!(app.theme(), Theme::Dark);
    assert_eq!(app.document().root().attr("data-theme"), Some("dark"));
}

#[test]
fn view_product_scrolls_once_then_clears() {
    let dir = tempfile::tempdir().unwrap();

    let mut home = App::open(backend(&dir), Page::Home, EnvHints::default());
    assert_eq!(home.view_product(&ProductId::new("p4")), Page::Products);
    drop(home);

    let mut products = App::open(backend(&dir), Page::Products, EnvHints::default());
    assert_eq!(products.take_pending_scroll(), Some(ProductId::new("p4")));
    drop(products);

    // Reloading the page must not scroll again.
    let mut reloaded = App::open(backend(&dir), Page::Products, EnvHints::default());
    assert_eq!(reloaded.take_pending_scroll(), None);
}
