//! Application wiring for one page view.
//!
//! [`App`] owns the store, the page document and the state holders
//! (cart manager, localizer, theme controller, active filter) and
//! routes user actions between them. One `App` corresponds to one
//! loaded page; opening another page means opening another `App`
//! over the same backend.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use furni_commerce::cart::{AddOutcome, Cart, CartManager, ClearOutcome, PersistStatus};
use furni_commerce::catalog::Catalog;
use furni_commerce::ids::ProductId;
use furni_commerce::search::{CategoryFilter, ProductFilter};
use furni_i18n::Localizer;
use furni_page::Document;
use furni_store::{StorageBackend, Store};
use furni_theme::{Theme, ThemeController};

use crate::auth::{self, LoginError};
use crate::pages;
use crate::scroll;
use crate::sections;
use crate::toast::Toast;

/// The four pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Products,
    Cart,
    Login,
}

/// Environment preferences sampled once at startup, used only when
/// no persisted preference exists.
#[derive(Debug, Clone, Default)]
pub struct EnvHints {
    /// Preferred language, e.g. `"ru-RU"`.
    pub language: Option<String>,
    /// Whether the environment prefers a dark color scheme.
    pub prefers_dark: Option<bool>,
}

/// One live page view over a storage backend.
pub struct App<B: StorageBackend> {
    store: Store<B>,
    doc: Document,
    page: Page,
    catalog: Rc<Catalog>,
    manager: Rc<RefCell<CartManager>>,
    filter: Rc<RefCell<ProductFilter>>,
    localizer: Localizer,
    theme: ThemeController,
    pending_scroll: Option<ProductId>,
}

impl<B: StorageBackend> App<B> {
    /// Open a page: restore persisted preferences and cart, build the
    /// page skeleton, apply locale and theme, and render the page's
    /// dynamic sections.
    pub fn open(backend: B, page: Page, hints: EnvHints) -> Self {
        let mut store = Store::new(backend);
        let mut localizer = Localizer::init(&store, hints.language.as_deref());
        let theme = ThemeController::init(&store, hints.prefers_dark);
        let catalog = Rc::new(Catalog::demo());
        let manager = Rc::new(RefCell::new(CartManager::load(
            Rc::clone(&catalog),
            &store,
        )));
        let filter = Rc::new(RefCell::new(ProductFilter::default()));

        let pending_scroll = if page == Page::Products {
            scroll::take_scroll_target(&mut store)
        } else {
            None
        };

        let mut doc = pages::build(page);
        doc.root_mut().set_attr("lang", localizer.current().as_str());
        localizer.apply_to(&mut doc);
        theme.apply_to(&mut doc);
        if let Some(sel) = doc.element_by_id_mut("lang-select") {
            sel.set_attr("value", localizer.current().as_str());
        }

        // Locale switches re-render the dynamic sections so rendered
        // button labels and empty states follow the new language.
        {
            let catalog = Rc::clone(&catalog);
            let manager = Rc::clone(&manager);
            let filter = Rc::clone(&filter);
            localizer.on_applied(Box::new(move |table, locale, doc| match page {
                Page::Home => sections::render_featured_into(doc, &catalog, table, locale),
                Page::Products => {
                    sections::render_grid_into(doc, &catalog, &filter.borrow(), table, locale)
                }
                Page::Cart => {
                    sections::render_cart_page_into(doc, manager.borrow().cart(), table, locale)
                }
                Page::Login => {}
            }));
        }

        let mut app = Self {
            store,
            doc,
            page,
            catalog,
            manager,
            filter,
            localizer,
            theme,
            pending_scroll,
        };
        app.render_current();
        app
    }

    /// The rendered document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn locale(&self) -> furni_i18n::Locale {
        self.localizer.current()
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    /// The current cart state.
    pub fn cart(&self) -> Ref<'_, Cart> {
        Ref::map(self.manager.borrow(), |m| m.cart())
    }

    /// Look up a key in the active locale. Unknown keys come back
    /// verbatim.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        self.localizer.lookup(key)
    }

    /// The product the products page should scroll to on load, if a
    /// view-product handoff is pending. Consuming it clears it.
    pub fn take_pending_scroll(&mut self) -> Option<ProductId> {
        self.pending_scroll.take()
    }

    /// Add one unit of `id` to the cart and refresh cart-derived
    /// parts of the page.
    pub fn add_to_cart(&mut self, id: &ProductId) -> AddOutcome {
        let outcome = self
            .manager
            .borrow_mut()
            .add_item(id, &mut self.store);
        self.render_current();
        outcome
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) -> PersistStatus {
        let status = self
            .manager
            .borrow_mut()
            .remove_item(id, &mut self.store);
        self.render_current();
        status
    }

    pub fn increment_qty(&mut self, id: &ProductId) -> PersistStatus {
        let status = self
            .manager
            .borrow_mut()
            .increment_qty(id, &mut self.store);
        self.render_current();
        status
    }

    pub fn decrement_qty(&mut self, id: &ProductId) -> PersistStatus {
        let status = self
            .manager
            .borrow_mut()
            .decrement_qty(id, &mut self.store);
        self.render_current();
        status
    }

    /// Empty the cart, subject to the confirmation gate.
    pub fn clear_cart(&mut self, gate: impl FnOnce() -> bool) -> ClearOutcome {
        let outcome = self.manager.borrow_mut().clear(gate, &mut self.store);
        self.render_current();
        outcome
    }

    /// Update the product filter from the search and category inputs
    /// and re-render the grid.
    pub fn set_filter(&mut self, query: &str, category: &str) {
        *self.filter.borrow_mut() = ProductFilter::new(query, CategoryFilter::parse(category));
        self.render_current();
    }

    /// Switch the display language. Returns `false` for unsupported
    /// codes, which leave everything unchanged.
    pub fn set_locale(&mut self, code: &str) -> bool {
        if !self
            .localizer
            .set_locale(code, &mut self.store, &mut self.doc)
        {
            return false;
        }
        let current = self.localizer.current();
        if let Some(sel) = self.doc.element_by_id_mut("lang-select") {
            sel.set_attr("value", current.as_str());
        }
        true
    }

    /// Flip between light and dark theme.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle(&mut self.store, &mut self.doc);
    }

    /// Drain pending notifications as localized toasts.
    pub fn take_toasts(&mut self) -> Vec<Toast> {
        let table = self.localizer.table();
        let locale = self.localizer.current();
        self.manager
            .borrow_mut()
            .take_notices()
            .iter()
            .map(|notice| Toast::from_notice(notice, table, locale))
            .collect()
    }

    /// Record intent to view `id` on the products page. The caller
    /// navigates to the returned page; that page consumes the target.
    pub fn view_product(&mut self, id: &ProductId) -> Page {
        scroll::set_scroll_target(&mut self.store, id);
        Page::Products
    }

    /// Validate a login submission and surface the outcome message
    /// in the page.
    pub fn submit_login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        let result = auth::validate_login(email, password);
        let (key, class) = match &result {
            Ok(()) => ("success_login", "alert alert-success"),
            Err(e) => (e.message_key(), "alert alert-danger"),
        };
        let text = self.localizer.lookup(key).to_string();
        if let Some(msg) = self.doc.element_by_id_mut("auth-message") {
            msg.set_text(text);
            msg.set_attr("class", class);
        }
        self.mark_input("login-email", result == Err(LoginError::InvalidEmail));
        self.mark_input(
            "login-password",
            result == Err(LoginError::PasswordTooShort),
        );
        result
    }

    fn mark_input(&mut self, id: &str, invalid: bool) {
        if let Some(input) = self.doc.element_by_id_mut(id) {
            let class = if invalid {
                "form-control is-invalid"
            } else {
                "form-control"
            };
            input.set_attr("class", class);
        }
    }

    /// Re-render the page's dynamic sections and the nav badge from
    /// current state.
    fn render_current(&mut self) {
        let table = self.localizer.table();
        let locale = self.localizer.current();
        let manager = self.manager.borrow();
        match self.page {
            Page::Home => {
                sections::render_featured_into(&mut self.doc, &self.catalog, table, locale)
            }
            Page::Products => sections::render_grid_into(
                &mut self.doc,
                &self.catalog,
                &self.filter.borrow(),
                table,
                locale,
            ),
            Page::Cart => {
                sections::render_cart_page_into(&mut self.doc, manager.cart(), table, locale)
            }
            Page::Login => {}
        }
        sections::update_nav_cart_count(&mut self.doc, manager.cart());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furni_i18n::Locale;
    use furni_store::MemoryBackend;

    fn open(page: Page) -> App<MemoryBackend> {
        App::open(MemoryBackend::new(), page, EnvHints::default())
    }

    #[test]
    fn home_page_renders_featured_on_open() {
        let app = open(Page::Home);
        let row = app.document().element_by_id("featured-row").unwrap();
        assert!(row.text().contains("Modern Sofa"));
        assert!(row.text().contains("Oak Table"));
        assert!(!row.text().contains("Comfort Bed"), "only first three");
    }

    #[test]
    fn add_to_cart_updates_badge_and_raises_toast() {
        let mut app = open(Page::Home);
        let outcome = app.add_to_cart(&ProductId::new("p1"));
        assert_eq!(outcome, AddOutcome::Added(PersistStatus::Persisted));
        assert_eq!(
            app.document().element_by_id("nav-cart-count").unwrap().text(),
            "1"
        );
        let toasts = app.take_toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "Product added to cart");
    }

    #[test]
    fn filter_narrows_products_grid() {
        let mut app = open(Page::Products);
        app.set_filter("sofa", "all");
        let grid = app.document().element_by_id("products-grid").unwrap();
        assert!(grid.text().contains("Modern Sofa"));
        assert!(!grid.text().contains("Wooden Chair"));

        app.set_filter("zzz", "all");
        let grid = app.document().element_by_id("products-grid").unwrap();
        assert!(grid.text().contains("No products found"));
    }

    #[test]
    fn locale_switch_rerenders_dynamic_sections() {
        let mut app = open(Page::Home);
        assert!(app.set_locale("ru"));
        assert_eq!(app.locale(), Locale::Ru);
        assert_eq!(app.document().title(), "Furni — Главная");
        let row = app.document().element_by_id("featured-row").unwrap();
        assert!(row.text().contains("В корзину"));
        assert_eq!(
            app.document()
                .element_by_id("lang-select")
                .unwrap()
                .attr("value"),
            Some("ru")
        );
    }

    #[test]
    fn unsupported_locale_is_rejected() {
        let mut app = open(Page::Home);
        assert!(!app.set_locale("de"));
        assert_eq!(app.locale(), Locale::En);
    }

    #[test]
    fn theme_toggle_flips_and_persists() {
        let mut app = open(Page::Home);
        assert_eq!(app.theme(), Theme::Light);
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(
            app.document().root().attr("data-theme"),
            Some("dark")
        );
    }

    #[test]
    fn view_product_hands_off_to_products_page() {
        let mut home = App::open(MemoryBackend::new(), Page::Home, EnvHints::default());
        assert_eq!(home.view_product(&ProductId::new("p4")), Page::Products);

        // A products page opened over the same (in-memory) state would
        // consume the target; here we check the store handoff directly.
        assert_eq!(
            scroll::take_scroll_target(&mut home.store),
            Some(ProductId::new("p4"))
        );
    }

    #[test]
    fn login_validation_surfaces_messages() {
        let mut app = open(Page::Login);
        assert_eq!(
            app.submit_login("bad-email", "123456"),
            Err(LoginError::InvalidEmail)
        );
        let msg = app.document().element_by_id("auth-message").unwrap();
        assert_eq!(msg.text(), "Please enter a valid email");
        assert_eq!(msg.attr("class"), Some("alert alert-danger"));
        assert_eq!(
            app.document().element_by_id("login-email").unwrap().attr("class"),
            Some("form-control is-invalid")
        );

        assert_eq!(app.submit_login("user@example.com", "123456"), Ok(()));
        let msg = app.document().element_by_id("auth-message").unwrap();
        assert_eq!(msg.attr("class"), Some("alert alert-success"));
        assert_eq!(
            app.document().element_by_id("login-email").unwrap().attr("class"),
            Some("form-control")
        );
    }

    #[test]
    fn clear_cart_respects_gate() {
        let mut app = open(Page::Cart);
        app.add_to_cart(&ProductId::new("p1"));
        app.take_toasts();

        assert_eq!(app.clear_cart(|| false), ClearOutcome::Declined);
        assert_eq!(
            app.document().element_by_id("nav-cart-count").unwrap().text(),
            "1"
        );

        assert_eq!(
            app.clear_cart(|| true),
            ClearOutcome::Cleared(PersistStatus::Persisted)
        );
        assert_eq!(
            app.document().element_by_id("cart-area").unwrap().attr("class"),
            Some("d-none")
        );
    }
}
