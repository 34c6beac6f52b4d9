//! Cart page - line list, per-line and aggregate totals, nav badge.

use furni_commerce::cart::{Cart, CartLine, CartTotals};
use furni_commerce::money::{Currency, Money};
use furni_i18n::{Locale, StringTable};
use furni_page::Document;

use crate::sections::html_escape;

/// Ids of the nav cart-count badges across the page headers.
pub const NAV_CART_COUNT_IDS: &[&str] = &["nav-cart-count", "nav-cart-count-2", "nav-cart-count-3"];

fn totals_or_zero(cart: &Cart) -> CartTotals {
    match cart.totals() {
        Ok(totals) => totals,
        Err(e) => {
            tracing::warn!(error = %e, "cart totals overflowed, displaying zero");
            CartTotals {
                item_count: 0,
                subtotal: Money::zero(Currency::USD),
            }
        }
    }
}

/// Render one cart line with its computed line total.
pub fn render_cart_line(line: &CartLine, table: &StringTable, locale: Locale) -> String {
    let line_total = line
        .total()
        .unwrap_or_else(|_| Money::zero(line.price.currency));
    format!(
        r#"<div class="list-group-item d-flex gap-3 align-items-center">
    <img src="{image}" alt="" style="width:84px;height:64px;object-fit:cover;border-radius:6px;">
    <div class="flex-grow-1">
        <div class="d-flex justify-content-between">
            <div>
                <div class="fw-semibold">{name}</div>
                <div class="text-muted small">{unit} each</div>
            </div>
            <div class="text-end">
                <div class="fw-bold">{total}</div>
                <div class="small text-muted">{qty} pcs</div>
            </div>
        </div>
        <div class="mt-2 d-flex gap-2">
            <button class="btn btn-sm btn-outline-secondary" data-decrement="{id}">&minus;</button>
            <button class="btn btn-sm btn-outline-secondary" data-increment="{id}">+</button>
            <button class="btn btn-sm btn-outline-danger ms-auto" data-remove="{id}">{remove}</button>
        </div>
    </div>
</div>"#,
        image = html_escape(&line.image),
        name = html_escape(&line.name),
        unit = line.price.display(),
        total = line_total.display(),
        qty = line.qty,
        remove = table.lookup(locale, "remove"),
        id = line.id,
    )
}

/// Update every nav cart-count badge with the current item count.
pub fn update_nav_cart_count(doc: &mut Document, cart: &Cart) {
    let count = totals_or_zero(cart).item_count.to_string();
    for id in NAV_CART_COUNT_IDS {
        if let Some(el) = doc.element_by_id_mut(id) {
            el.set_text(count.clone());
        }
    }
}

/// Render the cart page into its containers.
///
/// An empty cart hides the cart area and shows the empty state;
/// otherwise the line list, item count and subtotal are filled in.
/// Also refreshes the nav badges.
pub fn render_cart_page_into(doc: &mut Document, cart: &Cart, table: &StringTable, locale: Locale) {
    if cart.is_empty() {
        if let Some(area) = doc.element_by_id_mut("cart-area") {
            area.set_attr("class", "d-none");
        }
        if let Some(empty) = doc.element_by_id_mut("cart-empty") {
            empty.set_attr("class", "");
        }
        update_nav_cart_count(doc, cart);
        return;
    }

    if let Some(empty) = doc.element_by_id_mut("cart-empty") {
        empty.set_attr("class", "d-none");
    }
    if let Some(area) = doc.element_by_id_mut("cart-area") {
        area.set_attr("class", "");
    }

    let items: String = cart
        .lines()
        .iter()
        .map(|line| render_cart_line(line, table, locale))
        .collect();
    if let Some(list) = doc.element_by_id_mut("cart-items") {
        list.set_text(items);
    }

    let totals = totals_or_zero(cart);
    if let Some(count) = doc.element_by_id_mut("cart-items-count") {
        count.set_text(totals.item_count.to_string());
    }
    if let Some(subtotal) = doc.element_by_id_mut("cart-subtotal") {
        subtotal.set_text(totals.subtotal.display());
    }
    update_nav_cart_count(doc, cart);
}
