//! Featured section - the first few catalog products as cards.

use furni_commerce::catalog::Catalog;
use furni_i18n::{Locale, StringTable};
use furni_page::Document;

use crate::sections::html_escape;

/// How many products the home page features.
pub const FEATURED_COUNT: usize = 3;

/// Render the featured product cards.
pub fn render_featured(catalog: &Catalog, table: &StringTable, locale: Locale) -> String {
    catalog
        .featured(FEATURED_COUNT)
        .iter()
        .map(|p| {
            format!(
                r#"<div class="col-md-4">
    <div class="card product-card">
        <img src="{image}" class="card-img-top" alt="{name}">
        <div class="card-body">
            <h5 class="card-title">{name}</h5>
            <p class="card-text text-muted">{price}</p>
            <div class="d-flex gap-2">
                <a href="products.html" class="btn btn-outline-secondary btn-sm">{view}</a>
                <button class="btn btn-warning btn-sm" data-add-to-cart="{id}">{add}</button>
            </div>
        </div>
    </div>
</div>"#,
                image = html_escape(&p.image),
                name = html_escape(&p.name),
                price = p.price.display(),
                view = table.lookup(locale, "view"),
                add = table.lookup(locale, "add_to_cart"),
                id = p.id,
            )
        })
        .collect()
}

/// Render the featured section into the `#featured-row` container.
pub fn render_featured_into(
    doc: &mut Document,
    catalog: &Catalog,
    table: &StringTable,
    locale: Locale,
) {
    let html = render_featured(catalog, table, locale);
    if let Some(row) = doc.element_by_id_mut("featured-row") {
        row.set_text(html);
    }
}
