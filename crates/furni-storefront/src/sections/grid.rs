//! Products page - full or filtered grid.

use furni_commerce::catalog::{Catalog, Product};
use furni_commerce::search::ProductFilter;
use furni_i18n::{Locale, StringTable};
use furni_page::Document;

use crate::sections::html_escape;

/// Render one product card for the grid.
pub fn render_product_card(product: &Product, table: &StringTable, locale: Locale) -> String {
    format!(
        r#"<div class="col-12 col-md-6 col-lg-4">
    <div class="card product-card h-100">
        <img src="{image}" class="card-img-top" alt="{name}" />
        <div class="card-body d-flex flex-column">
            <h5 class="card-title">{name}</h5>
            <p class="card-text text-muted mb-3">{price}</p>
            <div class="mt-auto d-flex gap-2">
                <button class="btn btn-outline-secondary" data-view-product="{id}">{view}</button>
                <button class="btn btn-warning" data-add-to-cart="{id}">{add}</button>
            </div>
        </div>
    </div>
</div>"#,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        price = product.price.display(),
        view = table.lookup(locale, "view"),
        add = table.lookup(locale, "add_to_cart"),
        id = product.id,
    )
}

/// Render the grid for a filtered product list. An empty list
/// renders the localized empty-state lead.
pub fn render_grid(products: &[&Product], table: &StringTable, locale: Locale) -> String {
    if products.is_empty() {
        return format!(
            r#"<div class="col-12 text-center py-5"><p class="lead">{}</p></div>"#,
            table.lookup(locale, "no_products")
        );
    }
    products
        .iter()
        .map(|p| render_product_card(p, table, locale))
        .collect()
}

/// Render the filtered grid into the `#products-grid` container.
pub fn render_grid_into(
    doc: &mut Document,
    catalog: &Catalog,
    filter: &ProductFilter,
    table: &StringTable,
    locale: Locale,
) {
    let products = catalog.filter(filter);
    let html = render_grid(&products, table, locale);
    if let Some(grid) = doc.element_by_id_mut("products-grid") {
        grid.set_text(html);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furni_commerce::search::CategoryFilter;

    #[test]
    fn unfiltered_grid_lists_all_six() {
        let catalog = Catalog::demo();
        let table = StringTable::builtin();
        let products = catalog.filter(&ProductFilter::default());
        let html = render_grid(&products, &table, Locale::En);

        for product in catalog.products() {
            assert!(html.contains(&product.name));
        }
    }

    #[test]
    fn chair_query_narrows_the_grid() {
        let catalog = Catalog::demo();
        let table = StringTable::builtin();
        let filter = ProductFilter::new("chair", CategoryFilter::All);
        let products = catalog.filter(&filter);
        let html = render_grid(&products, &table, Locale::En);

        assert!(html.contains("Wooden Chair"));
        assert!(!html.contains("Modern Sofa"));
    }

    #[test]
    fn empty_result_renders_localized_lead() {
        let table = StringTable::builtin();
        let html = render_grid(&[], &table, Locale::En);
        assert!(html.contains("No products found"));

        let html = render_grid(&[], &table, Locale::Ru);
        assert!(html.contains("Товары не найдены"));
    }
}
