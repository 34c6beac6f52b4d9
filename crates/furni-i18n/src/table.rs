//! Static locale string tables.

use std::collections::HashMap;

use crate::Locale;

const EN: &[(&str, &str)] = &[
    ("title_home", "Furni — Home"),
    ("title_products", "Furni — Products"),
    ("title_cart", "Furni — Cart"),
    ("title_login", "Furni — Login"),
    ("nav_home", "Home"),
    ("nav_products", "Products"),
    ("nav_cart", "Cart"),
    ("nav_login", "Login"),
    ("hero_title", "Transform Your Space"),
    (
        "hero_sub",
        "Discover elegant furniture that brings comfort and style to your home",
    ),
    ("hero_cta", "Shop Now"),
    ("carousel_1_title", "New Arrivals"),
    ("carousel_1_sub", "Handcrafted pieces — limited stock"),
    ("carousel_2_title", "Comfort & Style"),
    ("carousel_2_sub", "Ergonomic sofas designed for modern living"),
    ("carousel_3_title", "Free Delivery"),
    ("carousel_3_sub", "Fast and secure shipping to your doorstep"),
    ("prev", "Previous"),
    ("next", "Next"),
    ("featured_title", "Featured Products"),
    ("view_all", "View All Products"),
    ("view", "View"),
    ("add_to_cart", "Add to Cart"),
    ("no_products", "No products found"),
    ("rights", "All rights reserved."),
    ("contact", "Contact"),
    ("privacy", "Privacy"),
    ("terms", "Terms"),
    ("products_title", "Our Collection"),
    ("search_placeholder", "Search furniture..."),
    ("cat_all", "All"),
    ("cat_sofa", "Sofa"),
    ("cat_chair", "Chair"),
    ("cat_table", "Table"),
    ("cat_bed", "Bed"),
    ("cat_lighting", "Lighting"),
    ("cat_storage", "Storage"),
    ("cart_title", "Shopping Cart"),
    ("cart_empty", "Your cart is empty"),
    ("continue_shopping", "Continue Shopping"),
    ("clear_cart", "Clear Cart"),
    ("remove", "Remove"),
    ("order_summary", "Order Summary"),
    ("subtotal", "Subtotal"),
    ("shipping_free", "FREE"),
    ("proceed_checkout", "Proceed to Checkout"),
    ("coming_soon", "Coming Soon"),
    (
        "checkout_not_ready",
        "Sorry, we haven't set up the checkout process yet. This feature is coming soon!",
    ),
    ("close", "Close"),
    ("sign_in", "Sign In"),
    ("email_label", "Email"),
    ("password_label", "Password"),
    ("email_invalid", "Please enter a valid email"),
    ("password_invalid", "Password must be at least 6 characters"),
    ("sign_in_btn", "Sign In"),
    ("continue_as_guest", "Continue as guest"),
    ("toast_added", "Product added to cart"),
    ("toast_cleared", "Cart cleared"),
    ("confirm_clear", "Are you sure you want to clear the cart?"),
    ("added_not_found", "Product not found"),
    ("success_login", "Login successful — redirecting..."),
];

const RU: &[(&str, &str)] = &[
    ("title_home", "Furni — Главная"),
    ("title_products", "Furni — Товары"),
    ("title_cart", "Furni — Корзина"),
    ("title_login", "Furni — Вход"),
    ("nav_home", "Главная"),
    ("nav_products", "Товары"),
    ("nav_cart", "Корзина"),
    ("nav_login", "Вход"),
    ("hero_title", "Преобразите своё пространство"),
    ("hero_sub", "Найдите элегантную мебель для уюта и стиля дома"),
    ("hero_cta", "Купить сейчас"),
    ("carousel_1_title", "Новые поступления"),
    ("carousel_1_sub", "Ручная работа — ограниченный тираж"),
    ("carousel_2_title", "Комфорт и стиль"),
    ("carousel_2_sub", "Эргономичные диваны для современной жизни"),
    ("carousel_3_title", "Бесплатная доставка"),
    ("carousel_3_sub", "Быстрая и надёжная доставка до двери"),
    ("prev", "Назад"),
    ("next", "Вперёд"),
    ("featured_title", "Рекомендуем"),
    ("view_all", "Посмотреть все товары"),
    ("view", "Посмотреть"),
    ("add_to_cart", "В корзину"),
    ("no_products", "Товары не найдены"),
    ("rights", "Все права защищены."),
    ("contact", "Контакты"),
    ("privacy", "Политика конфиденциальности"),
    ("terms", "Условия"),
    ("products_title", "Наша коллекция"),
    ("search_placeholder", "Поиск мебели..."),
    ("cat_all", "Все"),
    ("cat_sofa", "Диван"),
    ("cat_chair", "Стул"),
    ("cat_table", "Стол"),
    ("cat_bed", "Кровать"),
    ("cat_lighting", "Освещение"),
    ("cat_storage", "Хранение"),
    ("cart_title", "Корзина"),
    ("cart_empty", "Ваша корзина пуста"),
    ("continue_shopping", "Продолжить покупки"),
    ("clear_cart", "Очистить корзину"),
    ("remove", "Удалить"),
    ("order_summary", "Итог заказа"),
    ("subtotal", "Промежуточный итог"),
    ("shipping_free", "БЕСПЛАТНО"),
    ("proceed_checkout", "Перейти к оплате"),
    ("coming_soon", "Скоро"),
    (
        "checkout_not_ready",
        "Извините, мы пока не настроили процесс оформления заказа. Скоро появится!",
    ),
    ("close", "Закрыть"),
    ("sign_in", "Войти"),
    ("email_label", "Email"),
    ("password_label", "Пароль"),
    ("email_invalid", "Введите корректный email"),
    ("password_invalid", "Пароль минимум 6 символов"),
    ("sign_in_btn", "Войти"),
    ("continue_as_guest", "Продолжить как гость"),
    ("toast_added", "Товар добавлен в корзину"),
    ("toast_cleared", "Корзина очищена"),
    ("confirm_clear", "Вы уверены, что хотите очистить корзину?"),
    ("added_not_found", "Товар не найден"),
    ("success_login", "Вход успешен — перенаправление..."),
];

/// Locale string tables with lookup.
///
/// Lookup of an unknown key returns the key itself verbatim, so a
/// missing translation degrades to a visible key rather than an
/// error.
#[derive(Debug, Clone)]
pub struct StringTable {
    locales: HashMap<Locale, HashMap<&'static str, &'static str>>,
}

impl StringTable {
    /// The built-in storefront string set.
    pub fn builtin() -> Self {
        let mut locales = HashMap::new();
        locales.insert(Locale::En, EN.iter().copied().collect());
        locales.insert(Locale::Ru, RU.iter().copied().collect());
        Self { locales }
    }

    /// Look up `key` in `locale`, falling back to the key itself.
    pub fn lookup<'a>(&self, locale: Locale, key: &'a str) -> &'a str {
        self.locales
            .get(&locale)
            .and_then(|strings| strings.get(key).copied())
            .unwrap_or(key)
    }

    /// Whether the table carries `key` in `locale`.
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.locales
            .get(&locale)
            .is_some_and(|strings| strings.contains_key(key))
    }
}

impl Default for StringTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves_per_locale() {
        let table = StringTable::builtin();
        assert_eq!(table.lookup(Locale::En, "nav_cart"), "Cart");
        assert_eq!(table.lookup(Locale::Ru, "nav_cart"), "Корзина");
    }

    #[test]
    fn unknown_key_falls_back_to_itself_in_every_locale() {
        let table = StringTable::builtin();
        for locale in Locale::all() {
            assert_eq!(table.lookup(*locale, "definitely_missing"), "definitely_missing");
        }
    }

    #[test]
    fn locales_cover_the_same_keys() {
        let table = StringTable::builtin();
        for (key, _) in EN {
            assert!(
                table.contains(Locale::Ru, key),
                "ru is missing key '{key}'"
            );
        }
        for (key, _) in RU {
            assert!(
                table.contains(Locale::En, key),
                "en is missing key '{key}'"
            );
        }
    }
}
