//! Transient notification messages surfaced after cart actions.

use furni_commerce::cart::Notice;
use furni_i18n::{Locale, StringTable};

use crate::sections::html_escape;

/// How long a toast stays on screen, in milliseconds.
pub const TOAST_DURATION_MS: u64 = 2200;

/// A localized, ready-to-show notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub duration_ms: u64,
}

impl Toast {
    pub fn from_notice(notice: &Notice, table: &StringTable, locale: Locale) -> Self {
        Toast {
            message: table.lookup(locale, notice.message_key()).to_string(),
            duration_ms: TOAST_DURATION_MS,
        }
    }

    /// Markup for the floating toast element.
    pub fn render(&self) -> String {
        format!(
            r#"<div class="furni-toast shadow-sm">{msg}</div>"#,
            msg = html_escape(&self.message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use furni_commerce::ids::ProductId;

    #[test]
    fn notice_localizes_per_locale() {
        let table = StringTable::builtin();
        let en = Toast::from_notice(&Notice::ItemAdded, &table, Locale::En);
        let ru = Toast::from_notice(&Notice::ItemAdded, &table, Locale::Ru);
        assert_eq!(en.message, "Product added to cart");
        assert_eq!(ru.message, "Товар добавлен в корзину");
        assert_eq!(en.duration_ms, TOAST_DURATION_MS);
    }

    #[test]
    fn missing_product_notice_has_its_own_message() {
        let table = StringTable::builtin();
        let toast = Toast::from_notice(
            &Notice::ProductNotFound(ProductId::new("p99")),
            &table,
            Locale::En,
        );
        assert_eq!(toast.message, "Product not found");
    }

    #[test]
    fn render_escapes_markup() {
        let toast = Toast {
            message: "<b>hi</b>".into(),
            duration_ms: TOAST_DURATION_MS,
        };
        assert!(toast.render().contains("&lt;b&gt;hi&lt;/b&gt;"));
    }
}
