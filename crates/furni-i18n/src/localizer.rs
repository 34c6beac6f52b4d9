//! Active-locale state, persistence and the document apply pass.

use furni_page::Document;
use furni_store::{keys, StorageBackend, Store};

use crate::{Locale, StringTable, ATTR_I18N, ATTR_I18N_PLACEHOLDER};

/// A post-switch hook, registered by the renderer.
///
/// Hooks run after every locale switch, once the static document
/// text has been re-applied. They receive the table and the new
/// locale so they can recompute derived text (product cards, cart
/// lines) and write it back into the document.
pub type LocaleHook = Box<dyn FnMut(&StringTable, Locale, &mut Document)>;

/// Holds the active locale, the string tables and the registered
/// post-switch hooks.
pub struct Localizer {
    table: StringTable,
    active: Locale,
    hooks: Vec<LocaleHook>,
}

impl Localizer {
    /// Resolve the initial locale: persisted preference, then the
    /// browser-style language hint, then the base locale.
    pub fn init<B: StorageBackend>(store: &Store<B>, language_hint: Option<&str>) -> Self {
        let persisted = match store.get::<Locale>(keys::LANG) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted locale");
                None
            }
        };
        let active = persisted
            .or_else(|| language_hint.and_then(Locale::from_hint))
            .unwrap_or_default();
        Self {
            table: StringTable::builtin(),
            active,
            hooks: Vec::new(),
        }
    }

    /// The active locale.
    pub fn current(&self) -> Locale {
        self.active
    }

    /// The string tables.
    pub fn table(&self) -> &StringTable {
        &self.table
    }

    /// Look up a key in the active locale. Unknown keys come back
    /// verbatim.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        self.table.lookup(self.active, key)
    }

    /// Register a post-switch hook.
    pub fn on_applied(&mut self, hook: LocaleHook) {
        self.hooks.push(hook);
    }

    /// Switch the active locale.
    ///
    /// Unsupported codes are a no-op returning `false`. A supported
    /// code switches, persists the preference, sets the root `lang`
    /// attribute, re-applies the document, and runs every registered
    /// hook.
    pub fn set_locale<B: StorageBackend>(
        &mut self,
        code: &str,
        store: &mut Store<B>,
        doc: &mut Document,
    ) -> bool {
        let Some(locale) = Locale::parse(code) else {
            return false;
        };
        self.active = locale;
        tracing::debug!(locale = locale.as_str(), "locale switched");
        if let Err(e) = store.set(keys::LANG, &locale) {
            tracing::warn!(error = %e, "locale persist failed, continuing in memory");
        }
        doc.root_mut().set_attr("lang", locale.as_str());
        self.apply_to(doc);

        // Hooks are taken out for the duration of the pass so they
        // can borrow the table while running.
        let mut hooks = std::mem::take(&mut self.hooks);
        for hook in &mut hooks {
            hook(&self.table, self.active, doc);
        }
        self.hooks = hooks;
        true
    }

    /// Substitute localized text into the document.
    ///
    /// Every element carrying the text marker attribute gets its
    /// text content replaced; every element carrying the placeholder
    /// marker gets its `placeholder` attribute replaced; a `title`
    /// element additionally updates the document title. Idempotent:
    /// re-applying with an unchanged locale is a no-op.
    pub fn apply_to(&self, doc: &mut Document) {
        let mut new_title: Option<String> = None;
        let table = &self.table;
        let locale = self.active;

        doc.walk_mut(|el| {
            if let Some(key) = el.attr(ATTR_I18N).map(str::to_string) {
                let text = table.lookup(locale, &key).to_string();
                if el.tag() == "title" {
                    new_title = Some(text.clone());
                }
                el.set_text(text);
            }
            if let Some(key) = el.attr(ATTR_I18N_PLACEHOLDER).map(str::to_string) {
                let text = table.lookup(locale, &key).to_string();
                el.set_attr("placeholder", text);
            }
        });

        if let Some(title) = new_title {
            doc.set_title(title);
        }
    }
}
