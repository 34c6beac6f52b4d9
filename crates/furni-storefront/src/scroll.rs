//! Cross-page scroll-to-product handoff.
//!
//! Viewing a product from the home page stores the target id, then the
//! products page consumes it on load and highlights the matching card.

use furni_commerce::ids::ProductId;
use furni_store::backend::StorageBackend;
use furni_store::{keys, Store};

/// Delay before scrolling to the target card, in milliseconds.
pub const SCROLL_DELAY_MS: u64 = 300;
/// How long the target card keeps its highlight, in milliseconds.
pub const HIGHLIGHT_DURATION_MS: u64 = 2400;

/// Remember which product the next products-page load should scroll to.
/// A storage failure loses the handoff but nothing else.
pub fn set_scroll_target<B: StorageBackend>(store: &mut Store<B>, id: &ProductId) {
    if let Err(e) = store.set(keys::SCROLL_TO, id) {
        tracing::warn!(error = %e, "failed to persist scroll target");
    }
}

/// Consume the pending scroll target, if any. Reading clears it so a
/// later reload does not scroll again.
pub fn take_scroll_target<B: StorageBackend>(store: &mut Store<B>) -> Option<ProductId> {
    match store.take(keys::SCROLL_TO) {
        Ok(target) => target,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read scroll target");
            None
        }
    }
}
