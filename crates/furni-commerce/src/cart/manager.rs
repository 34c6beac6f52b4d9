//! Cart manager: mutation logic bound to the catalog and the store.
//!
//! Every mutation persists the full cart synchronously. A storage
//! failure never fails the operation: the in-memory cart stays
//! authoritative for the session and the call reports
//! [`PersistStatus::MemoryOnly`] so callers can observe the
//! degradation instead of inferring it from logs.

use std::rc::Rc;

use furni_store::{keys, StorageBackend, Store};
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartTotals};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Whether a mutation reached durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistStatus {
    /// The cart was written to the store.
    Persisted,
    /// The store failed; the mutation lives in memory only for the
    /// rest of the session.
    MemoryOnly,
}

/// Result of an add-to-cart call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was added (or its line incremented).
    Added(PersistStatus),
    /// The id was not in the catalog; the cart is unchanged.
    NotFound,
}

/// Result of a clear-cart call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The cart was emptied.
    Cleared(PersistStatus),
    /// The confirmation gate declined; the cart is unchanged.
    Declined,
}

/// A user-visible notification raised by a cart operation.
///
/// The storefront drains these and renders them as ephemeral toasts
/// with localized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    ItemAdded,
    CartCleared,
    ProductNotFound(ProductId),
}

impl Notice {
    /// Localization key for the notice message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::ItemAdded => "toast_added",
            Notice::CartCleared => "toast_cleared",
            Notice::ProductNotFound(_) => "added_not_found",
        }
    }
}

/// Owns the live cart and its mutation logic.
///
/// Resolves product ids against the catalog on add, and persists
/// after every mutation. All operations are synchronous; there is
/// exactly one execution context, so each call is atomic from the
/// caller's perspective.
pub struct CartManager {
    catalog: Rc<Catalog>,
    cart: Cart,
    notices: Vec<Notice>,
}

impl CartManager {
    /// Load the persisted cart, or start empty if none (or if the
    /// persisted value is unreadable).
    pub fn load<B: StorageBackend>(catalog: Rc<Catalog>, store: &Store<B>) -> Self {
        let cart = match store.get::<Cart>(keys::CART) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read persisted cart, starting empty");
                Cart::new()
            }
        };
        Self {
            catalog,
            cart,
            notices: Vec::new(),
        }
    }

    /// The current cart state.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Drain notifications raised since the last drain.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Add one unit of `id` to the cart.
    ///
    /// Unknown ids raise a [`Notice::ProductNotFound`] and leave the
    /// cart untouched.
    pub fn add_item<B: StorageBackend>(
        &mut self,
        id: &ProductId,
        store: &mut Store<B>,
    ) -> AddOutcome {
        let product = match self.catalog.require(id) {
            Ok(product) => product.clone(),
            Err(CommerceError::ProductNotFound(_)) => {
                self.notices.push(Notice::ProductNotFound(id.clone()));
                return AddOutcome::NotFound;
            }
            Err(e) => {
                tracing::warn!(error = %e, "unexpected catalog error on add");
                self.notices.push(Notice::ProductNotFound(id.clone()));
                return AddOutcome::NotFound;
            }
        };
        self.cart.add(&product);
        tracing::debug!(id = %product.id, "added to cart");
        let status = self.persist(store);
        self.notices.push(Notice::ItemAdded);
        AddOutcome::Added(status)
    }

    /// Remove the line for `id`. No-op (but still persisted state)
    /// if absent.
    pub fn remove_item<B: StorageBackend>(
        &mut self,
        id: &ProductId,
        store: &mut Store<B>,
    ) -> PersistStatus {
        if self.cart.remove(id) {
            self.persist(store)
        } else {
            PersistStatus::Persisted
        }
    }

    /// Increment the quantity of the line for `id`.
    pub fn increment_qty<B: StorageBackend>(
        &mut self,
        id: &ProductId,
        store: &mut Store<B>,
    ) -> PersistStatus {
        if self.cart.increment(id) {
            self.persist(store)
        } else {
            PersistStatus::Persisted
        }
    }

    /// Decrement the quantity of the line for `id`, floored at 1.
    pub fn decrement_qty<B: StorageBackend>(
        &mut self,
        id: &ProductId,
        store: &mut Store<B>,
    ) -> PersistStatus {
        if self.cart.decrement(id) {
            self.persist(store)
        } else {
            PersistStatus::Persisted
        }
    }

    /// Empty the cart, subject to the caller-supplied confirmation
    /// gate. Pass `|| true` when no confirmation is required.
    pub fn clear<B: StorageBackend>(
        &mut self,
        gate: impl FnOnce() -> bool,
        store: &mut Store<B>,
    ) -> ClearOutcome {
        if !gate() {
            return ClearOutcome::Declined;
        }
        self.cart.clear();
        let status = self.persist(store);
        self.notices.push(Notice::CartCleared);
        ClearOutcome::Cleared(status)
    }

    /// Aggregate totals, computed fresh from current cart state.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        self.cart.totals()
    }

    fn persist<B: StorageBackend>(&self, store: &mut Store<B>) -> PersistStatus {
        match store.set(keys::CART, &self.cart) {
            Ok(()) => PersistStatus::Persisted,
            Err(e) => {
                tracing::warn!(error = %e, "cart persist failed, continuing in memory");
                PersistStatus::MemoryOnly
            }
        }
    }
}
