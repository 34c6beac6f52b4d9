//! Persistent key-value storage for the Furni storefront.
//!
//! Wraps a durable string store (the moral equivalent of browser
//! `localStorage`) behind a typed JSON interface. Every persisted
//! entity (cart, locale preference, theme preference, transient
//! scroll target) lives under a fixed key defined in [`keys`].
//!
//! The byte transport is pluggable via [`StorageBackend`], so tests
//! run against an in-memory map while the demo binary persists to
//! disk.

pub mod backend;
pub mod error;
pub mod keys;
pub mod store;

pub use backend::{FailingBackend, FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use store::Store;
