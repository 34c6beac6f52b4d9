//! Page rendering and wiring for the Furni storefront demo.
//!
//! The renderer translates catalog and cart state into HTML
//! fragments for the home, listing and cart pages; [`app::App`]
//! wires the cart manager, localizer and theme controller onto a
//! page document and keeps derived text current across locale
//! switches.

pub mod app;
pub mod auth;
pub mod pages;
pub mod scroll;
pub mod sections;
pub mod toast;

pub use app::{App, EnvHints, Page};
