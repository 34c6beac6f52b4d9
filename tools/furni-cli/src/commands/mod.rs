//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod lang;
pub mod login;
pub mod theme;
pub mod view;

pub use cart::CartArgs;
pub use catalog::CatalogArgs;
pub use lang::LangArgs;
pub use login::LoginArgs;
pub use theme::ThemeArgs;
pub use view::ViewArgs;
