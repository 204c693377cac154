pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::HttpCatalog, notify::TracingNotifier, storage::LocalStorage};
pub use config::{toml_config::StoreConfig, Settings};
pub use core::{
    cart::CartManager,
    listing::{list_products, CartSummary, ListedProduct},
};
pub use domain::error::{CartError, CartErrorKind, CartOperation};
pub use domain::model::{Cart, CartLine, Product, ProductId, StockLevel};
pub use utils::error::{Result, StoreError};
