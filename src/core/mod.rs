pub mod cart;
pub mod listing;

pub use crate::domain::model::{Cart, CartLine, Product, ProductId, StockLevel};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, Notifier, Storage};
pub use crate::utils::error::Result;
