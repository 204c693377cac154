use crate::domain::model::{Product, ProductId, StockLevel};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the product/stock API.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>>;
    async fn get_product(&self, id: ProductId) -> Result<Product>;
    async fn get_stock(&self, id: ProductId) -> Result<StockLevel>;
}

/// Key/value slot storage. `read_item` yields `None` when the key has never been written.
pub trait Storage: Send + Sync {
    fn read_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<u8>>>> + Send;
    fn write_item(
        &self,
        key: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Receives user-facing messages for failed cart operations.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn cart_key(&self) -> &str;
    fn request_timeout_seconds(&self) -> u64;
}
