use crate::domain::model::{Product, ProductId, StockLevel};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{Result, StoreError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the storefront API (`/products`, `/products/{id}`, `/stock/{id}`).
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    client: Client,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_timeout(
            config.api_endpoint(),
            Duration::from_secs(config.request_timeout_seconds()),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: &str,
        id: Option<ProductId>,
    ) -> Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(StoreError::NotFound {
                    resource: resource.to_string(),
                    id,
                });
            }
        }

        if !status.is_success() {
            return Err(StoreError::UnexpectedResponse {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.get_json("products", "products", None).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.get_json(&format!("products/{}", id), "product", Some(id))
            .await
    }

    async fn get_stock(&self, id: ProductId) -> Result<StockLevel> {
        self.get_json(&format!("stock/{}", id), "stock", Some(id))
            .await
    }
}
