//! HTTP implementation of the catalog query traits.
//!
//! Talks to a REST catalog exposing `/products/{id}` and `/stock/{id}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use trolley_core::{ProductId, ProductInfo, Stock};

use crate::error::{CatalogError, Result};
use crate::traits::{ProductQuery, StockQuery};

/// HTTP catalog client.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a catalog client for the service at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(CatalogError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource from the catalog.
    async fn get_json<R: serde::de::DeserializeOwned>(&self, path: &str) -> Result<R> {
        let url = self.endpoint(path);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_connect() {
                CatalogError::Connection(format!("cannot connect to {}", url))
            } else {
                CatalogError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }

    /// GET a JSON resource, mapping a 404 to `NotFound` for `id`.
    async fn get_resource<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        id: ProductId,
    ) -> Result<R> {
        match self.get_json(path).await {
            Err(CatalogError::Status { status: 404, .. }) => Err(CatalogError::NotFound(id)),
            other => other,
        }
    }
}

#[async_trait]
impl StockQuery for HttpCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock> {
        self.get_resource(&format!("/stock/{}", id), id).await
    }
}

#[async_trait]
impl ProductQuery for HttpCatalog {
    async fn product(&self, id: ProductId) -> Result<ProductInfo> {
        self.get_resource(&format!("/products/{}", id), id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        let catalog = HttpCatalog::new("http://localhost:3333").unwrap();
        assert_eq!(
            catalog.endpoint("/stock/7"),
            "http://localhost:3333/stock/7"
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let catalog = HttpCatalog::new("http://localhost:3333/").unwrap();
        assert_eq!(
            catalog.endpoint("/products/7"),
            "http://localhost:3333/products/7"
        );
    }
}
