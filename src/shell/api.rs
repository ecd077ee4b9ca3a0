use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::product::{NewProduct, Product};

/// Blocking HTTP client for the product endpoints the shell uses.
pub struct ApiClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusCode),
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// POST the new product; anything but a 200 is a failure.
    pub fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let response = self
            .http
            .post(format!("{}/products/", self.base_url))
            .json(product)
            .send()?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus(response.status()));
        }
        Ok(response.json()?)
    }

    /// GET the full product list.
    pub fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .http
            .get(format!("{}/products/", self.base_url))
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }
}
