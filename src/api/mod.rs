use crate::api::error::ApiError;
use crate::api::payload::ProductPayload;
use crate::environment::Environment;
use crate::models::{
    AuthResponse, HealthStatus, LoginRequest, Order, Product, RegisterRequest, Vendor,
};

pub(crate) mod client;
pub use client::VendorClient;
pub mod error;
pub mod payload;

#[cfg(test)]
use mockall::automock;

/// The vendor backend as seen by the dashboard.
///
/// The implementation holds the bearer token and attaches it to every request
/// while one is set.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VendorApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// The token currently attached to requests.
    fn token(&self) -> Option<String>;

    /// Replaces (or with `None`, drops) the token attached to requests.
    fn set_token(&self, token: Option<String>);

    /// Checks that the backend is up.
    async fn health(&self) -> Result<HealthStatus, ApiError>;

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Profile of the vendor owning the current token.
    async fn profile(&self) -> Result<Vendor, ApiError>;

    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    async fn get_product(&self, product_id: &str) -> Result<Product, ApiError>;

    async fn create_product(&self, product: ProductPayload) -> Result<Product, ApiError>;

    async fn update_product(
        &self,
        product_id: &str,
        product: ProductPayload,
    ) -> Result<Product, ApiError>;

    /// Deletes a product, returning the server's confirmation message.
    async fn delete_product(&self, product_id: &str) -> Result<String, ApiError>;

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Asks the backend to fabricate orders against the vendor's products.
    async fn generate_sample_orders(&self) -> Result<String, ApiError>;
}
