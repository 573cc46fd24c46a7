//! KiaKart Vendor API Client
//!
//! A reqwest client for the vendor backend. Every request goes through
//! [`VendorClient::prepare`], which attaches the bearer token when one is held.

use crate::api::VendorApi;
use crate::api::error::ApiError;
use crate::api::payload::ProductPayload;
use crate::consts::cli_consts::http;
use crate::environment::Environment;
use crate::models::{
    AuthResponse, HealthStatus, LoginRequest, MessageResponse, Order, Product, RegisterRequest,
    Vendor,
};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::RwLock;

// User-Agent string with client version
const USER_AGENT: &str = concat!("kiakart-vendor/", env!("CARGO_PKG_VERSION"));

/// Request body variants.
#[derive(Debug, Default)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    /// Pre-built multipart body; sent as-is.
    Multipart(Form),
}

/// Method, body and extra headers of a single call.
#[derive(Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Body,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: Body::Empty,
            headers: HeaderMap::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    /// A request whose body is `body` serialized as JSON.
    pub fn json<B: Serialize>(method: Method, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            body: Body::Json(serde_json::to_value(body)?),
            ..Self::new(method)
        })
    }

    pub fn multipart(method: Method, form: Form) -> Self {
        Self {
            body: Body::Multipart(form),
            ..Self::new(method)
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[derive(Debug)]
pub struct VendorClient {
    client: Client,
    environment: Environment,
    token: RwLock<Option<String>>,
}

impl VendorClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .build()?,
            environment,
            token: RwLock::new(None),
        })
    }

    pub fn with_token(self, token: Option<String>) -> Self {
        self.set_token(token);
        self
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Builds the request for `endpoint`: bearer auth when a token is held,
    /// JSON or multipart body, caller headers last.
    pub fn prepare(&self, endpoint: &str, options: RequestOptions) -> RequestBuilder {
        let url = self.build_url(endpoint);
        let mut builder = self
            .client
            .request(options.method, &url)
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        if let Some(token) = self.token() {
            builder = builder.bearer_auth(token);
        }

        builder = match options.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Multipart(form) => builder.multipart(form),
        };

        builder.headers(options.headers)
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Json)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// Sends a request and parses the JSON response.
    pub async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let method = options.method.clone();
        debug!("{} {}", method, endpoint);

        let response = self.prepare(endpoint, options).send().await?;
        let response = Self::handle_response_status(response).await.inspect_err(|e| {
            warn!("{} {} failed: {}", method, endpoint, e);
        })?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    fn product_endpoint(product_id: &str) -> String {
        format!("api/products/{}", urlencoding::encode(product_id))
    }
}

#[async_trait::async_trait]
impl VendorApi for VendorClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token;
        }
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.call("api/health", RequestOptions::get()).await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.call(
            "api/auth/login",
            RequestOptions::json(Method::POST, credentials)?,
        )
        .await
    }

    async fn register(&self, registration: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.call(
            "api/auth/register",
            RequestOptions::json(Method::POST, registration)?,
        )
        .await
    }

    async fn profile(&self) -> Result<Vendor, ApiError> {
        self.call("api/vendor/profile", RequestOptions::get()).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.call("api/products", RequestOptions::get()).await
    }

    async fn get_product(&self, product_id: &str) -> Result<Product, ApiError> {
        self.call(&Self::product_endpoint(product_id), RequestOptions::get())
            .await
    }

    async fn create_product(&self, product: ProductPayload) -> Result<Product, ApiError> {
        let form = product.to_form()?;
        self.call(
            "api/products",
            RequestOptions::multipart(Method::POST, form),
        )
        .await
    }

    async fn update_product(
        &self,
        product_id: &str,
        product: ProductPayload,
    ) -> Result<Product, ApiError> {
        let form = product.to_form()?;
        self.call(
            &Self::product_endpoint(product_id),
            RequestOptions::multipart(Method::PUT, form),
        )
        .await
    }

    async fn delete_product(&self, product_id: &str) -> Result<String, ApiError> {
        let response: MessageResponse = self
            .call(&Self::product_endpoint(product_id), RequestOptions::delete())
            .await?;
        Ok(response.message)
    }

    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.call("api/orders", RequestOptions::get()).await
    }

    async fn generate_sample_orders(&self) -> Result<String, ApiError> {
        let response: MessageResponse = self
            .call(
                "api/generate-sample-orders",
                RequestOptions::new(Method::POST),
            )
            .await?;
        Ok(response.message)
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live backend on localhost:8001.
mod live_backend_tests {
    use super::*;

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    async fn test_health() {
        let client = VendorClient::new(Environment::Local).unwrap();
        match client.health().await {
            Ok(health) => assert_eq!(health.status, "healthy"),
            Err(e) => panic!("Health check failed: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    async fn test_bad_login_reports_server_detail() {
        let client = VendorClient::new(Environment::Local).unwrap();
        let credentials = LoginRequest {
            email: "nobody@example.com".to_string(),
            password: "wrong".to_string(),
        };
        match client.login(&credentials).await {
            Ok(_) => panic!("login should fail"),
            Err(e) => assert_eq!(e.user_message(), "Invalid credentials"),
        }
    }
}
