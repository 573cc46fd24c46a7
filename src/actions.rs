//! Requests the UI can dispatch and the outcomes they report back.
//!
//! [`perform`] is the only place that talks to the API on behalf of the UI.
//! It also keeps the client's bearer token in step with the session: set on
//! successful authentication, dropped on any 401.

use crate::api::error::ApiError;
use crate::api::payload::{ProductDraft, ProductPayload};
use crate::api::VendorApi;
use crate::models::{AuthResponse, LoginRequest, Order, Product, RegisterRequest, Vendor};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Confirm a token saved by a previous run.
    RestoreSession { token: String },
    Login(LoginRequest),
    Register(RegisterRequest),
    FetchProducts,
    FetchOrders,
    /// Fetch a single product to fill the edit form.
    LoadProduct(String),
    CreateProduct(ProductDraft),
    UpdateProduct {
        product_id: String,
        draft: ProductDraft,
    },
    DeleteProduct(String),
    GenerateSampleOrders,
}

#[derive(Debug)]
pub enum Outcome {
    SessionRestored {
        token: String,
        result: Result<Vendor, ApiError>,
    },
    Authenticated(Result<AuthResponse, ApiError>),
    ProductsLoaded(Result<Vec<Product>, ApiError>),
    ProductLoaded(Result<Product, ApiError>),
    ProductSaved {
        created: bool,
        result: Result<Product, ApiError>,
    },
    ProductDeleted {
        product_id: String,
        result: Result<String, ApiError>,
    },
    OrdersLoaded(Result<Vec<Order>, ApiError>),
    SampleOrdersGenerated(Result<String, ApiError>),
}

/// Drops the client token when the backend says it is no longer valid.
fn settle<T>(api: &dyn VendorApi, result: Result<T, ApiError>) -> Result<T, ApiError> {
    if let Err(e) = &result {
        if e.is_unauthorized() {
            api.set_token(None);
        }
    }
    result
}

fn authenticate(
    api: &dyn VendorApi,
    result: Result<AuthResponse, ApiError>,
) -> Result<AuthResponse, ApiError> {
    if let Ok(response) = &result {
        api.set_token(Some(response.access_token.clone()));
    }
    result
}

pub async fn perform(api: &dyn VendorApi, action: Action) -> Outcome {
    match action {
        Action::RestoreSession { token } => {
            api.set_token(Some(token.clone()));
            let result = api.profile().await;
            if result.is_err() {
                api.set_token(None);
            }
            Outcome::SessionRestored { token, result }
        }
        Action::Login(credentials) => {
            Outcome::Authenticated(authenticate(api, api.login(&credentials).await))
        }
        Action::Register(registration) => {
            Outcome::Authenticated(authenticate(api, api.register(&registration).await))
        }
        Action::FetchProducts => Outcome::ProductsLoaded(settle(api, api.list_products().await)),
        Action::FetchOrders => Outcome::OrdersLoaded(settle(api, api.list_orders().await)),
        Action::LoadProduct(product_id) => {
            Outcome::ProductLoaded(settle(api, api.get_product(&product_id).await))
        }
        Action::CreateProduct(draft) => {
            let result = match ProductPayload::load(draft).await {
                Ok(payload) => settle(api, api.create_product(payload).await),
                Err(e) => Err(e),
            };
            Outcome::ProductSaved {
                created: true,
                result,
            }
        }
        Action::UpdateProduct { product_id, draft } => {
            let result = match ProductPayload::load(draft).await {
                Ok(payload) => settle(api, api.update_product(&product_id, payload).await),
                Err(e) => Err(e),
            };
            Outcome::ProductSaved {
                created: false,
                result,
            }
        }
        Action::DeleteProduct(product_id) => {
            let result = settle(api, api.delete_product(&product_id).await);
            Outcome::ProductDeleted { product_id, result }
        }
        Action::GenerateSampleOrders => {
            Outcome::SampleOrdersGenerated(settle(api, api.generate_sample_orders().await))
        }
    }
}
