//! View router
//!
//! The screen being shown, with the edit screen carrying its product id.

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

const EDIT_PREFIX: &str = "edit-product-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Login,
    Dashboard,
    Products,
    AddProduct,
    EditProduct { product_id: String },
    Orders,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    Unknown(String),
    #[error("Product id must be non-empty and contain no whitespace")]
    InvalidProductId,
}

impl View {
    /// Edit screen for `product_id`; the id must be a non-empty token.
    pub fn edit_product(product_id: impl Into<String>) -> Result<Self, ViewError> {
        let product_id = product_id.into();
        if product_id.is_empty() || product_id.chars().any(char::is_whitespace) {
            return Err(ViewError::InvalidProductId);
        }
        Ok(View::EditProduct { product_id })
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, View::Login)
    }

    /// Screens holding editable input.
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            View::Login | View::AddProduct | View::EditProduct { .. }
        )
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Sign in",
            View::Dashboard => "Dashboard",
            View::Products => "Products",
            View::AddProduct => "Add Product",
            View::EditProduct { .. } => "Edit Product",
            View::Orders => "Orders",
        }
    }

    /// Index of the navigation tab highlighted for this view.
    pub fn tab_index(&self) -> Option<usize> {
        match self {
            View::Dashboard => Some(0),
            View::Products | View::AddProduct | View::EditProduct { .. } => Some(1),
            View::Orders => Some(2),
            View::Login => None,
        }
    }
}

impl FromStr for View {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(View::Login),
            "dashboard" => Ok(View::Dashboard),
            "products" => Ok(View::Products),
            "add-product" => Ok(View::AddProduct),
            "orders" => Ok(View::Orders),
            other => match other.strip_prefix(EDIT_PREFIX) {
                Some(id) => View::edit_product(id),
                None => Err(ViewError::Unknown(other.to_string())),
            },
        }
    }
}

impl Display for View {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Login => write!(f, "login"),
            View::Dashboard => write!(f, "dashboard"),
            View::Products => write!(f, "products"),
            View::AddProduct => write!(f, "add-product"),
            View::EditProduct { product_id } => write!(f, "{}{}", EDIT_PREFIX, product_id),
            View::Orders => write!(f, "orders"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip() {
        for selector in [
            "login",
            "dashboard",
            "products",
            "add-product",
            "edit-product-5f1c",
            "orders",
        ] {
            let view: View = selector.parse().unwrap();
            assert_eq!(view.to_string(), selector);
        }
    }

    #[test]
    fn edit_selector_carries_product_id() {
        assert_eq!(
            "edit-product-abc-123".parse::<View>(),
            Ok(View::EditProduct {
                product_id: "abc-123".to_string()
            })
        );
    }

    #[test]
    fn malformed_selectors_are_rejected() {
        assert_eq!(
            "edit-product-".parse::<View>(),
            Err(ViewError::InvalidProductId)
        );
        assert_eq!(
            View::edit_product("a b"),
            Err(ViewError::InvalidProductId)
        );
        assert!(matches!(
            "settings".parse::<View>(),
            Err(ViewError::Unknown(_))
        ));
    }

    #[test]
    fn only_login_is_public() {
        assert!(!View::Login.requires_auth());
        assert!(View::Orders.requires_auth());
        assert!(View::AddProduct.is_form());
        assert!(!View::Products.is_form());
    }
}
