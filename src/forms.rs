//! Form state for the login/registration and product screens.
//!
//! Validation mirrors required-field enforcement: nothing is sent until every
//! required field is filled and numeric fields parse.

use crate::api::payload::ProductDraft;
use crate::consts::cli_consts::CATEGORIES;
use crate::models::{LoginRequest, Product, RegisterRequest};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} must be a valid {expected}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

/// Single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
}

impl TextInput {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    fn required(&self, field: &'static str) -> Result<String, FormError> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return Err(FormError::Required(field));
        }
        Ok(trimmed.to_string())
    }
}

/// Moves a focus index forward or backward, wrapping around.
fn cycle(focus: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (focus + 1) % len
    } else {
        (focus + len - 1) % len
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Email,
    Password,
    Name,
    BusinessName,
    Phone,
}

impl AuthField {
    pub fn label(&self) -> &'static str {
        match self {
            AuthField::Email => "Email",
            AuthField::Password => "Password",
            AuthField::Name => "Full name",
            AuthField::BusinessName => "Business name",
            AuthField::Phone => "Phone",
        }
    }
}

/// What a submitted auth form asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub email: TextInput,
    pub password: TextInput,
    pub name: TextInput,
    pub business_name: TextInput,
    pub phone: TextInput,
    focus: usize,
}

impl AuthForm {
    /// Login form filled from values that did not come from the keyboard.
    pub fn login(email: &str, password: &str) -> Self {
        Self {
            email: TextInput::with_value(email),
            password: TextInput::with_value(password),
            ..Self::default()
        }
    }

    pub fn registration(request: RegisterRequest) -> Self {
        Self {
            mode: AuthMode::Register,
            email: TextInput::with_value(request.email),
            password: TextInput::with_value(request.password),
            name: TextInput::with_value(request.name),
            business_name: TextInput::with_value(request.business_name),
            phone: TextInput::with_value(request.phone),
            focus: 0,
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Name,
                AuthField::BusinessName,
                AuthField::Phone,
                AuthField::Email,
                AuthField::Password,
            ],
        }
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(self.focus, self.fields().len(), true);
    }

    pub fn focus_previous(&mut self) {
        self.focus = cycle(self.focus, self.fields().len(), false);
    }

    /// Switches between login and registration, keeping typed values.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.focus = 0;
    }

    pub fn input(&self, field: AuthField) -> &TextInput {
        match field {
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Name => &self.name,
            AuthField::BusinessName => &self.business_name,
            AuthField::Phone => &self.phone,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused() {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Name => &mut self.name,
            AuthField::BusinessName => &mut self.business_name,
            AuthField::Phone => &mut self.phone,
        }
    }

    fn email(&self) -> Result<String, FormError> {
        let email = self.email.required("Email")?;
        match email.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(email),
            _ => Err(FormError::Invalid {
                field: "Email",
                expected: "email address",
            }),
        }
    }

    fn password(&self) -> Result<String, FormError> {
        if self.password.value().is_empty() {
            return Err(FormError::Required("Password"));
        }
        Ok(self.password.value().to_string())
    }

    pub fn submit(&self) -> Result<AuthSubmission, FormError> {
        match self.mode {
            AuthMode::Login => Ok(AuthSubmission::Login(LoginRequest {
                email: self.email()?,
                password: self.password()?,
            })),
            AuthMode::Register => Ok(AuthSubmission::Register(RegisterRequest {
                name: self.name.required("Full name")?,
                business_name: self.business_name.required("Business name")?,
                phone: self.phone.required("Phone")?,
                email: self.email()?,
                password: self.password()?,
            })),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Name,
    Price,
    Quantity,
    Category,
    Description,
    Images,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        ProductField::Name,
        ProductField::Price,
        ProductField::Quantity,
        ProductField::Category,
        ProductField::Description,
        ProductField::Images,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductField::Name => "Name",
            ProductField::Price => "Price",
            ProductField::Quantity => "Quantity",
            ProductField::Category => "Category",
            ProductField::Description => "Description",
            ProductField::Images => "Images (comma-separated paths)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    /// Set when editing an existing product.
    pub product_id: Option<String>,
    pub name: TextInput,
    pub price: TextInput,
    pub quantity: TextInput,
    pub description: TextInput,
    pub images: TextInput,
    category: usize,
    /// Server category outside the fixed list, kept until the selector moves.
    custom_category: Option<String>,
    /// Image URLs the product already has; replaced only if new files are chosen.
    pub existing_images: Vec<String>,
    focus: usize,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_product_id(product_id: impl Into<String>) -> Self {
        Self {
            product_id: Some(product_id.into()),
            ..Self::default()
        }
    }

    pub fn from_product(product: &Product) -> Self {
        let known = CATEGORIES
            .iter()
            .position(|c| c.eq_ignore_ascii_case(&product.category));
        let custom_category = match known {
            None if !product.category.trim().is_empty() => Some(product.category.clone()),
            _ => None,
        };
        let category = known.unwrap_or(CATEGORIES.len() - 1);
        Self {
            product_id: Some(product.id.clone()),
            name: TextInput::with_value(product.name.clone()),
            price: TextInput::with_value(product.price.to_string()),
            quantity: TextInput::with_value(product.quantity.to_string()),
            description: TextInput::with_value(product.description.clone()),
            images: TextInput::default(),
            category,
            custom_category,
            existing_images: product.images.clone(),
            focus: 0,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.product_id.is_some()
    }

    pub fn category(&self) -> &str {
        match &self.custom_category {
            Some(category) => category,
            None => CATEGORIES[self.category % CATEGORIES.len()],
        }
    }

    pub fn next_category(&mut self) {
        self.custom_category = None;
        self.category = cycle(self.category, CATEGORIES.len(), true);
    }

    pub fn previous_category(&mut self) {
        self.custom_category = None;
        self.category = cycle(self.category, CATEGORIES.len(), false);
    }

    pub fn focused(&self) -> ProductField {
        ProductField::ALL[self.focus % ProductField::ALL.len()]
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(self.focus, ProductField::ALL.len(), true);
    }

    pub fn focus_previous(&mut self) {
        self.focus = cycle(self.focus, ProductField::ALL.len(), false);
    }

    /// Text input behind `field`; the category is a selector, not text.
    pub fn input(&self, field: ProductField) -> Option<&TextInput> {
        match field {
            ProductField::Name => Some(&self.name),
            ProductField::Price => Some(&self.price),
            ProductField::Quantity => Some(&self.quantity),
            ProductField::Description => Some(&self.description),
            ProductField::Images => Some(&self.images),
            ProductField::Category => None,
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused() {
            ProductField::Name => Some(&mut self.name),
            ProductField::Price => Some(&mut self.price),
            ProductField::Quantity => Some(&mut self.quantity),
            ProductField::Description => Some(&mut self.description),
            ProductField::Images => Some(&mut self.images),
            ProductField::Category => None,
        }
    }

    pub fn image_paths(&self) -> Vec<PathBuf> {
        self.images
            .value()
            .split(',')
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .collect()
    }

    pub fn draft(&self) -> Result<ProductDraft, FormError> {
        let name = self.name.required("Name")?;

        let price_raw = self.price.required("Price")?;
        let price: f64 = price_raw.parse().map_err(|_| FormError::Invalid {
            field: "Price",
            expected: "number",
        })?;
        if !price.is_finite() {
            return Err(FormError::Invalid {
                field: "Price",
                expected: "number",
            });
        }
        if price < 0.0 {
            return Err(FormError::Negative("Price"));
        }

        let quantity_raw = self.quantity.required("Quantity")?;
        let quantity: i64 = quantity_raw.parse().map_err(|_| FormError::Invalid {
            field: "Quantity",
            expected: "whole number",
        })?;
        if quantity < 0 {
            return Err(FormError::Negative("Quantity"));
        }
        let quantity = u32::try_from(quantity).map_err(|_| FormError::Invalid {
            field: "Quantity",
            expected: "whole number",
        })?;

        Ok(ProductDraft {
            name,
            price,
            quantity,
            category: self.category().to_string(),
            description: self.description.required("Description")?,
            images: self.image_paths(),
        })
    }
}
