//! Dashboard application state
//!
//! Holds everything the screens render and turns user intents and request
//! outcomes into state changes plus follow-up [`Action`]s. Nothing here does
//! I/O except persisting the session token.

use crate::actions::{Action, Outcome};
use crate::api::error::ApiError;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, Topic};
use crate::forms::{AuthForm, AuthSubmission, FormError, ProductForm};
use crate::models::{Order, Product};
use crate::orders::{StatusFilter, filter_orders};
use crate::session::state::Session;
use crate::stats::DashboardStats;
use crate::view::View;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Dismissible message shown above the current view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// A delete waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub product_id: String,
    pub product_name: String,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub environment: Environment,
    pub auth_form: AuthForm,
    pub product_form: ProductForm,
    view: View,
    products: Vec<Product>,
    orders: Vec<Order>,
    order_filter: StatusFilter,
    selected_product: usize,
    selected_order: usize,
    pending_delete: Option<PendingDelete>,
    banner: Option<Banner>,
    in_flight: usize,
    activity_logs: VecDeque<Event>,
    classifier: ErrorClassifier,
}

impl AppState {
    pub fn new(session: Session, environment: Environment) -> Self {
        Self {
            session,
            environment,
            auth_form: AuthForm::default(),
            product_form: ProductForm::new(),
            view: View::Login,
            products: Vec::new(),
            orders: Vec::new(),
            order_filter: StatusFilter::All,
            selected_product: 0,
            selected_order: 0,
            pending_delete: None,
            banner: None,
            in_flight: 0,
            activity_logs: VecDeque::new(),
            classifier: ErrorClassifier::new(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_filter(&self) -> StatusFilter {
        self.order_filter
    }

    /// Orders passing the current status filter.
    pub fn visible_orders(&self) -> Vec<&Order> {
        filter_orders(&self.orders, self.order_filter)
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.products, &self.orders)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected_product)
    }

    pub fn selected_product_index(&self) -> usize {
        self.selected_product
    }

    pub fn selected_order_index(&self) -> usize {
        self.selected_order
    }

    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// True while any request is in flight; submit controls are disabled.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn activity_logs(&self) -> &VecDeque<Event> {
        &self.activity_logs
    }

    pub fn welcome_text(&self) -> Option<String> {
        self.session
            .vendor()
            .map(|vendor| format!("Welcome, {}", vendor.name))
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Switches screens and returns the fetches the new screen needs.
    ///
    /// Unsaved form input is discarded. Anything but the login screen
    /// requires an authenticated session.
    pub fn navigate(&mut self, view: View) -> Vec<Action> {
        self.pending_delete = None;

        if view.requires_auth() && !self.session.is_authenticated() {
            self.view = View::Login;
            return Vec::new();
        }

        let actions = match &view {
            View::Login => {
                self.auth_form = AuthForm::default();
                Vec::new()
            }
            View::Dashboard => Vec::new(),
            View::Products => vec![Action::FetchProducts],
            View::Orders => vec![Action::FetchOrders],
            View::AddProduct => {
                self.product_form = ProductForm::new();
                Vec::new()
            }
            View::EditProduct { product_id } => {
                match self.products.iter().find(|p| &p.id == product_id) {
                    Some(product) => {
                        self.product_form = ProductForm::from_product(product);
                        Vec::new()
                    }
                    None => {
                        self.product_form = ProductForm::for_product_id(product_id.clone());
                        vec![Action::LoadProduct(product_id.clone())]
                    }
                }
            }
        };

        self.view = view;
        actions
    }

    /// Refetch whatever the current screen lists.
    pub fn refresh(&self) -> Vec<Action> {
        match self.view {
            View::Products => vec![Action::FetchProducts],
            View::Orders => vec![Action::FetchOrders],
            View::Dashboard => vec![Action::FetchProducts, Action::FetchOrders],
            _ => Vec::new(),
        }
    }

    /// Startup: returns the profile check for a persisted token, if any.
    pub fn restore(&self) -> Vec<Action> {
        match self.session.persisted_token() {
            Some(token) => vec![Action::RestoreSession { token }],
            None => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // User intents
    // ------------------------------------------------------------------

    pub fn submit_auth(&mut self) -> Vec<Action> {
        if self.is_loading() {
            return Vec::new();
        }
        match self.auth_form.submit() {
            Ok(AuthSubmission::Login(request)) => vec![Action::Login(request)],
            Ok(AuthSubmission::Register(request)) => vec![Action::Register(request)],
            Err(e) => {
                self.form_error(e);
                Vec::new()
            }
        }
    }

    pub fn submit_product(&mut self) -> Vec<Action> {
        if self.is_loading() {
            return Vec::new();
        }
        match self.product_form.draft() {
            Ok(draft) => match &self.product_form.product_id {
                Some(product_id) => vec![Action::UpdateProduct {
                    product_id: product_id.clone(),
                    draft,
                }],
                None => vec![Action::CreateProduct(draft)],
            },
            Err(e) => {
                self.form_error(e);
                Vec::new()
            }
        }
    }

    /// Asks for confirmation before deleting the selected product.
    pub fn request_delete(&mut self) {
        let pending = self.selected_product().map(|product| PendingDelete {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
        });
        if pending.is_some() {
            self.pending_delete = pending;
        }
    }

    pub fn confirm_delete(&mut self) -> Vec<Action> {
        if self.is_loading() {
            return Vec::new();
        }
        match self.pending_delete.take() {
            Some(pending) => vec![Action::DeleteProduct(pending.product_id)],
            None => Vec::new(),
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn generate_sample_orders(&mut self) -> Vec<Action> {
        if self.is_loading() {
            return Vec::new();
        }
        vec![Action::GenerateSampleOrders]
    }

    pub fn set_order_filter(&mut self, filter: StatusFilter) {
        self.order_filter = filter;
        self.selected_order = 0;
    }

    pub fn select_next_product(&mut self) {
        if self.selected_product + 1 < self.products.len() {
            self.selected_product += 1;
        }
    }

    pub fn select_previous_product(&mut self) {
        self.selected_product = self.selected_product.saturating_sub(1);
    }

    pub fn select_next_order(&mut self) {
        if self.selected_order + 1 < self.visible_orders().len() {
            self.selected_order += 1;
        }
    }

    pub fn select_previous_order(&mut self) {
        self.selected_order = self.selected_order.saturating_sub(1);
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Clears token, profile and cached lists and returns to the login screen.
    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            self.log(Event::error(
                Topic::Session,
                format!("Failed to clear saved session: {}", e),
                LogLevel::Warn,
            ));
        }
        self.clear_cached_data();
        self.banner = None;
        self.navigate(View::Login);
        self.log(Event::success(Topic::Session, "Logged out"));
    }

    // ------------------------------------------------------------------
    // Request lifecycle
    // ------------------------------------------------------------------

    /// Marks an action as dispatched.
    pub fn begin(&mut self, action: &Action) {
        self.in_flight += 1;
        if matches!(
            action,
            Action::Login(_) | Action::Register(_) | Action::RestoreSession { .. }
        ) {
            self.session.begin_authentication();
        }
    }

    /// Folds a finished request into the state.
    pub fn apply(&mut self, outcome: Outcome) -> Vec<Action> {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome {
            Outcome::SessionRestored { token, result } => match result {
                Ok(vendor) => {
                    self.log(Event::success(
                        Topic::Session,
                        format!("Signed in as {}", vendor.name),
                    ));
                    self.session.resume(token, vendor);
                    self.enter_dashboard()
                }
                Err(e) => {
                    self.log_error(Topic::Session, &e);
                    if let Err(io) = self.session.expire() {
                        self.log(Event::error(
                            Topic::Session,
                            format!("Failed to clear saved session: {}", io),
                            LogLevel::Warn,
                        ));
                    }
                    self.view = View::Login;
                    Vec::new()
                }
            },
            Outcome::Authenticated(result) => match result {
                Ok(response) => {
                    let name = response.vendor.name.clone();
                    if let Err(e) = self
                        .session
                        .authenticated(response.access_token, response.vendor)
                    {
                        self.show_error(format!("Signed in, but saving the session failed: {}", e));
                    } else if let Err(e) = self.session.remember_backend(&self.environment) {
                        self.log(Event::error(
                            Topic::Session,
                            format!("Failed to save server address: {}", e),
                            LogLevel::Warn,
                        ));
                    }
                    self.auth_form = AuthForm::default();
                    self.log(Event::success(Topic::Session, format!("Signed in as {}", name)));
                    self.enter_dashboard()
                }
                Err(e) => {
                    self.session.fail_authentication();
                    self.log_error(Topic::Session, &e);
                    self.show_error(e.user_message());
                    Vec::new()
                }
            },
            Outcome::ProductsLoaded(result) => match result {
                Ok(products) if self.session.is_authenticated() => {
                    self.log(Event::refresh(
                        Topic::Products,
                        format!("Loaded {} products", products.len()),
                    ));
                    self.products = products;
                    self.selected_product = self
                        .selected_product
                        .min(self.products.len().saturating_sub(1));
                    Vec::new()
                }
                Ok(_) => Vec::new(),
                Err(e) => self.request_failed(Topic::Products, e),
            },
            Outcome::ProductLoaded(result) => match result {
                Ok(product) => {
                    if let View::EditProduct { product_id } = &self.view {
                        if *product_id == product.id {
                            self.product_form = ProductForm::from_product(&product);
                        }
                    }
                    Vec::new()
                }
                Err(e) => self.request_failed(Topic::Products, e),
            },
            Outcome::ProductSaved { created, result } => match result {
                Ok(product) => {
                    let message = if created {
                        format!("Product \"{}\" created", product.name)
                    } else {
                        format!("Product \"{}\" updated", product.name)
                    };
                    self.log(Event::success(Topic::Products, message.clone()));
                    self.show_success(message);
                    self.navigate(View::Products)
                }
                Err(e) => self.request_failed(Topic::Products, e),
            },
            Outcome::ProductDeleted { product_id, result } => match result {
                Ok(message) => {
                    self.log(Event::success(
                        Topic::Products,
                        format!("Deleted product {}", product_id),
                    ));
                    if !self.session.is_authenticated() {
                        return Vec::new();
                    }
                    self.show_success(message);
                    vec![Action::FetchProducts]
                }
                Err(e) => self.request_failed(Topic::Products, e),
            },
            Outcome::OrdersLoaded(result) => match result {
                Ok(orders) if self.session.is_authenticated() => {
                    self.log(Event::refresh(
                        Topic::Orders,
                        format!("Loaded {} orders", orders.len()),
                    ));
                    self.orders = orders;
                    self.selected_order = self
                        .selected_order
                        .min(self.visible_orders().len().saturating_sub(1));
                    Vec::new()
                }
                Ok(_) => Vec::new(),
                Err(e) => self.request_failed(Topic::Orders, e),
            },
            Outcome::SampleOrdersGenerated(result) => match result {
                Ok(message) => {
                    self.log(Event::success(Topic::Orders, message.clone()));
                    if !self.session.is_authenticated() {
                        return Vec::new();
                    }
                    self.show_success(message);
                    vec![Action::FetchOrders]
                }
                Err(e) => self.request_failed(Topic::Orders, e),
            },
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn enter_dashboard(&mut self) -> Vec<Action> {
        let mut actions = self.navigate(View::Dashboard);
        actions.extend([Action::FetchProducts, Action::FetchOrders]);
        actions
    }

    fn clear_cached_data(&mut self) {
        self.products.clear();
        self.orders.clear();
        self.selected_product = 0;
        self.selected_order = 0;
        self.order_filter = StatusFilter::All;
        self.pending_delete = None;
    }

    /// Common failure path: expired sessions log out, everything else keeps
    /// the current screen and shows the server's message.
    fn request_failed(&mut self, topic: Topic, error: ApiError) -> Vec<Action> {
        self.log_error(topic, &error);
        if error.is_unauthorized() && self.session.is_authenticated() {
            if let Err(e) = self.session.expire() {
                self.log(Event::error(
                    Topic::Session,
                    format!("Failed to clear saved session: {}", e),
                    LogLevel::Warn,
                ));
            }
            self.clear_cached_data();
            self.navigate(View::Login);
            self.show_error("Your session has expired. Please log in again.".to_string());
            return Vec::new();
        }
        self.show_error(error.user_message());
        Vec::new()
    }

    fn form_error(&mut self, error: FormError) {
        self.show_error(error.to_string());
    }

    fn show_error(&mut self, message: String) {
        self.banner = Some(Banner {
            kind: BannerKind::Error,
            message,
        });
    }

    fn show_success(&mut self, message: String) {
        self.banner = Some(Banner {
            kind: BannerKind::Success,
            message,
        });
    }

    fn log_error(&mut self, topic: Topic, error: &ApiError) {
        let level = self.classifier.classify(error);
        self.log(Event::error(topic, error.user_message(), level));
    }

    fn log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::forms::TextInput;
    use crate::models::{AuthResponse, OrderStatus, Vendor};
    use crate::orders::fixtures::order;
    use tempfile::{TempDir, tempdir};

    pub(crate) fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: "desc".to_string(),
            price: 10.0,
            quantity: 1,
            category: "Other".to_string(),
            images: Vec::new(),
        }
    }

    fn auth_response(token: &str, name: &str) -> AuthResponse {
        AuthResponse {
            access_token: token.to_string(),
            token_type: "bearer".to_string(),
            vendor: Vendor {
                name: name.to_string(),
                ..Vendor::default()
            },
        }
    }

    fn unauthorized() -> ApiError {
        ApiError::Http {
            status: 401,
            message: "Token expired".to_string(),
        }
    }

    fn new_state() -> (TempDir, AppState) {
        let dir = tempdir().unwrap();
        let session = Session::new(dir.path().join("config.json"));
        (dir, AppState::new(session, Environment::Local))
    }

    /// State signed in as "A" with token "t1".
    pub(crate) fn signed_in() -> (TempDir, AppState) {
        let (dir, mut state) = new_state();
        state.apply(Outcome::Authenticated(Ok(auth_response("t1", "A"))));
        (dir, state)
    }

    #[test]
    // Login {a@b.com, x} answered with {t1, vendor A} lands on the dashboard.
    fn login_scenario_reaches_dashboard_with_welcome() {
        let (_dir, mut state) = new_state();
        "a@b.com".chars().for_each(|c| state.auth_form.email.push(c));
        state.auth_form.password.push('x');

        let actions = state.submit_auth();
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Login(req) if req.email == "a@b.com" && req.password == "x"));
        state.begin(&actions[0]);
        assert!(state.session.is_authenticating());
        assert!(state.is_loading());

        let follow_up = state.apply(Outcome::Authenticated(Ok(auth_response("t1", "A"))));

        assert_eq!(state.view(), &View::Dashboard);
        assert_eq!(state.welcome_text().as_deref(), Some("Welcome, A"));
        assert_eq!(state.session.persisted_token().as_deref(), Some("t1"));
        assert_eq!(follow_up, vec![Action::FetchProducts, Action::FetchOrders]);
        assert!(!state.is_loading());
    }

    #[test]
    fn registration_reaches_dashboard_and_persists_token() {
        let (_dir, mut state) = new_state();
        state.auth_form.toggle_mode();
        state.auth_form.email = TextInput::with_value("b@c.com");
        state.auth_form.password = TextInput::with_value("pw");
        state.auth_form.name = TextInput::with_value("B");
        state.auth_form.business_name = TextInput::with_value("B's Shop");
        state.auth_form.phone = TextInput::with_value("555-0100");

        let actions = state.submit_auth();
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            &actions[0],
            Action::Register(req) if req.email == "b@c.com" && req.business_name == "B's Shop"
        ));
        state.begin(&actions[0]);
        assert!(state.session.is_authenticating());

        let follow_up = state.apply(Outcome::Authenticated(Ok(auth_response("t2", "B"))));

        assert_eq!(state.view(), &View::Dashboard);
        assert_eq!(state.session.persisted_token().as_deref(), Some("t2"));
        assert_eq!(state.welcome_text().as_deref(), Some("Welcome, B"));
        assert_eq!(follow_up, vec![Action::FetchProducts, Action::FetchOrders]);
    }

    #[test]
    fn failed_login_stays_on_login_with_banner() {
        let (_dir, mut state) = new_state();
        state.apply(Outcome::Authenticated(Err(ApiError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        })));
        assert_eq!(state.view(), &View::Login);
        assert!(!state.session.is_authenticated());
        let banner = state.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.message, "Invalid credentials");
    }

    #[test]
    fn invalid_form_blocks_submission() {
        let (_dir, mut state) = new_state();
        assert!(state.submit_auth().is_empty());
        assert_eq!(state.banner().unwrap().message, "Email is required");
    }

    #[test]
    fn anonymous_navigation_lands_on_login() {
        let (_dir, mut state) = new_state();
        assert!(state.navigate(View::Orders).is_empty());
        assert_eq!(state.view(), &View::Login);
    }

    #[test]
    fn entering_lists_dispatches_fetches() {
        let (_dir, mut state) = signed_in();
        assert_eq!(state.navigate(View::Products), vec![Action::FetchProducts]);
        assert_eq!(state.navigate(View::Orders), vec![Action::FetchOrders]);
        assert!(state.navigate(View::Dashboard).is_empty());
        assert!(state.navigate(View::AddProduct).is_empty());
    }

    #[test]
    fn edit_view_uses_cached_product_or_loads_it() {
        let (_dir, mut state) = signed_in();
        state.apply(Outcome::ProductsLoaded(Ok(vec![product("p1", "Mug")])));

        assert!(state.navigate(View::edit_product("p1").unwrap()).is_empty());
        assert_eq!(state.product_form.name.value(), "Mug");

        let actions = state.navigate(View::edit_product("p2").unwrap());
        assert_eq!(actions, vec![Action::LoadProduct("p2".to_string())]);
        state.apply(Outcome::ProductLoaded(Ok(product("p2", "Lamp"))));
        assert_eq!(state.product_form.name.value(), "Lamp");
        assert_eq!(state.product_form.product_id.as_deref(), Some("p2"));
    }

    #[test]
    fn switching_views_discards_form_input() {
        let (_dir, mut state) = signed_in();
        state.navigate(View::AddProduct);
        state.product_form.name.push('x');
        state.navigate(View::Products);
        state.navigate(View::AddProduct);
        assert_eq!(state.product_form.name.value(), "");
    }

    #[test]
    fn saved_product_returns_to_list_and_refetches() {
        let (_dir, mut state) = signed_in();
        state.navigate(View::AddProduct);
        let actions = state.apply(Outcome::ProductSaved {
            created: true,
            result: Ok(product("p1", "Mug")),
        });
        assert_eq!(state.view(), &View::Products);
        assert_eq!(actions, vec![Action::FetchProducts]);
        assert_eq!(state.banner().unwrap().kind, BannerKind::Success);
    }

    #[test]
    fn failed_save_keeps_form_and_shows_server_message() {
        let (_dir, mut state) = signed_in();
        state.navigate(View::AddProduct);
        state.product_form.name.push('M');
        let actions = state.apply(Outcome::ProductSaved {
            created: true,
            result: Err(ApiError::Http {
                status: 422,
                message: "field required".to_string(),
            }),
        });
        assert!(actions.is_empty());
        assert_eq!(state.view(), &View::AddProduct);
        assert_eq!(state.product_form.name.value(), "M");
        assert_eq!(state.banner().unwrap().message, "field required");
    }

    #[test]
    fn delete_requires_confirmation() {
        let (_dir, mut state) = signed_in();
        state.apply(Outcome::ProductsLoaded(Ok(vec![
            product("p1", "Mug"),
            product("p2", "Lamp"),
        ])));
        state.select_next_product();

        assert!(state.confirm_delete().is_empty());
        state.request_delete();
        assert_eq!(state.pending_delete().unwrap().product_name, "Lamp");
        state.cancel_delete();
        assert!(state.confirm_delete().is_empty());

        state.request_delete();
        assert_eq!(
            state.confirm_delete(),
            vec![Action::DeleteProduct("p2".to_string())]
        );
        assert!(state.pending_delete().is_none());

        let follow_up = state.apply(Outcome::ProductDeleted {
            product_id: "p2".to_string(),
            result: Ok("Product deleted successfully".to_string()),
        });
        assert_eq!(follow_up, vec![Action::FetchProducts]);
    }

    #[test]
    fn order_filter_is_client_side() {
        let (_dir, mut state) = signed_in();
        state.apply(Outcome::OrdersLoaded(Ok(vec![
            order("o1", OrderStatus::Pending, 5.0, 1),
            order("o2", OrderStatus::Delivered, 7.0, 2),
        ])));

        state.set_order_filter(StatusFilter::Only(OrderStatus::Delivered));
        let ids: Vec<&str> = state.visible_orders().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o2"]);

        state.set_order_filter(StatusFilter::All);
        assert_eq!(state.visible_orders().len(), 2);
        assert_eq!(state.orders().len(), 2);
    }

    #[test]
    fn dashboard_stats_track_loaded_lists() {
        let (_dir, mut state) = signed_in();
        state.apply(Outcome::ProductsLoaded(Ok(vec![product("p1", "Mug")])));
        state.apply(Outcome::OrdersLoaded(Ok(vec![
            order("o1", OrderStatus::Pending, 5.0, 1),
            order("o2", OrderStatus::Delivered, 7.5, 2),
        ])));
        let stats = state.stats();
        assert_eq!(stats.total_products, 1);
        assert_eq!(stats.total_orders, 2);
        assert!((stats.total_revenue - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn late_confirmations_after_logout_fetch_nothing() {
        let (_dir, mut state) = signed_in();
        state.logout();

        let after_delete = state.apply(Outcome::ProductDeleted {
            product_id: "p1".to_string(),
            result: Ok("Product deleted successfully".to_string()),
        });
        let after_samples =
            state.apply(Outcome::SampleOrdersGenerated(Ok("Created 3 orders".to_string())));

        assert!(after_delete.is_empty());
        assert!(after_samples.is_empty());
        assert_eq!(state.view(), &View::Login);
        assert!(state.banner().is_none());
    }

    #[test]
    fn logout_clears_everything() {
        let (_dir, mut state) = signed_in();
        state.apply(Outcome::ProductsLoaded(Ok(vec![product("p1", "Mug")])));
        state.apply(Outcome::OrdersLoaded(Ok(vec![order(
            "o1",
            OrderStatus::Pending,
            5.0,
            1,
        )])));

        state.logout();

        assert_eq!(state.view(), &View::Login);
        assert!(state.products().is_empty());
        assert!(state.orders().is_empty());
        assert!(state.session.vendor().is_none());
        assert_eq!(state.session.persisted_token(), None);
    }

    #[test]
    fn stale_list_after_logout_is_ignored() {
        let (_dir, mut state) = signed_in();
        state.logout();
        state.apply(Outcome::ProductsLoaded(Ok(vec![product("p1", "Mug")])));
        assert!(state.products().is_empty());
    }

    #[test]
    fn expired_token_on_fetch_forces_login() {
        let (_dir, mut state) = signed_in();
        state.navigate(View::Orders);
        state.apply(Outcome::OrdersLoaded(Err(unauthorized())));
        assert_eq!(state.view(), &View::Login);
        assert!(!state.session.is_authenticated());
        assert_eq!(state.session.persisted_token(), None);
        assert!(state.banner().unwrap().message.contains("expired"));
    }

    #[test]
    fn other_errors_keep_the_view() {
        let (_dir, mut state) = signed_in();
        state.navigate(View::Orders);
        state.apply(Outcome::SampleOrdersGenerated(Err(ApiError::Http {
            status: 400,
            message: "No products found. Add some products first.".to_string(),
        })));
        assert_eq!(state.view(), &View::Orders);
        assert!(state.session.is_authenticated());
        assert_eq!(
            state.banner().unwrap().message,
            "No products found. Add some products first."
        );
        state.dismiss_banner();
        assert!(state.banner().is_none());
    }

    #[test]
    fn restore_with_persisted_token() {
        let (_dir, state) = signed_in();
        let mut restarted = AppState::new(
            Session::new(state.session.config_path().to_path_buf()),
            Environment::Local,
        );
        let actions = restarted.restore();
        assert_eq!(
            actions,
            vec![Action::RestoreSession {
                token: "t1".to_string()
            }]
        );

        restarted.begin(&actions[0]);
        let follow_up = restarted.apply(Outcome::SessionRestored {
            token: "t1".to_string(),
            result: Ok(Vendor {
                name: "A".to_string(),
                ..Vendor::default()
            }),
        });
        assert_eq!(restarted.view(), &View::Dashboard);
        assert_eq!(follow_up, vec![Action::FetchProducts, Action::FetchOrders]);
        assert_eq!(state.session.token(), Some("t1"));
    }

    #[test]
    fn restore_failure_clears_persisted_token() {
        let (_dir, state) = signed_in();
        let mut restarted = AppState::new(
            Session::new(state.session.config_path().to_path_buf()),
            Environment::Local,
        );
        restarted.restore();
        restarted.apply(Outcome::SessionRestored {
            token: "t1".to_string(),
            result: Err(unauthorized()),
        });
        assert_eq!(restarted.view(), &View::Login);
        assert_eq!(restarted.session.persisted_token(), None);
    }

    #[test]
    fn submissions_are_blocked_while_loading() {
        let (_dir, mut state) = signed_in();
        state.begin(&Action::FetchOrders);
        assert!(state.generate_sample_orders().is_empty());
        state.apply(Outcome::OrdersLoaded(Ok(Vec::new())));
        assert_eq!(
            state.generate_sample_orders(),
            vec![Action::GenerateSampleOrders]
        );
    }

    #[test]
    fn activity_log_is_bounded() {
        let (_dir, mut state) = signed_in();
        for _ in 0..(MAX_ACTIVITY_LOGS + 10) {
            state.apply(Outcome::ProductsLoaded(Ok(Vec::new())));
        }
        assert_eq!(state.activity_logs().len(), MAX_ACTIVITY_LOGS);
    }
}
