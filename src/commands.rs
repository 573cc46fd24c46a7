//! One-shot subcommands
//!
//! Each command talks to the backend once and prints its result, sharing the
//! saved session with the TUI.

use crate::api::VendorApi;
use crate::api::error::ApiError;
use crate::forms::{AuthForm, AuthSubmission};
use crate::models::{AuthResponse, Order, Product, RegisterRequest};
use crate::orders::{StatusFilter, filter_orders};
use crate::session::Session;
use crate::ui::utils::format_price;
use crate::{print_cmd_error, print_cmd_info, print_cmd_success, print_cmd_warn};
use std::error::Error;
use std::path::Path;

pub fn format_product_line(product: &Product) -> String {
    format!(
        "{:<24} {:<16} {:>10} {:>6}  {}",
        product.id,
        product.name,
        format_price(product.price),
        product.quantity,
        product.category
    )
}

pub fn format_order_line(order: &Order) -> String {
    format!(
        "{}  {:<10} {:<20} {:<20} x{:<3} {:>10}",
        order.created_at.format("%Y-%m-%d %H:%M"),
        order.status,
        order.product_name,
        order.customer_name,
        order.quantity,
        format_price(order.total_price)
    )
}

/// Loads the saved token into the client, or fails when nobody is logged in.
fn authorize(api: &dyn VendorApi, session: &Session) -> Result<(), Box<dyn Error>> {
    match session.persisted_token() {
        Some(token) => {
            api.set_token(Some(token));
            Ok(())
        }
        None => {
            print_cmd_error!("Not logged in", "Run `kiakart-vendor login` first.");
            Err(Box::from("Not logged in"))
        }
    }
}

/// Prints the failure; a rejected token also clears the saved session.
fn report(session: &mut Session, title: &str, error: ApiError) -> Box<dyn Error> {
    if error.is_unauthorized() {
        if let Err(e) = session.expire() {
            print_cmd_warn!("Failed to clear saved session", "{}", e);
        }
        print_cmd_error!(title, "Your session has expired. Please log in again.");
    } else {
        print_cmd_error!(title, "{}", error.user_message());
    }
    Box::new(error)
}

fn store_session(
    api: &dyn VendorApi,
    session: &mut Session,
    response: AuthResponse,
) -> Result<(), Box<dyn Error>> {
    let name = response.vendor.name.clone();
    let business = response.vendor.business_name.clone();
    session.authenticated(response.access_token, response.vendor)?;
    session.remember_backend(api.environment())?;
    print_cmd_success!("Logged in", "Welcome, {} ({})", name, business);
    Ok(())
}

pub async fn login(
    api: &dyn VendorApi,
    config_path: &Path,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn Error>> {
    let credentials = match AuthForm::login(email, password).submit()? {
        AuthSubmission::Login(credentials) => credentials,
        AuthSubmission::Register(_) => return Err(Box::from("Unexpected registration form")),
    };

    let mut session = Session::new(config_path);
    session.begin_authentication();
    match api.login(&credentials).await {
        Ok(response) => store_session(api, &mut session, response),
        Err(e) => {
            session.fail_authentication();
            print_cmd_error!("Login failed", "{}", e.user_message());
            Err(Box::new(e))
        }
    }
}

pub async fn register(
    api: &dyn VendorApi,
    config_path: &Path,
    registration: RegisterRequest,
) -> Result<(), Box<dyn Error>> {
    let registration = match AuthForm::registration(registration).submit()? {
        AuthSubmission::Register(registration) => registration,
        AuthSubmission::Login(_) => return Err(Box::from("Unexpected login form")),
    };

    let mut session = Session::new(config_path);
    session.begin_authentication();
    match api.register(&registration).await {
        Ok(response) => store_session(api, &mut session, response),
        Err(e) => {
            session.fail_authentication();
            print_cmd_error!("Registration failed", "{}", e.user_message());
            Err(Box::new(e))
        }
    }
}

pub fn logout(config_path: &Path) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(config_path);
    session.logout()?;
    print_cmd_success!("Logged out", "Saved session cleared.");
    Ok(())
}

pub async fn list_products(api: &dyn VendorApi, config_path: &Path) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(config_path);
    authorize(api, &session)?;
    let products = api
        .list_products()
        .await
        .map_err(|e| report(&mut session, "Failed to load products", e))?;

    if products.is_empty() {
        print_cmd_info!("No products yet.", "Add one from the dashboard.");
        return Ok(());
    }
    for product in &products {
        println!("{}", format_product_line(product));
    }
    Ok(())
}

pub async fn list_orders(
    api: &dyn VendorApi,
    config_path: &Path,
    filter: StatusFilter,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(config_path);
    authorize(api, &session)?;
    let orders = api
        .list_orders()
        .await
        .map_err(|e| report(&mut session, "Failed to load orders", e))?;

    let visible = filter_orders(&orders, filter);
    if visible.is_empty() {
        print_cmd_info!("No orders found.", "Filter: {}", filter);
        return Ok(());
    }
    for order in visible {
        println!("{}", format_order_line(order));
    }
    Ok(())
}

pub async fn generate_sample_orders(
    api: &dyn VendorApi,
    config_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new(config_path);
    authorize(api, &session)?;
    let message = api
        .generate_sample_orders()
        .await
        .map_err(|e| report(&mut session, "Failed to generate sample orders", e))?;
    print_cmd_success!("Sample orders", "{}", message);
    Ok(())
}

pub async fn health(api: &dyn VendorApi) -> Result<(), Box<dyn Error>> {
    match api.health().await {
        Ok(status) => {
            print_cmd_success!(
                "Backend reachable",
                "{} at {} reports {}",
                status.service,
                api.environment().api_url(),
                status.status
            );
            Ok(())
        }
        Err(e) => {
            print_cmd_error!("Backend unreachable", "{}", e.user_message());
            Err(Box::new(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockVendorApi;
    use crate::config::Config;
    use crate::environment::Environment;
    use crate::models::{HealthStatus, OrderStatus, Vendor};
    use crate::orders::fixtures::order;
    use crate::state::tests::product;
    use mockall::predicate::eq;
    use tempfile::tempdir;

    fn logged_in(path: &Path) {
        Config::new("t1".to_string(), None).save(path).unwrap();
    }

    fn auth_response() -> AuthResponse {
        AuthResponse {
            access_token: "t1".to_string(),
            token_type: "bearer".to_string(),
            vendor: Vendor {
                name: "A".to_string(),
                business_name: "A's Shop".to_string(),
                ..Vendor::default()
            },
        }
    }

    #[tokio::test]
    async fn login_persists_token_and_custom_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let environment = Environment::Custom {
            api_url: "https://vendors.example.com".to_string(),
        };

        let mut api = MockVendorApi::new();
        api.expect_login()
            .withf(|req| req.email == "a@b.com" && req.password == "x")
            .times(1)
            .returning(|_| Ok(auth_response()));
        api.expect_environment().return_const(environment);

        login(&api, &path, "a@b.com", "x").await.unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.token(), Some("t1"));
        assert_eq!(config.api_url.as_deref(), Some("https://vendors.example.com"));
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_backend() {
        let dir = tempdir().unwrap();
        let mut api = MockVendorApi::new();
        api.expect_login().never();
        assert!(
            login(&api, &dir.path().join("config.json"), "nope", "x")
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn failed_login_saves_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut api = MockVendorApi::new();
        api.expect_login().returning(|_| {
            Err(ApiError::Http {
                status: 401,
                message: "Invalid credentials".to_string(),
            })
        });

        assert!(login(&api, &path, "a@b.com", "bad").await.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn register_requires_every_field() {
        let dir = tempdir().unwrap();
        let mut api = MockVendorApi::new();
        api.expect_register().never();
        let registration = RegisterRequest {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "A".to_string(),
            business_name: String::new(),
            phone: "555".to_string(),
        };
        assert!(
            register(&api, &dir.path().join("config.json"), registration)
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn listings_require_login() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut api = MockVendorApi::new();
        api.expect_list_products().never();
        api.expect_list_orders().never();

        assert!(list_products(&api, &path).await.is_err());
        assert!(list_orders(&api, &path, StatusFilter::All).await.is_err());
    }

    #[tokio::test]
    async fn listing_uses_saved_token() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        logged_in(&path);

        let mut api = MockVendorApi::new();
        api.expect_set_token()
            .with(eq(Some("t1".to_string())))
            .times(1)
            .return_const(());
        api.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![product("p1", "Mug")]));

        list_products(&api, &path).await.unwrap();
    }

    #[tokio::test]
    async fn expired_token_clears_saved_session() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        logged_in(&path);

        let mut api = MockVendorApi::new();
        api.expect_set_token().return_const(());
        api.expect_list_orders().returning(|| {
            Err(ApiError::Http {
                status: 401,
                message: "Token expired".to_string(),
            })
        });

        assert!(list_orders(&api, &path, StatusFilter::All).await.is_err());
        assert_eq!(Config::load_from_file(&path).unwrap().token(), None);
    }

    #[tokio::test]
    async fn sample_orders_report_server_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        logged_in(&path);

        let mut api = MockVendorApi::new();
        api.expect_set_token().return_const(());
        api.expect_generate_sample_orders().returning(|| {
            Err(ApiError::Http {
                status: 400,
                message: "No products found. Add some products first.".to_string(),
            })
        });

        let err = generate_sample_orders(&api, &path).await.unwrap_err();
        assert!(err.to_string().contains("No products found"));
        // Non-auth failures keep the session.
        assert_eq!(Config::load_from_file(&path).unwrap().token(), Some("t1"));
    }

    #[tokio::test]
    async fn health_reports_status() {
        let mut api = MockVendorApi::new();
        api.expect_health().returning(|| {
            Ok(HealthStatus {
                status: "healthy".to_string(),
                service: "kiakart".to_string(),
            })
        });
        api.expect_environment().return_const(Environment::Local);
        health(&api).await.unwrap();
    }

    #[test]
    fn logout_keeps_backend_url() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::new("t1".to_string(), Some("https://vendors.example.com".to_string()))
            .save(&path)
            .unwrap();

        logout(&path).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.token(), None);
        assert_eq!(config.api_url.as_deref(), Some("https://vendors.example.com"));
    }

    #[test]
    fn order_line_shows_status_and_total() {
        let line = format_order_line(&order("o1", OrderStatus::Shipped, 19.5, 3));
        assert!(line.starts_with("2025-01-03 12:00"));
        assert!(line.contains("shipped"));
        assert!(line.ends_with("$19.50"));
    }
}
