// Copyright (c) 2024 Nexus. All rights reserved.

mod actions;
mod api;
mod cli_messages;
mod commands;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod forms;
mod logging;
mod models;
mod orders;
mod runtime;
mod session;
mod state;
mod stats;
mod ui;
mod view;

use crate::api::VendorClient;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::models::RegisterRequest;
use crate::orders::StatusFilter;
use crate::session::{run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

/// Environment variable selecting the backend (`local` or a base URL).
const ENVIRONMENT_VAR: &str = "KIAKART_ENVIRONMENT";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// KiaKart vendor dashboard
struct Args {
    /// Base URL of the vendor API, or `local`. Overrides KIAKART_ENVIRONMENT.
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Start {
        /// Paint a dark background instead of using the terminal's
        #[arg(long, default_value_t = false)]
        with_background: bool,
    },
    /// Log in and save the session
    Login {
        #[arg(long, value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
    },
    /// Register a new vendor account and save the session
    Register {
        #[arg(long, value_name = "EMAIL")]
        email: String,
        #[arg(long, value_name = "PASSWORD")]
        password: String,
        /// Full name of the account owner
        #[arg(long)]
        name: String,
        #[arg(long)]
        business_name: String,
        #[arg(long)]
        phone: String,
    },
    /// Clear the saved session
    Logout,
    /// List your products
    Products,
    /// List orders for your products
    Orders {
        /// pending, confirmed, shipped, delivered, cancelled or all
        #[arg(long, default_value = "all")]
        status: StatusFilter,
    },
    /// Create sample orders against your products
    SampleOrders,
    /// Check that the backend is reachable
    Health,
}

/// `--api-url` wins, then the environment variable, then the URL saved at login.
fn resolve_environment(
    cli_url: Option<&str>,
    config_path: &Path,
) -> Result<Environment, Box<dyn Error>> {
    if let Some(url) = cli_url {
        if url.parse::<Environment>().is_err() {
            print_cmd_error!(
                "Invalid --api-url",
                "Expected `local` or an http(s) URL, got `{}`",
                url
            );
            return Err(Box::from(format!("Invalid --api-url: {}", url)));
        }
    }

    let env_var = std::env::var(ENVIRONMENT_VAR).ok();
    let saved = Config::load_or_default(config_path)
        .ok()
        .and_then(|config| config.api_url);

    Ok(Environment::resolve(
        cli_url,
        env_var.as_deref(),
        saved.as_deref(),
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    if let Command::Logout = args.command {
        return commands::logout(&config_path);
    }

    let environment = resolve_environment(args.api_url.as_deref(), &config_path)?;

    match args.command {
        Command::Start { with_background } => {
            let session = setup_session(environment, config_path)?;
            run_tui_mode(session, with_background).await
        }
        Command::Login { email, password } => {
            let api = VendorClient::new(environment)?;
            commands::login(&api, &config_path, &email, &password).await
        }
        Command::Register {
            email,
            password,
            name,
            business_name,
            phone,
        } => {
            let api = VendorClient::new(environment)?;
            let registration = RegisterRequest {
                email,
                password,
                name,
                business_name,
                phone,
            };
            commands::register(&api, &config_path, registration).await
        }
        Command::Logout => commands::logout(&config_path),
        Command::Products => {
            let api = VendorClient::new(environment)?;
            commands::list_products(&api, &config_path).await
        }
        Command::Orders { status } => {
            let api = VendorClient::new(environment)?;
            commands::list_orders(&api, &config_path, status).await
        }
        Command::SampleOrders => {
            let api = VendorClient::new(environment)?;
            commands::generate_sample_orders(&api, &config_path).await
        }
        Command::Health => {
            let api = VendorClient::new(environment)?;
            commands::health(&api).await
        }
    }
}
