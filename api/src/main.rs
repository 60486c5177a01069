//! Accounts API Server
//!
//! CRUD service for ledger accounts (chart-of-accounts codes per fiscal year).
//! Uses hexagonal (ports & adapters) architecture: handlers call application
//! services, which run every use case in a single storage transaction.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;



use adapters::SqlAccountRepository;
use app::AccountService;
use config::Config;
use domain::ports::AccountRepository;

/// Application state shared across all handlers
pub struct AppState<AR: AccountRepository> {
    pub account_service: Arc<AccountService<AR>>,
}

impl<AR: AccountRepository> Clone for AppState<AR> {
    fn clone(&self) -> Self {
        Self {
            account_service: self.account_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any account repository
pub fn build_router<AR: AccountRepository>(state: AppState<AR>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/accounts",
            post(handlers::create_account::<AR>).get(handlers::list_accounts::<AR>),
        )
        .route(
            "/accounts/:id",
            get(handlers::get_account::<AR>)
                .put(handlers::update_account::<AR>)
                .delete(handlers::delete_account::<AR>),
        )
        .layer(CatchPanicLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,accounts_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Accounts API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = adapters::sql::connect(&config)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.auto_migrate {
        adapters::sql::ensure_schema(&db)
            .await
            .context("Failed to create accounts schema")?;
    }

    // Create adapters and services
    let account_repo = Arc::new(SqlAccountRepository::new(db.clone()));
    let account_service = Arc::new(AccountService::new(account_repo));

    let app = build_router(AppState { account_service });

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await.context("Failed to close database pool")?;
    tracing::info!("Shutdown complete");

    Ok(())
}
