//! N.I.E.S.A.T Portal Backend
//!
//! REST backend for the chapter website: seeded JSON-blob persistence with
//! an admin-gated content management surface.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod seed;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::{RecordStore, Repository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting N.I.E.S.A.T Portal Backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if the admin code is not configured
    if config.admin_code.is_none() {
        tracing::warn!("No admin code configured (NIESAT_ADMIN_CODE). The staff surface is open!");
    }

    // Open the record store; collections fall back to their seed datasets
    // until an admin persists a change
    let store = Arc::new(RecordStore::open(&config.data_dir));
    let repo = Arc::new(Repository::new(store));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone the admin code for the auth layer
    let admin_code = state.config.admin_code.clone();

    // Staff routes: everything the admin dashboard reads or mutates
    let admin_routes = Router::new()
        // Projects
        .route("/projects", put(api::save_project))
        .route("/projects/{id}", delete(api::delete_project))
        // Members
        .route("/members", put(api::save_member))
        .route("/members/{id}", delete(api::delete_member))
        // Resources
        .route("/resources", post(api::add_resource))
        // Requests
        .route("/requests", get(api::list_requests))
        // Attendance
        .route("/attendance", get(api::list_attendance))
        .route("/attendance", post(api::record_attendance))
        // Portfolio
        .route("/portfolio", get(api::get_portfolio))
        // Apply admin-code auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(admin_code.clone(), req, next)
        }));

    // Public routes: what the marketing pages read and submit
    let api_routes = Router::new()
        .route("/projects", get(api::list_projects))
        .route("/members", get(api::list_members))
        .route("/resources", get(api::list_resources))
        .route("/requests", post(api::submit_request))
        .route("/preferences/dark-mode", get(api::get_dark_mode))
        .route("/preferences/dark-mode", put(api::set_dark_mode))
        .nest("/admin", admin_routes);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
