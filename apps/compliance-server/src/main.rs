//! SOP Compliance Server
//!
//! Accepts SOP document text, scores it against the compliance rule set and
//! keeps a record of uploaded documents. Provides REST API endpoints for:
//!
//! - Ad-hoc validation of document text
//! - Document upload with validation and status tracking
//! - Rule catalog listing
//!
//! ## Architecture
//!
//! The validation engine is pure; this server owns the rule catalog and the
//! document store and layers upload orchestration on top via
//! `document-pipeline`.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use compliance_engine::ValidationEngine;
use document_pipeline::{InMemoryDocumentStore, UploadPipeline};
use shared_types::RuleCatalog;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod error;

use api::{
    handle_delete_document, handle_get_document, handle_health, handle_list_documents,
    handle_list_rules, handle_revalidate_document, handle_upload_document,
    handle_upload_raw_document, handle_validate,
};
use config::{load_catalog, Args};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: ValidationEngine,
    pub catalog: Arc<RuleCatalog>,
    pub pipeline: Arc<UploadPipeline<InMemoryDocumentStore>>,
}

impl AppState {
    pub fn new(catalog: RuleCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let pipeline =
            UploadPipeline::new(InMemoryDocumentStore::new()).with_catalog(Arc::clone(&catalog));

        Self {
            engine: ValidationEngine::new(),
            catalog,
            pipeline: Arc::new(pipeline),
        }
    }
}

/// API routes without transport-level middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handle_health))
        // API endpoints
        .route("/api/rules", get(handle_list_rules))
        .route("/api/validate", post(handle_validate))
        .route(
            "/api/documents",
            get(handle_list_documents).post(handle_upload_document),
        )
        .route("/api/documents/raw", post(handle_upload_raw_document))
        .route(
            "/api/documents/:id",
            get(handle_get_document).delete(handle_delete_document),
        )
        .route("/api/documents/:id/validate", post(handle_revalidate_document))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting compliance server on {}:{}", args.host, args.port);

    let catalog = load_catalog(args.rules.as_deref())?;
    let state = AppState::new(catalog);

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(args.rate_limit * 2)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
