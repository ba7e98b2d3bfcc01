//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod health;
pub mod normalize;

use crate::config::{AppConfig, Settings};
use crate::middleware::logging::{error_logging_middleware, request_logging_middleware};
use crate::services::{ResponseNormalizer, VendorRegistry};
use anyhow::Result;
use axum::{extract::DefaultBodyLimit, middleware, routing::get, routing::post, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<VendorRegistry>,
    pub normalizer: ResponseNormalizer,
}

/// Create application router
pub fn create_router(settings: Settings, app_config: AppConfig) -> Result<Router> {
    app_config.validate()?;

    let registry = Arc::new(VendorRegistry::new(&app_config));
    let normalizer = ResponseNormalizer::from_settings(&settings);

    let max_request_size = settings.request.max_request_size;

    // Start the uptime clock
    health::get_uptime_seconds();

    let app_state = Arc::new(AppState {
        registry,
        normalizer,
    });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(RequestBodyLimitLayer::new(max_request_size));

    // Create routes
    let router = Router::new()
        .route("/v1/normalize/:vendor", post(normalize::handle_normalize))
        .route("/v1/vendors", get(normalize::list_vendors))
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness_check))
        .with_state(app_state)
        // Body size is enforced by RequestBodyLimitLayer instead of the extractor default
        .layer(DefaultBodyLimit::disable())
        .layer(middleware_stack);

    Ok(router)
}
