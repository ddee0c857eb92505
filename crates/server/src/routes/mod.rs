pub mod health;
pub mod requisite;
pub mod root;

use crate::{doc::ApiDoc, state::AppState};
use axum::{Json, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

/// Builds the application router, serving its own OpenAPI document
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::root))
        .routes(routes!(health::health))
        .routes(routes!(requisite::course_chart))
        .routes(routes!(requisite::get_prerequisites))
        .routes(routes!(requisite::remaining))
        .with_state(state)
        .split_for_parts();

    router
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
