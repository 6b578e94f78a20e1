// src/app.rs

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn create_app(app_state: AppState) -> Router {
    let document_routes = Router::new()
        .route("/generate-pdf", post(handlers::documents::generate_pdf));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api", document_routes)
        .with_state(app_state)
}
