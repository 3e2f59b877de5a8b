pub mod api;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::docs::ApiDoc;
use crate::handlers::{health_check, method_not_allowed, not_found};
use crate::state::AppState;

pub use api::create_api_routes;

/// Assemble the full application router
pub fn create_app(state: AppState, config: &Config) -> Router {
    let mut app = Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        // Mount API routes
        .nest("/api", create_api_routes())
        .with_state(state);

    if config.swagger_enabled {
        app = app
            .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    app.fallback(not_found)
        // Add tracing layer
        .layer(TraceLayer::new_for_http())
}
