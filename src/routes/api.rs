use axum::{routing::get, Router};

use crate::handlers::{hello, method_not_allowed};
use crate::state::AppState;

/// Create API routes
pub fn create_api_routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello).fallback(method_not_allowed))
}
