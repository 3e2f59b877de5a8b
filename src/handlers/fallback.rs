use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    Json,
};
use tracing::debug;

use crate::models::ErrorResponse;

/// Answer for paths with no route
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<ErrorResponse>) {
    debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            format!("No route for {}", uri.path()),
        )),
    )
}

/// Answer for known paths requested with an unsupported method
pub async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Json<ErrorResponse>) {
    debug!(%method, path = %uri.path(), "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("{} is not allowed on {}", method, uri.path()),
        )),
    )
}
