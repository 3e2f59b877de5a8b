use axum::{extract::State, Json};
use tracing::debug;

use crate::models::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let env = state.env.resolve();
    debug!(version = env.app_version(), "Health check requested");
    Json(HealthResponse::healthy(env.app_version()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvSource;

    #[tokio::test]
    async fn reports_default_version() {
        let state = AppState::new(EnvSource::from_pairs(Vec::<(String, String)>::new()));
        let Json(body) = health_check(State(state)).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, "1.0.0");
    }

    #[tokio::test]
    async fn reports_configured_version() {
        let state = AppState::new(EnvSource::from_pairs([("APP_VERSION", "2.3.1")]));
        let Json(body) = health_check(State(state)).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, "2.3.1");
    }
}
