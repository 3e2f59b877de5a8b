use axum::{extract::State, Json};
use tracing::debug;

use crate::models::HelloResponse;
use crate::state::AppState;

/// Greeting endpoint, echoes the deployment environment
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "api",
    responses(
        (status = 200, description = "Greeting with the current environment", body = HelloResponse)
    )
)]
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    let env = state.env.resolve();
    debug!(environment = env.environment(), "Hello requested");
    Json(HelloResponse::greeting(env.environment()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::EnvSource;

    #[tokio::test]
    async fn falls_back_to_unknown_environment() {
        let state = AppState::new(EnvSource::from_pairs(Vec::<(String, String)>::new()));
        let Json(body) = hello(State(state)).await;
        assert_eq!(body.message, "Hello from Eloquent AI!");
        assert_eq!(body.environment, "unknown");
    }

    #[tokio::test]
    async fn echoes_environment() {
        let state = AppState::new(EnvSource::from_pairs([("ENVIRONMENT", "test-env")]));
        let Json(body) = hello(State(state)).await;
        assert_eq!(body.environment, "test-env");
    }
}
