use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, HelloResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::hello::hello,
    ),
    components(
        schemas(HealthResponse, HelloResponse, ErrorResponse)
    ),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "api", description = "API endpoints")
    )
)]
pub struct ApiDoc;
