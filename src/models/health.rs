use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTHY_STATUS: &str = "healthy";

/// API response for health check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl HealthResponse {
    pub fn healthy(version: &str) -> Self {
        Self {
            status: HEALTHY_STATUS.to_string(),
            version: version.to_string(),
        }
    }
}
