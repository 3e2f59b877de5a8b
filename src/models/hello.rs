use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HELLO_MESSAGE: &str = "Hello from Eloquent AI!";

/// API response for the greeting endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HelloResponse {
    #[schema(example = "Hello from Eloquent AI!")]
    pub message: String,
    #[schema(example = "unknown")]
    pub environment: String,
}

impl HelloResponse {
    pub fn greeting(environment: &str) -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
            environment: environment.to_string(),
        }
    }
}
