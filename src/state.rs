use crate::env::EnvSource;

/// Shared router state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub env: EnvSource,
}

impl AppState {
    pub fn new(env: EnvSource) -> Self {
        Self { env }
    }
}
