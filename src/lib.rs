//! A configuration-driven HTTP responder.
//!
//! Serves `GET /health` and `GET /api/hello`, echoing `APP_VERSION` and
//! `ENVIRONMENT` as read at request time.

pub mod config;
pub mod docs;
pub mod env;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use config::Config;
pub use env::{EnvSource, ResponderEnv};
pub use error::{ConfigError, ServerError};
pub use routes::create_app;
pub use state::AppState;
