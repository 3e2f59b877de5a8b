//! Per-request environment snapshot.
//!
//! Handlers never look up process variables directly. They ask the
//! [`EnvSource`] held in router state for a fresh [`ResponderEnv`] on every
//! request, so a changed `ENVIRONMENT` or `APP_VERSION` is picked up without a
//! restart, and tests can supply fixed values without touching the process.

use std::collections::HashMap;
use std::env::VarError;
use std::sync::Arc;

use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "unknown";

pub const APP_VERSION_VAR: &str = "APP_VERSION";
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Variable names are matched exactly, never case-folded.
const RESPONDER_VARS: [&str; 2] = [APP_VERSION_VAR, ENVIRONMENT_VAR];

/// Values the responder echoes back. Unset and empty are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResponderEnv {
    pub app_version: Option<String>,
    pub environment: Option<String>,
}

impl ResponderEnv {
    pub fn app_version(&self) -> &str {
        non_empty(&self.app_version).unwrap_or(DEFAULT_APP_VERSION)
    }

    pub fn environment(&self) -> &str {
        non_empty(&self.environment).unwrap_or(DEFAULT_ENVIRONMENT)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Where a [`ResponderEnv`] is resolved from
#[derive(Debug, Clone, Default)]
pub enum EnvSource {
    /// The live process environment, read on every call
    #[default]
    Process,
    /// A fixed set of variables
    Fixed(Arc<HashMap<String, String>>),
}

impl EnvSource {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        EnvSource::Fixed(Arc::new(vars))
    }

    /// Resolve a snapshot. Never fails: an unreadable variable counts as unset.
    pub fn resolve(&self) -> ResponderEnv {
        let vars = match self {
            EnvSource::Process => process_vars(),
            EnvSource::Fixed(vars) => RESPONDER_VARS
                .iter()
                .filter_map(|key| vars.get(*key).map(|v| (key.to_string(), v.clone())))
                .collect(),
        };

        envy::from_iter::<_, ResponderEnv>(vars).unwrap_or_else(|e| {
            warn!("Failed to read responder environment, using defaults: {}", e);
            ResponderEnv::default()
        })
    }
}

/// Reads only the responder's own variables, so unrelated non-UTF-8 entries
/// elsewhere in the process environment cannot affect a request.
fn process_vars() -> Vec<(String, String)> {
    RESPONDER_VARS
        .iter()
        .filter_map(|key| match std::env::var(key) {
            Ok(value) => Some((key.to_string(), value)),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(
                    var = *key,
                    "Environment variable is not valid UTF-8, treating as unset"
                );
                None
            }
        })
        .collect()
}
