//! Process-wide context registry seam.
//!
//! The platform discovers its active structured logger through a registry
//! keyed by fixed names. The registry is an injected capability reference
//! rather than ambient global state, so tests substitute a fake without
//! touching process globals.
//!
//! A lookup may fail because the registry has not been initialized yet, or
//! because nothing is registered under the key. The logging router treats
//! both uniformly as "logger unavailable" and falls back; a registry failure
//! never escapes into the caller's error path.

use crate::logging::ErrorLogger;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Registry key under which the platform's structured logger is registered.
pub const LOGGER_KEY: &str = "log";

/// Error type for registry lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry exists but has not been initialized yet.
    #[error("context registry is not initialized")]
    NotInitialized,
    /// No handle is registered under the requested key.
    #[error("no handle registered under key `{key}`")]
    MissingKey {
        /// The key that was looked up.
        key: String,
    },
}

/// Lookup of process-wide handles by fixed key.
///
/// Implementations must keep failures local: a lookup returns `Err`, it
/// never panics or propagates internal initialization failures.
pub trait ContextRegistry: Send + Sync {
    /// Resolve the handle registered under `key`.
    fn lookup(&self, key: &str) -> Result<Arc<dyn ErrorLogger>, RegistryError>;
}

/// Immutable registry populated up front.
///
/// The usual wiring at platform startup: build the map once, share it behind
/// an `Arc`, read-only thereafter.
#[derive(Clone, Default)]
pub struct StaticRegistry {
    handles: HashMap<String, Arc<dyn ErrorLogger>>,
}

impl StaticRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with a logger under [`LOGGER_KEY`].
    #[must_use]
    pub fn with_logger(logger: Arc<dyn ErrorLogger>) -> Self {
        Self::new().register(LOGGER_KEY, logger)
    }

    /// Register a handle under a key, replacing any previous entry.
    #[must_use]
    pub fn register(mut self, key: impl Into<String>, handle: Arc<dyn ErrorLogger>) -> Self {
        self.handles.insert(key.into(), handle);
        self
    }
}

impl ContextRegistry for StaticRegistry {
    fn lookup(&self, key: &str) -> Result<Arc<dyn ErrorLogger>, RegistryError> {
        self.handles
            .get(key)
            .cloned()
            .ok_or_else(|| RegistryError::MissingKey {
                key: key.to_string(),
            })
    }
}

/// Registry standing in for a platform that has not booted yet.
///
/// Every lookup fails with [`RegistryError::NotInitialized`]. Errors raised
/// this early route through the last-resort fallback channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct UninitializedRegistry;

impl ContextRegistry for UninitializedRegistry {
    fn lookup(&self, _key: &str) -> Result<Arc<dyn ErrorLogger>, RegistryError> {
        Err(RegistryError::NotInitialized)
    }
}
