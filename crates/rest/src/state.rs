//! Application state for the search API.
//!
//! The store is injected here rather than referenced as ambient global
//! state, so integration tests can substitute a stub accessor.

use std::sync::Arc;

use probdex_store::ProblemStore;

use crate::config::ServerConfig;

/// Shared application state available to all request handlers.
///
/// # Type Parameters
///
/// * `S` - The store type (must implement [`ProblemStore`])
pub struct AppState<S> {
    /// The problem store.
    store: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ProblemStore> AppState<S> {
    /// Creates a new AppState with the given store and configuration.
    pub fn new(store: Arc<S>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the problem store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
