use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::task::TaskGuard;

/// The shared application state.
///
/// Holds everything request handlers and middleware need: the catalog, the
/// task guard, configuration and metrics. Cloneable for use with Axum's
/// state extraction.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory catalog behind a reader/writer lock. The original
    /// system mutated an unsynchronized slice from concurrent requests;
    /// the lock closes that race.
    pub catalog: Arc<RwLock<Catalog>>,
    /// The Idle/Running guard shared between the task endpoint and the
    /// request gate.
    pub tasks: TaskGuard,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Usage counters.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(Catalog::new())),
            tasks: TaskGuard::new(),
            config: Arc::new(config),
            metrics: Metrics::new(),
        }
    }
}
