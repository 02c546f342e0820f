use std::sync::Arc;

use crate::config::Config;
use crate::scanner::AtsScanner;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Immutable scanner (taxonomy + matcher + rubric), shared by every request.
    pub scanner: Arc<AtsScanner>,
}
