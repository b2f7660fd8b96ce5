use std::sync::Arc;

use crate::domain::repositories::SessionRepository;
use crate::infrastructure::repositories::InMemorySessionRepository;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    /// State backed by a fresh in-memory session
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionRepository::new()))
    }
}
