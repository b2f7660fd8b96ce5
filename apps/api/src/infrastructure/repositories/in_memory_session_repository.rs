use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::repositories::{SessionGuard, SessionRepository};
use crate::domain::session::Session;

/// In-memory implementation of SessionRepository
///
/// Holds a single session for the lifetime of the process. Nothing is
/// written to disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    session: Arc<Mutex<Session>>,
}

impl InMemorySessionRepository {
    /// Creates a repository holding an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with an existing session
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn snapshot(&self) -> Session {
        self.session.lock().await.clone()
    }

    async fn acquire(&self) -> SessionGuard {
        Box::new(self.session.clone().lock_owned().await)
    }
}
