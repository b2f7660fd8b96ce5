use async_trait::async_trait;
use std::ops::DerefMut;

use crate::domain::session::Session;

/// Exclusive handle on the session for the duration of one operation
///
/// Boxed so each adapter can hand out its own lock guard.
pub type SessionGuard = Box<dyn DerefMut<Target = Session> + Send>;

/// Repository trait for the Session aggregate
///
/// Operations run one at a time: a caller holding a [`SessionGuard`]
/// sees every earlier change and no concurrent ones.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Copy of the current session
    async fn snapshot(&self) -> Session;

    /// Lock the session for a read-modify-write
    async fn acquire(&self) -> SessionGuard;
}
