//! Shared server state.

use parking_lot::{Mutex, MutexGuard};
use rusqlite::Connection;
use std::sync::Arc;

/// Handler-shared state: one SQLite connection behind a mutex.
///
/// Store work is synchronous and short-lived, so a single serialized
/// connection is sufficient at this service's scale.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an already-migrated connection (see `staffdir_core::db`).
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Locks the connection for one handler's store work.
    ///
    /// # Invariants
    /// - The guard must never be held across an await point.
    pub fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}
