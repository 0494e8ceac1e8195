use std::sync::Arc;

use tokio::sync::Mutex;

use irah_ward::roster::Roster;

/// Shared session state: one roster per hosted unit. The mutex
/// serialises upsert/remove/clear/list so concurrent callers cannot
/// interleave.
pub struct SessionState {
    pub roster: Arc<Mutex<Roster>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            roster: Arc::new(Mutex::new(Roster::new())),
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }
}
