use std::sync::Arc;

use postbox_db::MessageStore;

pub type AppState = Arc<AppStateInner>;

/// Shared state for all route handlers. Built once in main around the
/// process-lifetime pool and handed to the router.
pub struct AppStateInner {
    pub store: MessageStore,
}
