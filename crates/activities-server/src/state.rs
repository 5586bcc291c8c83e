use std::sync::Arc;

use activities_core::ActivityDirectory;
use tokio::sync::RwLock;

/// Shared application state passed to all route handlers.
///
/// A single lock guards the whole directory so two signups racing for an
/// activity's last slot cannot both land.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<ActivityDirectory>>,
}

impl AppState {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn clones_share_one_directory() {
        let state = AppState::new(ActivityDirectory::seeded());
        let clone = state.clone();

        state
            .directory
            .write()
            .await
            .signup("Chess Club", "shared@mergington.edu")
            .unwrap();

        let dir = clone.directory.read().await;
        assert!(dir.get("Chess Club").unwrap().has_participant("shared@mergington.edu"));
    }
}
