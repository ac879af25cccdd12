use std::sync::Arc;
use tokio::sync::RwLock;

use trivia_core::LeaderboardSet;

use crate::config::ServerConfig;

/// The write lock is held across a whole append/sort/truncate, so readers
/// never observe a tier mid-update.
pub type SharedLeaderboards = Arc<RwLock<LeaderboardSet>>;

#[derive(Clone)]
pub struct AppState {
    pub leaderboards: SharedLeaderboards,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            leaderboards: Arc::new(RwLock::new(LeaderboardSet::new())),
            config: Arc::new(config),
        }
    }
}
