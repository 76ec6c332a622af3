use crate::config::AppConfig;
use crate::db::ConnectionProvider;
use crate::users::repo::{MySqlUserStore, UserStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn init(config: &AppConfig) -> Self {
        let provider = ConnectionProvider::new(config.db.clone(), config.max_connections);
        let users = Arc::new(MySqlUserStore::new(provider)) as Arc<dyn UserStore>;
        Self { users }
    }

    pub fn from_parts(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }
}
