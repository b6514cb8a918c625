//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    models::EmergencyDirectory,
    repositories::{GroupRepository, GroupStore, UserRepository, UserStore},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: Arc<dyn UserStore>,
    pub group_repository: Arc<dyn GroupStore>,
    pub emergency: Arc<EmergencyDirectory>,
}

impl AppState {
    /// State backed by PostgreSQL repositories
    pub fn new(pool: PgPool, emergency: EmergencyDirectory) -> Self {
        Self::from_parts(
            Arc::new(UserRepository::new(pool.clone())),
            Arc::new(GroupRepository::new(pool)),
            emergency,
        )
    }

    /// State over arbitrary stores
    pub fn from_parts(
        user_repository: Arc<dyn UserStore>,
        group_repository: Arc<dyn GroupStore>,
        emergency: EmergencyDirectory,
    ) -> Self {
        Self {
            user_repository,
            group_repository,
            emergency: Arc::new(emergency),
        }
    }
}
