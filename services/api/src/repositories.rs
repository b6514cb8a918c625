//! Repositories for database operations
//!
//! Handlers talk to the stores through the traits below so the router can be
//! exercised without a live database.

use async_trait::async_trait;
use common::error::DatabaseResult;

use crate::models::{Group, GroupWithMembers, NewGroup, NewUser, User, UserWithGroups};

pub mod group;
#[cfg(test)]
pub mod memory;
pub mod user;

pub use group::GroupRepository;
pub use user::UserRepository;

/// Persistence operations for users
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Every user with their groups, ordered by id
    async fn list_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>>;

    /// Users that have recorded a position, with their groups
    async fn list_located_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>>;

    /// Insert a new user
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User>;
}

/// Persistence operations for groups and memberships
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Every group with its members, ordered by id
    async fn list_with_members(&self) -> DatabaseResult<Vec<GroupWithMembers>>;

    /// Insert a new group
    async fn create(&self, new_group: &NewGroup) -> DatabaseResult<Group>;

    /// Add a user to a group; an existing membership is left untouched
    async fn add_member(&self, group_id: i32, user_id: i32) -> DatabaseResult<GroupWithMembers>;
}
