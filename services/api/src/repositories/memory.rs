//! In-memory store used by the router tests

use async_trait::async_trait;
use chrono::Utc;
use common::error::{DatabaseError, DatabaseResult};
use std::collections::BTreeSet;
use tokio::sync::Mutex;

use crate::{
    models::{Group, GroupWithMembers, NewGroup, NewUser, User, UserWithGroups},
    repositories::{GroupStore, UserStore},
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    groups: Vec<Group>,
    /// (group_id, user_id)
    memberships: BTreeSet<(i32, i32)>,
}

impl Tables {
    fn groups_of(&self, user_id: i32) -> Vec<Group> {
        self.groups
            .iter()
            .filter(|g| self.memberships.contains(&(g.id, user_id)))
            .cloned()
            .collect()
    }

    fn members_of(&self, group_id: i32) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| self.memberships.contains(&(group_id, u.id)))
            .cloned()
            .collect()
    }

    fn with_groups(&self, user: &User) -> UserWithGroups {
        UserWithGroups {
            user: user.clone(),
            groups: self.groups_of(user.id),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn membership_count(&self) -> usize {
        self.tables.lock().await.memberships.len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().map(|u| tables.with_groups(u)).collect())
    }

    async fn list_located_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .users
            .iter()
            .filter(|u| u.latitude.is_some() && u.longitude.is_some())
            .map(|u| tables.with_groups(u))
            .collect())
    }

    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(DatabaseError::Duplicate(format!(
                "A user with email {} already exists",
                new_user.email
            )));
        }

        let user = User {
            id: tables.users.len() as i32 + 1,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            latitude: new_user.coordinates.map(|c| c.latitude()),
            longitude: new_user.coordinates.map(|c| c.longitude()),
            social_link: new_user.social_link.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn list_with_members(&self) -> DatabaseResult<Vec<GroupWithMembers>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .groups
            .iter()
            .map(|g| GroupWithMembers {
                group: g.clone(),
                members: tables.members_of(g.id),
            })
            .collect())
    }

    async fn create(&self, new_group: &NewGroup) -> DatabaseResult<Group> {
        let mut tables = self.tables.lock().await;
        let group = Group {
            id: tables.groups.len() as i32 + 1,
            name: new_group.name.clone(),
            description: new_group.description.clone(),
            group_type: new_group.group_type.clone(),
            created_at: Utc::now(),
        };
        tables.groups.push(group.clone());
        Ok(group)
    }

    async fn add_member(&self, group_id: i32, user_id: i32) -> DatabaseResult<GroupWithMembers> {
        let mut tables = self.tables.lock().await;
        let group = tables
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(format!("Group {} not found", group_id)))?;

        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(DatabaseError::NotFound(format!("User {} not found", user_id)));
        }

        tables.memberships.insert((group_id, user_id));
        Ok(GroupWithMembers {
            group,
            members: tables.members_of(group_id),
        })
    }
}
