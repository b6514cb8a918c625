//! Group repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::{
    models::{Group, GroupWithMembers, NewGroup, User},
    repositories::GroupStore,
};

/// User row tagged with the group it was loaded for
#[derive(FromRow)]
struct GroupMemberRow {
    group_id: i32,
    #[sqlx(flatten)]
    user: User,
}

/// Group repository
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    /// Create a new group repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GroupStore for GroupRepository {
    async fn list_with_members(&self) -> DatabaseResult<Vec<GroupWithMembers>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, description, group_type, created_at
            FROM travel_groups
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let rows = sqlx::query_as::<_, GroupMemberRow>(
            r#"
            SELECT gm.group_id, u.id, u.name, u.email, u.latitude, u.longitude,
                   u.social_link, u.created_at
            FROM group_members gm
            JOIN users u ON u.id = gm.user_id
            ORDER BY u.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        debug!("Loaded {} groups and {} memberships", groups.len(), rows.len());

        let mut by_group: HashMap<i32, Vec<User>> = HashMap::new();
        for row in rows {
            by_group.entry(row.group_id).or_default().push(row.user);
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let members = by_group.remove(&group.id).unwrap_or_default();
                GroupWithMembers { group, members }
            })
            .collect())
    }

    async fn create(&self, new_group: &NewGroup) -> DatabaseResult<Group> {
        info!("Creating new group: {}", new_group.name);

        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO travel_groups (name, description, group_type)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, group_type, created_at
            "#,
        )
        .bind(&new_group.name)
        .bind(&new_group.description)
        .bind(&new_group.group_type)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(group)
    }

    async fn add_member(&self, group_id: i32, user_id: i32) -> DatabaseResult<GroupWithMembers> {
        info!("Adding user {} to group {}", user_id, group_id);

        let mut tx = self.pool.begin().await.map_err(DatabaseError::Connection)?;

        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, description, group_type, created_at
            FROM travel_groups
            WHERE id = $1
            "#,
        )
        .bind(group_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(DatabaseError::from_query)?
        .ok_or_else(|| DatabaseError::NotFound(format!("Group {} not found", group_id)))?;

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(DatabaseError::from_query)?;

        if !user_exists {
            return Err(DatabaseError::NotFound(format!("User {} not found", user_id)));
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO group_members (group_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (group_id, user_id) DO NOTHING
            "#,
        )
        .bind(group_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::from_query)?;

        if inserted.rows_affected() == 0 {
            debug!("User {} is already a member of group {}", user_id, group_id);
        }

        let members = sqlx::query_as::<_, User>(
            r#"
            SELECT u.id, u.name, u.email, u.latitude, u.longitude, u.social_link, u.created_at
            FROM group_members gm
            JOIN users u ON u.id = gm.user_id
            WHERE gm.group_id = $1
            ORDER BY u.id
            "#,
        )
        .bind(group_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(DatabaseError::from_query)?;

        tx.commit().await.map_err(DatabaseError::from_query)?;

        Ok(GroupWithMembers { group, members })
    }
}
