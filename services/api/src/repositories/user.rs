//! User repository for database operations

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{FromRow, PgPool};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::{
    models::{Group, NewUser, User, UserWithGroups},
    repositories::UserStore,
};

const USER_COLUMNS: &str = "id, name, email, latitude, longitude, social_link, created_at";

/// Group row tagged with the member it was loaded for
#[derive(FromRow)]
struct MemberGroupRow {
    user_id: i32,
    #[sqlx(flatten)]
    group: Group,
}

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the groups of every given user in one query
    async fn attach_groups(&self, users: Vec<User>) -> DatabaseResult<Vec<UserWithGroups>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let rows = sqlx::query_as::<_, MemberGroupRow>(
            r#"
            SELECT gm.user_id, g.id, g.name, g.description, g.group_type, g.created_at
            FROM group_members gm
            JOIN travel_groups g ON g.id = gm.group_id
            WHERE gm.user_id = ANY($1)
            ORDER BY g.id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let mut by_user: HashMap<i32, Vec<Group>> = HashMap::new();
        for row in rows {
            by_user.entry(row.user_id).or_default().push(row.group);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let groups = by_user.remove(&user.id).unwrap_or_default();
                UserWithGroups { user, groups }
            })
            .collect())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn list_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        debug!("Loaded {} users", users.len());
        self.attach_groups(users).await
    }

    async fn list_located_with_groups(&self) -> DatabaseResult<Vec<UserWithGroups>> {
        let users = sqlx::query_as::<_, User>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE latitude IS NOT NULL AND longitude IS NOT NULL
            ORDER BY id
            "#
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        debug!("Loaded {} located users", users.len());
        self.attach_groups(users).await
    }

    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        info!("Creating new user: {}", new_user.email);

        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, latitude, longitude, social_link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(new_user.coordinates.map(|c| c.latitude()))
        .bind(new_user.coordinates.map(|c| c.longitude()))
        .bind(&new_user.social_link)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DatabaseError::from_query(e) {
            DatabaseError::Duplicate(_) => DatabaseError::Duplicate(format!(
                "A user with email {} already exists",
                new_user.email
            )),
            other => other,
        })?;

        Ok(user)
    }
}
