//! Group models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{models::user::User, validation};

/// Group type used when the client does not send one
pub const DEFAULT_GROUP_TYPE: &str = "interest";

/// Travel group record
///
/// `group_type` is free text. Clients offer `interest`, `vibe` and
/// `destination`, the server stores whatever it receives.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub group_type: String,
    pub created_at: DateTime<Utc>,
}

/// Group together with its members
#[derive(Debug, Clone, Serialize)]
pub struct GroupWithMembers {
    #[serde(flatten)]
    pub group: Group,
    pub members: Vec<User>,
}

/// Request for group creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
}

/// Validated group creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub group_type: String,
}

impl CreateGroupRequest {
    pub fn validate(self) -> Result<NewGroup, String> {
        let name = self.name.trim().to_string();
        validation::validate_group_name(&name)?;

        let group_type = self
            .group_type
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_GROUP_TYPE.to_string());

        Ok(NewGroup {
            name,
            description: self.description,
            group_type,
        })
    }
}

/// Request for joining a group
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGroupRequest {
    pub user_id: i32,
}
