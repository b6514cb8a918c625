//! User models

use chrono::{DateTime, Utc};
use common::geo::Coordinates;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{models::group::Group, validation};

/// User record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub social_link: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// The user's position, if one was recorded
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_optional(self.latitude, self.longitude)
            .ok()
            .flatten()
    }
}

/// User together with the groups they belong to
#[derive(Debug, Clone, Serialize)]
pub struct UserWithGroups {
    #[serde(flatten)]
    pub user: User,
    pub groups: Vec<Group>,
}

/// Request for user creation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub social_link: Option<String>,
}

/// Validated user creation payload
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub coordinates: Option<Coordinates>,
    pub social_link: Option<String>,
}

impl CreateUserRequest {
    /// Validate the request and normalise its fields
    pub fn validate(self) -> Result<NewUser, String> {
        let name = self.name.trim().to_string();
        validation::validate_name(&name)?;

        let email = self.email.trim().to_string();
        validation::validate_email(&email)?;

        let coordinates =
            Coordinates::from_optional(self.latitude, self.longitude).map_err(|e| e.to_string())?;

        let social_link = self
            .social_link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());

        Ok(NewUser {
            name,
            email,
            coordinates,
            social_link,
        })
    }
}

/// Query parameters for the nearby search
///
/// Both values arrive as raw strings so missing and malformed input can be
/// reported separately.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl NearbyQuery {
    pub fn origin(&self) -> Result<Coordinates, String> {
        let (Some(lat), Some(lng)) = (non_blank(&self.lat), non_blank(&self.lng)) else {
            return Err("Latitude and longitude required".to_string());
        };

        let lat: f64 = lat
            .parse()
            .map_err(|_| "Latitude and longitude must be numbers".to_string())?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| "Latitude and longitude must be numbers".to_string())?;

        Coordinates::new(lat, lng).map_err(|e| e.to_string())
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
