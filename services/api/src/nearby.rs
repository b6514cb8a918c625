//! Radius search over users with a recorded position

use common::geo::Coordinates;

use crate::models::UserWithGroups;

/// Search radius for `/api/users/nearby`
pub const NEARBY_RADIUS_KM: f64 = 10.0;

/// Keep the users whose position lies within `radius_km` of `origin`
///
/// The boundary is inclusive. Users without a position are dropped.
pub fn within_radius(
    users: Vec<UserWithGroups>,
    origin: &Coordinates,
    radius_km: f64,
) -> Vec<UserWithGroups> {
    users
        .into_iter()
        .filter(|entry| {
            entry
                .user
                .coordinates()
                .is_some_and(|position| position.distance_km(origin) <= radius_km)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use chrono::Utc;

    fn user_at(id: i32, position: Option<(f64, f64)>) -> UserWithGroups {
        UserWithGroups {
            user: User {
                id,
                name: format!("traveller {id}"),
                email: format!("t{id}@example.com"),
                latitude: position.map(|p| p.0),
                longitude: position.map(|p| p.1),
                social_link: None,
                created_at: Utc::now(),
            },
            groups: vec![],
        }
    }

    fn ids(users: &[UserWithGroups]) -> Vec<i32> {
        users.iter().map(|u| u.user.id).collect()
    }

    #[test]
    fn test_includes_user_at_origin() {
        let origin = Coordinates::new(19.0760, 72.8777).unwrap();
        let found = within_radius(
            vec![user_at(1, Some((19.0760, 72.8777)))],
            &origin,
            NEARBY_RADIUS_KM,
        );
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_excludes_users_beyond_radius() {
        let origin = Coordinates::new(19.0760, 72.8777).unwrap();
        let users = vec![
            user_at(1, Some((19.0760 + 0.05, 72.8777))), // ~5.6 km
            user_at(2, Some((19.0760 + 0.2, 72.8777))),  // ~22 km
            user_at(3, Some((18.5204, 73.8567))),        // Pune
            user_at(4, None),
        ];

        let found = within_radius(users, &origin, NEARBY_RADIUS_KM);
        assert_eq!(ids(&found), vec![1]);
    }

    #[test]
    fn test_preserves_input_order() {
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let users = vec![
            user_at(5, Some((0.01, 0.0))),
            user_at(2, Some((0.0, 0.0))),
            user_at(9, Some((0.0, 0.02))),
        ];

        let found = within_radius(users, &origin, NEARBY_RADIUS_KM);
        assert_eq!(ids(&found), vec![5, 2, 9]);
    }
}
