//! API models for request and response payloads

pub mod emergency;
pub mod group;
pub mod user;

pub use emergency::EmergencyDirectory;
pub use group::{CreateGroupRequest, Group, GroupWithMembers, JoinGroupRequest, NewGroup};
pub use user::{CreateUserRequest, NearbyQuery, NewUser, User, UserWithGroups};
