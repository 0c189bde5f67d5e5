use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{event::CreateUser, User},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    #[garde(length(min = 1))]
    pub fullname: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
    #[garde(skip)]
    pub faculty: Option<String>,
    #[garde(skip)]
    pub id_front: Option<String>,
    #[garde(skip)]
    pub id_back: Option<String>,
}

impl RegisterUserRequest {
    pub fn into_event(self, role: Role) -> CreateUser {
        let RegisterUserRequest {
            fullname,
            email,
            password,
            faculty,
            id_front,
            id_back,
        } = self;
        CreateUser {
            fullname,
            email,
            password,
            role,
            faculty,
            id_front,
            id_back,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(length(min = 1))]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
}

impl LoginResponse {
    pub fn rejected() -> Self {
        Self {
            success: false,
            role: None,
            fullname: None,
            user_id: None,
            email: None,
            faculty: None,
        }
    }
}

impl From<User> for LoginResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            fullname,
            email,
            role,
            faculty,
            created_at: _,
        } = value;
        Self {
            success: true,
            role: Some(role.to_string()),
            fullname: Some(fullname),
            user_id: Some(user_id),
            email: Some(email),
            faculty,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntryResponse {
    pub id: UserId,
    pub fullname: String,
    pub email: String,
    pub user_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
}

impl From<User> for UserEntryResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            fullname,
            email,
            role,
            faculty,
            created_at: _,
        } = value;
        Self {
            id: user_id,
            fullname,
            email,
            user_type: role.label(),
            // Only union members carry a faculty in the listing.
            faculty: match role {
                Role::Union => faculty,
                _ => None,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserQuery {
    #[serde(rename = "type")]
    pub user_type: String,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn listing_shows_faculty_only_for_union_members() {
        let staff = User {
            user_id: UserId::new(),
            fullname: "A".into(),
            email: "a@example.com".into(),
            role: Role::Staff,
            faculty: Some("Science".into()),
            created_at: Utc::now(),
        };
        let entry = UserEntryResponse::from(staff);
        assert_eq!(entry.user_type, "Academic Staff");
        assert!(entry.faculty.is_none());

        let union = User {
            user_id: UserId::new(),
            fullname: "B".into(),
            email: "b@example.com".into(),
            role: Role::Union,
            faculty: Some("Engineering".into()),
            created_at: Utc::now(),
        };
        let entry = UserEntryResponse::from(union);
        assert_eq!(entry.user_type, "Faculty Union Member");
        assert_eq!(entry.faculty.as_deref(), Some("Engineering"));
    }
}
