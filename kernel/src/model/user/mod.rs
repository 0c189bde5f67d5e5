use chrono::{DateTime, Utc};

use crate::model::{id::UserId, role::Role};

pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub fullname: String,
    pub email: String,
    pub role: Role,
    pub faculty: Option<String>,
    pub created_at: DateTime<Utc>,
}
