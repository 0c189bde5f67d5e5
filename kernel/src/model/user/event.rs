use crate::model::{id::UserId, role::Role};

pub struct CreateUser {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub faculty: Option<String>,
    pub id_front: Option<String>,
    pub id_back: Option<String>,
}

#[derive(Debug)]
pub struct DeleteUser {
    pub user_id: UserId,
    pub role: Role,
}
