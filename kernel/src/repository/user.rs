use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, event: CreateUser) -> AppResult<UserId>;
    // Plaintext credential match, checked in role order: union, student, staff.
    async fn find_by_credentials(&self, email: &str, password: &str)
        -> AppResult<Option<User>>;
    async fn find_all(&self) -> AppResult<Vec<User>>;
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
}
