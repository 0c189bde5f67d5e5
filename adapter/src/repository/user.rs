use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO users
                (user_id, fullname, email, password, role, faculty, id_front, id_back)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(user_id)
        .bind(&event.fullname)
        .bind(&event.email)
        .bind(&event.password)
        .bind(event.role.to_string())
        .bind(&event.faculty)
        .bind(&event.id_front)
        .bind(&event.id_back)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(user_id)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, fullname, email, role, faculty, created_at
                FROM users
                WHERE email = $1 AND password = $2
                ORDER BY CASE role
                    WHEN 'union' THEN 0
                    WHEN 'student' THEN 1
                    ELSE 2
                END
                LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, fullname, email, role, faculty, created_at
                FROM users
                ORDER BY CASE role
                    WHEN 'staff' THEN 0
                    WHEN 'union' THEN 1
                    ELSE 2
                END,
                created_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE user_id = $1 AND role = $2")
            .bind(event.user_id)
            .bind(event.role.to_string())
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("User not found".into()));
        }

        Ok(())
    }
}
