use crate::domain::{
    models::{role::Role, user::{User, UserUpsert}},
    ports::UserRepository,
};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Sqlite;
use std::sync::Arc;

pub struct SqliteUserRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqliteUserRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepo {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Some(pool) = self.db.for_read("get user").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get user", e))
    }

    async fn upsert(&self, user: &UserUpsert) -> Result<(), AppError> {
        let Some(pool) = self.db.for_read("upsert user").await else {
            return Ok(());
        };
        // An existing row keeps its role unless the sign-in promotes it to admin.
        sqlx::query(
            "INSERT INTO users (id, name, email, login_method, role, created_at, last_signed_in) VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
                name = COALESCE(excluded.name, users.name), \
                email = COALESCE(excluded.email, users.email), \
                login_method = COALESCE(excluded.login_method, users.login_method), \
                role = CASE WHEN excluded.role = 'admin' THEN 'admin' ELSE users.role END, \
                last_signed_in = excluded.last_signed_in"
        )
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.login_method)
            .bind(user.role.as_str())
            .bind(user.last_signed_in)
            .bind(user.last_signed_in)
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("upsert user", e))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let Some(pool) = self.db.for_read("get users").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get users", e))
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError> {
        let Some(pool) = self.db.for_read("get users by role").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE role = ? ORDER BY created_at ASC")
            .bind(role.as_str())
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get users by role", e))
    }
}
