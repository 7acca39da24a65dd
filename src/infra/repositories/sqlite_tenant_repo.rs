use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Sqlite;
use std::sync::Arc;

pub struct SqliteTenantRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqliteTenantRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TenantRepository for SqliteTenantRepo {
    async fn list(&self) -> Result<Vec<Tenant>, AppError> {
        let Some(pool) = self.db.for_read("get tenants").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get tenants", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError> {
        let Some(pool) = self.db.for_read("get tenant").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant", e))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Tenant>, AppError> {
        let Some(pool) = self.db.for_read("get tenant by user ID").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants WHERE user_id = ? ORDER BY created_at ASC LIMIT 1")
            .bind(user_id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant by user ID", e))
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Tenant>, AppError> {
        let Some(pool) = self.db.for_read("get owner tenants").await else {
            return Ok(Vec::new());
        };
        let owned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties WHERE owner_id = ?")
            .bind(owner_id)
            .fetch_one(&pool)
            .await
            .map_err(|e| self.db.failed("get owner tenants", e))?;
        if owned == 0 {
            return Ok(Vec::new());
        }

        // Owners with at least one property currently see every tenant.
        sqlx::query_as::<_, Tenant>("SELECT * FROM tenants ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner tenants", e))
    }
}
