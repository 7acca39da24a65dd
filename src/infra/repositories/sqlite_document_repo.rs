use crate::domain::{models::document::Document, ports::DocumentRepository};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use sqlx::Sqlite;
use std::sync::Arc;

pub struct SqliteDocumentRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqliteDocumentRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DocumentRepository for SqliteDocumentRepo {
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Document>, AppError> {
        let Some(pool) = self.db.for_read("get tenant documents").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE tenant_id = ? ORDER BY created_at ASC")
            .bind(tenant_id)
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get tenant documents", e))
    }

    async fn list_for_owner(&self, _owner_id: &str) -> Result<Vec<Document>, AppError> {
        let Some(pool) = self.db.for_read("get owner documents").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner documents", e))
    }
}
