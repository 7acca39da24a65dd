use crate::domain::{
    models::inquiry::{Inquiry, InquiryChanges},
    ports::InquiryRepository,
};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Postgres};
use std::sync::Arc;

pub struct PostgresInquiryRepo {
    db: Arc<Database<Postgres>>,
}

impl PostgresInquiryRepo {
    pub fn new(db: Arc<Database<Postgres>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl InquiryRepository for PostgresInquiryRepo {
    async fn list(&self) -> Result<Vec<Inquiry>, AppError> {
        let Some(pool) = self.db.for_read("get inquiries").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get inquiries", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Inquiry>, AppError> {
        let Some(pool) = self.db.for_read("get inquiry").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, Inquiry>("SELECT * FROM inquiries WHERE id = $1 LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get inquiry", e))
    }

    async fn create(&self, inquiry: &Inquiry) -> Result<String, AppError> {
        let pool = self.db.for_write("create inquiry").await?;
        sqlx::query(
            "INSERT INTO inquiries (id, name, email, phone, property_type, message, property_id, status, notes, assigned_to, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)"
        )
            .bind(&inquiry.id)
            .bind(&inquiry.name)
            .bind(&inquiry.email)
            .bind(&inquiry.phone)
            .bind(&inquiry.property_type)
            .bind(&inquiry.message)
            .bind(&inquiry.property_id)
            .bind(&inquiry.status)
            .bind(&inquiry.notes)
            .bind(&inquiry.assigned_to)
            .bind(inquiry.created_at)
            .bind(inquiry.updated_at)
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("create inquiry", e))?;
        Ok(inquiry.id.clone())
    }

    async fn update(&self, id: &str, changes: &InquiryChanges) -> Result<(), AppError> {
        let pool = self.db.for_write("update inquiry").await?;

        let mut qb = QueryBuilder::<Postgres>::new("UPDATE inquiries SET updated_at = ");
        qb.push_bind(Utc::now());
        if let Some(v) = changes.status { qb.push(", status = ").push_bind(v.as_str()); }
        if let Some(v) = &changes.notes { qb.push(", notes = ").push_bind(v.clone()); }
        if let Some(v) = &changes.assigned_to { qb.push(", assigned_to = ").push_bind(v.clone()); }
        qb.push(" WHERE id = ").push_bind(id.to_string());

        qb.build()
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("update inquiry", e))?;
        Ok(())
    }
}
