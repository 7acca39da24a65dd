use crate::domain::{
    models::property::{Property, PropertyChanges},
    ports::PropertyRepository,
};
use crate::error::AppError;
use crate::infra::db::Database;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite};
use std::sync::Arc;

pub struct SqlitePropertyRepo {
    db: Arc<Database<Sqlite>>,
}

impl SqlitePropertyRepo {
    pub fn new(db: Arc<Database<Sqlite>>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PropertyRepository for SqlitePropertyRepo {
    async fn list(&self) -> Result<Vec<Property>, AppError> {
        let Some(pool) = self.db.for_read("get properties").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Property>("SELECT * FROM properties ORDER BY created_at ASC")
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get properties", e))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, AppError> {
        let Some(pool) = self.db.for_read("get property").await else {
            return Ok(None);
        };
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = ? LIMIT 1")
            .bind(id)
            .fetch_optional(&pool)
            .await
            .map_err(|e| self.db.failed("get property", e))
    }

    async fn create(&self, property: &Property) -> Result<String, AppError> {
        let pool = self.db.for_write("create property").await?;
        sqlx::query(
            "INSERT INTO properties (id, name, address, city, state, zip_code, price, property_type, beds, baths, sqft, description, amenities, images, featured, active, owner_id, created_by, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
            .bind(&property.id)
            .bind(&property.name)
            .bind(&property.address)
            .bind(&property.city)
            .bind(&property.state)
            .bind(&property.zip_code)
            .bind(&property.price)
            .bind(&property.property_type)
            .bind(property.beds)
            .bind(property.baths)
            .bind(property.sqft)
            .bind(&property.description)
            .bind(&property.amenities)
            .bind(&property.images)
            .bind(property.featured)
            .bind(property.active)
            .bind(&property.owner_id)
            .bind(&property.created_by)
            .bind(property.created_at)
            .bind(property.updated_at)
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("create property", e))?;
        Ok(property.id.clone())
    }

    async fn update(&self, id: &str, changes: &PropertyChanges) -> Result<(), AppError> {
        let pool = self.db.for_write("update property").await?;

        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE properties SET updated_at = ");
        qb.push_bind(Utc::now());
        if let Some(v) = &changes.name { qb.push(", name = ").push_bind(v.clone()); }
        if let Some(v) = &changes.address { qb.push(", address = ").push_bind(v.clone()); }
        if let Some(v) = &changes.city { qb.push(", city = ").push_bind(v.clone()); }
        if let Some(v) = &changes.state { qb.push(", state = ").push_bind(v.clone()); }
        if let Some(v) = &changes.zip_code { qb.push(", zip_code = ").push_bind(v.clone()); }
        if let Some(v) = &changes.price { qb.push(", price = ").push_bind(v.clone()); }
        if let Some(v) = changes.property_type { qb.push(", property_type = ").push_bind(v.as_str()); }
        if let Some(v) = changes.beds { qb.push(", beds = ").push_bind(v); }
        if let Some(v) = changes.baths { qb.push(", baths = ").push_bind(v); }
        if let Some(v) = changes.sqft { qb.push(", sqft = ").push_bind(v); }
        if let Some(v) = &changes.description { qb.push(", description = ").push_bind(v.clone()); }
        if let Some(v) = &changes.amenities { qb.push(", amenities = ").push_bind(v.clone()); }
        if let Some(v) = &changes.images { qb.push(", images = ").push_bind(v.clone()); }
        if let Some(v) = changes.featured { qb.push(", featured = ").push_bind(v); }
        if let Some(v) = changes.active { qb.push(", active = ").push_bind(v); }
        qb.push(" WHERE id = ").push_bind(id.to_string());

        // A missing id updates nothing and still counts as success.
        qb.build()
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("update property", e))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let pool = self.db.for_write("delete property").await?;
        sqlx::query("DELETE FROM properties WHERE id = ?")
            .bind(id)
            .execute(&pool)
            .await
            .map_err(|e| self.db.failed("delete property", e))?;
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Property>, AppError> {
        let Some(pool) = self.db.for_read("get owner properties").await else {
            return Ok(Vec::new());
        };
        sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE owner_id = ? ORDER BY created_at ASC")
            .bind(owner_id)
            .fetch_all(&pool)
            .await
            .map_err(|e| self.db.failed("get owner properties", e))
    }
}
