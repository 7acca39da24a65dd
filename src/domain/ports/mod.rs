use crate::domain::models::{
    billing::{Invoice, Payment},
    document::Document,
    inquiry::{Inquiry, InquiryChanges},
    maintenance::{MaintenanceChanges, MaintenanceRequest},
    property::{Property, PropertyChanges},
    role::Role,
    stats::{DashboardStats, OwnerStats, TenantStats},
    tenant::Tenant,
    user::{User, UserUpsert},
};
use crate::error::AppError;
use async_trait::async_trait;

// Read methods return empty results when the store is unreachable.
// Write methods fail with `AppError::DatabaseUnavailable` instead.

#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn is_available(&self) -> bool;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    /// Logged no-op when the store is unreachable.
    async fn upsert(&self, user: &UserUpsert) -> Result<(), AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, AppError>;
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Property>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, AppError>;
    async fn create(&self, property: &Property) -> Result<String, AppError>;
    async fn update(&self, id: &str, changes: &PropertyChanges) -> Result<(), AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Property>, AppError>;
}

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Inquiry>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Inquiry>, AppError>;
    async fn create(&self, inquiry: &Inquiry) -> Result<String, AppError>;
    async fn update(&self, id: &str, changes: &InquiryChanges) -> Result<(), AppError>;
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<MaintenanceRequest>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError>;
    async fn create(&self, request: &MaintenanceRequest) -> Result<String, AppError>;
    async fn update(&self, id: &str, changes: &MaintenanceChanges) -> Result<(), AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<MaintenanceRequest>, AppError>;
    /// Not narrowed to the owner's properties.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<MaintenanceRequest>, AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Payment>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Payment>, AppError>;
    /// Not narrowed to the owner's properties.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Payment>, AppError>;
}

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Invoice>, AppError>;
    /// Not narrowed to the owner's properties.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Invoice>, AppError>;
}

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Tenant>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError>;
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Tenant>, AppError>;
    /// Empty when the owner has no properties, otherwise every tenant.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Tenant>, AppError>;
}

#[async_trait]
pub trait DocumentRepository: Send + Sync {
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Document>, AppError>;
    /// Not narrowed to the owner's properties.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<Document>, AppError>;
}

/// Aggregates run their sub-queries concurrently; `None` when the store is unreachable.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn dashboard(&self) -> Result<Option<DashboardStats>, AppError>;
    async fn for_owner(&self, owner_id: &str) -> Result<Option<OwnerStats>, AppError>;
    async fn for_tenant(&self, tenant_id: &str) -> Result<Option<TenantStats>, AppError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn notify_owner(&self, title: &str, content: &str) -> Result<(), AppError>;
}
