pub mod sqlite_user_repo;
pub mod sqlite_property_repo;
pub mod sqlite_inquiry_repo;
pub mod sqlite_maintenance_repo;
pub mod sqlite_payment_repo;
pub mod sqlite_invoice_repo;
pub mod sqlite_tenant_repo;
pub mod sqlite_document_repo;
pub mod sqlite_stats_repo;

pub mod postgres_user_repo;
pub mod postgres_property_repo;
pub mod postgres_inquiry_repo;
pub mod postgres_maintenance_repo;
pub mod postgres_payment_repo;
pub mod postgres_invoice_repo;
pub mod postgres_tenant_repo;
pub mod postgres_document_repo;
pub mod postgres_stats_repo;
