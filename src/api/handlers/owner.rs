use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{RecordId, UpdatePropertyRequest},
    responses::SuccessResponse,
};
use crate::api::extractors::{guard::OwnerCaller, input::RpcInput};
use crate::domain::models::role::Role;
use std::sync::Arc;
use crate::error::AppError;

// Tenants, payments, invoices, maintenance and documents are not yet
// narrowed to the caller's properties; the repositories document the gap.

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.stats_repo.for_owner(&user.id).await?))
}

pub async fn get_properties(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.property_repo.list_by_owner(&user.id).await?))
}

/// The caller's own property, or null. Admins may read any property.
pub async fn get_property_by_id(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    let property = state.property_repo.find_by_id(&id).await?
        .filter(|p| user.role() == Role::Admin || p.owner_id.as_deref() == Some(user.id.as_str()));
    Ok(Json(property))
}

pub async fn update_property(
    State(state): State<Arc<AppState>>,
    _caller: OwnerCaller,
    RpcInput(payload): RpcInput<UpdatePropertyRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.property_repo.update(&payload.id, &payload.changes).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn get_tenants(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.tenant_repo.list_for_owner(&user.id).await?))
}

pub async fn get_payments(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.payment_repo.list_for_owner(&user.id).await?))
}

pub async fn get_invoices(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.invoice_repo.list_for_owner(&user.id).await?))
}

pub async fn get_maintenance_requests(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.maintenance_repo.list_for_owner(&user.id).await?))
}

pub async fn get_documents(
    State(state): State<Arc<AppState>>,
    OwnerCaller(user): OwnerCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.document_repo.list_for_owner(&user.id).await?))
}
