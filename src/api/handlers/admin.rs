use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{CreatePropertyRequest, RecordId, UpdateInquiryRequest, UpdateMaintenanceRequest, UpdatePropertyRequest},
    responses::{CreatedResponse, SuccessResponse},
};
use crate::api::extractors::{guard::AdminCaller, input::RpcInput};
use crate::domain::models::{property::Property, role::Role};
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.stats_repo.dashboard().await?))
}

pub async fn get_all_properties(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.property_repo.list().await?))
}

pub async fn get_property_by_id(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.property_repo.find_by_id(&id).await?))
}

pub async fn create_property(
    State(state): State<Arc<AppState>>,
    AdminCaller(user): AdminCaller,
    RpcInput(payload): RpcInput<CreatePropertyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let property = Property::new(payload, Some(user.id.clone()));
    let id = state.property_repo.create(&property).await?;

    info!("Property created: {} by {}", id, user.id);

    Ok(Json(CreatedResponse { id }))
}

pub async fn update_property(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(payload): RpcInput<UpdatePropertyRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.property_repo.update(&payload.id, &payload.changes).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn delete_property(
    State(state): State<Arc<AppState>>,
    AdminCaller(user): AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    state.property_repo.delete(&id).await?;

    info!("Property deleted: {} by {}", id, user.id);

    Ok(Json(SuccessResponse::ok()))
}

pub async fn get_all_inquiries(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.inquiry_repo.list().await?))
}

pub async fn get_inquiry_by_id(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.inquiry_repo.find_by_id(&id).await?))
}

pub async fn update_inquiry(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(payload): RpcInput<UpdateInquiryRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.inquiry_repo.update(&payload.id, &payload.changes).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn get_all_maintenance_requests(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.maintenance_repo.list().await?))
}

pub async fn get_maintenance_request_by_id(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.maintenance_repo.find_by_id(&id).await?))
}

pub async fn update_maintenance_request(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(payload): RpcInput<UpdateMaintenanceRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.maintenance_repo.update(&payload.id, &payload.changes).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn get_all_payments(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.payment_repo.list().await?))
}

pub async fn get_payment_by_id(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.payment_repo.find_by_id(&id).await?))
}

pub async fn get_all_tenants(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.tenant_repo.list().await?))
}

pub async fn get_tenant_by_id(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(RecordId(id)): RpcInput<RecordId>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.tenant_repo.find_by_id(&id).await?))
}

pub async fn get_all_users(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_repo.list().await?))
}

pub async fn get_users_by_role(
    State(state): State<Arc<AppState>>,
    _caller: AdminCaller,
    RpcInput(role): RpcInput<Role>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.user_repo.list_by_role(role).await?))
}
