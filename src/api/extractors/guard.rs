use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::{role::Portal, user::User};
use crate::error::AppError;
use std::sync::Arc;
use tracing::warn;

use super::auth::AuthUser;

/// Runs the session check and the portal's role predicate. Rejects before
/// the input is read, so a denied caller never reaches a repository.
async fn admit<S>(parts: &mut Parts, state: &S, portal: Portal) -> Result<User, AppError>
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;
    let role = user.role();
    if !portal.permits(role) {
        warn!("{:?} portal denied user {} with role {}", portal, user.id, role);
        return Err(AppError::Forbidden(portal.denial_message().to_string()));
    }
    Ok(user)
}

pub struct AdminCaller(pub User);

impl<S> FromRequestParts<S> for AdminCaller
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        admit(parts, state, Portal::Admin).await.map(AdminCaller)
    }
}

/// Owners, or admins acting in owner scope.
pub struct OwnerCaller(pub User);

impl<S> FromRequestParts<S> for OwnerCaller
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        admit(parts, state, Portal::Owner).await.map(OwnerCaller)
    }
}

/// Tenants, or admins acting in tenant scope.
pub struct TenantCaller(pub User);

impl<S> FromRequestParts<S> for TenantCaller
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        admit(parts, state, Portal::Tenant).await.map(TenantCaller)
    }
}
