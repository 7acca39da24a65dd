use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use chrono::Utc;
use crate::state::AppState;
use crate::domain::models::{role::Role, session::SESSION_COOKIE_NAME, user::{User, UserUpsert}};
use crate::error::AppError;
use std::sync::Arc;
use tower_cookies::Cookies;
use tracing::{debug, Span};

pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let user = authenticate(parts, &app_state).await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", &user.id);

        Ok(AuthUser(user))
    }
}

/// Resolves the session cookie to a user row.
///
/// A verified session for an unknown user provisions the row first. Every
/// sign-in refreshes `lastSignedIn`, and a user matching `OWNER_OPEN_ID` is
/// promoted to admin.
pub(crate) async fn authenticate(parts: &Parts, state: &AppState) -> Result<Option<User>, AppError> {
    let Some(cookies) = parts.extensions.get::<Cookies>() else {
        return Err(AppError::InternalWithMsg("Cookie layer missing".to_string()));
    };

    let Some(token) = cookies.get(SESSION_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return Ok(None);
    };

    let Some(claims) = state.session_service.verify(&token) else {
        return Ok(None);
    };

    let upsert = UserUpsert {
        id: claims.sub.clone(),
        name: claims.name,
        email: claims.email,
        login_method: claims.login_method,
        role: Role::for_new_user(&claims.sub, state.config.owner_open_id.as_deref()),
        last_signed_in: Utc::now(),
    };
    state.user_repo.upsert(&upsert).await?;

    let user = state.user_repo.find_by_id(&claims.sub).await?;
    if user.is_none() {
        debug!("Session for {} has no user row", claims.sub);
    }
    Ok(user)
}
