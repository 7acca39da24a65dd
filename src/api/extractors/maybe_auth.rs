use axum::{
    extract::{FromRequestParts, FromRef},
    http::request::Parts,
};
use crate::state::AppState;
use crate::domain::models::user::User;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{warn, Span};

use super::auth::authenticate;

/// Like `AuthUser`, but a guest is `None` rather than a rejection.
pub struct MaybeAuthUser(pub Option<User>);

impl<S> FromRequestParts<S> for MaybeAuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        match authenticate(parts, &app_state).await {
            Ok(Some(user)) => {
                Span::current().record("user_id", &user.id);
                Ok(MaybeAuthUser(Some(user)))
            }
            Ok(None) => Ok(MaybeAuthUser(None)),
            Err(e) => {
                // Treat as guest
                warn!("Session lookup failed: {}", e);
                Ok(MaybeAuthUser(None))
            }
        }
    }
}
