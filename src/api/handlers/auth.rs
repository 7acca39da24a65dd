use axum::{response::IntoResponse, Json};
use crate::api::dtos::responses::SuccessResponse;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::models::session::SESSION_COOKIE_NAME;
use crate::error::AppError;
use tower_cookies::{Cookies, Cookie};
use tracing::info;

pub async fn me(
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(user))
}

pub async fn logout(
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    cookies.remove(Cookie::build((SESSION_COOKIE_NAME, "")).path("/").into());

    info!("User logged out");

    Ok(Json(SuccessResponse::ok()))
}
