use serde::{Deserialize, Serialize};

pub const SESSION_COOKIE_NAME: &str = "app_session_id";

/// Claims of the session token minted by the identity provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub login_method: Option<String>,
    pub exp: usize,
}
