use serde::Serialize;

#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmittedResponse {
    pub success: bool,
    pub inquiry_id: String,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub database: bool,
}
