use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::ContactFormRequest, responses::ContactSubmittedResponse};
use crate::api::extractors::input::RpcInput;
use crate::domain::models::inquiry::{Inquiry, NewInquiryParams};
use std::sync::Arc;
use crate::error::{AppError, CONTACT_SUBMIT_FAILED};
use tracing::{error, info, warn};

pub const NOTIFICATION_TITLE: &str = "New Contact Form Submission";
pub const THANK_YOU_MESSAGE: &str = "Thank you for your inquiry. We will contact you soon.";

fn blank_as_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn submit_form(
    State(state): State<Arc<AppState>>,
    RpcInput(payload): RpcInput<ContactFormRequest>,
) -> Result<impl IntoResponse, AppError> {
    let content = format!(
        "New inquiry from {} ({})\n\nMessage: {}",
        payload.name, payload.email, payload.message
    );

    let inquiry = Inquiry::new(NewInquiryParams {
        name: payload.name,
        email: payload.email,
        phone: blank_as_none(payload.phone),
        property_type: blank_as_none(payload.property_type),
        message: payload.message,
    });

    let inquiry_id = state.inquiry_repo.create(&inquiry).await.map_err(|e| {
        error!("[Contact Form] Failed to submit: {}", e);
        AppError::Failed(CONTACT_SUBMIT_FAILED.to_string())
    })?;

    info!("[Contact Form] Inquiry {} received", inquiry_id);

    // The inquiry is already stored, so a notifier outage does not fail the submission.
    if let Err(e) = state.notification_service.notify_owner(NOTIFICATION_TITLE, &content).await {
        warn!("[Contact Form] Owner notification failed for {}: {}", inquiry_id, e);
    }

    Ok(Json(ContactSubmittedResponse {
        success: true,
        inquiry_id,
        message: THANK_YOU_MESSAGE,
    }))
}
