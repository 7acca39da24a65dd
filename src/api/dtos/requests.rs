use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::domain::models::{
    inquiry::InquiryChanges,
    maintenance::{MaintenanceChanges, MaintenancePriority},
    property::{NewPropertyParams, PropertyChanges},
};

pub type CreatePropertyRequest = NewPropertyParams;

/// A bare record id, e.g. `?input="prop_1"`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl Validate for RecordId {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePropertyRequest {
    pub id: String,
    #[serde(flatten)]
    pub changes: PropertyChanges,
}

impl Validate for UpdatePropertyRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.changes.validate()
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateInquiryRequest {
    pub id: String,
    #[serde(flatten)]
    pub changes: InquiryChanges,
}

impl Validate for UpdateInquiryRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.changes.validate()
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMaintenanceRequest {
    pub id: String,
    #[serde(flatten)]
    pub changes: MaintenanceChanges,
}

impl Validate for UpdateMaintenanceRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        self.changes.validate()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequestInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: MaintenancePriority,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub phone: Option<String>,
    pub property_type: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_splits_id_from_changes() {
        let req: UpdatePropertyRequest = serde_json::from_value(json!({ "id": "prop_1", "active": false })).unwrap();
        assert_eq!(req.id, "prop_1");
        assert_eq!(req.changes.active, Some(false));
        assert!(req.changes.name.is_none());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_price_change_is_rejected() {
        let req: UpdatePropertyRequest = serde_json::from_value(json!({ "id": "prop_1", "price": "-5" })).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_unknown_inquiry_status_fails_to_parse() {
        let parsed = serde_json::from_value::<UpdateInquiryRequest>(json!({ "id": "inq_1", "status": "archived" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        let input: CreateMaintenanceRequestInput =
            serde_json::from_value(json!({ "title": "Leak", "description": "Kitchen faucet" })).unwrap();
        assert_eq!(input.priority, MaintenancePriority::Medium);
    }

    #[test]
    fn test_contact_form_messages() {
        let form: ContactFormRequest =
            serde_json::from_value(json!({ "name": "", "email": "nope", "message": "" })).unwrap();
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert_eq!(fields["name"][0].message.as_deref(), Some("Name is required"));
        assert_eq!(fields["email"][0].message.as_deref(), Some("Invalid email address"));
        assert_eq!(fields["message"][0].message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn test_contact_form_optional_fields() {
        let form: ContactFormRequest =
            serde_json::from_value(json!({ "name": "John", "email": "john@x.com", "message": "Hi" })).unwrap();
        assert!(form.validate().is_ok());
        assert!(form.phone.is_none());
    }
}
