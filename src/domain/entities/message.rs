use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;

/// Contact form body. Fields default to empty so a missing field surfaces as
/// a validation error instead of a JSON decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Email must be a valid address")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Message is required"))]
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ContactForm {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Trims surrounding whitespace. Runs before validation.
    pub fn normalized(self) -> Self {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

#[derive(Debug, Clone)]
pub struct MessageInsert {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactForm> for MessageInsert {
    fn from(form: ContactForm) -> Self {
        MessageInsert {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}

/// A stored contact submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn received() -> Self {
        ContactResponse {
            success: true,
            message: "Message sent successfully!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_then_fail_validation() {
        let form: ContactForm = serde_json::from_value(serde_json::json!({
            "name": "Ada"
        }))
        .unwrap();

        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("message"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn whitespace_only_is_missing() {
        let form = ContactForm::new("Ada", "ada@example.com", "   ");
        assert!(form.validate().is_err());
    }

    #[test]
    fn normalized_trims_without_changing_case() {
        let form = ContactForm::new(" Ada ", " Ada@Example.com ", "Hello\n").normalized();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "Ada@Example.com");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn padded_email_is_valid_once_normalized() {
        let form = ContactForm::new("Ada", " ada@example.com ", "Hello");
        assert!(form.clone().validate().is_err());
        assert!(form.normalized().validate().is_ok());
    }

    #[test]
    fn long_fields_are_accepted() {
        let form = ContactForm::new("A".repeat(101), "ada@example.com", "x".repeat(6000));
        assert!(form.validate().is_ok());
    }
}
