//! Contact form payload and the validation rules shared by the page and the relay.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex pattern is valid")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Per-field flags, `true` when the field is absent or blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingFields {
    pub first_name: bool,
    pub last_name: bool,
    pub email: bool,
    pub phone: bool,
    pub message: bool,
}

impl MissingFields {
    pub fn any(&self) -> bool {
        self.first_name || self.last_name || self.email || self.phone || self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("all fields are required")]
    Missing(MissingFields),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid phone number: {digits} digits, at least {MIN_PHONE_DIGITS} required")]
    InvalidPhone { digits: usize },
}

impl ContactForm {
    /// Builds a form from an arbitrary JSON value. Fields that are absent,
    /// not strings, or blank are left empty so `validate` flags them.
    pub fn from_json(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_default()
        };
        Some(Self {
            first_name: field("firstName"),
            last_name: field("lastName"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        })
    }

    pub fn missing_fields(&self) -> MissingFields {
        let blank = |value: &str| value.trim().is_empty();
        MissingFields {
            first_name: blank(&self.first_name),
            last_name: blank(&self.last_name),
            email: blank(&self.email),
            phone: blank(&self.phone),
            message: blank(&self.message),
        }
    }

    /// Presence first, then email shape, then phone length.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        let missing = self.missing_fields();
        if missing.any() {
            return Err(ContactValidationError::Missing(missing));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactValidationError::InvalidEmail);
        }
        let digits = phone_digit_count(&self.phone);
        if digits < MIN_PHONE_DIGITS {
            return Err(ContactValidationError::InvalidPhone { digits });
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn phone_digit_count(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jean() -> ContactForm {
        ContactForm {
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: "jean@ex.com".into(),
            phone: "5551234567".into(),
            message: "Bonjour".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(jean().validate(), Ok(()));
    }

    #[test]
    fn missing_fields_are_flagged_individually() {
        let form = ContactForm {
            last_name: "   ".into(),
            message: String::new(),
            ..jean()
        };
        let err = form.validate().expect_err("missing");
        assert_eq!(
            err,
            ContactValidationError::Missing(MissingFields {
                last_name: true,
                message: true,
                ..MissingFields::default()
            })
        );
    }

    #[test]
    fn email_shape_is_checked() {
        let form = ContactForm {
            email: "not-an-email".into(),
            ..jean()
        };
        assert_eq!(form.validate(), Err(ContactValidationError::InvalidEmail));
        assert!(!is_valid_email("a b@ex.com"));
        assert!(!is_valid_email("jean@ex"));
        assert!(is_valid_email("jean.dupont@ex.co.uk"));
    }

    #[test]
    fn phone_counts_digits_only() {
        assert_eq!(phone_digit_count("+1 (581) 986-8494"), 11);
        let form = ContactForm {
            phone: "123".into(),
            ..jean()
        };
        assert_eq!(
            form.validate(),
            Err(ContactValidationError::InvalidPhone { digits: 3 })
        );
    }

    #[test]
    fn from_json_treats_non_strings_as_missing() {
        let value = json!({
            "firstName": "Jean",
            "lastName": 42,
            "email": "jean@ex.com",
            "phone": null,
            "message": "Bonjour"
        });
        let form = ContactForm::from_json(&value).expect("object");
        let missing = form.missing_fields();
        assert!(missing.last_name && missing.phone);
        assert!(!missing.first_name && !missing.email && !missing.message);
        assert!(ContactForm::from_json(&json!([1, 2])).is_none());
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(jean()).expect("json");
        assert_eq!(value["firstName"], "Jean");
        assert_eq!(value["lastName"], "Dupont");
    }
}
