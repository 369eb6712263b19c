use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{ContactValidationError, MissingFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MalformedJson,
    MissingFields,
    InvalidEmail,
    InvalidPhone,
    MethodNotAllowed,
    PayloadTooLarge,
    Upstream,
    Internal,
}

impl ErrorCode {
    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::MalformedJson
            | ErrorCode::MissingFields
            | ErrorCode::InvalidEmail
            | ErrorCode::InvalidPhone => 400,
            ErrorCode::MethodNotAllowed => 405,
            ErrorCode::PayloadTooLarge => 413,
            ErrorCode::Upstream | ErrorCode::Internal => 500,
        }
    }
}

/// Every way a contact submission can fail at the relay. The `Display`
/// text is the user-facing message sent back in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    #[error("Format JSON invalide")]
    MalformedJson,
    #[error("Tous les champs sont requis")]
    MissingFields(MissingFields),
    #[error("Email invalide")]
    InvalidEmail,
    #[error("Numéro de téléphone invalide")]
    InvalidPhone,
    #[error("Méthode non autorisée")]
    MethodNotAllowed,
    #[error("Requête trop volumineuse")]
    PayloadTooLarge,
    #[error("Erreur serveur")]
    Upstream { details: String },
    #[error("Erreur serveur")]
    Internal { details: String },
}

impl RelayError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RelayError::MalformedJson => ErrorCode::MalformedJson,
            RelayError::MissingFields(_) => ErrorCode::MissingFields,
            RelayError::InvalidEmail => ErrorCode::InvalidEmail,
            RelayError::InvalidPhone => ErrorCode::InvalidPhone,
            RelayError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            RelayError::PayloadTooLarge => ErrorCode::PayloadTooLarge,
            RelayError::Upstream { .. } => ErrorCode::Upstream,
            RelayError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn http_status(&self) -> u16 {
        self.code().http_status()
    }

    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::Upstream { details } | RelayError::Internal { details } => {
                Some(details.as_str())
            }
            _ => None,
        }
    }
}

impl From<ContactValidationError> for RelayError {
    fn from(value: ContactValidationError) -> Self {
        match value {
            ContactValidationError::Missing(missing) => RelayError::MissingFields(missing),
            ContactValidationError::InvalidEmail => RelayError::InvalidEmail,
            ContactValidationError::InvalidPhone { .. } => RelayError::InvalidPhone,
        }
    }
}
