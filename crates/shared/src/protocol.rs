use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{contact::MissingFields, error::RelayError};

pub const CONTACT_ROUTE: &str = "/api/contact";
pub const HEALTH_ROUTE: &str = "/api/health";
pub const CONTACT_SENT_MESSAGE: &str = "Email envoyé avec succès";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route non trouvée";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSuccess {
    pub success: bool,
    pub message: String,
    pub data: Value,
}

impl ContactSuccess {
    pub fn new(data: Value) -> Self {
        Self {
            success: true,
            message: CONTACT_SENT_MESSAGE.to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactFailure {
    pub success: bool,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<MissingFields>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&RelayError> for ContactFailure {
    fn from(value: &RelayError) -> Self {
        let missing = match value {
            RelayError::MissingFields(missing) => Some(*missing),
            _ => None,
        };
        Self {
            success: false,
            error: value.to_string(),
            missing,
            details: value.details().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of non-contact JSON errors such as unknown routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_body_carries_missing_map_only_when_relevant() {
        let missing = MissingFields {
            email: true,
            ..MissingFields::default()
        };
        let body = serde_json::to_value(ContactFailure::from(&RelayError::MissingFields(missing)))
            .expect("json");
        assert_eq!(body["success"], false);
        assert_eq!(body["missing"]["email"], true);
        assert_eq!(body["missing"]["firstName"], false);
        assert!(body.get("details").is_none());

        let body =
            serde_json::to_value(ContactFailure::from(&RelayError::InvalidEmail)).expect("json");
        assert_eq!(body["error"], "Email invalide");
        assert!(body.get("missing").is_none());
    }
}
