//! `/api/contact`: validates a submission and forwards it to the email
//! provider. Every response carries the CORS headers.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use chrono::Local;
use serde_json::{json, Value};
use shared::{
    contact::ContactForm,
    error::RelayError,
    protocol::{ContactFailure, ContactSuccess},
};
use tracing::{error, info, warn};

use crate::{app_state::AppState, email_template};

/// Largest accepted request body.
pub const MAX_CONTACT_BYTES: usize = 64 * 1024;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const CORS_HEADERS: [(&str, &str); 5] = [
    ("access-control-allow-credentials", "true"),
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET,OPTIONS,PATCH,DELETE,POST,PUT"),
    (
        "access-control-allow-headers",
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
    ),
    ("content-type", "application/json"),
];

fn apply_cors(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

fn with_cors(mut response: Response) -> Response {
    apply_cors(response.headers_mut());
    response
}

fn failure(err: &RelayError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ContactFailure::from(err))).into_response()
}

/// Outermost layer of the contact route. Adds the CORS headers and turns
/// the body limit's plain-text 413 into the JSON failure shape.
pub(crate) async fn finish_response(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("contact submission exceeded the body limit");
        return with_cors(failure(&RelayError::PayloadTooLarge));
    }
    with_cors(response)
}

pub(crate) async fn contact(State(state): State<AppState>, request: Request) -> Response {
    match request.method().clone() {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => {
            let outcome = match read_submission(request).await {
                Ok(form) => relay_contact(&state, form).await,
                Err(err) => {
                    warn!(error = %err, "contact submission rejected");
                    Err(err)
                }
            };
            match outcome {
                Ok(sent) => (StatusCode::OK, Json(sent)).into_response(),
                Err(err) => failure(&err),
            }
        }
        other => {
            warn!(method = %other, "contact relay called with unsupported method");
            failure(&RelayError::MethodNotAllowed)
        }
    }
}

fn is_form_post(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

fn body_rejection(status: StatusCode) -> RelayError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        RelayError::PayloadTooLarge
    } else {
        RelayError::MalformedJson
    }
}

/// Reads a JSON body, or the url-encoded body a plain HTML form posts.
pub(crate) async fn read_submission(request: Request) -> Result<ContactForm, RelayError> {
    if is_form_post(request.headers()) {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &())
            .await
            .map_err(|rejection| body_rejection(rejection.status()))?;
        return form_fields(fields);
    }
    let body = Bytes::from_request(request, &())
        .await
        .map_err(|rejection| body_rejection(rejection.status()))?;
    parse_submission(&body)
}

/// Url-encoded fields go through the same tolerant reader as JSON.
pub(crate) fn form_fields(fields: HashMap<String, String>) -> Result<ContactForm, RelayError> {
    let value = serde_json::to_value(fields).map_err(|_| RelayError::MalformedJson)?;
    ContactForm::from_json(&value).ok_or(RelayError::MalformedJson)
}

/// Parses the body. An empty body reads as an empty object so every field
/// is reported missing.
pub(crate) fn parse_submission(body: &[u8]) -> Result<ContactForm, RelayError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ContactForm::from_json(&json!({})).ok_or(RelayError::MalformedJson);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| RelayError::MalformedJson)?;
    ContactForm::from_json(&value).ok_or(RelayError::MalformedJson)
}

pub(crate) async fn relay_contact(
    state: &AppState,
    form: ContactForm,
) -> Result<ContactSuccess, RelayError> {
    form.validate().map_err(|err| {
        warn!(error = %err, "contact submission failed validation");
        RelayError::from(err)
    })?;

    let email = email_template::compose(&form, &state.settings, &Local::now());
    let sent = state.mailer.send(&email).await.map_err(|err| {
        error!(error = %err, "contact email could not be sent");
        RelayError::Upstream {
            details: err.to_string(),
        }
    })?;
    info!(id = %sent.id, to = ?email.to, "contact email sent");
    Ok(ContactSuccess::new(json!({ "id": sent.id })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_reports_every_field_missing() {
        let form = parse_submission(b"  ").expect("empty object");
        assert!(form.missing_fields().first_name);
        assert!(form.missing_fields().message);
    }

    #[test]
    fn non_object_json_is_malformed() {
        assert_eq!(parse_submission(b"[1,2]"), Err(RelayError::MalformedJson));
        assert_eq!(parse_submission(b"{\"firstName\":"), Err(RelayError::MalformedJson));
        assert_eq!(parse_submission(b"\"hello\""), Err(RelayError::MalformedJson));
    }

    #[test]
    fn url_encoded_fields_are_read_like_json() {
        let fields = HashMap::from([
            ("firstName".to_string(), "Jean".to_string()),
            ("email".to_string(), "   ".to_string()),
        ]);
        let form = form_fields(fields).expect("object");
        assert_eq!(form.first_name, "Jean");
        let missing = form.missing_fields();
        assert!(!missing.first_name);
        assert!(missing.email);
        assert!(missing.message);
    }

    #[test]
    fn only_url_encoded_content_types_take_the_form_path() {
        let mut headers = HeaderMap::new();
        assert!(!is_form_post(&headers));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        assert!(is_form_post(&headers));
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        assert!(!is_form_post(&headers));
    }

    #[tokio::test]
    async fn oversized_limit_response_becomes_a_json_failure() {
        let response = finish_response(StatusCode::PAYLOAD_TOO_LARGE.into_response()).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn cors_headers_cover_the_fixed_list() {
        let response = with_cors(StatusCode::OK.into_response());
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .expect("ascii")
            .contains("X-CSRF-Token"));
    }
}
