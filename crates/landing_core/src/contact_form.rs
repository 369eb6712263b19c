//! Client side of the contact form: field state, local validation and the
//! transport that posts to the relay.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    contact::{ContactForm, ContactValidationError},
    protocol::{ContactFailure, ContactSuccess, CONTACT_ROUTE},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

/// How long the success notice stays before the form clears itself.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ContactValidationError),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("relay rejected the message ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("could not reach the relay: {0}")]
    Transport(String),
    #[error("invalid relay endpoint `{0}`")]
    Endpoint(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    /// Wire and form-control name.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::FirstName => "firstName",
            ContactField::LastName => "lastName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }

    pub fn label_key(self) -> String {
        format!("contact.form.{}", self.name())
    }

    pub fn input_type(self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "tel",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactFormState {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.form.first_name,
            ContactField::LastName => &self.form.last_name,
            ContactField::Email => &self.form.email,
            ContactField::Phone => &self.form.phone,
            ContactField::Message => &self.form.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::FirstName => self.form.first_name = value,
            ContactField::LastName => self.form.last_name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Phone => self.form.phone = value,
            ContactField::Message => self.form.message = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Validates locally and marks the form in flight. The returned copy is
    /// what goes on the wire.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::AlreadySubmitting);
        }
        if let Err(err) = self.form.validate() {
            warn!(error = %err, "contact form failed local validation");
            let err = SubmitError::from(err);
            self.status = SubmitStatus::Failed(err.clone());
            return Err(err);
        }
        self.status = SubmitStatus::Submitting;
        Ok(self.form.clone())
    }

    /// Records the relay's answer. On success returns the delay after which
    /// `reset_after_success` should run.
    pub fn finish(&mut self, outcome: Result<ContactSuccess, SubmitError>) -> Option<Duration> {
        match outcome {
            Ok(_) => {
                self.status = SubmitStatus::Succeeded;
                Some(SUCCESS_RESET_DELAY)
            }
            Err(err) => {
                self.status = SubmitStatus::Failed(err);
                None
            }
        }
    }

    pub fn reset_after_success(&mut self) {
        if self.status == SubmitStatus::Succeeded {
            *self = Self::default();
        }
    }

    /// One full round trip: validate, send once, record the outcome.
    pub async fn submit(
        &mut self,
        transport: &dyn ContactTransport,
    ) -> Result<Duration, SubmitError> {
        let form = self.begin_submit()?;
        let outcome = transport.send(&form).await;
        let result = outcome.clone().map(|_| SUCCESS_RESET_DELAY);
        self.finish(outcome);
        result
    }
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, form: &ContactForm) -> Result<ContactSuccess, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct HttpContactTransport {
    client: Client,
    endpoint: Url,
}

impl HttpContactTransport {
    /// `api_base` is the relay origin; the contact route is appended to it.
    pub fn new(api_base: &str) -> Result<Self, SubmitError> {
        Ok(Self {
            client: Client::new(),
            endpoint: contact_endpoint(api_base)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

pub fn contact_endpoint(api_base: &str) -> Result<Url, SubmitError> {
    Url::parse(api_base)
        .and_then(|base| base.join(CONTACT_ROUTE))
        .map_err(|_| SubmitError::Endpoint(api_base.to_string()))
}

#[async_trait]
impl ContactTransport for HttpContactTransport {
    async fn send(&self, form: &ContactForm) -> Result<ContactSuccess, SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        let status = response.status();
        if status.is_success() {
            let body: ContactSuccess = response
                .json()
                .await
                .map_err(|err| SubmitError::Transport(err.to_string()))?;
            info!(endpoint = %self.endpoint, "contact message accepted by relay");
            return Ok(body);
        }
        let message = match response.json::<ContactFailure>().await {
            Ok(failure) => failure.error,
            Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
#[path = "tests/contact_form_tests.rs"]
mod tests;
