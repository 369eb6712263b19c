use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Resend `POST /emails` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentEmail {
    pub id: String,
}

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("API_KEY_RESEND is not configured")]
    MissingApiKey,
    #[error("email provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email provider rejected the message ({status})")]
    Rejected { status: StatusCode },
    #[error("email provider returned no message id")]
    MalformedResponse,
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, MailerError>;
}

#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl ResendMailer {
    pub fn new(api_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key,
        }
    }

    pub fn emails_url(&self) -> String {
        format!("{}/emails", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl EmailSender for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<SentEmail, MailerError> {
        let api_key = self.api_key.as_deref().ok_or(MailerError::MissingApiKey)?;
        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            error!(%status, payload = %body, "email provider rejected the message");
            return Err(MailerError::Rejected { status });
        }
        serde_json::from_str::<SentEmail>(&body).map_err(|err| {
            error!(payload = %body, error = %err, "unexpected email provider response");
            MailerError::MalformedResponse
        })
    }
}

#[cfg(test)]
#[path = "tests/mailer_tests.rs"]
mod tests;
