use async_trait::async_trait;
use reqwest::Client;

use crate::{
  config::ResendConfig,
  email::{
    types::{EmailMessage, ResendResponse, SentEmail},
    EmailError,
  },
};

#[async_trait]
pub trait EmailProvider: Send + Sync {
  async fn send_email(&self, message: &EmailMessage) -> Result<SentEmail, EmailError>;
}

pub struct EmailService {
  resend_config: ResendConfig,
  client: Client,
}

impl EmailService {
  pub fn new(resend_config: ResendConfig) -> Result<Self, EmailError> {
    let client = Client::builder()
      .timeout(resend_config.timeout)
      .build()
      .map_err(|e| EmailError::Transport(format!("HTTP client error: {}", e)))?;

    Ok(EmailService { resend_config, client })
  }
}

#[async_trait]
impl EmailProvider for EmailService {
  /// One POST to Resend. The body is decoded before the status is looked at, so a
  /// non-JSON answer surfaces as [`EmailError::InvalidResponse`] whatever the status.
  async fn send_email(&self, message: &EmailMessage) -> Result<SentEmail, EmailError> {
    let api_key = self.resend_config.api_key.as_deref().ok_or(EmailError::NotConfigured)?;

    let response = self
      .client
      .post(&self.resend_config.api_url)
      .bearer_auth(api_key)
      .json(message)
      .send()
      .await
      .map_err(|e| EmailError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
      .bytes()
      .await
      .map_err(|e| EmailError::Transport(e.to_string()))?;
    let result: ResendResponse =
      serde_json::from_slice(&body).map_err(|e| EmailError::InvalidResponse(e.to_string()))?;

    if !status.is_success() {
      let message = result
        .message
        .or(result.name)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
      return Err(EmailError::Rejected {
        status: status.as_u16(),
        message,
      });
    }

    Ok(SentEmail { id: result.id })
  }
}
