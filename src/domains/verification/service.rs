use async_trait::async_trait;
use std::error::Error;
use validator::Validate;

use super::model::{VerificationRequest, VerificationResponse, DEFAULT_USER_NAME};
use crate::email::{
  build_verification_email_html, EmailError, EmailMessage, EmailProvider, VERIFICATION_EMAIL_FROM,
  VERIFICATION_EMAIL_SUBJECT,
};

pub const MISSING_FIELDS_MESSAGE: &str = "Email and verification token are required";
pub const EMAIL_SENT_MESSAGE: &str = "Verification email sent successfully";

/// Each variant carries the exact text returned to the caller.
#[derive(Debug)]
pub enum VerificationServiceError {
  ValidationError(String),
  UpstreamError(String),
  TransportError(String),
  InvalidResponse(String),
  ConfigurationError(String),
}

impl Error for VerificationServiceError {}

impl std::fmt::Display for VerificationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      VerificationServiceError::ValidationError(msg)
      | VerificationServiceError::UpstreamError(msg)
      | VerificationServiceError::TransportError(msg)
      | VerificationServiceError::InvalidResponse(msg)
      | VerificationServiceError::ConfigurationError(msg) => write!(f, "{}", msg),
    }
  }
}

impl From<EmailError> for VerificationServiceError {
  fn from(err: EmailError) -> Self {
    let msg = err.to_string();
    match err {
      EmailError::NotConfigured => VerificationServiceError::ConfigurationError(msg),
      EmailError::Transport(_) => VerificationServiceError::TransportError(msg),
      EmailError::InvalidResponse(_) => VerificationServiceError::InvalidResponse(msg),
      EmailError::Rejected { .. } => VerificationServiceError::UpstreamError(msg),
    }
  }
}

#[async_trait]
pub trait VerificationService: Send + Sync {
  async fn send_verification_email(
    &self,
    req: VerificationRequest,
  ) -> Result<VerificationResponse, VerificationServiceError>;
}

pub struct VerificationServiceImpl<P> {
  email_provider: P,
}

impl<P> VerificationServiceImpl<P>
where
  P: EmailProvider,
{
  pub fn new(email_provider: P) -> Self {
    Self { email_provider }
  }
}

#[async_trait]
impl<P> VerificationService for VerificationServiceImpl<P>
where
  P: EmailProvider,
{
  async fn send_verification_email(
    &self,
    req: VerificationRequest,
  ) -> Result<VerificationResponse, VerificationServiceError> {
    if req.validate().is_err() {
      tracing::warn!("Rejected verification email request without email or token");
      return Err(VerificationServiceError::ValidationError(MISSING_FIELDS_MESSAGE.to_string()));
    }
    let VerificationRequest {
      email,
      token,
      user_name,
    } = req;
    let (email, token) = (email.unwrap_or_default(), token.unwrap_or_default());

    let user_name = user_name.unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
    let html = build_verification_email_html(&user_name, &token);
    let message = EmailMessage::new(VERIFICATION_EMAIL_FROM, vec![email], VERIFICATION_EMAIL_SUBJECT, html);

    let sent = match self.email_provider.send_email(&message).await {
      Ok(sent) => sent,
      Err(e) => {
        tracing::error!("Failed to send verification email: {}", e);
        return Err(e.into());
      }
    };

    tracing::debug!("Verification email recipient: {:?}", message.to);
    tracing::info!("Verification email sent (id: {:?})", sent.id);

    Ok(VerificationResponse {
      success: true,
      message: EMAIL_SENT_MESSAGE.to_string(),
      email_id: sent.id,
    })
  }
}
