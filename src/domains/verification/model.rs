use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_USER_NAME: &str = "New User";

/// Inbound body. Fields stay optional so that a missing or `null` value is
/// reported through validation instead of as a JSON error.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct VerificationRequest {
  #[validate(required, length(min = 1))]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[validate(required, length(min = 1))]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_name: Option<String>,
}

impl VerificationRequest {
  pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
    VerificationRequest {
      email: Some(email.into()),
      token: Some(token.into()),
      user_name: None,
    }
  }

  pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
    self.user_name = Some(user_name.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationResponse {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email_id: Option<String>,
}
