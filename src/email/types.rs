use serde::{Deserialize, Serialize};

/// Body of a Resend `POST /emails` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from: String,
  pub to: Vec<String>,
  pub subject: String,
  pub html: String,
}

impl EmailMessage {
  pub fn new(from: impl Into<String>, to: Vec<String>, subject: impl Into<String>, html: String) -> Self {
    EmailMessage {
      from: from.into(),
      to,
      subject: subject.into(),
      html,
    }
  }
}

/// What the provider hands back for an accepted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
  pub id: Option<String>,
}

/// Resend answers with `{"id": ...}` on success and
/// `{"statusCode": ..., "name": ..., "message": ...}` on failure.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResendResponse {
  pub id: Option<String>,
  pub name: Option<String>,
  pub message: Option<String>,
}
