//! Outbound email delivery.
//!
//! Verification emails are rendered from a fixed HTML template and handed to
//! Resend's HTTP API through reqwest.

mod service;
mod template;
mod types;

pub use service::{EmailProvider, EmailService};
pub use template::{build_verification_email_html, VERIFICATION_EMAIL_FROM, VERIFICATION_EMAIL_SUBJECT};
pub use types::{EmailMessage, SentEmail};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmailError {
  #[error("RESEND_API_KEY is not configured")]
  NotConfigured,

  #[error("{0}")]
  Transport(String),

  #[error("{0}")]
  InvalidResponse(String),

  #[error("Resend API error: {message}")]
  Rejected { status: u16, message: String },
}
