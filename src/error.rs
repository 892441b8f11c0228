use axum::{
  extract::rejection::BytesRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::domains::verification::service::VerificationServiceError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

// Unreadable bodies share the 500 channel with every other failure.
impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::warn!("Invalid verification request body: {:?}", error);
    AppError::internal_server_error(error.to_string())
  }
}

impl From<BytesRejection> for AppError {
  fn from(rejection: BytesRejection) -> Self {
    tracing::warn!("Unreadable verification request body: {}", rejection);
    AppError::internal_server_error(rejection.body_text())
  }
}

impl From<VerificationServiceError> for AppError {
  fn from(error: VerificationServiceError) -> Self {
    AppError::internal_server_error(error.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use http_body_util::BodyExt;

  async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
  }

  #[tokio::test]
  async fn test_every_service_error_is_internal_server_error() {
    let errors = [
      VerificationServiceError::ValidationError("Email and verification token are required".to_string()),
      VerificationServiceError::UpstreamError("Resend API error: boom".to_string()),
      VerificationServiceError::TransportError("connection refused".to_string()),
      VerificationServiceError::InvalidResponse("expected value".to_string()),
      VerificationServiceError::ConfigurationError("RESEND_API_KEY is not configured".to_string()),
    ];

    for error in errors {
      let expected = error.to_string();
      let (status, body) = body_json(AppError::from(error)).await;
      assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
      assert_eq!(body, json!({ "error": expected }));
    }
  }

  #[tokio::test]
  async fn test_json_error_is_internal_server_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let expected = json_error.to_string();

    let (status, body) = body_json(AppError::from(json_error)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], expected);
  }
}
