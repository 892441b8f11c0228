use axum::{
  body::Bytes,
  extract::{rejection::BytesRejection, State},
  http::{
    header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS},
    Method, StatusCode,
  },
  response::{IntoResponse, Json, Response},
};

use super::model::VerificationRequest;
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

/// Serves every path. `OPTIONS` is answered before the body is touched; any
/// other method is treated as a send request.
pub async fn verification_email_handler(
  State(state): State<SharedAppState>,
  method: Method,
  body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
  if method == Method::OPTIONS {
    return Ok(preflight_response());
  }

  let body = body?;
  let payload: VerificationRequest = serde_json::from_slice(&body)?;
  let response = state.send_verification_email(payload).await?;

  Ok(Json(response).into_response())
}

fn preflight_response() -> Response {
  (
    StatusCode::OK,
    [(ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"), (ACCESS_CONTROL_ALLOW_HEADERS, "*")],
    "ok",
  )
    .into_response()
}
