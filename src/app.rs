use axum::{
  http::{header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue},
  Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::{domains::verification::rest::verification_email_handler, state::SharedAppState};

/// Every method on every path reaches the verification handler, and every
/// response (errors included) leaves with `Access-Control-Allow-Origin: *`.
pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .fallback(verification_email_handler)
    .layer(SetResponseHeaderLayer::overriding(
      ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static("*"),
    ))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
