use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailError, EmailMessage, EmailProvider, SentEmail},
  state::SharedAppState,
};

mockall::mock! {
  pub EmailProvider {}

  #[async_trait]
  impl EmailProvider for EmailProvider {
    async fn send_email(&self, message: &EmailMessage) -> Result<SentEmail, EmailError>;
  }
}

pub fn app_with_provider(provider: MockEmailProvider) -> Router {
  create_app(SharedAppState::with_provider(provider))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  send(app, request).await
}
