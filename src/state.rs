use std::sync::Arc;

use crate::{
  config::Config,
  domains::verification::{
    model::{VerificationRequest, VerificationResponse},
    service::{VerificationService, VerificationServiceError, VerificationServiceImpl},
  },
  email::{EmailError, EmailProvider, EmailService},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn send_verification_email(
    &self,
    req: VerificationRequest,
  ) -> impl std::future::Future<Output = Result<VerificationResponse, VerificationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub verification_service: Arc<dyn VerificationService>,
}

impl SharedAppState {
  pub fn new(config: &Config) -> Result<Self, EmailError> {
    let email_service = EmailService::new(config.resend.clone())?;
    Ok(Self::with_provider(email_service))
  }

  pub fn with_provider<P>(email_provider: P) -> Self
  where
    P: EmailProvider + 'static,
  {
    let verification_service = Arc::new(VerificationServiceImpl::new(email_provider));

    Self { verification_service }
  }
}

impl AppState for SharedAppState {
  async fn send_verification_email(
    &self,
    req: VerificationRequest,
  ) -> Result<VerificationResponse, VerificationServiceError> {
    self.verification_service.send_verification_email(req).await
  }
}
