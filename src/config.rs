use std::{env, net::SocketAddr, time::Duration};

use anyhow::Context;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, read once at start-up and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
  pub bind_addr: SocketAddr,
  pub resend: ResendConfig,
}

#[derive(Clone)]
pub struct ResendConfig {
  pub api_key: Option<String>,
  pub api_url: String,
  pub timeout: Duration,
}

impl std::fmt::Debug for ResendConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ResendConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("api_url", &self.api_url)
      .field("timeout", &self.timeout)
      .finish()
  }
}

impl Default for ResendConfig {
  fn default() -> Self {
    ResendConfig {
      api_key: None,
      api_url: DEFAULT_RESEND_API_URL.to_string(),
      timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
    }
  }
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    let bind_addr = env::var("BIND_ADDR")
      .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
      .parse()
      .context("BIND_ADDR must be a socket address such as 0.0.0.0:8000")?;

    let api_key = env::var("RESEND_API_KEY").ok().filter(|key| !key.trim().is_empty());
    if api_key.is_none() {
      tracing::warn!("RESEND_API_KEY is not set; verification emails will fail until it is configured");
    }

    let timeout_secs = match env::var("PROVIDER_TIMEOUT_SECS") {
      Ok(raw) => raw
        .parse()
        .with_context(|| format!("PROVIDER_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"))?,
      Err(_) => DEFAULT_PROVIDER_TIMEOUT_SECS,
    };

    Ok(Config {
      bind_addr,
      resend: ResendConfig {
        api_key,
        api_url: env::var("RESEND_API_URL").unwrap_or_else(|_| DEFAULT_RESEND_API_URL.to_string()),
        timeout: Duration::from_secs(timeout_secs),
      },
    })
  }
}
