use anyhow::Context as _;
use reqwest::Client;
use serde::Serialize;

use crate::config::SmsConfig;
use crate::domain::repository::SmsSender;
use crate::error::ApiError;

/// Provider client: POSTs `{to, message}` with a bearer key. The response
/// body is ignored; any non-2xx status is an error.
#[derive(Clone)]
pub struct HttpSmsSender {
    client: Client,
    url: String,
    api_key: String,
}

impl HttpSmsSender {
    pub fn new(config: &SmsConfig) -> Self {
        Self {
            client: Client::new(),
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[derive(Serialize)]
struct OutboundSms<'a> {
    to: &'a str,
    message: &'a str,
}

impl SmsSender for HttpSmsSender {
    async fn send(&self, to: &str, message: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&OutboundSms { to, message })
            .send()
            .await
            .context("send sms")?;
        response
            .error_for_status()
            .context("sms provider rejected message")?;
        Ok(())
    }
}

/// Configured provider client or a no-op. Chosen once at startup; callers
/// never know which one they hold.
#[derive(Clone)]
pub enum SmsClient {
    Http(HttpSmsSender),
    Noop,
}

impl SmsClient {
    pub fn from_config(config: Option<&SmsConfig>) -> Self {
        match config {
            Some(config) => Self::Http(HttpSmsSender::new(config)),
            None => Self::Noop,
        }
    }
}

impl SmsSender for SmsClient {
    async fn send(&self, to: &str, message: &str) -> Result<(), ApiError> {
        match self {
            Self::Http(sender) => sender.send(to, message).await,
            Self::Noop => {
                tracing::info!(to, "sms provider not configured; dropping message");
                Ok(())
            }
        }
    }
}
