//! Single-attempt webhook delivery.
//!
//! [`WebhookDelivery`] posts a [`NotificationPayload`] as JSON to the
//! configured chat webhook. There is no retry: one invocation is one
//! request, bounded by the client timeout.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;

use crate::payload::NotificationPayload;

/// Default bound on a single delivery attempt.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a notification did not reach the chat channel.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// No response: connection refused, DNS failure, or the client timeout
    /// elapsed.
    #[error("webhook unreachable: {0}")]
    Request(#[from] reqwest::Error),

    /// The webhook answered with a status outside 2xx.
    #[error("webhook rejected notification with HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Sender seam
// ---------------------------------------------------------------------------

/// Anything that can deliver a notification to the chat channel.
pub trait NotificationSender: Send + Sync {
    /// Deliver `payload` once.
    fn send(
        &self,
        payload: &NotificationPayload,
    ) -> impl Future<Output = Result<(), WebhookError>> + Send;
}

// ---------------------------------------------------------------------------
// WebhookDelivery
// ---------------------------------------------------------------------------

/// Delivers notifications to an incoming-webhook URL.
pub struct WebhookDelivery {
    client: reqwest::Client,
    url: Url,
}

impl WebhookDelivery {
    /// Create a delivery client for `url` whose requests give up after
    /// `timeout`.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    /// Host part of the target URL. The full URL embeds a secret and is
    /// kept out of logs.
    pub fn host(&self) -> &str {
        self.url.host_str().unwrap_or("<unknown>")
    }
}

impl NotificationSender for WebhookDelivery {
    async fn send(&self, payload: &NotificationPayload) -> Result<(), WebhookError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&payload.to_message())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WebhookError::HttpStatus(response.status().as_u16()));
        }

        tracing::debug!(host = self.host(), status = %response.status(), "Webhook accepted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
