//! Brewbot outbound delivery.
//!
//! - [`payload`] — the notification content and its Slack Block Kit body.
//! - [`webhook`] — [`NotificationSender`] and the HTTP webhook client.

pub mod payload;
pub mod webhook;

pub use payload::{NotificationPayload, SlackMessage};
pub use webhook::{NotificationSender, WebhookDelivery, WebhookError};
