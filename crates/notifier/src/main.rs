//! `brewbot-notifier` -- posts one coffee status update per sensor event.
//!
//! The event is a JSON object `{"timestamp": <brew unix seconds>,
//! "measure": <fill ratio 0..1>}` given as the first argument, or on stdin
//! when no argument is present.
//!
//! # Environment variables
//!
//! | Variable                  | Required | Default | Description                          |
//! |---------------------------|----------|---------|--------------------------------------|
//! | `SLACK_WEBHOOK_URL`       | yes      | --      | Incoming webhook of the target channel |
//! | `NOTIFY_MIN_FILL_PERCENT` | no       | unset   | Skip events at or below this fill %  |
//! | `WEBHOOK_TIMEOUT_SECS`    | no       | `10`    | Outbound request timeout             |

use std::io::Read;

use brewbot_core::{SensorEvent, SystemClock};
use brewbot_delivery::WebhookDelivery;
use brewbot_notifier::{Dispatcher, NotifierConfig};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "brewbot_notifier=info,brewbot_delivery=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = NotifierConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        std::process::exit(1);
    });

    let raw = read_trigger().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Could not read sensor event");
        std::process::exit(1);
    });

    let event = SensorEvent::from_json(&raw).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Rejected sensor event");
        std::process::exit(1);
    });

    let delivery = WebhookDelivery::new(config.webhook_url, config.webhook_timeout)
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to build webhook client");
            std::process::exit(1);
        });

    tracing::info!(
        host = delivery.host(),
        timestamp = event.timestamp,
        measure = event.measure,
        "Handling sensor event",
    );

    let dispatcher = Dispatcher::new(delivery, SystemClock, config.send_policy);
    let outcome = dispatcher.dispatch(&event).await;

    tracing::info!(?outcome, "Sensor event handled");
}

/// The trigger body: first CLI argument, else all of stdin.
fn read_trigger() -> std::io::Result<String> {
    if let Some(arg) = std::env::args().nth(1) {
        return Ok(arg);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
