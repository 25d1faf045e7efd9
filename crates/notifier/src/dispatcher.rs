//! One sensor event in, at most one notification out.
//!
//! [`Dispatcher`] grades the reading, builds the [`NotificationPayload`] and
//! hands it to a [`NotificationSender`]. Delivery failures are logged here
//! and never propagated: the event counts as handled either way.

use brewbot_core::{determine_message, evaluate_freshness, Clock, SensorEvent};
use brewbot_delivery::{NotificationPayload, NotificationSender};

/// Whether an event is worth posting at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SendPolicy {
    /// Post every event.
    Always,
    /// Post only when the fill percentage is strictly above the threshold.
    AboveFillPercent(f64),
}

impl SendPolicy {
    pub fn allows(self, fill_percent: f64) -> bool {
        match self {
            Self::Always => true,
            Self::AboveFillPercent(min) => fill_percent > min,
        }
    }
}

/// What happened to a dispatched event.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The webhook accepted the notification.
    Delivered,
    /// The send policy filtered the event out; nothing was sent.
    Suppressed,
    /// Delivery failed. The error has already been logged.
    Failed(String),
}

pub struct Dispatcher<S, C> {
    sender: S,
    clock: C,
    policy: SendPolicy,
}

impl<S, C> Dispatcher<S, C>
where
    S: NotificationSender,
    C: Clock,
{
    pub fn new(sender: S, clock: C, policy: SendPolicy) -> Self {
        Self {
            sender,
            clock,
            policy,
        }
    }

    /// The sender this dispatcher delivers through.
    pub fn sender(&self) -> &S {
        &self.sender
    }

    /// Build the notification for `event` without sending it.
    pub fn compose(&self, event: &SensorEvent) -> NotificationPayload {
        let message = determine_message(event.measure);
        let freshness = evaluate_freshness(event.timestamp, event.measure, self.clock.now());
        NotificationPayload::new(message, freshness, event)
    }

    /// Handle one event. Never fails from the caller's point of view.
    pub async fn dispatch(&self, event: &SensorEvent) -> DispatchOutcome {
        let payload = self.compose(event);

        if !self.policy.allows(payload.fill_percent) {
            tracing::info!(
                fill_percent = payload.fill_percent,
                policy = ?self.policy,
                "Fill level below notification threshold, skipping"
            );
            return DispatchOutcome::Suppressed;
        }

        match self.sender.send(&payload).await {
            Ok(()) => {
                tracing::info!(
                    fill_percent = payload.fill_percent,
                    freshness = %payload.freshness,
                    "Posted coffee status notification"
                );
                DispatchOutcome::Delivered
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    fill_percent = payload.fill_percent,
                    "Could not post coffee status notification"
                );
                DispatchOutcome::Failed(e.to_string())
            }
        }
    }
}
