//! Notification content and its chat webhook wire format.

use serde::Serialize;

use brewbot_core::{Freshness, SensorEvent};

/// Headline used both as the fallback text and the first section.
pub const HEADLINE: &str = "Coffee Status Update";

/// The three values a status notification carries.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPayload {
    /// Human-readable status sentence.
    pub message: String,
    /// Freshness grade.
    pub freshness: Freshness,
    /// Fill level as a percentage.
    pub fill_percent: f64,
}

impl NotificationPayload {
    pub fn new(message: impl Into<String>, freshness: Freshness, event: &SensorEvent) -> Self {
        Self {
            message: message.into(),
            freshness,
            fill_percent: event.fill_percent(),
        }
    }

    /// Render the Block Kit body posted to the webhook.
    pub fn to_message(&self) -> SlackMessage {
        SlackMessage {
            text: HEADLINE.to_string(),
            blocks: vec![
                Block::Section {
                    text: TextObject::Mrkdwn {
                        text: format!("*{HEADLINE}*"),
                    },
                },
                Block::Context {
                    elements: vec![
                        TextObject::Mrkdwn {
                            text: format!("*Fill level:* {}%", self.fill_percent),
                        },
                        TextObject::Mrkdwn {
                            text: format!("*Freshness:* {}", self.freshness),
                        },
                    ],
                },
                Block::Section {
                    text: TextObject::PlainText {
                        text: self.message.clone(),
                    },
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Top-level webhook body.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    pub text: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section { text: TextObject },
    Context { elements: Vec<TextObject> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    Mrkdwn { text: String },
    PlainText { text: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
