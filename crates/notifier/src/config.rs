use std::time::Duration;

use reqwest::Url;

use brewbot_delivery::webhook::DEFAULT_TIMEOUT;

use crate::dispatcher::SendPolicy;

/// Required: incoming-webhook URL of the target chat channel.
pub const ENV_WEBHOOK_URL: &str = "SLACK_WEBHOOK_URL";
/// Optional: suppress events at or below this fill percentage.
pub const ENV_MIN_FILL_PERCENT: &str = "NOTIFY_MIN_FILL_PERCENT";
/// Optional: per-request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "WEBHOOK_TIMEOUT_SECS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Notifier configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Webhook endpoint. Contains a secret; never log it whole.
    pub webhook_url: Url,
    /// Whether low-fill events are posted.
    pub send_policy: SendPolicy,
    /// Bound on the outbound request.
    pub webhook_timeout: Duration,
}

impl NotifierConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `SLACK_WEBHOOK_URL`       | yes      | —       |
    /// | `NOTIFY_MIN_FILL_PERCENT` | no       | unset (always send) |
    /// | `WEBHOOK_TIMEOUT_SECS`    | no       | `10`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(ENV_WEBHOOK_URL)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_WEBHOOK_URL))?;
        let webhook_url = parse_webhook_url(&raw_url)?;

        let send_policy = match lookup(ENV_MIN_FILL_PERCENT) {
            None => SendPolicy::Always,
            Some(raw) => {
                let percent: f64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    var: ENV_MIN_FILL_PERCENT,
                    reason: format!("expected a number, got '{raw}'"),
                })?;
                if !percent.is_finite() {
                    return Err(ConfigError::Invalid {
                        var: ENV_MIN_FILL_PERCENT,
                        reason: format!("must be finite, got {percent}"),
                    });
                }
                SendPolicy::AboveFillPercent(percent)
            }
        };

        let webhook_timeout = match lookup(ENV_TIMEOUT_SECS) {
            None => DEFAULT_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::Invalid {
                        var: ENV_TIMEOUT_SECS,
                        reason: format!("expected a positive integer, got '{raw}'"),
                    })
                }
            },
        };

        Ok(Self {
            webhook_url,
            send_policy,
            webhook_timeout,
        })
    }
}

fn parse_webhook_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::Invalid {
        var: ENV_WEBHOOK_URL,
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            var: ENV_WEBHOOK_URL,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
