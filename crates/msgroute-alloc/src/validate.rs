//! Recipient validation.

use msgroute_core::config::LimitsConfig;
use msgroute_core::{ConfigError, RouteError, RouteResult};
use regex::Regex;

/// Ceiling and format rules applied to every recipient list.
#[derive(Debug, Clone)]
pub struct RecipientPolicy {
    max_recipients: usize,
    pattern: Regex,
}

impl RecipientPolicy {
    /// Compile a policy. `pattern` must match the whole recipient value.
    pub fn new(max_recipients: usize, pattern: &str) -> Result<Self, ConfigError> {
        let anchored = format!("^(?:{pattern})$");
        let pattern = Regex::new(&anchored).map_err(|e| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            max_recipients,
            pattern,
        })
    }

    pub fn from_limits(limits: &LimitsConfig) -> Result<Self, ConfigError> {
        Self::new(limits.max_recipients, &limits.recipient_pattern)
    }

    pub fn max_recipients(&self) -> usize {
        self.max_recipients
    }

    /// Check the ceiling first, then report the first malformed recipient.
    pub fn validate(&self, recipients: &[String]) -> RouteResult<()> {
        if recipients.len() > self.max_recipients {
            return Err(RouteError::TooManyRecipients {
                actual: recipients.len(),
                max: self.max_recipients,
            });
        }

        if let Some(bad) = recipients.iter().find(|r| !self.pattern.is_match(r.as_str())) {
            return Err(RouteError::InvalidRecipient(bad.clone()));
        }

        Ok(())
    }
}
