//! Route engine — the validated, immutable routing configuration.
//!
//! Built once at start-up from a `RouteConfig` and shared by reference
//! (`Arc<RouteEngine>`) across requests. Holds no mutable state.

use msgroute_core::{ConfigError, RouteConfig, RouteResponse, RouteResult, TierSchedule};
use tracing::info;

use crate::allocator::allocate;
use crate::builder::build_routes;
use crate::validate::RecipientPolicy;

#[derive(Debug, Clone)]
pub struct RouteEngine {
    schedule: TierSchedule,
    policy: RecipientPolicy,
}

impl RouteEngine {
    pub fn new(schedule: TierSchedule, policy: RecipientPolicy) -> Self {
        Self { schedule, policy }
    }

    /// Validate the tier schedule and compile the recipient policy.
    pub fn from_config(config: &RouteConfig) -> Result<Self, ConfigError> {
        let schedule = config.schedule()?;
        let policy = RecipientPolicy::from_limits(&config.limits)?;
        Ok(Self::new(schedule, policy))
    }

    pub fn schedule(&self) -> &TierSchedule {
        &self.schedule
    }

    pub fn policy(&self) -> &RecipientPolicy {
        &self.policy
    }

    /// Validate, allocate and slice `recipients` into routes for `message`.
    pub fn route(&self, message: &str, recipients: &[String]) -> RouteResult<RouteResponse> {
        self.policy.validate(recipients)?;

        let allocation = allocate(recipients.len(), &self.schedule);
        let response = build_routes(message, recipients, &allocation, &self.schedule)?;

        info!(
            recipients = recipients.len(),
            routes = response.routes.len(),
            "routed message"
        );
        Ok(response)
    }
}
