pub mod config;
pub mod error;
pub mod tier;
pub mod types;

pub use config::{ConfigError, RouteConfig};
pub use error::{RouteError, RouteResult};
pub use tier::{Tier, TierSchedule, validate_capacities};
pub use types::*;
