//! msgroute allocator — turns a recipient list into tiered batches.
//!
//! # Components
//!
//! - **`allocator`** — greedy decomposition of a count into tier batches
//! - **`builder`** — slices recipients into routes following an allocation
//! - **`validate`** — recipient ceiling and format checks
//! - **`engine`** — validate → allocate → build, over an immutable config
//!
//! ```text
//! RouteEngine::route(message, recipients)
//!   ├── RecipientPolicy::validate
//!   ├── allocate(len, schedule) → Allocation
//!   └── build_routes(..) → RouteResponse
//! ```

pub mod allocator;
pub mod builder;
pub mod engine;
pub mod validate;

pub use allocator::{Allocation, allocate};
pub use builder::build_routes;
pub use engine::RouteEngine;
pub use validate::RecipientPolicy;
