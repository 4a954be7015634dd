//! Direct rating.
//!
//! The simplest way to prioritize: each alternative receives a score
//! directly, either from a named user or with no user attached. Group
//! priorities combine the users' scores with an arithmetic or geometric
//! mean, then apply the requested normalization.

mod config;
mod prioritizer;

pub use config::{Aggregation, DirectConfig, DuplicatePolicy};
pub use prioritizer::DirectPrioritizer;
