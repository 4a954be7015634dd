//! Priority vectors and the policies that normalize them.
//!
//! A priority vector assigns a weight to each alternative in a decision
//! problem. Raw weights are rescaled by a [`PriorityType`] before they are
//! reported:
//!
//! - **Raw**: unchanged.
//! - **Normalize**: divided by the sum of absolute values (distributive
//!   mode in AHP terms).
//! - **Idealize**: divided by the largest absolute value (ideal mode).
//!
//! # References
//!
//! Saaty (1980), "The Analytic Hierarchy Process"; Saaty & Vargas (1993),
//! "Experiments on rank preservation and reversal in relative measurement"

mod types;
mod vector;

pub use types::{priority_type_default, PriorityType};
pub use vector::PriorityVector;
