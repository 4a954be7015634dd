//! The prioritizer contract.
//!
//! A prioritizer computes a [`PriorityVector`](crate::priority::PriorityVector)
//! over a set of alternatives, per user or for the whole group. Concrete
//! methods (direct rating, pairwise comparison, hierarchies) implement the
//! [`Prioritizer`] trait; this module holds no scoring logic of its own.

mod summary;
mod types;

pub use summary::SummaryWriter;
pub use types::Prioritizer;
