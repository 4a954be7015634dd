//! Priority vectors for multi-criteria decision analysis.
//!
//! Provides the building blocks shared by AHP/ANP-style prioritizers:
//!
//! - **Priority types**: the normalization policies (raw, normalize,
//!   idealize) applied to raw weight vectors.
//! - **Priority vectors**: weights labeled by alternative name in a
//!   stable order.
//! - **Prioritizer**: the trait every prioritization method implements
//!   (alternatives, users, priorities, summaries).
//! - **Direct rating**: a prioritizer fed with directly entered scores,
//!   aggregated across users.
//!
//! # Architecture
//!
//! Pairwise-comparison and hierarchical methods live in consumers of this
//! crate and plug in through [`prioritizer::Prioritizer`]. Nothing here
//! performs I/O or rendering beyond plain-text summaries.

pub mod direct;
pub mod error;
pub mod prioritizer;
pub mod priority;

pub use error::{PrioritizeError, Result};
